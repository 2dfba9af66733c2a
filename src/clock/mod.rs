//! Clock string conversions
//!
//! Three batch transforms between seconds-since-midnight and `HH:MM:SS`
//! strings:
//!
//! - [`seconds_to_clock`]: numeric seconds to `HH:MM:SS`
//! - [`clock_to_seconds`]: `HH:MM:SS[.fraction]` to seconds
//! - [`clock_to_day_fraction`]: `HH:MM:SS[.fraction]` to fraction of a day
//!
//! Output element `i` depends only on input element `i`. A batch call stops
//! at the first invalid element and reports its index; the `*_each` methods
//! on [`ClockCodec`] report every element instead.
//!
//! # Examples
//!
//! ```
//! use clock_codec::clock::{clock_to_seconds, seconds_to_clock};
//!
//! let clocks = seconds_to_clock(&[36000.0, 4500.0]).unwrap();
//! assert_eq!(clocks, ["10:00:00", "01:15:00"]);
//!
//! let secs = clock_to_seconds(&clocks).unwrap();
//! assert_eq!(secs, [36000.0, 4500.0]);
//! ```

pub mod format;
pub mod parse;

use tracing::debug;

use crate::core::{
    ClockReading, ClockTime, Config, Error, HourRange, Result, SECONDS_PER_DAY,
};

/// Converts each value to a `HH:MM:SS` string using the default config
pub fn seconds_to_clock(values: &[f64]) -> Result<Vec<String>> {
    ClockCodec::default().seconds_to_clock(values)
}

/// Parses each string to seconds since midnight using the default config
pub fn clock_to_seconds<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>> {
    ClockCodec::default().clock_to_seconds(values)
}

/// Parses each string to a fraction of a day using the default config
pub fn clock_to_day_fraction<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>> {
    ClockCodec::default().clock_to_day_fraction(values)
}

/// Clock converter carrying a [`Config`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockCodec {
    config: Config,
}

impl ClockCodec {
    /// Creates a new codec
    pub fn new(config: Config) -> Self {
        ClockCodec { config }
    }

    /// Returns the codec configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Converts one numeric second count to a clock time
    pub fn to_clock_time(&self, value: f64) -> Result<ClockTime> {
        let time = ClockTime::from_secs_f64(value)?;
        if self.config.hour_range == HourRange::WithinDay && !time.is_within_day() {
            return Err(Error::invalid_argument(format!(
                "value {} is not below {}",
                value, SECONDS_PER_DAY
            )));
        }
        Ok(time)
    }

    /// Parses one clock string
    pub fn read(&self, input: &str) -> Result<ClockReading> {
        let trimmed = if self.config.trim_whitespace {
            input.trim_matches(|c: char| c.is_ascii_whitespace())
        } else {
            input
        };
        let reading = parse::parse_clock(trimmed).map_err(|e| match e {
            // Report the string as the caller supplied it
            Error::Parse { reason, .. } => Error::parse(input, reason),
            other => other,
        })?;
        if self.config.hour_range == HourRange::WithinDay
            && reading.total_seconds() >= SECONDS_PER_DAY as f64
        {
            return Err(Error::parse(input, "time is not before 24:00:00"));
        }
        Ok(reading)
    }

    /// Formats one numeric second count as `HH:MM:SS`
    pub fn format(&self, value: f64) -> Result<String> {
        self.to_clock_time(value).map(format::format_clock)
    }

    /// Converts each value to a `HH:MM:SS` string
    pub fn seconds_to_clock(&self, values: &[f64]) -> Result<Vec<String>> {
        debug!(count = values.len(), "formatting clock values");
        collect_indexed(values.iter().map(|&v| self.format(v)))
    }

    /// Parses each string to seconds since midnight
    pub fn clock_to_seconds<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<f64>> {
        debug!(count = values.len(), "parsing clock strings to seconds");
        collect_indexed(values.iter().map(|v| self.parse_seconds(v.as_ref())))
    }

    /// Parses each string to a fraction of a 24-hour day
    pub fn clock_to_day_fraction<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<f64>> {
        debug!(count = values.len(), "parsing clock strings to day fractions");
        collect_indexed(values.iter().map(|v| self.parse_day_fraction(v.as_ref())))
    }

    /// Like [`Self::seconds_to_clock`], with one result per element
    pub fn format_each(&self, values: &[f64]) -> Vec<Result<String>> {
        each_indexed(values.iter().map(|&v| self.format(v)))
    }

    /// Like [`Self::clock_to_seconds`], with one result per element
    pub fn parse_seconds_each<S: AsRef<str>>(&self, values: &[S]) -> Vec<Result<f64>> {
        each_indexed(values.iter().map(|v| self.parse_seconds(v.as_ref())))
    }

    /// Like [`Self::clock_to_day_fraction`], with one result per element
    pub fn parse_day_fraction_each<S: AsRef<str>>(&self, values: &[S]) -> Vec<Result<f64>> {
        each_indexed(values.iter().map(|v| self.parse_day_fraction(v.as_ref())))
    }

    fn parse_seconds(&self, input: &str) -> Result<f64> {
        self.read(input).map(|reading| reading.total_seconds())
    }

    // Divides the seconds value so both outputs stay bit-for-bit consistent
    fn parse_day_fraction(&self, input: &str) -> Result<f64> {
        self.parse_seconds(input)
            .map(|secs| secs / SECONDS_PER_DAY as f64)
    }
}

fn collect_indexed<T>(results: impl Iterator<Item = Result<T>>) -> Result<Vec<T>> {
    results
        .enumerate()
        .map(|(index, result)| {
            result.map_err(|e| {
                debug!(index, error = %e, "rejected clock element");
                e.at_index(index)
            })
        })
        .collect()
}

fn each_indexed<T>(results: impl Iterator<Item = Result<T>>) -> Vec<Result<T>> {
    results
        .enumerate()
        .map(|(index, result)| result.map_err(|e| e.at_index(index)))
        .collect()
}
