use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{Error, Result, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Whole seconds elapsed since midnight
///
/// Conceptually in `[0, 86400)`, but nothing here enforces the upper bound;
/// see [`HourRange`] for the codec-level policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(pub u64);

impl ClockTime {
    /// Midnight
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Creates a clock time from whole seconds
    pub fn new(secs: u64) -> Self {
        ClockTime(secs)
    }

    /// Creates a clock time from a floating-point second count, truncating
    /// toward zero
    ///
    /// Negative values, NaN and infinities are rejected.
    pub fn from_secs_f64(secs: f64) -> Result<Self> {
        if secs.is_nan() {
            return Err(Error::invalid_argument("value is NaN"));
        }
        if secs.is_infinite() {
            return Err(Error::invalid_argument(format!("value {} is not finite", secs)));
        }
        if secs < 0.0 {
            return Err(Error::invalid_argument(format!(
                "negative value {} has no clock representation",
                secs
            )));
        }
        // u64::MAX as f64 rounds up to 2^64, the first value that does not fit
        if secs >= u64::MAX as f64 {
            return Err(Error::invalid_argument(format!(
                "value {} exceeds the largest representable second count",
                secs
            )));
        }
        Ok(ClockTime(secs.trunc() as u64))
    }

    /// Returns the raw second count
    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Hour component; not capped at 23
    pub fn hours(&self) -> u64 {
        let s = self.seconds();
        let m = self.minutes();
        (self.0 - s - m * SECONDS_PER_MINUTE) / SECONDS_PER_HOUR
    }

    /// Minute component, always below 60
    pub fn minutes(&self) -> u64 {
        ((self.0 - self.seconds()) / SECONDS_PER_MINUTE) % 60
    }

    /// Second component, always below 60
    pub fn seconds(&self) -> u64 {
        self.0 % SECONDS_PER_MINUTE
    }

    /// Returns whether the value lies inside a single day
    pub fn is_within_day(&self) -> bool {
        self.0 < SECONDS_PER_DAY
    }

    /// Fraction of a 24-hour day
    pub fn day_fraction(&self) -> f64 {
        self.0 as f64 / SECONDS_PER_DAY as f64
    }

    /// Converts to a std duration
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }

    /// Converts to a chrono time of day, or `None` at or after 24:00:00
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if !self.is_within_day() {
            return None;
        }
        NaiveTime::from_num_seconds_from_midnight_opt(self.0 as u32, 0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::clock::format::format_clock(*self))
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let reading = crate::clock::parse::parse_clock(s)?;
        reading.to_clock_time().map_err(|e| match e {
            Error::InvalidArgument { reason, .. } => Error::parse(s, reason),
            other => other,
        })
    }
}

impl From<Duration> for ClockTime {
    /// Sub-second precision is dropped
    fn from(duration: Duration) -> Self {
        ClockTime(duration.as_secs())
    }
}

impl From<NaiveTime> for ClockTime {
    /// Sub-second precision is dropped
    fn from(time: NaiveTime) -> Self {
        ClockTime(u64::from(time.num_seconds_from_midnight()))
    }
}

/// Components of a parsed `HH:MM:SS[.fraction]` string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    /// Hour field
    pub hours: u64,
    /// Minute field
    pub minutes: u64,
    /// Seconds field, including any fractional part
    pub seconds: f64,
}

impl ClockReading {
    /// Seconds since midnight
    pub fn total_seconds(&self) -> f64 {
        self.hours as f64 * SECONDS_PER_HOUR as f64
            + self.minutes as f64 * SECONDS_PER_MINUTE as f64
            + self.seconds
    }

    /// Fraction of a 24-hour day
    pub fn day_fraction(&self) -> f64 {
        self.total_seconds() / SECONDS_PER_DAY as f64
    }

    /// Truncates the fractional seconds
    ///
    /// Fails when the total does not fit a [`ClockTime`].
    pub fn to_clock_time(&self) -> Result<ClockTime> {
        ClockTime::from_secs_f64(self.total_seconds())
    }
}

/// Accepted range of the hour field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourRange {
    /// Any hour count; the field grows past two digits at 100 hours
    #[default]
    Unbounded,
    /// Only values below 24:00:00
    WithinDay,
}

/// Configuration for a [`crate::clock::ClockCodec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hour range policy for both formatting and parsing
    pub hour_range: HourRange,
    /// Strip surrounding ASCII whitespace before parsing
    pub trim_whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hour_range: HourRange::Unbounded,
            trim_whitespace: true,
        }
    }
}
