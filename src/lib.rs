//! Clock codec: seconds-since-midnight <-> `HH:MM:SS` conversions
//!
//! This library converts whole-second counts into zero-padded `HH:MM:SS`
//! strings, and parses `HH:MM:SS[.fraction]` strings back into seconds since
//! midnight or fractions of a day. Every operation is a pure transform over
//! a slice of values.
pub mod core;
pub mod clock;

// Re-export commonly used items
pub use crate::clock::{clock_to_day_fraction, clock_to_seconds, seconds_to_clock, ClockCodec};
pub use crate::core::{ClockReading, ClockTime, Config, Error, HourRange, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_config_from_json() {
        let config: Config = serde_json::from_str(r#"{"hour_range":"within_day"}"#).unwrap();
        assert_eq!(config.hour_range, HourRange::WithinDay);
        assert!(config.trim_whitespace);

        let codec = ClockCodec::new(config);
        assert!(codec.seconds_to_clock(&[90000.0]).is_err());
    }

    #[test]
    fn test_clock_time_string_round_trip() {
        let t: ClockTime = "01:15:30.5".parse().unwrap();
        assert_eq!(t, ClockTime(4530));
        assert_eq!(t.to_string(), "01:15:30");
    }
}
