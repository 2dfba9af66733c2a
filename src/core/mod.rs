//! Core types for clock conversions
//!
//! This module contains the error type, the clock value types and the codec
//! configuration shared by the rest of the library.

pub mod error;
pub mod types;
pub mod serde;

pub use self::error::{Error, Result};
pub use self::types::{
    ClockReading,
    ClockTime,
    Config,
    HourRange,
};

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Seconds in one 24-hour day
pub const SECONDS_PER_DAY: u64 = 86400;
