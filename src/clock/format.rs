use std::fmt::Write;

use crate::core::ClockTime;

/// Appends `value` as a decimal, zero-padded to at least two digits
pub fn push_two_digits(buf: &mut String, value: u64) {
    // writing to a String cannot fail
    let _ = write!(buf, "{:02}", value);
}

/// Renders a clock time as `HH:MM:SS`
///
/// Minutes and seconds are always two digits. The hour field is padded to
/// two digits but never capped, so 100 hours or more widens it.
pub fn format_clock(time: ClockTime) -> String {
    let mut out = String::with_capacity(8);
    push_two_digits(&mut out, time.hours());
    out.push(':');
    push_two_digits(&mut out, time.minutes());
    out.push(':');
    push_two_digits(&mut out, time.seconds());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_padding() {
        let mut buf = String::new();
        push_two_digits(&mut buf, 0);
        push_two_digits(&mut buf, 7);
        push_two_digits(&mut buf, 42);
        assert_eq!(buf, "000742");
    }

    #[test]
    fn test_format_boundaries() {
        assert_eq!(format_clock(ClockTime(0)), "00:00:00");
        assert_eq!(format_clock(ClockTime(59)), "00:00:59");
        assert_eq!(format_clock(ClockTime(60)), "00:01:00");
        assert_eq!(format_clock(ClockTime(3661)), "01:01:01");
        assert_eq!(format_clock(ClockTime(86399)), "23:59:59");
    }

    #[test]
    fn test_format_past_one_day() {
        assert_eq!(format_clock(ClockTime(90000)), "25:00:00");
        assert_eq!(format_clock(ClockTime(100 * 3600 + 5)), "100:00:05");
    }

    #[test]
    fn test_display_matches_format() {
        assert_eq!(ClockTime(4500).to_string(), "01:15:00");
    }
}
