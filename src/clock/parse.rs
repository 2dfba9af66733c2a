use crate::core::{ClockReading, Error, Result};

/// Parses `HH:MM:SS` or `HH:MM:SS.fraction`
///
/// Hours and minutes are unsigned decimal integers of any width. Seconds is
/// an unsigned decimal with an optional fractional part. Field values are
/// not range checked, so `"00:90:00"` reads as 5400 seconds.
pub fn parse_clock(input: &str) -> Result<ClockReading> {
    let fields: Vec<&str> = input.split(':').collect();
    if fields.len() != 3 {
        return Err(Error::parse(
            input,
            format!("expected 3 colon-separated fields, found {}", fields.len()),
        ));
    }

    let hours = parse_integer_field(input, "hours", fields[0])?;
    let minutes = parse_integer_field(input, "minutes", fields[1])?;
    let seconds = parse_seconds_field(input, fields[2])?;

    Ok(ClockReading {
        hours,
        minutes,
        seconds,
    })
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

fn parse_integer_field(input: &str, name: &str, field: &str) -> Result<u64> {
    if !is_digits(field) {
        return Err(Error::parse(
            input,
            format!("{} field {:?} is not a decimal integer", name, field),
        ));
    }
    field
        .parse()
        .map_err(|e| Error::parse(input, format!("{} field {:?}: {}", name, field, e)))
}

fn parse_seconds_field(input: &str, field: &str) -> Result<f64> {
    let (whole, fraction) = match field.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (field, None),
    };
    if !is_digits(whole) || !fraction.map_or(true, is_digits) {
        return Err(Error::parse(
            input,
            format!("seconds field {:?} is not a decimal number", field),
        ));
    }
    let seconds: f64 = field
        .parse()
        .map_err(|e| Error::parse(input, format!("seconds field {:?}: {}", field, e)))?;
    if !seconds.is_finite() {
        return Err(Error::parse(input, "seconds field is out of range"));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_seconds() {
        let reading = parse_clock("10:00:00").unwrap();
        assert_eq!(
            reading,
            ClockReading {
                hours: 10,
                minutes: 0,
                seconds: 0.0
            }
        );
        assert_eq!(reading.total_seconds(), 36000.0);
    }

    #[test]
    fn test_parse_fraction() {
        let reading = parse_clock("01:15:30.5").unwrap();
        assert_eq!(reading.seconds, 30.5);
        assert_eq!(reading.total_seconds(), 4530.5);
    }

    #[test]
    fn test_parse_variable_width_fields() {
        assert_eq!(parse_clock("1:2:3").unwrap().total_seconds(), 3723.0);
        assert_eq!(parse_clock("100:00:05").unwrap().total_seconds(), 360005.0);
        assert_eq!(parse_clock("00:90:00").unwrap().total_seconds(), 5400.0);
    }

    #[test]
    fn test_wrong_field_count() {
        for input in ["bad:string", "10:00", "10:00:00:00", "", "100000"] {
            let err = parse_clock(input).unwrap_err();
            match err {
                Error::Parse { input: got, .. } => assert_eq!(got, input),
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_numeric_fields() {
        for input in [
            "aa:00:00",
            "10:b:00",
            "10:00:xx",
            "-1:00:00",
            "+1:00:00",
            "10:00:-5",
            "10:00:1e3",
            "10:00:inf",
            "10:00:30.",
            "10:00:.5",
            "10:00:30.5.1",
            " 10:00:00",
            "10::00",
        ] {
            assert!(
                matches!(parse_clock(input), Err(Error::Parse { .. })),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_hour_overflow_is_parse_error() {
        let err = parse_clock("99999999999999999999999:00:00").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_seconds_overflow_is_parse_error() {
        let input = format!("00:00:{}", "9".repeat(400));
        let err = parse_clock(&input).unwrap_err();
        match err {
            Error::Parse { input: got, reason, .. } => {
                assert_eq!(got, input);
                assert_eq!(reason, "seconds field is out of range");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
