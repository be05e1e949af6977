//! `"HH:MM"` time-of-day formatting and parsing.
//!
//! All times in this crate are minutes-since-midnight on a 24-hour clock.

/// Parses `"HH:MM"` into minutes-since-midnight.
///
/// Returns `0` for malformed input (no colon), mirroring the original
/// loader's lenient behavior — callers that need strict validation should
/// check the string shape themselves before calling this.
///
/// # Examples
///
/// ```
/// use commute_router::time::parse_time;
///
/// assert_eq!(parse_time("08:00"), 480);
/// assert_eq!(parse_time("23:59"), 1439);
/// assert_eq!(parse_time("garbage"), 0);
/// ```
pub fn parse_time(s: &str) -> i64 {
    match s.find(':') {
        None => 0,
        Some(_) => {
            let h: i64 = s.get(0..2).and_then(|v| v.parse().ok()).unwrap_or(0);
            let m: i64 = s.get(3..5).and_then(|v| v.parse().ok()).unwrap_or(0);
            h * 60 + m
        }
    }
}

/// Formats minutes-since-midnight as `"HH:MM"`, wrapping at 24 hours.
///
/// # Examples
///
/// ```
/// use commute_router::time::format_time;
///
/// assert_eq!(format_time(480), "08:00");
/// assert_eq!(format_time(1439), "23:59");
/// assert_eq!(format_time(1440), "00:00");
/// ```
pub fn format_time(minutes: i64) -> String {
    let minutes = minutes.rem_euclid(1440);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parses a day-fraction (`[0, 1)`, multiplied by 1440 and rounded) or an
/// `"HH:MM"` string into minutes-since-midnight, per spec §6's accepted
/// input shapes for `earliest_pickup`/`latest_drop`/`available_from`.
pub fn parse_time_value(value: &serde_json::Value, default: &str) -> i64 {
    if let Some(frac) = value.as_f64() {
        return (frac * 1440.0).round() as i64;
    }
    match value.as_str() {
        Some(s) => parse_time(s),
        None => parse_time(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_basic() {
        assert_eq!(parse_time("00:00"), 0);
        assert_eq!(parse_time("08:30"), 510);
        assert_eq!(parse_time("23:59"), 1439);
    }

    #[test]
    fn test_parse_time_malformed() {
        assert_eq!(parse_time(""), 0);
        assert_eq!(parse_time("nope"), 0);
    }

    #[test]
    fn test_format_time_basic() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(510), "08:30");
        assert_eq!(format_time(1439), "23:59");
    }

    #[test]
    fn test_format_time_wraps() {
        assert_eq!(format_time(1440), "00:00");
        assert_eq!(format_time(1500), "01:00");
    }

    #[test]
    fn test_roundtrip() {
        for m in [0, 1, 59, 60, 480, 1439] {
            assert_eq!(parse_time(&format_time(m)), m);
        }
    }

    #[test]
    fn test_parse_time_value_fraction() {
        let v = serde_json::json!(0.5);
        assert_eq!(parse_time_value(&v, "08:00"), 720);
    }

    #[test]
    fn test_parse_time_value_string() {
        let v = serde_json::json!("09:15");
        assert_eq!(parse_time_value(&v, "08:00"), 555);
    }

    #[test]
    fn test_parse_time_value_missing_uses_default() {
        let v = serde_json::Value::Null;
        assert_eq!(parse_time_value(&v, "08:00"), 480);
    }
}
