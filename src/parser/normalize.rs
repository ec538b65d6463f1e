//! Cell-level normalization of spreadsheet strings.
//!
//! Cells come back from the sheet exactly as displayed, so decimal
//! separators follow the locale of whoever typed them (`0,12` or `0.12`)
//! and times are `H:MM`. These helpers turn single cells into numbers; they
//! never look at neighbouring rows.

/// Parse a locale-formatted decimal (`,` or `.` separator)
///
/// **Public** - used for volumes, ages and weights
///
/// Surrounding whitespace is ignored. Returns `None` for blank or
/// non-numeric cells. This is a separator substitution, not a locale-aware
/// parser: thousands separators are not supported.
pub fn parse_volume(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    raw.replace(',', ".").parse::<f64>().ok()
}

/// Parse an `H:MM` cell into fractional hours
///
/// **Public** - used by event extraction
///
/// The minutes are folded in as `((M * 10) / 60) / 10`, which is the
/// exact floating-point path the charts were calibrated against.
pub fn parse_time_of_day(raw: &str) -> Option<f64> {
    let (hour, minutes) = raw.split_once(':')?;
    if minutes.contains(':') {
        return None;
    }

    let hour: i64 = hour.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;

    let tenths = minutes as f64 * 10.0 / 60.0;
    Some(hour as f64 + tenths / 10.0)
}

/// Re-anchor a time of day by `shift` hours on a 24-hour wheel
///
/// **Public** - used for the bubble chart
///
/// A zero shift is the identity. The result never drops below 0.
pub fn shift_time(time: f64, shift: f64) -> f64 {
    if shift == 0.0 {
        return time;
    }

    if time < 24.0 - shift {
        time + shift
    } else {
        // Rounding can land a hair below midnight.
        (shift - (24.0 - time)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_volume_separators() {
        assert_eq!(parse_volume("0,12"), Some(0.12));
        assert_eq!(parse_volume("0.12"), Some(0.12));
        assert_eq!(parse_volume("100"), Some(100.0));
    }

    #[test]
    fn test_parse_volume_invalid() {
        assert_eq!(parse_volume(""), None);
        assert_eq!(parse_volume("abc"), None);
        assert_eq!(parse_volume("1,2,3"), None);
        assert_eq!(parse_volume("   "), None);
    }

    #[test]
    fn test_parse_volume_surrounding_whitespace() {
        assert_eq!(parse_volume(" 0,1"), Some(0.1));
        assert_eq!(parse_volume("0,1 "), Some(0.1));
        assert_eq!(parse_volume("\t0.25\n"), Some(0.25));
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("7:30"), Some(7.5));
        assert_eq!(parse_time_of_day("23:00"), Some(23.0));
        assert_eq!(parse_time_of_day("0:06"), Some(0.1));
    }

    #[test]
    fn test_parse_time_of_day_malformed() {
        assert_eq!(parse_time_of_day("7.30"), None);
        assert_eq!(parse_time_of_day("7:30:00"), None);
        assert_eq!(parse_time_of_day("x:30"), None);
        assert_eq!(parse_time_of_day(""), None);
    }

    #[test]
    fn test_shift_time_wraps() {
        assert_eq!(shift_time(20.0, 8.0), 4.0);
        assert_eq!(shift_time(10.0, 8.0), 18.0);
        assert_eq!(shift_time(16.0, 8.0), 0.0);
        assert_eq!(shift_time(13.25, 0.0), 13.25);
    }

    #[test]
    fn test_shift_time_never_negative() {
        // 24.0 - 23.9 rounds to slightly more than 0.1
        assert_eq!(shift_time(23.9, 0.1), 0.0);
    }
}
