//! Feeding events and the time elapsed between them.
//!
//! Times are hours on a 24-hour wheel. Gaps that cross midnight wrap
//! around instead of going negative.

use super::scan::{Scan, ScanPolicy};
use crate::parser::normalize::{parse_time_of_day, parse_volume, shift_time};
use crate::utils::config::BUBBLE_SCALE;
use crate::utils::error::AggregateError;
use log::debug;

/// Colours cycled through the feeds of one day (1st feed red, 2nd green...)
pub const COLOR_PALETTE: [&str; 10] = [
    "red", "green", "blue", "orange", "violet", "cyan", "magenta", "black", "purple", "brown",
];

/// One logged feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEvent {
    pub date: String,

    /// Fractional hour of day, after any shift
    pub hour: f64,

    pub volume: f64,

    /// Position of this feed within its same-date run (0 = first feed)
    pub ordinal: usize,
}

impl FeedEvent {
    /// Bubble area used by the hour-vs-day chart
    pub fn bubble_size(&self) -> f64 {
        (self.volume * BUBBLE_SCALE).powi(2)
    }

    pub fn color(&self) -> &'static str {
        palette_color(self.ordinal)
    }
}

/// Palette entry for a feed ordinal, wrapping past the last colour
pub fn palette_color(ordinal: usize) -> &'static str {
    COLOR_PALETTE[ordinal % COLOR_PALETTE.len()]
}

/// Legend label for a feed ordinal (`0` -> `1st`)
pub fn ordinal_label(ordinal: usize) -> String {
    let n = ordinal + 1;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Extract feeding events from the raw columns
///
/// **Public** - main entry point for event extraction
///
/// # Arguments
/// * `dates`, `times`, `volumes` - Aligned columns; the shortest bounds the scan
/// * `shift` - Hours added on the 24h wheel (0 = wall clock)
/// * `policy` - What to do with the first unparseable volume or time
///
/// # Returns
/// Events in row order. A row is either read completely or not at all.
pub fn extract_events(
    dates: &[String],
    times: &[String],
    volumes: &[String],
    shift: f64,
    policy: ScanPolicy,
) -> Result<Scan<FeedEvent>, AggregateError> {
    let rows = dates.len().min(times.len()).min(volumes.len());
    if rows == 0 {
        return Ok(Scan::complete(Vec::new()));
    }

    let mut events = Vec::with_capacity(rows);
    let mut previous_date = dates[0].as_str();
    let mut next_ordinal = 0;
    let mut stopped_at = None;

    for row in 0..rows {
        let Some(volume) = parse_volume(&volumes[row]) else {
            stopped_at = Some(policy.on_malformed("volume", row, &volumes[row])?);
            break;
        };

        let Some(hour) = parse_time_of_day(&times[row]) else {
            stopped_at = Some(policy.on_malformed("time", row, &times[row])?);
            break;
        };

        let date = dates[row].as_str();
        let ordinal = if date == previous_date { next_ordinal } else { 0 };
        next_ordinal = ordinal + 1;
        previous_date = date;

        events.push(FeedEvent {
            date: date.to_string(),
            hour: shift_time(hour, shift),
            volume,
            ordinal,
        });
    }

    debug!("Extracted {} feeding events from {} rows", events.len(), rows);

    Ok(Scan {
        items: events,
        stopped_at,
    })
}

/// Hours elapsed between consecutive times on a 24-hour wheel
///
/// **Public** - used for the time-between-feeds chart
///
/// `b - a` when `a <= b`, otherwise the gap wraps past midnight:
/// `(24 - a) + b`. Output has one element fewer than the input.
pub fn time_between_feeds(hours: &[f64]) -> Vec<f64> {
    hours
        .windows(2)
        .map(|pair| wrap_gap(pair[0], pair[1]))
        .collect()
}

/// Gap from `earlier` to `later` on the 24h wheel
pub fn wrap_gap(earlier: f64, later: f64) -> f64 {
    if earlier <= later {
        later - earlier
    } else {
        (24.0 - earlier) + later
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gap_wraps_midnight() {
        assert_eq!(time_between_feeds(&[23.5, 1.0]), vec![1.5]);
    }

    #[test]
    fn test_gap_same_day() {
        assert_eq!(time_between_feeds(&[6.0, 9.5, 13.0]), vec![3.5, 3.5]);
        assert_eq!(wrap_gap(4.0, 4.0), 0.0);
    }

    #[test]
    fn test_gap_short_input() {
        assert!(time_between_feeds(&[]).is_empty());
        assert!(time_between_feeds(&[12.0]).is_empty());
    }

    #[test]
    fn test_ordinals_reset_per_day() {
        let dates = strings(&["01.01", "01.01", "01.01", "02.01", "02.01"]);
        let times = strings(&["1:00", "5:00", "9:00", "2:00", "6:30"]);
        let volumes = strings(&["0,1", "0,1", "0,12", "0,1", "0,15"]);

        let scan = extract_events(&dates, &times, &volumes, 0.0, ScanPolicy::Truncate).unwrap();

        let ordinals: Vec<usize> = scan.items.iter().map(|e| e.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 0, 1]);
        assert_eq!(scan.items[4].hour, 6.5);
        assert_eq!(scan.items[3].color(), "red");
        assert_eq!(scan.items[4].color(), "green");
    }

    #[test]
    fn test_shorter_times_column_bounds_scan() {
        let dates = strings(&["01.01", "01.01", "02.01"]);
        let times = strings(&["1:00"]);
        let volumes = strings(&["0,1", "0,1", "0,1"]);

        let scan = extract_events(&dates, &times, &volumes, 0.0, ScanPolicy::Truncate).unwrap();

        assert_eq!(scan.len(), 1);
        assert_eq!(scan.items[0].hour, 1.0);
        assert_eq!(scan.stopped_at, None);
    }

    #[test]
    fn test_shift_applied() {
        let dates = strings(&["01.01"]);
        let times = strings(&["20:00"]);
        let volumes = strings(&["0,1"]);

        let scan = extract_events(&dates, &times, &volumes, 8.0, ScanPolicy::Truncate).unwrap();

        assert_eq!(scan.items[0].hour, 4.0);
    }

    #[test]
    fn test_bad_time_stops_without_partial_event() {
        let dates = strings(&["01.01", "01.01", "01.01"]);
        let times = strings(&["1:00", "??", "9:00"]);
        let volumes = strings(&["0,1", "0,1", "0,1"]);

        let scan = extract_events(&dates, &times, &volumes, 0.0, ScanPolicy::Truncate).unwrap();

        assert_eq!(scan.len(), 1);
        assert_eq!(scan.stopped_at, Some(1));
    }

    #[test]
    fn test_strict_bad_volume() {
        let dates = strings(&["01.01", "01.01"]);
        let times = strings(&["1:00", "2:00"]);
        let volumes = strings(&["0,1", ""]);

        let result = extract_events(&dates, &times, &volumes, 0.0, ScanPolicy::Strict);

        assert!(matches!(
            result,
            Err(AggregateError::MalformedRecord { column: "volume", row_index: 1, .. })
        ));
    }

    #[test]
    fn test_bubble_size() {
        let event = FeedEvent {
            date: "01.01".to_string(),
            hour: 3.0,
            volume: 0.1,
            ordinal: 0,
        };
        assert!((event.bubble_size() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "red");
        assert_eq!(palette_color(9), "brown");
        assert_eq!(palette_color(10), "red");
    }

    #[test]
    fn test_ordinal_labels() {
        let labels: Vec<String> = (0..4).map(ordinal_label).collect();
        assert_eq!(labels, vec!["1st", "2nd", "3rd", "4th"]);
        assert_eq!(ordinal_label(10), "11th");
    }
}
