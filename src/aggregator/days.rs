//! Per-day views over the whole date column.
//!
//! Unlike the run-based daily totals, these look at every row: a date that
//! shows up twice, far apart, is still one day.

use super::events::FeedEvent;
use std::collections::{HashMap, HashSet};

/// Distinct dates in first-seen order
///
/// **Public** - x axis of the per-day charts
pub fn unique_days(dates: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(dates.len());
    dates
        .iter()
        .filter(|date| seen.insert(date.as_str()))
        .cloned()
        .collect()
}

/// Number of logged rows for each of `days`
///
/// **Public** - bar heights for the feeds-per-day chart
pub fn feeds_per_day(dates: &[String], days: &[String]) -> Vec<u32> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for date in dates {
        *counts.entry(date.as_str()).or_insert(0) += 1;
    }

    days.iter()
        .map(|day| counts.get(day.as_str()).copied().unwrap_or(0))
        .collect()
}

/// Feeds per wall-clock hour (bin `h` covers `[h, h+1)`)
///
/// **Public** - optional hourly histogram
///
/// Events whose hour falls outside `0..24` are not counted.
pub fn hourly_histogram(events: &[FeedEvent]) -> [u32; 24] {
    let mut bins = [0u32; 24];
    for event in events {
        if (0.0..24.0).contains(&event.hour) {
            bins[event.hour.floor() as usize] += 1;
        }
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unique_days_first_seen_order() {
        let dates = strings(&["02.01", "01.01", "02.01", "03.01", "01.01"]);
        assert_eq!(unique_days(&dates), strings(&["02.01", "01.01", "03.01"]));
    }

    #[test]
    fn test_feeds_per_day_counts_non_contiguous() {
        let dates = strings(&["01.01", "01.01", "02.01", "01.01"]);
        let days = unique_days(&dates);
        assert_eq!(feeds_per_day(&dates, &days), vec![3, 1]);
    }

    #[test]
    fn test_hourly_histogram() {
        let event = |hour: f64| FeedEvent {
            date: "01.01".to_string(),
            hour,
            volume: 0.1,
            ordinal: 0,
        };
        let events = vec![event(0.5), event(0.9), event(23.99), event(24.0), event(7.0)];

        let bins = hourly_histogram(&events);

        assert_eq!(bins[0], 2);
        assert_eq!(bins[7], 1);
        assert_eq!(bins[23], 1);
        assert_eq!(bins.iter().sum::<u32>(), 4);
    }
}
