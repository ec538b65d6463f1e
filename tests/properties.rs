use feedlog::aggregator::{
    calculate_ml_per_day, extract_events, moving_average, time_between_feeds, unique_days,
    wrap_gap, ScanPolicy,
};
use feedlog::parser::{parse_volume, shift_time};
use proptest::prelude::*;
use std::collections::HashSet;

fn day_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("0[1-6]\\.0[1-2]", 0..40)
}

proptest! {
    #[test]
    fn comma_and_dot_decimals_agree(int in 0u32..1000, frac in 0u32..1000) {
        let dotted = format!("{}.{:03}", int, frac);
        let comma = dotted.replace('.', ",");

        prop_assert_eq!(parse_volume(&comma), dotted.parse::<f64>().ok());
    }

    #[test]
    fn moving_average_zero_window_is_identity(values in prop::collection::vec(-1e6f64..1e6, 0..50)) {
        prop_assert_eq!(moving_average(&values, 0), values);
    }

    #[test]
    fn moving_average_length(values in prop::collection::vec(0f64..1.0, 0..50), window in 1usize..10) {
        let expected = if values.len() >= window { values.len() - window + 1 } else { 0 };
        prop_assert_eq!(moving_average(&values, window).len(), expected);
    }

    #[test]
    fn unique_days_first_seen_no_duplicates(dates in day_labels()) {
        let days = unique_days(&dates);

        let distinct: HashSet<&String> = days.iter().collect();
        prop_assert_eq!(distinct.len(), days.len());
        prop_assert_eq!(distinct, dates.iter().collect::<HashSet<_>>());

        // Each day appears in the order of its first occurrence.
        let firsts: Vec<usize> = days
            .iter()
            .map(|d| dates.iter().position(|x| x == d).unwrap())
            .collect();
        prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn gaps_are_never_negative(a in 0f64..24.0, b in 0f64..24.0) {
        let gap = wrap_gap(a, b);
        prop_assert!(gap >= 0.0);
        if a <= b {
            prop_assert_eq!(gap, b - a);
        } else {
            prop_assert_eq!(gap, (24.0 - a) + b);
        }
    }

    #[test]
    fn gap_series_is_one_shorter(hours in prop::collection::vec(0f64..24.0, 1..30)) {
        prop_assert_eq!(time_between_feeds(&hours).len(), hours.len() - 1);
    }

    #[test]
    fn shifted_time_stays_on_the_clock(time in 0f64..24.0, shift in 0f64..24.0) {
        let shifted = shift_time(time, shift);
        prop_assert!((0.0..=24.0).contains(&shifted));
    }

    #[test]
    fn daily_totals_never_include_open_bucket(dates in day_labels()) {
        let volumes: Vec<String> = dates.iter().map(|_| "1".to_string()).collect();
        let scan = calculate_ml_per_day(&dates, &volumes, ScanPolicy::Truncate).unwrap();

        // Every emitted bucket was closed by a date change.
        let changes = dates.windows(2).filter(|w| w[0] != w[1]).count();
        let baseline_break = usize::from(dates.len() > 1 && dates[0] != dates[1]);
        prop_assert_eq!(scan.items.len(), changes + baseline_break);

        let total: f64 = scan.items.iter().map(|b| b.total_volume).sum();
        prop_assert!(total <= dates.len() as f64);
    }

    #[test]
    fn scan_stops_at_first_bad_volume(good in 1usize..20, tail in 0usize..5) {
        let mut volumes: Vec<String> = (0..good).map(|_| "0,1".to_string()).collect();
        volumes.push("n/a".to_string());
        volumes.extend((0..tail).map(|_| "0,1".to_string()));
        let dates: Vec<String> = (0..volumes.len()).map(|i| format!("{:02}.01", i / 3)).collect();
        let times: Vec<String> = (0..volumes.len()).map(|i| format!("{}:00", i % 24)).collect();

        let events = extract_events(&dates, &times, &volumes, 0.0, ScanPolicy::Truncate).unwrap();

        prop_assert_eq!(events.len(), good);
        prop_assert_eq!(events.stopped_at, Some(good));
    }
}
