//! Reduce a date-ordered feeding log into per-day volume totals.
//!
//! Rows for one day are assumed contiguous; the sheet is kept in
//! chronological order by hand and nothing here sorts it. A "bucket" is a
//! contiguous run of rows sharing a date, so a date that reappears later
//! starts a new bucket.

use super::scan::{Scan, ScanPolicy};
use crate::parser::normalize::parse_volume;
use crate::utils::error::AggregateError;
use log::debug;

/// Total volume for one contiguous run of same-date rows
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: String,
    pub total_volume: f64,
}

impl DayBucket {
    pub fn new(date: impl Into<String>, total_volume: f64) -> Self {
        Self {
            date: date.into(),
            total_volume,
        }
    }
}

/// Sum volumes per contiguous day run
///
/// **Public** - main entry point for daily totals
///
/// # Arguments
/// * `dates` - Date column, one cell per feed
/// * `volumes` - Volume column, aligned with `dates`
/// * `policy` - What to do with the first unparseable volume
///
/// # Returns
/// One bucket per day run that was closed by a date change. The run still
/// open when the scan ends is not emitted.
///
/// # Quirks kept from the sheet's history
/// The first bucket is labelled with `dates[0]` but rows are compared
/// against `dates[1]`. When the first two dates differ, row 0 closes an
/// empty bucket immediately. Tests pin this down.
pub fn calculate_ml_per_day(
    dates: &[String],
    volumes: &[String],
    policy: ScanPolicy,
) -> Result<Scan<DayBucket>, AggregateError> {
    let rows = dates.len().min(volumes.len());
    if rows == 0 {
        return Ok(Scan::complete(Vec::new()));
    }

    let mut bucket_dates: Vec<&str> = vec![dates[0].as_str()];
    let mut totals: Vec<f64> = Vec::new();
    let mut date_before = dates.get(1).unwrap_or(&dates[0]).as_str();
    let mut running = 0.0;
    let mut stopped_at = None;

    for row in 0..rows {
        let Some(volume) = parse_volume(&volumes[row]) else {
            stopped_at = Some(policy.on_malformed("volume", row, &volumes[row])?);
            break;
        };

        let date = dates[row].as_str();
        if date == date_before {
            running += volume;
        } else {
            totals.push(running);
            running = volume;
            date_before = date;
            bucket_dates.push(date);
        }
    }

    // The last run was never closed; drop its label so both lists line up.
    bucket_dates.truncate(totals.len());

    debug!(
        "Daily totals: {} buckets from {} rows (open run of {:.3} dropped)",
        totals.len(),
        rows,
        running
    );

    let buckets = bucket_dates
        .into_iter()
        .zip(totals)
        .map(|(date, total)| DayBucket::new(date, total))
        .collect();

    Ok(Scan {
        items: buckets,
        stopped_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trailing_run_dropped() {
        let dates = strings(&["01.01", "01.01", "02.01"]);
        let volumes = strings(&["100", "50", "80"]);

        let scan = calculate_ml_per_day(&dates, &volumes, ScanPolicy::Truncate).unwrap();

        assert_eq!(scan.items, vec![DayBucket::new("01.01", 150.0)]);
        assert!(!scan.is_truncated());
    }

    #[test]
    fn test_comma_decimals() {
        let dates = strings(&["01.01", "01.01", "02.01", "03.01"]);
        let volumes = strings(&["0,1", "0.05", "0,2", "0,1"]);

        let scan = calculate_ml_per_day(&dates, &volumes, ScanPolicy::Truncate).unwrap();

        assert_eq!(scan.len(), 2);
        assert!((scan.items[0].total_volume - 0.15).abs() < 1e-12);
        assert_eq!(scan.items[1], DayBucket::new("02.01", 0.2));
    }

    #[test]
    fn test_padded_volume_cells() {
        let dates = strings(&["01.01", "01.01", "02.01", "03.01"]);
        let volumes = strings(&["0,1", "0,1 ", " 0,2", "0,3"]);

        let scan = calculate_ml_per_day(&dates, &volumes, ScanPolicy::Truncate).unwrap();

        assert_eq!(
            scan.items,
            vec![DayBucket::new("01.01", 0.2), DayBucket::new("02.01", 0.2)]
        );
        assert_eq!(scan.stopped_at, None);
    }

    #[test]
    fn test_stops_at_first_bad_volume() {
        let dates = strings(&["01.01", "01.01", "02.01", "02.01", "03.01", "04.01"]);
        let volumes = strings(&["1", "2", "3", "", "5", "6"]);

        let scan = calculate_ml_per_day(&dates, &volumes, ScanPolicy::Truncate).unwrap();

        // 02.01 was still open when the scan stopped at row 3
        assert_eq!(scan.items, vec![DayBucket::new("01.01", 3.0)]);
        assert_eq!(scan.stopped_at, Some(3));
    }

    #[test]
    fn test_strict_policy_errors() {
        let dates = strings(&["01.01", "01.01"]);
        let volumes = strings(&["1", "x"]);

        let result = calculate_ml_per_day(&dates, &volumes, ScanPolicy::Strict);

        assert!(matches!(
            result,
            Err(AggregateError::MalformedRecord { row_index: 1, .. })
        ));
    }

    #[test]
    fn test_shorter_volume_column_bounds_scan() {
        let dates = strings(&["01.01", "01.01", "02.01", "03.01"]);
        let volumes = strings(&["1", "1", "2"]);

        let scan = calculate_ml_per_day(&dates, &volumes, ScanPolicy::Truncate).unwrap();

        assert_eq!(scan.items, vec![DayBucket::new("01.01", 2.0)]);
    }

    #[test]
    fn test_empty_input() {
        let scan = calculate_ml_per_day(&[], &strings(&["1"]), ScanPolicy::Strict).unwrap();
        assert!(scan.is_empty());
    }

    #[test]
    fn test_single_row_uses_row_zero_baseline() {
        let scan =
            calculate_ml_per_day(&strings(&["01.01"]), &strings(&["5"]), ScanPolicy::Truncate)
                .unwrap();
        assert!(scan.is_empty());
    }
}
