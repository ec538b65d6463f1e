use feedlog::aggregator::{run_pipeline, PipelineConfig, ScanPolicy};
use feedlog::cache::{ColumnKey, LocalCache};
use feedlog::chart::generate_chart;
use feedlog::output::{read_report, write_report};
use feedlog::parser::to_report;
use feedlog::sheets::ColumnSource;
use feedlog::utils::config::AppConfig;
use feedlog::utils::SheetsError;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory spreadsheet keyed by 1-based column
struct FakeSheet {
    columns: HashMap<usize, Vec<String>>,
    requests: RefCell<Vec<usize>>,
}

impl FakeSheet {
    fn new() -> Self {
        let mut columns = HashMap::new();
        let mut put = |index: usize, values: &[&str]| {
            columns.insert(index, values.iter().map(|s| s.to_string()).collect());
        };

        put(1, &["01.01", "01.01", "01.01", "02.01", "02.01", "03.01", "03.01"]);
        put(2, &["red", "green", "blue", "red", "green", "red", "green"]);
        put(3, &["2:00", "6:30", "22:00", "3:00", "8:00", "1:00", "5:00"]);
        put(4, &["1", "1", "1", "2", "2", "3", "3"]);
        put(5, &["0,08", "0,1", "0,12", "0,1", "0,11", "0,12", "bad"]);
        put(6, &["", "4:30", "15:30", "5:00", "5:00", "17:00", "4:00"]);
        put(7, &["80", "100", "120", "100", "110", "120", ""]);
        put(10, &["0", "0,5", "1"]);
        put(11, &["3,4", "3,9", "4,5"]);

        Self {
            columns,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl ColumnSource for FakeSheet {
    fn fetch_column(&self, _sheet: &str, column_index: usize) -> Result<Vec<String>, SheetsError> {
        self.requests.borrow_mut().push(column_index);
        Ok(self.columns.get(&column_index).cloned().unwrap_or_default())
    }
}

#[test]
fn test_fetch_then_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let cache = LocalCache::new(dir.path());
    let config = AppConfig::default();
    let sheet = FakeSheet::new();

    let columns = cache
        .load_columns(&config, "Sheet1", false, || Ok(&sheet))
        .unwrap();
    assert_eq!(sheet.requests.borrow().len(), ColumnKey::ALL.len());

    let aggregates = run_pipeline(&columns, &PipelineConfig::default()).unwrap();

    assert_eq!(aggregates.days, vec!["01.01", "02.01", "03.01"]);
    assert_eq!(aggregates.feeds_per_day, vec![3, 2, 2]);

    // Row 6 has a malformed volume: both volume scans stop there.
    assert_eq!(aggregates.daily.stopped_at, Some(6));
    assert_eq!(aggregates.events.stopped_at, Some(6));
    assert_eq!(aggregates.events.len(), 6);

    // 01.01 and 02.01 are closed by a date change, 03.01 stays open.
    let dates: Vec<&str> = aggregates.daily.items.iter().map(|b| b.date.as_str()).collect();
    assert_eq!(dates, vec!["01.01", "02.01"]);
    assert!((aggregates.daily.items[0].total_volume - 0.30).abs() < 1e-9);

    assert_eq!(aggregates.gaps, vec![4.5, 15.5, 5.0, 5.0, 17.0]);

    let growth = aggregates.growth.as_ref().unwrap();
    assert_eq!(growth.len(), 3);
    assert_eq!(growth.items[2].weight, 4.5);
}

#[test]
fn test_second_run_reads_cache_only() {
    let dir = tempfile::tempdir().unwrap();
    let cache = LocalCache::new(dir.path());
    let config = AppConfig::default();
    let sheet = FakeSheet::new();

    cache
        .load_columns(&config, "Sheet1", false, || Ok(&sheet))
        .unwrap();

    let columns = cache
        .load_columns::<&FakeSheet, _>(&config, "Sheet1", false, || {
            Err(SheetsError::InvalidSource("offline".to_string()))
        })
        .unwrap();

    assert_eq!(columns.get(ColumnKey::Dates).len(), 7);
}

#[test]
fn test_strict_run_fails_on_malformed_row() {
    let dir = tempfile::tempdir().unwrap();
    let cache = LocalCache::new(dir.path());
    let sheet = FakeSheet::new();
    let columns = cache
        .load_columns(&AppConfig::default(), "Sheet1", false, || Ok(&sheet))
        .unwrap();

    let config = PipelineConfig::default().with_policy(ScanPolicy::Strict);

    assert!(run_pipeline(&columns, &config).is_err());
}

#[test]
fn test_report_round_trip_and_chart() {
    let dir = tempfile::tempdir().unwrap();
    let cache = LocalCache::new(dir.path().join("data"));
    let sheet = FakeSheet::new();
    let columns = cache
        .load_columns(&AppConfig::default(), "Sheet1", false, || Ok(&sheet))
        .unwrap();

    let aggregates =
        run_pipeline(&columns, &PipelineConfig::default().with_hourly(true)).unwrap();
    let report = to_report("fake-sheet", &aggregates);

    let path = dir.path().join("feedlog.json");
    write_report(&report, &path).unwrap();
    assert_eq!(read_report(&path).unwrap(), report);

    let hourly = report.hourly.unwrap();
    assert_eq!(hourly.len(), 24);
    assert_eq!(hourly.iter().sum::<u32>(), 6);

    let svg = generate_chart(&aggregates, None, None).unwrap();
    assert!(svg.contains("Feeds per hour"));
}
