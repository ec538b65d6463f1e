//! Weight-for-age percentile reference table.
//!
//! Headerless CSV, one row per age:
//! `age_months, p3, p5, p10, p25, p50, p75, p90, p95, p97`.
//! The table is only drawn behind the growth chart; it never feeds back
//! into the aggregation.

use crate::utils::error::ReferenceError;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

/// Percentile curve labels, in column order
pub const PERCENTILE_LABELS: [&str; 9] = [
    "3rd", "5th", "10th", "25th", "50th", "75th", "90th", "95th", "97th",
];

/// Line colour of each percentile curve
pub const PERCENTILE_COLORS: [&str; 9] = [
    "navy",
    "royalblue",
    "cornflowerblue",
    "lightskyblue",
    "grey",
    "lightpink",
    "hotpink",
    "orchid",
    "darkviolet",
];

/// Index of the median curve (drawn solid)
pub const MEDIAN_INDEX: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct PercentileRow {
    pub age_months: f64,
    pub weights: [f64; 9],
}

#[derive(Debug, Clone, PartialEq)]
pub struct PercentileTable {
    rows: Vec<PercentileRow>,
}

impl PercentileTable {
    /// Read the table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        debug!("Reading percentile table from: {}", path.display());

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)?;

        Self::from_csv(reader)
    }

    /// Read the table from any CSV source
    pub fn from_reader<R: Read>(input: R) -> Result<Self, ReferenceError> {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(input);

        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, ReferenceError> {
        let mut rows = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result?;
            match parse_row(&record) {
                Some(row) => rows.push(row),
                None => warn!("Skipping percentile row {}: {:?}", index, record),
            }
        }

        if rows.is_empty() {
            return Err(ReferenceError::Empty);
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[PercentileRow] {
        &self.rows
    }

    /// (age, weight) points of one percentile curve
    pub fn curve(&self, percentile: usize) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|row| row.weights.get(percentile).map(|w| (row.age_months, *w)))
            .collect()
    }
}

/// Parse one record; `None` for headers and short or non-numeric rows
fn parse_row(record: &csv::StringRecord) -> Option<PercentileRow> {
    if record.len() < 10 {
        return None;
    }

    let age_months = record[0].parse().ok()?;
    let mut weights = [0.0; 9];
    for (slot, field) in weights.iter_mut().zip(record.iter().skip(1)) {
        *slot = field.parse().ok()?;
    }

    Some(PercentileRow {
        age_months,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
Month,P3,P5,P10,P25,P50,P75,P90,P95,P97
0, 2.5, 2.6, 2.8, 3.0, 3.3, 3.7, 3.9, 4.1, 4.2
1, 3.4, 3.6, 3.8, 4.1, 4.5, 4.9, 5.1, 5.3, 5.5
2, 4.4, 4.5, 4.7, 5.1, 5.6, 6.0, 6.3, 6.5, 6.6
";

    #[test]
    fn test_reads_table_and_skips_header() {
        let table = PercentileTable::from_reader(TABLE.as_bytes()).unwrap();

        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.rows()[1].age_months, 1.0);
        assert_eq!(table.rows()[1].weights[MEDIAN_INDEX], 4.5);
    }

    #[test]
    fn test_curve() {
        let table = PercentileTable::from_reader(TABLE.as_bytes()).unwrap();

        assert_eq!(table.curve(0), vec![(0.0, 2.5), (1.0, 3.4), (2.0, 4.4)]);
        assert!(table.curve(20).is_empty());
    }

    #[test]
    fn test_short_rows_skipped() {
        let input = "0,1,2\n1, 3.4, 3.6, 3.8, 4.1, 4.5, 4.9, 5.1, 5.3, 5.5\n";
        let table = PercentileTable::from_reader(input.as_bytes()).unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(
            PercentileTable::from_reader("a,b\n".as_bytes()),
            Err(ReferenceError::Empty)
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weight_percentiles.csv");
        std::fs::write(&path, TABLE).unwrap();

        let table = PercentileTable::from_path(&path).unwrap();
        assert_eq!(table.rows().len(), 3);
    }
}
