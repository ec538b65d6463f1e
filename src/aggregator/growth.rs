//! Weight-for-age samples from the sparse growth columns.

use super::scan::{Scan, ScanPolicy};
use crate::parser::normalize::parse_volume;
use crate::utils::error::AggregateError;

/// One (age, weight) measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRecord {
    pub age_months: f64,
    pub weight: f64,
}

/// Read growth samples until the first empty cell
///
/// **Public** - feeds the weight chart
///
/// The growth columns are much shorter than the feeding log; the first row
/// with an empty age or weight marks their end and is not a truncation.
/// A non-empty cell that does not parse is handled by `policy`.
pub fn growth_records(
    age_months: &[String],
    weight: &[String],
    policy: ScanPolicy,
) -> Result<Scan<GrowthRecord>, AggregateError> {
    let rows = age_months.len().min(weight.len());
    let mut records = Vec::new();

    for row in 0..rows {
        let (age_cell, weight_cell) = (&age_months[row], &weight[row]);
        if age_cell.is_empty() || weight_cell.is_empty() {
            break;
        }

        let Some(age) = parse_volume(age_cell) else {
            let stop = policy.on_malformed("age_months", row, age_cell)?;
            return Ok(Scan { items: records, stopped_at: Some(stop) });
        };
        let Some(kg) = parse_volume(weight_cell) else {
            let stop = policy.on_malformed("weight", row, weight_cell)?;
            return Ok(Scan { items: records, stopped_at: Some(stop) });
        };

        records.push(GrowthRecord {
            age_months: age,
            weight: kg,
        });
    }

    Ok(Scan::complete(records))
}
