//! Output JSON schema definitions for report data.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Spreadsheet the records were read from
    pub source: String,

    /// Distinct days, first-seen order
    pub days: Vec<String>,

    /// Total volume per contiguous day run
    pub daily_totals: Vec<DailyTotal>,

    /// Moving average of the daily totals
    pub trend: Vec<f64>,

    /// Hours between consecutive feeds
    pub gaps: Vec<f64>,

    /// Number of feeds per distinct day (aligned with `days`)
    pub feeds_per_day: Vec<u32>,

    /// Number of feeding events read before the scan stopped
    pub events: usize,

    /// Rows where each scan stopped early
    pub truncation: TruncationSummary,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<Vec<GrowthPoint>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Vec<u32>>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: String,
    pub total_volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub age_months: f64,
    pub weight: f64,
}

/// Row index of the first malformed cell per scan (absent = read to the end)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruncationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<usize>,
}
