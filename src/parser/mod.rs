//! Cell parsing and report schema definitions.
//!
//! This module handles:
//! - Normalizing locale-formatted numbers
//! - Parsing `H:MM` times and re-anchoring them on a shifted clock
//! - Converting pipeline output into the versioned JSON report

pub mod normalize;
pub mod report;
pub mod schema;

// Re-export main types
pub use normalize::{parse_time_of_day, parse_volume, shift_time};
pub use report::to_report;
pub use schema::{DailyTotal, GrowthPoint, Report, TruncationSummary};
