//! Aggregation of raw feeding columns into chartable series.
//!
//! This module transforms the cached spreadsheet columns into:
//! - Per-day volume totals and their moving-average trend
//! - Feeding events and the time between them
//! - Distinct days, feeds per day and an optional hourly histogram
//! - Weight-for-age samples

pub mod daily;
pub mod days;
pub mod events;
pub mod growth;
pub mod metrics;
pub mod pipeline;
pub mod scan;

// Re-export main types and functions
pub use daily::{calculate_ml_per_day, DayBucket};
pub use days::{feeds_per_day, hourly_histogram, unique_days};
pub use events::{
    extract_events, ordinal_label, palette_color, time_between_feeds, wrap_gap, FeedEvent,
    COLOR_PALETTE,
};
pub use growth::{growth_records, GrowthRecord};
pub use metrics::{moving_average, summarize_daily, summarize_gaps, GapSummary, VolumeSummary};
pub use pipeline::{run_pipeline, Aggregates, PipelineConfig};
pub use scan::{Scan, ScanPolicy};
