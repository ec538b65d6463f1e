//! One parameterised run over the loaded columns.
//!
//! Every derived series is computed here from [`SheetColumns`]; optional
//! series are `None` when their switch is off.

use super::daily::{calculate_ml_per_day, DayBucket};
use super::days::{feeds_per_day, hourly_histogram, unique_days};
use super::events::{extract_events, time_between_feeds, FeedEvent};
use super::growth::{growth_records, GrowthRecord};
use super::metrics::moving_average;
use super::scan::{Scan, ScanPolicy};
use crate::cache::{ColumnKey, SheetColumns};
use crate::parser::normalize::shift_time;
use crate::utils::config::{DEFAULT_SHIFT_HOURS, DEFAULT_TREND_WINDOW};
use crate::utils::error::AggregateError;
use log::{debug, info, warn};

/// Which series to derive and how
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Re-anchoring of the hour-vs-day chart
    pub shift_hours: f64,

    /// Moving-average width over the daily totals (0 = no smoothing)
    pub trend_window: usize,

    /// Derive weight-for-age samples
    pub growth_overlay: bool,

    /// Derive the 24-bin feeds-per-hour histogram
    pub hourly_histogram: bool,

    pub policy: ScanPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            shift_hours: DEFAULT_SHIFT_HOURS,
            trend_window: DEFAULT_TREND_WINDOW,
            growth_overlay: true,
            hourly_histogram: false,
            policy: ScanPolicy::Truncate,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift_hours: f64) -> Self {
        self.shift_hours = shift_hours;
        self
    }

    pub fn with_trend_window(mut self, window: usize) -> Self {
        self.trend_window = window;
        self
    }

    pub fn with_growth(mut self, enabled: bool) -> Self {
        self.growth_overlay = enabled;
        self
    }

    pub fn with_hourly(mut self, enabled: bool) -> Self {
        self.hourly_histogram = enabled;
        self
    }

    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Everything derived from one run
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    /// Distinct dates of the whole log, first-seen order
    pub days: Vec<String>,

    /// Rows per entry of `days`
    pub feeds_per_day: Vec<u32>,

    pub daily: Scan<DayBucket>,

    /// Moving average of the daily totals
    pub trend: Vec<f64>,

    /// Feeds on the wall clock
    pub events: Scan<FeedEvent>,

    /// Feed hours on the shifted clock, aligned with `events`
    pub shifted_hours: Vec<f64>,

    /// Hours between consecutive feeds
    pub gaps: Vec<f64>,

    pub growth: Option<Scan<GrowthRecord>>,

    pub hourly: Option<[u32; 24]>,

    pub shift_hours: f64,
}

impl Aggregates {
    /// Daily totals as a plain series
    pub fn daily_volumes(&self) -> Vec<f64> {
        self.daily.items.iter().map(|b| b.total_volume).collect()
    }
}

/// Run the aggregation pipeline
///
/// **Public** - main entry point of the core
///
/// # Errors
/// Only under `ScanPolicy::Strict`: the first malformed cell of any scan.
pub fn run_pipeline(
    columns: &SheetColumns,
    config: &PipelineConfig,
) -> Result<Aggregates, AggregateError> {
    let dates = columns.get(ColumnKey::Dates);
    let times = columns.get(ColumnKey::FeedHour);
    let volumes = columns.get(ColumnKey::Volume);

    info!("Aggregating {} logged rows", dates.len());

    let days = unique_days(dates);
    let feeds_per_day = feeds_per_day(dates, &days);

    let daily = calculate_ml_per_day(dates, volumes, config.policy)?;
    let volumes_per_day: Vec<f64> = daily.items.iter().map(|b| b.total_volume).collect();
    let trend = moving_average(&volumes_per_day, config.trend_window);

    let events = extract_events(dates, times, volumes, 0.0, config.policy)?;
    let hours: Vec<f64> = events.items.iter().map(|e| e.hour).collect();
    let gaps = time_between_feeds(&hours);
    let shifted_hours = hours
        .iter()
        .map(|h| shift_time(*h, config.shift_hours))
        .collect();

    if let Some(row) = events.stopped_at {
        warn!(
            "Feeding log read up to row {} of {}; later rows ignored",
            row,
            dates.len()
        );
    }

    let growth = if config.growth_overlay {
        Some(growth_records(
            columns.get(ColumnKey::AgeMonths),
            columns.get(ColumnKey::Weight),
            config.policy,
        )?)
    } else {
        None
    };

    let hourly = config
        .hourly_histogram
        .then(|| hourly_histogram(&events.items));

    debug!(
        "Derived {} days, {} buckets, {} events, {} gaps",
        days.len(),
        daily.len(),
        events.len(),
        gaps.len()
    );

    Ok(Aggregates {
        days,
        feeds_per_day,
        daily,
        trend,
        events,
        shifted_hours,
        gaps,
        growth,
        hourly,
        shift_hours: config.shift_hours,
    })
}
