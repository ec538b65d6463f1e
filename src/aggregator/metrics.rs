//! Smoothing and summary statistics over the derived series.

use super::daily::DayBucket;
use log::debug;

/// Trailing-window moving average
///
/// **Public** - trend line over the daily totals
///
/// # Arguments
/// * `values` - Series to smooth
/// * `window` - Window width; `0` returns the series unchanged
///
/// # Returns
/// `values.len() - window + 1` means (valid windows only, no padding);
/// empty when the series is shorter than the window.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return values.to_vec();
    }

    debug!("Moving average of {} values, window {}", values.len(), window);

    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Summary statistics of the daily totals
///
/// **Public** - returned from summarize_daily
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeSummary {
    /// Number of closed day buckets
    pub days: usize,

    /// Volume across all buckets
    pub total_volume: f64,

    /// Mean volume per bucket
    pub mean_per_day: f64,

    /// Bucket with the highest total, if any
    pub max_day: Option<DayBucket>,

    /// Mean of the last `window` buckets (latest trend value)
    pub latest_trend: Option<f64>,
}

impl VolumeSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the text summary
    pub fn summary(&self) -> String {
        let max = self
            .max_day
            .as_ref()
            .map(|b| format!("{:.3} on {}", b.total_volume, b.date))
            .unwrap_or_else(|| "-".to_string());
        let trend = self
            .latest_trend
            .map(|t| format!("{:.3}", t))
            .unwrap_or_else(|| "-".to_string());

        format!(
            "Days: {} | Total: {:.3} | Mean/day: {:.3} | Max: {} | Trend: {}",
            self.days, self.total_volume, self.mean_per_day, max, trend
        )
    }
}

/// Calculate volume statistics from daily buckets
///
/// **Public** - provides summary statistics
pub fn summarize_daily(buckets: &[DayBucket], trend: &[f64]) -> VolumeSummary {
    if buckets.is_empty() {
        return VolumeSummary::default();
    }

    let total_volume: f64 = buckets.iter().map(|b| b.total_volume).sum();
    let max_day = buckets
        .iter()
        .max_by(|a, b| a.total_volume.total_cmp(&b.total_volume))
        .cloned();

    VolumeSummary {
        days: buckets.len(),
        total_volume,
        mean_per_day: total_volume / buckets.len() as f64,
        max_day,
        latest_trend: trend.last().copied(),
    }
}

/// Summary statistics of the time between feeds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GapSummary {
    pub count: usize,
    pub mean_hours: f64,
    pub longest_hours: f64,

    /// Gaps of at least 6 hours (the shortest reference line on the chart)
    pub long_stretches: usize,
}

impl GapSummary {
    pub fn summary(&self) -> String {
        format!(
            "Gaps: {} | Mean: {:.2}h | Longest: {:.2}h | >= 6h: {}",
            self.count, self.mean_hours, self.longest_hours, self.long_stretches
        )
    }
}

/// Calculate statistics of the gap series
pub fn summarize_gaps(gaps: &[f64]) -> GapSummary {
    if gaps.is_empty() {
        return GapSummary::default();
    }

    GapSummary {
        count: gaps.len(),
        mean_hours: gaps.iter().sum::<f64>() / gaps.len() as f64,
        longest_hours: gaps.iter().copied().fold(0.0, f64::max),
        long_stretches: gaps.iter().filter(|g| **g >= 6.0).count(),
    }
}
