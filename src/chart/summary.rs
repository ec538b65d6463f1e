//! Terminal summary of the most recent days.

use crate::aggregator::Aggregates;

/// Width of the longest volume bar
const BAR_WIDTH: usize = 40;

/// Render a text table of the last `max_days` complete days
///
/// **Public** - printed by the report command after the files are written
///
/// # Arguments
/// * `aggregates` - Pipeline output
/// * `max_days` - How many of the most recent buckets to show
///
/// # Returns
/// Multi-line string, one row per day plus a volume bar section
pub fn generate_text_summary(aggregates: &Aggregates, max_days: usize) -> String {
    let mut lines = Vec::new();

    lines.push("  DAILY INTAKE".to_string());
    lines.push(
        "  ┏━━━━━━━━━━━━┳━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┓".to_string(),
    );
    lines.push(format!(
        "  ┃ {:<10} ┃ {:^7} ┃ {:^12} ┃ {:^12} ┃",
        "Day", "FEEDS", "VOLUME", "TREND"
    ));
    lines.push(
        "  ┣━━━━━━━━━━━━╋━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━┫".to_string(),
    );

    let buckets = &aggregates.daily.items;
    let start = buckets.len().saturating_sub(max_days);
    // The trend value for bucket i sits at i - (window - 1).
    let trend_offset = buckets.len().saturating_sub(aggregates.trend.len());

    for (i, bucket) in buckets.iter().enumerate().skip(start) {
        let feeds = aggregates
            .days
            .iter()
            .position(|d| *d == bucket.date)
            .and_then(|idx| aggregates.feeds_per_day.get(idx))
            .copied()
            .unwrap_or(0);

        let trend = i
            .checked_sub(trend_offset)
            .and_then(|t| aggregates.trend.get(t))
            .map(|t| format!("{:.3}", t))
            .unwrap_or_else(|| "-".to_string());

        lines.push(format!(
            "  ┃ {:<10} ┃ {:>7} ┃ {:>12.3} ┃ {:>12} ┃",
            truncate(&bucket.date, 10),
            feeds,
            bucket.total_volume,
            trend
        ));
    }

    lines.push(
        "  ┗━━━━━━━━━━━━┻━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┛".to_string(),
    );

    let max_volume = buckets[start..]
        .iter()
        .map(|b| b.total_volume)
        .fold(0.0, f64::max);

    if max_volume > 0.0 {
        lines.push(String::new());
        for bucket in &buckets[start..] {
            let width = ((bucket.total_volume / max_volume) * BAR_WIDTH as f64).round() as usize;
            lines.push(format!(
                "  {:<10} {:<width$} {:.3}",
                truncate(&bucket.date, 10),
                "█".repeat(width),
                bucket.total_volume,
                width = BAR_WIDTH
            ));
        }
    }

    if buckets.len() > max_days {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing last {} of {} days)",
            max_days,
            buckets.len()
        ));
    }

    lines.join("\n")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        text.chars().take(max).collect()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{run_pipeline, PipelineConfig};
    use crate::cache::{ColumnKey, SheetColumns};

    fn aggregates() -> Aggregates {
        let dates = ["01.01", "01.01", "02.01", "03.01", "03.01", "04.01"];
        let volumes = ["0,1", "0,2", "0,25", "0,1", "0,1", "0,3"];
        let columns = SheetColumns::new()
            .with(ColumnKey::Dates, dates.iter().map(|s| s.to_string()).collect())
            .with(ColumnKey::Volume, volumes.iter().map(|s| s.to_string()).collect());
        run_pipeline(&columns, &PipelineConfig::default().with_trend_window(2)).unwrap()
    }

    #[test]
    fn test_summary_lists_recent_days() {
        let summary = generate_text_summary(&aggregates(), 10);

        assert!(summary.contains("DAILY INTAKE"));
        assert!(summary.contains("02.01"));
        assert!(summary.contains("0.250"));
        assert!(!summary.contains("Showing last"));
    }

    #[test]
    fn test_summary_limits_rows() {
        let summary = generate_text_summary(&aggregates(), 1);
        assert!(summary.contains("(Showing last 1 of"));
    }
}
