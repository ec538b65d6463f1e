//! Conversion of pipeline output into the JSON report.

use super::schema::{DailyTotal, GrowthPoint, Report, TruncationSummary};
use crate::aggregator::Aggregates;
use crate::utils::config::SCHEMA_VERSION;

/// Convert aggregates to the output report format
///
/// **Public** - used by commands to create final output
pub fn to_report(source: &str, aggregates: &Aggregates) -> Report {
    use chrono::Utc;

    let daily_totals = aggregates
        .daily
        .items
        .iter()
        .map(|b| DailyTotal {
            date: b.date.clone(),
            total_volume: b.total_volume,
        })
        .collect();

    let growth = aggregates.growth.as_ref().map(|scan| {
        scan.items
            .iter()
            .map(|r| GrowthPoint {
                age_months: r.age_months,
                weight: r.weight,
            })
            .collect()
    });

    Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        days: aggregates.days.clone(),
        daily_totals,
        trend: aggregates.trend.clone(),
        gaps: aggregates.gaps.clone(),
        feeds_per_day: aggregates.feeds_per_day.clone(),
        events: aggregates.events.len(),
        truncation: TruncationSummary {
            daily: aggregates.daily.stopped_at,
            events: aggregates.events.stopped_at,
            growth: aggregates.growth.as_ref().and_then(|g| g.stopped_at),
        },
        growth,
        hourly: aggregates.hourly.map(|bins| bins.to_vec()),
        generated_at: Utc::now().to_rfc3339(),
    }
}
