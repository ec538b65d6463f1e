use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Not a valid report: {}", file_path.display()))?;

    if report.version != SCHEMA_VERSION {
        println!(
            "! Schema version {} differs from current {}",
            report.version, SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Generated: {}", report.generated_at);
    println!("  Days: {}", report.days.len());
    println!("  Daily Totals: {}", report.daily_totals.len());
    println!("  Feeds: {}", report.events);
    println!("  Gaps: {}", report.gaps.len());
    if let Some(growth) = &report.growth {
        println!("  Growth Records: {}", growth.len());
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Feedlog Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Spreadsheet URL or cache directory");
        println!("  days: array              - Distinct days, first-seen order");
        println!("  daily_totals: array      - Volume per completed day");
        println!("    date: string           - Day label as written in the sheet");
        println!("    total_volume: number   - Summed volume (litres)");
        println!("  trend: array             - Moving average of daily totals");
        println!("  gaps: array              - Hours between consecutive feeds");
        println!("  feeds_per_day: array     - Feed count per entry of days");
        println!("  events: number           - Feeds read before the scan stopped");
        println!("  truncation: object       - Row where each scan stopped (null = none)");
        println!("    daily: number?         - Daily totals scan");
        println!("    events: number?        - Feed event scan");
        println!("    growth: number?        - Growth record scan");
        println!("  growth: array?           - Weight-for-age samples");
        println!("    age_months: number     - Age in months");
        println!("    weight: number         - Weight (kg)");
        println!("  hourly: array?           - 24 feed counts by hour of day");
        println!("  generated_at: string     - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("feedlog v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Infant feeding and growth dashboards from a tracking spreadsheet.");
}
