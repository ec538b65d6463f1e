//! Report command implementation.
//!
//! The report command:
//! 1. Loads the columns (cache first, spreadsheet for the missing ones)
//! 2. Runs the aggregation pipeline
//! 3. Loads the percentile reference table
//! 4. Renders the dashboard
//! 5. Writes output files
//! 6. Mails the dashboard

use super::models::{MailArgs, ReportArgs};
use crate::aggregator::{run_pipeline, summarize_daily, summarize_gaps, Aggregates};
use crate::cache::LocalCache;
use crate::chart::{generate_chart, generate_text_summary, rasterize_png};
use crate::notify::{Notifier, SmtpNotifier};
use crate::output::{write_png, write_report, write_svg};
use crate::parser::to_report;
use crate::reference::PercentileTable;
use crate::sheets::spreadsheet_id_from_url;
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::path::Path;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Report command arguments
///
/// # Returns
/// The aggregates the dashboard was drawn from
///
/// # Errors
/// * Cache or spreadsheet failures while loading columns
/// * Malformed rows in strict mode
/// * Chart rendering and file write errors
///
/// A mail failure is logged and does not fail the command.
pub fn execute_report(args: ReportArgs) -> Result<Aggregates> {
    let start_time = Instant::now();

    info!("Starting report from: {}", args.source.source_label());

    // Step 1: Load columns
    info!("Step 1/6: Loading columns...");
    let cache = LocalCache::new(&args.source.cache_dir);
    let columns = cache
        .load_columns(
            &args.source.config,
            &args.source.worksheet,
            args.source.force_fetch,
            || args.source.connect(),
        )
        .context("Failed to load feeding columns")?;

    debug!("Loaded {} rows", columns.row_count());

    // Step 2: Aggregate
    info!("Step 2/6: Aggregating feeding records...");
    let aggregates =
        run_pipeline(&columns, &args.pipeline).context("Failed to aggregate feeding records")?;

    let volume = summarize_daily(&aggregates.daily.items, &aggregates.trend);
    info!("Daily volume: {}", volume.summary());
    let gaps = summarize_gaps(&aggregates.gaps);
    info!("Time between feeds: {}", gaps.summary());

    // Step 3: Percentile overlay
    let percentiles = match (&args.percentiles, args.pipeline.growth_overlay) {
        (Some(path), true) => {
            info!("Step 3/6: Loading percentile table...");
            load_percentiles(path)
        }
        _ => {
            info!("Step 3/6: Skipping percentile table (not requested)");
            None
        }
    };

    // Step 4: Render
    info!("Step 4/6: Rendering dashboard...");
    let svg = generate_chart(&aggregates, percentiles.as_ref(), Some(&args.chart_config))
        .context("Failed to generate dashboard")?;
    let png = match &args.output_png {
        Some(_) => Some(rasterize_png(&svg).context("Failed to rasterize dashboard")?),
        None => None,
    };

    // Step 5: Write outputs
    info!("Step 5/6: Writing output files...");

    let report = to_report(&args.source.source_label(), &aggregates);
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    write_svg(&svg, &args.output_svg).context("Failed to write dashboard SVG")?;
    info!("✓ Dashboard written to: {}", args.output_svg.display());

    if let (Some(png), Some(png_path)) = (png, &args.output_png) {
        write_png(&png, png_path).context("Failed to write dashboard PNG")?;
        info!("✓ Dashboard written to: {}", png_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(64));
        println!("FEEDING SUMMARY");
        println!("{}", "=".repeat(64));
        println!("Source:      {}", report.source);
        println!("Days:        {}", aggregates.days.len());
        println!("Feeds:       {}", aggregates.events.len());
        println!("Volume:      {}", volume.summary());
        println!("Gaps:        {}", gaps.summary());
        println!("\n{}", generate_text_summary(&aggregates, 10));
        println!("{}", "=".repeat(64));
    }

    // Step 6: Mail
    match &args.mail {
        Some(mail) => {
            info!("Step 6/6: Mailing dashboard...");
            let attachment = args
                .output_png
                .as_deref()
                .unwrap_or(args.output_svg.as_path());
            send_mail(mail, attachment);
        }
        None => info!("Step 6/6: Skipping mail (no recipient)"),
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(aggregates)
}

/// Read the percentile table, `None` (with a warning) if unusable
///
/// **Private** - the overlay is optional
fn load_percentiles(path: &Path) -> Option<PercentileTable> {
    match PercentileTable::from_path(path) {
        Ok(table) => {
            debug!("Percentile table: {} rows", table.rows().len());
            Some(table)
        }
        Err(e) => {
            warn!(
                "Percentile table {} unusable, drawing growth without it: {}",
                path.display(),
                e
            );
            None
        }
    }
}

/// Deliver the dashboard; failures are logged, never propagated
///
/// **Private** - internal helper for execute_report
fn send_mail(mail: &MailArgs, attachment: &Path) {
    let notifier = SmtpNotifier::new(&mail.sender)
        .with_server(&mail.smtp_host, mail.smtp_port)
        .with_password(mail.password.clone())
        .with_send(mail.send);

    if let Err(e) = notifier.notify(attachment, &mail.recipient) {
        error!("Failed to mail dashboard to {}: {}", mail.recipient, e);
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if let Some(url) = &args.source.sheet_url {
        spreadsheet_id_from_url(url).context("Invalid spreadsheet URL")?;
    }

    if args.source.worksheet.trim().is_empty() {
        anyhow::bail!("Worksheet name cannot be empty");
    }

    let shift = args.pipeline.shift_hours;
    if !(0.0..24.0).contains(&shift) {
        anyhow::bail!("Shift must be within 0..24 hours (got {})", shift);
    }

    if args.pipeline.trend_window > 365 {
        anyhow::bail!("Trend window is too large (max 365 days)");
    }

    if let Some(mail) = &args.mail {
        if !mail.sender.contains('@') {
            anyhow::bail!("Mail sender must be an address");
        }
        if !mail.recipient.contains('@') {
            anyhow::bail!("Mail recipient must be an address");
        }
        if mail.send && mail.password.is_none() {
            anyhow::bail!("Sending mail needs an SMTP password");
        }
    }

    Ok(())
}
