//! Feedlog CLI
//!
//! Turns an infant feeding spreadsheet into a dashboard of daily intake,
//! feeding times, inter-feed gaps and growth.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use feedlog::aggregator::{PipelineConfig, ScanPolicy};
use feedlog::chart::ChartConfig;
use feedlog::commands::{
    display_schema, display_version, execute_fetch, execute_report, validate_args,
    validate_report_file, FetchArgs, MailArgs, ReportArgs, SourceArgs,
};
use feedlog::sheets::Credentials;
use feedlog::utils::config::{
    resolve_config, AppConfig, DEFAULT_CACHE_DIR, DEFAULT_OUTPUT_STEM, DEFAULT_PERCENTILE_FILE,
    DEFAULT_REPORT_FILE, DEFAULT_SHIFT_HOURS, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
    DEFAULT_TREND_WINDOW, DEFAULT_WORKSHEET,
};

/// Feedlog - feeding and growth dashboards
#[derive(Parser, Debug)]
#[command(name = "feedlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./feedlog.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Spreadsheet and cache options shared by `report` and `fetch`
#[derive(Args, Debug)]
struct SourceOpts {
    /// Spreadsheet URL or id
    #[arg(short, long, env = "FEEDLOG_SHEET_URL")]
    sheet: Option<String>,

    /// Worksheet (tab) name
    #[arg(long)]
    worksheet: Option<String>,

    /// Sheets API key
    #[arg(long, env = "FEEDLOG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OAuth access token (takes precedence over the API key)
    #[arg(long, env = "FEEDLOG_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Cache directory
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the dashboard and JSON report
    Report {
        #[command(flatten)]
        source: SourceOpts,

        /// Re-download every column instead of using the cache
        #[arg(long)]
        refresh: bool,

        /// Hours to re-anchor the hour-vs-day chart by
        #[arg(long)]
        shift: Option<f64>,

        /// Moving-average window in days (0 = no smoothing)
        #[arg(long)]
        window: Option<usize>,

        /// Skip the weight-for-age panel
        #[arg(long)]
        no_growth: bool,

        /// Add the feeds-per-hour histogram
        #[arg(long)]
        hourly: bool,

        /// Fail on the first malformed row instead of truncating
        #[arg(long)]
        strict: bool,

        /// Weight-for-age percentile CSV
        #[arg(long)]
        percentiles: Option<PathBuf>,

        /// Output directory for dashboard and report
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Skip the PNG copy of the dashboard
        #[arg(long)]
        no_png: bool,

        /// Dashboard title
        #[arg(long)]
        title: Option<String>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Mail the dashboard to this address
        #[arg(long)]
        mail_to: Option<String>,

        /// Sender address (also the SMTP login)
        #[arg(long)]
        mail_from: Option<String>,

        /// SMTP password
        #[arg(long, env = "FEEDLOG_SMTP_PASSWORD", hide_env_values = true)]
        smtp_password: Option<String>,

        /// Actually send the mail (otherwise it is only built and logged)
        #[arg(long)]
        send: bool,
    },

    /// Refresh the local column cache
    Fetch {
        #[command(flatten)]
        source: SourceOpts,

        /// Re-download columns that are already cached
        #[arg(long)]
        force: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            source,
            refresh,
            shift,
            window,
            no_growth,
            hourly,
            strict,
            percentiles,
            output_dir,
            no_png,
            title,
            summary,
            mail_to,
            mail_from,
            smtp_password,
            send,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let file = &config.pipeline;

            let policy = if strict || file.strict.unwrap_or(false) {
                ScanPolicy::Strict
            } else {
                ScanPolicy::Truncate
            };
            let pipeline = PipelineConfig::new()
                .with_shift(shift.or(file.shift_hours).unwrap_or(DEFAULT_SHIFT_HOURS))
                .with_trend_window(window.or(file.trend_window).unwrap_or(DEFAULT_TREND_WINDOW))
                .with_growth(!no_growth && file.growth_overlay.unwrap_or(true))
                .with_hourly(hourly || file.hourly_histogram.unwrap_or(false))
                .with_policy(policy);

            let percentiles = percentiles
                .or_else(|| file.percentiles.clone())
                .or_else(|| Some(PathBuf::from(DEFAULT_PERCENTILE_FILE)));

            let mut chart_config = ChartConfig::new();
            if let Some(title) = title {
                chart_config = chart_config.with_title(title);
            }

            let mail = mail_to
                .or_else(|| config.mail.recipient.clone())
                .map(|recipient| {
                    let sender = mail_from
                        .or_else(|| config.mail.sender.clone())
                        .unwrap_or_default();
                    let mut mail = MailArgs::new(sender, recipient);
                    mail.smtp_host = config
                        .mail
                        .smtp_host
                        .clone()
                        .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
                    mail.smtp_port = config.mail.smtp_port.unwrap_or(DEFAULT_SMTP_PORT);
                    mail.password = smtp_password;
                    mail.send = send;
                    mail
                });

            let args = ReportArgs {
                source: source_args(source, &config, refresh),
                pipeline,
                percentiles,
                output_svg: output_dir.join(format!("{}.svg", DEFAULT_OUTPUT_STEM)),
                output_png: (!no_png)
                    .then(|| output_dir.join(format!("{}.png", DEFAULT_OUTPUT_STEM))),
                output_json: output_dir.join(DEFAULT_REPORT_FILE),
                chart_config,
                print_summary: summary,
                mail,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Fetch { source, force } => {
            let config = load_config(cli.config.as_deref())?;
            execute_fetch(FetchArgs {
                source: source_args(source, &config, force),
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Read the configuration file
///
/// **Private** - internal helper
fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    resolve_config(path).context("Failed to load configuration")
}

/// Merge source flags over the configuration file
///
/// **Private** - CLI flags win over file values
fn source_args(opts: SourceOpts, config: &AppConfig, force_fetch: bool) -> SourceArgs {
    let sheet = &config.sheet;

    let credentials = match (opts.access_token, opts.api_key.or_else(|| sheet.api_key.clone())) {
        (Some(token), _) => Credentials::Bearer(token),
        (None, Some(key)) => Credentials::ApiKey(key),
        (None, None) => Credentials::Anonymous,
    };

    SourceArgs {
        sheet_url: opts.sheet.or_else(|| sheet.url.clone()),
        worksheet: opts
            .worksheet
            .or_else(|| sheet.worksheet.clone())
            .unwrap_or_else(|| DEFAULT_WORKSHEET.to_string()),
        credentials,
        endpoint: sheet.endpoint.clone(),
        cache_dir: opts
            .cache_dir
            .or_else(|| config.cache.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
        force_fetch,
        config: config.clone(),
    }
}
