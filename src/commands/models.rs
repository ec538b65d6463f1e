use crate::aggregator::PipelineConfig;
use crate::chart::ChartConfig;
use crate::sheets::{Credentials, SheetsClient};
use crate::utils::config::{
    AppConfig, DEFAULT_CACHE_DIR, DEFAULT_OUTPUT_STEM, DEFAULT_REPORT_FILE, DEFAULT_SMTP_HOST,
    DEFAULT_SMTP_PORT, DEFAULT_WORKSHEET,
};
use crate::utils::error::SheetsError;
use std::path::PathBuf;

/// Where the columns come from and where they are cached
///
/// **Public** - shared by `report` and `fetch`
#[derive(Debug, Clone)]
pub struct SourceArgs {
    /// Spreadsheet URL or id (only needed when something must be downloaded)
    pub sheet_url: Option<String>,

    /// Worksheet (tab) name
    pub worksheet: String,

    pub credentials: Credentials,

    /// Alternative Sheets API root
    pub endpoint: Option<String>,

    /// Directory of the per-column cache files
    pub cache_dir: PathBuf,

    /// Download every column even when cached
    pub force_fetch: bool,

    /// File configuration, for the column map
    pub config: AppConfig,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            sheet_url: None,
            worksheet: DEFAULT_WORKSHEET.to_string(),
            credentials: Credentials::Anonymous,
            endpoint: None,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            force_fetch: false,
            config: AppConfig::default(),
        }
    }
}

impl SourceArgs {
    /// Open a client for the configured spreadsheet
    ///
    /// # Errors
    /// * `SheetsError::InvalidSource` - No URL configured, or not a sheet URL
    pub fn connect(&self) -> Result<SheetsClient, SheetsError> {
        let url = self.sheet_url.as_deref().ok_or_else(|| {
            SheetsError::InvalidSource(
                "Columns missing from the cache and no spreadsheet URL given".to_string(),
            )
        })?;

        let client = SheetsClient::new(url, self.credentials.clone())?;
        Ok(match &self.endpoint {
            Some(endpoint) => client.with_endpoint(endpoint.clone()),
            None => client,
        })
    }

    /// Name recorded as the report's source
    pub fn source_label(&self) -> String {
        self.sheet_url
            .clone()
            .unwrap_or_else(|| format!("cache:{}", self.cache_dir.display()))
    }
}

/// Mail delivery settings
#[derive(Debug, Clone)]
pub struct MailArgs {
    pub sender: String,
    pub recipient: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub password: Option<String>,

    /// Actually send; otherwise the message is only built and logged
    pub send: bool,
}

impl MailArgs {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            password: None,
            send: false,
        }
    }
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub source: SourceArgs,

    pub pipeline: PipelineConfig,

    /// Weight-for-age percentile CSV (overlay skipped if unreadable)
    pub percentiles: Option<PathBuf>,

    /// Output path for the SVG dashboard
    pub output_svg: PathBuf,

    /// Output path for the PNG dashboard (optional)
    pub output_png: Option<PathBuf>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Mail the dashboard when set
    pub mail: Option<MailArgs>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            source: SourceArgs::default(),
            pipeline: PipelineConfig::default(),
            percentiles: None,
            output_svg: PathBuf::from(format!("{}.svg", DEFAULT_OUTPUT_STEM)),
            output_png: Some(PathBuf::from(format!("{}.png", DEFAULT_OUTPUT_STEM))),
            output_json: PathBuf::from(DEFAULT_REPORT_FILE),
            chart_config: ChartConfig::default(),
            print_summary: false,
            mail: None,
        }
    }
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Default)]
pub struct FetchArgs {
    pub source: SourceArgs,
}
