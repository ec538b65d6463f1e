//! Configuration and constants for the CLI.
//!
//! Constants live at the top; the optional `feedlog.toml` file is
//! deserialised into [`AppConfig`]. Every section is optional, missing
//! values fall back to the constants below.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default timeout for spreadsheet requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Google Sheets API root
pub const DEFAULT_SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com";

/// Worksheet read when none is configured
pub const DEFAULT_WORKSHEET: &str = "Sheet1";

/// Directory holding one cache file per column
pub const DEFAULT_CACHE_DIR: &str = "data";

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "feedlog.toml";

/// Percentile table read for the growth overlay
pub const DEFAULT_PERCENTILE_FILE: &str = "data/weight_percentiles.csv";

// Output file stem; the chart is written as <stem>.svg and <stem>.png
pub const DEFAULT_OUTPUT_STEM: &str = "feedlog";
pub const DEFAULT_REPORT_FILE: &str = "feedlog.json";

// Pipeline defaults (bubble chart re-anchored 8 hours, 4-day trend)
pub const DEFAULT_SHIFT_HOURS: f64 = 8.0;
pub const DEFAULT_TREND_WINDOW: usize = 4;

/// Bubble area scale: a feed of `v` litres is drawn with area `(v * 40)^2`
pub const BUBBLE_SCALE: f64 = 40.0;

// Mail defaults (implicit TLS submission)
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const MAIL_SUBJECT: &str = "Feeding tracking";
pub const MAIL_BODY: &str = "Hi,\nthe new feeding tracking plots are here!";

/// Column positions (1-based) of each cached series in the worksheet
pub const DEFAULT_COLUMNS: &[(&str, usize)] = &[
    ("dates", 1),
    ("bibe_color", 2),
    ("hour_bibe", 3),
    ("day_for_plot", 4),
    ("size", 5),
    ("time_between_bibes", 6),
    ("bibes_ml", 7),
    ("age_months", 10),
    ("weight", 11),
];

/// Complete file configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sheet: SheetSection,

    #[serde(default)]
    pub cache: CacheSection,

    /// Overrides for [`DEFAULT_COLUMNS`], keyed by cache name
    #[serde(default)]
    pub columns: HashMap<String, usize>,

    #[serde(default)]
    pub pipeline: PipelineSection,

    #[serde(default)]
    pub mail: MailSection,
}

/// Where the records come from
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SheetSection {
    /// Spreadsheet URL or bare id
    pub url: Option<String>,

    /// Worksheet (tab) name
    pub worksheet: Option<String>,

    /// API key for public/link-shared sheets
    pub api_key: Option<String>,

    /// Alternative API root (tests, proxies)
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheSection {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PipelineSection {
    pub shift_hours: Option<f64>,
    pub trend_window: Option<usize>,
    pub growth_overlay: Option<bool>,
    pub hourly_histogram: Option<bool>,

    /// Fail on the first malformed row instead of truncating
    pub strict: Option<bool>,

    pub percentiles: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MailSection {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
}

impl AppConfig {
    /// Sheet column for a cache name, honouring `[columns]` overrides
    pub fn column_for(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied().or_else(|| {
            DEFAULT_COLUMNS
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, column)| *column)
        })
    }
}

/// Load configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Load the explicit config file, or the default one if it exists
///
/// An explicit path that cannot be read is an error; a missing default
/// file just yields the built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                load_config(default)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}
