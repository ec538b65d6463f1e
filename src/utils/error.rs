//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading the spreadsheet
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Spreadsheet or worksheet not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    Unauthorized(String),

    #[error("Invalid spreadsheet source: {0}")]
    InvalidSource(String),
}

/// Errors that can occur in the local column cache
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache entry '{name}' is corrupt: {source}")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize cache entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No sheet column configured for '{0}'")]
    UnknownColumn(String),

    #[error("Column download failed: {0}")]
    Fetch(#[from] SheetsError),
}

/// Errors raised by the aggregation pipeline under the strict scan policy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("Malformed {column} value {value:?} at row {row_index}")]
    MalformedRecord {
        column: &'static str,
        row_index: usize,
        value: String,
    },
}

/// Errors that can occur while reading the growth percentile table
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to read percentile table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Percentile table is empty")]
    Empty,
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to plot: no feeding events")]
    EmptySeries,

    #[error("Failed to parse SVG for rasterization: {0}")]
    Svg(String),

    #[error("Failed to rasterize chart: {0}")]
    Raster(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while mailing the charts
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Invalid content type: {0}")]
    ContentType(String),

    #[error("Failed to read attachment: {0}")]
    Attachment(#[from] std::io::Error),

    #[error("Missing SMTP credentials")]
    MissingCredentials,
}

/// Errors that can occur while loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
