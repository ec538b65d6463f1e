//! Types for the Google Sheets `values` endpoint.
//!
//! Only the fields we read are modelled; everything else is ignored.

use serde::Deserialize;

/// Response of `GET /v4/spreadsheets/{id}/values/{range}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,

    #[serde(default)]
    pub major_dimension: Option<String>,

    /// Rows (or columns, with `majorDimension=COLUMNS`) of formatted cells.
    /// Absent when the range is entirely empty.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    /// Cells of the first column without its header row
    pub fn into_column(self) -> Vec<String> {
        self.values
            .into_iter()
            .next()
            .map(|column| column.into_iter().skip(1).collect())
            .unwrap_or_default()
    }
}

/// Error envelope returned by Google APIs
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub status: Option<String>,
}
