//! HTTP client for reading columns from a Google spreadsheet.

use super::types::{ApiErrorEnvelope, ValueRange};
use crate::utils::config::{DEFAULT_FETCH_TIMEOUT, DEFAULT_SHEETS_ENDPOINT};
use crate::utils::error::SheetsError;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

/// Anything that can hand out a spreadsheet column as strings
///
/// `column_index` is 1-based (column A = 1). Implementations drop the
/// header row.
pub trait ColumnSource {
    fn fetch_column(&self, sheet: &str, column_index: usize) -> Result<Vec<String>, SheetsError>;
}

impl<T: ColumnSource + ?Sized> ColumnSource for &T {
    fn fetch_column(&self, sheet: &str, column_index: usize) -> Result<Vec<String>, SheetsError> {
        (**self).fetch_column(sheet, column_index)
    }
}

/// How requests are authenticated
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// Link-shared sheet, no credential
    #[default]
    Anonymous,

    /// API key sent as the `key` query parameter
    ApiKey(String),

    /// OAuth access token sent as a bearer header
    Bearer(String),
}

/// Client for the Sheets `values` endpoint
pub struct SheetsClient {
    client: Client,
    endpoint: String,
    spreadsheet_id: String,
    credentials: Credentials,
}

impl SheetsClient {
    /// Create a new client for a spreadsheet URL or id
    pub fn new(source: &str, credentials: Credentials) -> Result<Self, SheetsError> {
        let spreadsheet_id = spreadsheet_id_from_url(source)?;

        let client = Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .build()
            .map_err(SheetsError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: DEFAULT_SHEETS_ENDPOINT.to_string(),
            spreadsheet_id,
            credentials,
        })
    }

    /// Point the client at another API root
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Build the `values` URL for one whole column of a worksheet
    ///
    /// The worksheet name is quoted A1-style (`'My sheet'!E:E`) and the
    /// range is percent-encoded as a single path segment.
    fn values_url(&self, sheet: &str, letter: &str) -> Result<Url, SheetsError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            SheetsError::InvalidSource(format!("Bad API endpoint {}: {}", self.endpoint, e))
        })?;

        let range = format!("'{}'!{}:{}", sheet.replace('\'', "''"), letter, letter);

        url.path_segments_mut()
            .map_err(|_| {
                SheetsError::InvalidSource(format!("API endpoint cannot take a path: {}", self.endpoint))
            })?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", range.as_str()]);

        Ok(url)
    }
}

impl ColumnSource for SheetsClient {
    fn fetch_column(&self, sheet: &str, column_index: usize) -> Result<Vec<String>, SheetsError> {
        let letter = column_letter(column_index)?;
        let url = self.values_url(sheet, &letter)?;

        info!("Downloading column {} of '{}'", letter, sheet);
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .query(&[("majorDimension", "COLUMNS")]);

        request = match &self.credentials {
            Credentials::Anonymous => request,
            Credentials::ApiKey(key) => request.query(&[("key", key.as_str())]),
            Credentials::Bearer(token) => request.bearer_auth(token),
        };

        let response = request.send().map_err(SheetsError::RequestFailed)?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(map_api_error(status, &body, &self.spreadsheet_id));
        }

        let range: ValueRange = response.json().map_err(SheetsError::RequestFailed)?;
        debug!("Received range {}", range.range);

        Ok(range.into_column())
    }
}

/// Extract the spreadsheet id from a sharing URL
///
/// Accepts `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0` or a
/// bare id.
pub fn spreadsheet_id_from_url(source: &str) -> Result<String, SheetsError> {
    let source = source.trim();

    if let Some((_, rest)) = source.split_once("/spreadsheets/d/") {
        let id = rest
            .split(&['/', '?', '#'][..])
            .next()
            .unwrap_or_default();
        if id.is_empty() {
            return Err(SheetsError::InvalidSource(format!(
                "No spreadsheet id in URL: {}",
                source
            )));
        }
        return Ok(id.to_string());
    }

    let is_bare_id = !source.is_empty()
        && source
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if is_bare_id {
        Ok(source.to_string())
    } else {
        Err(SheetsError::InvalidSource(format!(
            "Not a spreadsheet URL or id: {}",
            source
        )))
    }
}

/// Convert a 1-based column index to its A1 letter (1 -> A, 27 -> AA)
pub fn column_letter(column_index: usize) -> Result<String, SheetsError> {
    if column_index == 0 {
        return Err(SheetsError::InvalidSource(
            "Column indices start at 1".to_string(),
        ));
    }

    let mut n = column_index;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }

    Ok(letters.into_iter().rev().collect())
}

/// Map an HTTP error response to our error type
fn map_api_error(status: StatusCode, body: &str, spreadsheet_id: &str) -> SheetsError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::NOT_FOUND => SheetsError::NotFound(format!("{}: {}", spreadsheet_id, message)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SheetsError::Unauthorized(message),
        _ => SheetsError::InvalidResponse(format!("HTTP {}: {}", status, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreadsheet_id_from_url() {
        let url = "https://docs.google.com/spreadsheets/d/11T2xbPF-jlk_1UI3/edit#gid=0";
        assert_eq!(spreadsheet_id_from_url(url).unwrap(), "11T2xbPF-jlk_1UI3");
        assert_eq!(spreadsheet_id_from_url("abc_123").unwrap(), "abc_123");
    }

    #[test]
    fn test_spreadsheet_id_invalid() {
        assert!(spreadsheet_id_from_url("").is_err());
        assert!(spreadsheet_id_from_url("https://example.com/sheet").is_err());
        assert!(spreadsheet_id_from_url("https://docs.google.com/spreadsheets/d/").is_err());
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(1).unwrap(), "A");
        assert_eq!(column_letter(11).unwrap(), "K");
        assert_eq!(column_letter(26).unwrap(), "Z");
        assert_eq!(column_letter(27).unwrap(), "AA");
        assert_eq!(column_letter(703).unwrap(), "AAA");
        assert!(column_letter(0).is_err());
    }

    #[test]
    fn test_map_api_error() {
        let body = r#"{"error": {"code": 403, "message": "The caller does not have permission"}}"#;
        assert!(matches!(
            map_api_error(StatusCode::FORBIDDEN, body, "abc"),
            SheetsError::Unauthorized(msg) if msg.contains("permission")
        ));
        assert!(matches!(
            map_api_error(StatusCode::NOT_FOUND, "not json", "abc"),
            SheetsError::NotFound(_)
        ));
        assert!(matches!(
            map_api_error(StatusCode::INTERNAL_SERVER_ERROR, "", "abc"),
            SheetsError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_values_url() {
        let client = SheetsClient::new("abc", Credentials::Anonymous)
            .unwrap()
            .with_endpoint("http://localhost:9000/");
        assert_eq!(
            client.values_url("Sheet1", "E").unwrap().as_str(),
            "http://localhost:9000/v4/spreadsheets/abc/values/'Sheet1'!E:E"
        );
    }

    #[test]
    fn test_values_url_quotes_worksheet_name() {
        let client = SheetsClient::new("abc", Credentials::Anonymous)
            .unwrap()
            .with_endpoint("http://localhost:9000");

        let url = client.values_url("Mom's log #2?", "K").unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/v4/spreadsheets/abc/values/'Mom''s%20log%20%232%3F'!K:K"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_values_url_bad_endpoint() {
        let client = SheetsClient::new("abc", Credentials::Anonymous)
            .unwrap()
            .with_endpoint("not a url");
        assert!(matches!(
            client.values_url("Sheet1", "A"),
            Err(SheetsError::InvalidSource(_))
        ));
    }
}
