//! Truncation policy shared by every row scan.
//!
//! Spreadsheet columns often end in half-filled rows (a feed being logged,
//! a formula not yet dragged down). Scans therefore stop at the first
//! malformed cell and keep what they accumulated so far. That stop is made
//! explicit here: a [`Scan`] remembers where it stopped, and
//! [`ScanPolicy::Strict`] turns the same condition into an error.

use crate::utils::error::AggregateError;
use log::warn;

/// What a scan does with the first malformed cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Stop silently and return everything before the bad row
    #[default]
    Truncate,

    /// Fail with `AggregateError::MalformedRecord`
    Strict,
}

impl ScanPolicy {
    /// Resolve a malformed cell into a stop row or an error
    ///
    /// **Public (crate)** - called by each scan at its break point
    pub(crate) fn on_malformed(
        self,
        column: &'static str,
        row_index: usize,
        value: &str,
    ) -> Result<usize, AggregateError> {
        match self {
            ScanPolicy::Truncate => {
                warn!(
                    "Stopping {} scan at row {}: malformed value {:?}",
                    column, row_index, value
                );
                Ok(row_index)
            }
            ScanPolicy::Strict => Err(AggregateError::MalformedRecord {
                column,
                row_index,
                value: value.to_string(),
            }),
        }
    }
}

/// Output of a row scan
#[derive(Debug, Clone, PartialEq)]
pub struct Scan<T> {
    /// Items produced before the scan ended
    pub items: Vec<T>,

    /// Row of the first malformed cell, if the scan stopped early
    pub stopped_at: Option<usize>,
}

impl<T> Scan<T> {
    /// A scan that read every row
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            stopped_at: None,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.stopped_at.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
