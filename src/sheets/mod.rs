//! Remote source: columns of the feeding spreadsheet.

pub mod client;
pub mod types;

pub use client::{
    column_letter, spreadsheet_id_from_url, ColumnSource, Credentials, SheetsClient,
};
pub use types::ValueRange;
