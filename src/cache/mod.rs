//! Local cache of downloaded spreadsheet columns.

pub mod columns;
pub mod store;

pub use columns::{ColumnKey, SheetColumns};
pub use store::LocalCache;
