//! Feedlog
//!
//! Infant feeding and growth dashboards from a tracking spreadsheet.
//!
//! This crate provides the core implementation for the `feedlog` CLI:
//! columns are read from a Google spreadsheet (or the local cache), reduced
//! to per-day totals, feeding events and inter-feed gaps, drawn as an SVG
//! and PNG dashboard and optionally mailed.
//!
//! ## Getting Started
//!
//! ```bash
//! feedlog fetch --sheet https://docs.google.com/spreadsheets/d/<id>/edit
//! feedlog report --summary
//! ```

pub mod aggregator;
pub mod cache;
pub mod chart;
pub mod commands;
pub mod notify;
pub mod output;
pub mod parser;
pub mod reference;
pub mod sheets;
pub mod utils;
