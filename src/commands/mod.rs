//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod fetch;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use fetch::execute_fetch;
pub use models::{FetchArgs, MailArgs, ReportArgs, SourceArgs};
pub use report::{execute_report, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
