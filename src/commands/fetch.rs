//! Fetch command: refresh the local column cache without rendering.

use super::models::FetchArgs;
use crate::cache::{ColumnKey, LocalCache, SheetColumns};
use anyhow::{Context, Result};
use log::info;

/// Execute the fetch command
///
/// **Public** - main entry point called from main.rs
///
/// Only missing columns are downloaded unless `force_fetch` is set.
pub fn execute_fetch(args: FetchArgs) -> Result<SheetColumns> {
    let source = &args.source;
    let cache = LocalCache::new(&source.cache_dir);

    info!(
        "Refreshing cache in {} from {}",
        cache.dir().display(),
        source.source_label()
    );

    let columns = cache
        .load_columns(&source.config, &source.worksheet, source.force_fetch, || {
            source.connect()
        })
        .context("Failed to refresh column cache")?;

    for key in ColumnKey::ALL {
        println!("  {:<20} {:>6} rows", key.name(), columns.get(key).len());
    }

    Ok(columns)
}
