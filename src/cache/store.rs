//! On-disk column cache.
//!
//! Each column is stored as a JSON array of strings in `<dir>/<name>.json`.
//! There is no invalidation beyond the `force` flag: a cached column is
//! used until the caller asks for a fresh download.

use super::columns::{ColumnKey, SheetColumns};
use crate::sheets::ColumnSource;
use crate::utils::config::AppConfig;
use crate::utils::error::{CacheError, SheetsError};
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Local key-value store of raw columns
#[derive(Debug, Clone)]
pub struct LocalCache {
    dir: PathBuf,
}

impl LocalCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Load a cached column, `None` if it was never saved
    pub fn load(&self, name: &str) -> Result<Option<Vec<String>>, CacheError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)?;
        let values: Vec<String> = serde_json::from_reader(file).map_err(|source| {
            CacheError::Corrupt {
                name: name.to_string(),
                source,
            }
        })?;

        Ok(Some(values))
    }

    /// Save a column, creating the cache directory if needed
    pub fn save(&self, name: &str, values: &[String]) -> Result<(), CacheError> {
        if !self.dir.exists() {
            debug!("Creating cache directory: {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }

        let file = File::create(self.path_for(name))?;
        serde_json::to_writer(BufWriter::new(file), values)?;

        Ok(())
    }

    /// Return the cached column, downloading it on a miss or when forced
    pub fn load_or_fetch(
        &self,
        name: &str,
        column_index: usize,
        sheet: &str,
        source: &dyn ColumnSource,
        force: bool,
    ) -> Result<Vec<String>, CacheError> {
        if !force {
            if let Some(values) = self.load(name)? {
                info!("Loading {} ({} rows)", name, values.len());
                return Ok(values);
            }
        }

        info!("Downloading {}", name);
        let values = source.fetch_column(sheet, column_index)?;
        self.save(name, &values)?;

        Ok(values)
    }

    /// Load every known column
    ///
    /// **Public** - the load step of a run
    ///
    /// `connect` is only called when at least one column has to be
    /// downloaded, so a fully cached run needs no network or credentials.
    pub fn load_columns<S, F>(
        &self,
        config: &AppConfig,
        sheet: &str,
        force: bool,
        connect: F,
    ) -> Result<SheetColumns, CacheError>
    where
        S: ColumnSource,
        F: FnOnce() -> Result<S, SheetsError>,
    {
        let mut columns = SheetColumns::new();
        let mut missing = Vec::new();

        for key in ColumnKey::ALL {
            let name = key.name();

            if !force {
                if let Some(values) = self.load(name)? {
                    info!("Loading {} ({} rows)", name, values.len());
                    columns.insert(key, values);
                    continue;
                }
            }

            let column_index = config
                .column_for(name)
                .ok_or_else(|| CacheError::UnknownColumn(name.to_string()))?;
            missing.push((key, column_index));
        }

        if missing.is_empty() {
            return Ok(columns);
        }

        let source = connect()?;
        for (key, column_index) in missing {
            let values = self.load_or_fetch(key.name(), column_index, sheet, &source, true)?;
            columns.insert(key, values);
        }

        Ok(columns)
    }
}
