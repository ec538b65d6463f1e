//! Column keys and the loaded column set.

use std::collections::HashMap;

/// Semantic name of each cached spreadsheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Dates,
    FeedColor,
    FeedHour,
    DayForPlot,
    Volume,
    TimeBetweenFeeds,
    FeedVolumeMl,
    AgeMonths,
    Weight,
}

impl ColumnKey {
    pub const ALL: [ColumnKey; 9] = [
        ColumnKey::Dates,
        ColumnKey::FeedColor,
        ColumnKey::FeedHour,
        ColumnKey::DayForPlot,
        ColumnKey::Volume,
        ColumnKey::TimeBetweenFeeds,
        ColumnKey::FeedVolumeMl,
        ColumnKey::AgeMonths,
        ColumnKey::Weight,
    ];

    /// Cache file name (also the `[columns]` key in the config file)
    pub fn name(self) -> &'static str {
        match self {
            ColumnKey::Dates => "dates",
            ColumnKey::FeedColor => "bibe_color",
            ColumnKey::FeedHour => "hour_bibe",
            ColumnKey::DayForPlot => "day_for_plot",
            ColumnKey::Volume => "size",
            ColumnKey::TimeBetweenFeeds => "time_between_bibes",
            ColumnKey::FeedVolumeMl => "bibes_ml",
            ColumnKey::AgeMonths => "age_months",
            ColumnKey::Weight => "weight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Raw string columns of one run, keyed by [`ColumnKey`]
///
/// Returned by the load step and passed by reference into the pipeline.
/// A missing column reads as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetColumns {
    columns: HashMap<ColumnKey, Vec<String>>,
}

impl SheetColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: ColumnKey, values: Vec<String>) -> Self {
        self.insert(key, values);
        self
    }

    pub fn insert(&mut self, key: ColumnKey, values: Vec<String>) {
        self.columns.insert(key, values);
    }

    pub fn get(&self, key: ColumnKey) -> &[String] {
        self.columns.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: ColumnKey) -> bool {
        self.columns.contains_key(&key)
    }

    /// Number of logged feeds (length of the date column)
    pub fn row_count(&self) -> usize {
        self.get(ColumnKey::Dates).len()
    }
}
