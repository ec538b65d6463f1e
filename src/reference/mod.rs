//! Static reference data drawn alongside the derived series.

pub mod percentiles;

pub use percentiles::{
    PercentileRow, PercentileTable, MEDIAN_INDEX, PERCENTILE_COLORS, PERCENTILE_LABELS,
};
