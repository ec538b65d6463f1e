//! Dashboard rendering: SVG panels, PNG rasterization and a terminal summary.

pub mod generator;
pub mod raster;
pub mod summary;

pub use generator::{escape_xml, generate_chart, ChartConfig};
pub use raster::rasterize_png;
pub use summary::generate_text_summary;
