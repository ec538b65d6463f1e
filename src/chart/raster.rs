//! PNG rendering of the SVG dashboard.
//!
//! The PNG is what gets mailed; most mail clients will not inline an SVG.

use crate::utils::error::ChartError;
use log::{debug, info};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

/// Rasterize an SVG document into PNG bytes
///
/// **Public** - used by the report command before mailing
///
/// # Errors
/// * `ChartError::Svg` - The document could not be parsed
/// * `ChartError::Raster` - Zero-sized canvas or PNG encoding failure
pub fn rasterize_png(svg: &str) -> Result<Vec<u8>, ChartError> {
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();
    debug!("Loaded {} font faces", options.fontdb.len());

    let tree = Tree::from_str(svg, &options).map_err(|e| ChartError::Svg(e.to_string()))?;
    let size = tree.size().to_int_size();

    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ChartError::Raster(format!(
            "Cannot allocate {}x{} canvas",
            size.width(),
            size.height()
        ))
    })?;
    pixmap.fill(resvg::tiny_skia::Color::WHITE);

    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| ChartError::Raster(e.to_string()))?;

    info!(
        "Rasterized dashboard to {}x{} PNG ({} bytes)",
        size.width(),
        size.height(),
        png.len()
    );

    Ok(png)
}
