//! PNG rasterization of rendered charts.

use crate::utils::error::ChartError;
use log::debug;
use resvg::{tiny_skia, usvg};

/// Rasterize an SVG document into PNG bytes at its declared size
///
/// **Public** - used by the graphs command before writing `<field>.png`
///
/// Text is drawn with the system fonts; on a host without fonts the labels
/// are dropped but the lines still render.
///
/// # Errors
/// * `ChartError::Rasterize` - the document cannot be parsed, has a zero
///   size, or the PNG cannot be encoded
pub fn rasterize_png(svg: &str) -> Result<Vec<u8>, ChartError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| ChartError::Rasterize(format!("Invalid SVG: {}", e)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ChartError::Rasterize(format!(
            "Cannot allocate a {}x{} canvas",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| ChartError::Rasterize(format!("PNG encoding failed: {}", e)))?;

    debug!(
        "Rasterized {}x{} chart ({} bytes)",
        size.width(),
        size.height(),
        png.len()
    );

    Ok(png)
}
