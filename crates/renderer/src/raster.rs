//! PNG rasterization of rendered SVG documents.

use std::sync::Arc;

use heatmap_common::{HeatmapError, HeatmapResult};
use tracing::debug;

/// Rasterize an SVG document to PNG bytes on a white background.
///
/// `scale` multiplies the document's intrinsic size. System fonts are
/// loaded for axis and legend labels; text is dropped if none are found.
pub fn svg_to_png(svg: &str, scale: f32) -> HeatmapResult<Vec<u8>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(HeatmapError::Config(format!(
            "raster scale must be positive, got {}",
            scale
        )));
    }

    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();

    let mut opt = usvg::Options::default();
    opt.fontdb = Arc::new(fontdb);

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| HeatmapError::Render(format!("SVG parse failed: {}", e)))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        HeatmapError::Render(format!("cannot allocate {}x{} pixmap", width, height))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    debug!(width, height, "Rasterized SVG");

    pixmap
        .encode_png()
        .map_err(|e| HeatmapError::Render(format!("PNG encoding failed: {}", e)))
}
