use crate::error::{CardForgeError, CfResult};
use resvg::tiny_skia;
use resvg::usvg::{fontdb, Options, Tree};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const FALLBACK_FAMILY: &str = "DejaVu Sans";

/// Rasterizes an SVG document to PNG bytes at its intrinsic size.
pub fn svg_to_png(svg: &str, font_dir: Option<&Path>) -> CfResult<Vec<u8>> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = font_dir {
        db.load_fonts_dir(dir);
    }
    debug!("Loaded {} font faces", db.len());

    let mut options = Options::default();
    options.font_family = FALLBACK_FAMILY.to_string();
    options.fontdb = Arc::new(db);

    let tree = Tree::from_str(svg, &options)?;
    let size = tree.size().to_int_size();

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        CardForgeError::Encode(format!(
            "cannot allocate a {}x{} canvas",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| CardForgeError::Encode(e.to_string()))
}
