use crate::error::CfResult;
use crate::render::RenderedBoard;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Creates or overwrites `path`.
pub fn write_png(path: &Path, bytes: &[u8]) -> CfResult<()> {
    fs::write(path, bytes)?;
    info!("💾 Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

pub fn write_manifest(path: &Path, board: &RenderedBoard) -> CfResult<()> {
    let json = board.manifest_json()?;
    fs::write(path, json)?;
    info!("🗒️  Manifest written to {}", path.display());
    Ok(())
}

/// Best effort; a missing viewer is only worth a warning.
pub fn show(path: &Path) {
    if let Err(e) = open::that(path) {
        warn!("⚠️  Could not open {} in a viewer: {}", path.display(), e);
    }
}
