//! End-to-end services used by the CLI: load, render, write.

use crate::config::Config;
use crate::dataset::{dedup_records, load_records_csv, sample_records, Record};
use crate::error::CfResult;
use crate::fetch::ImageFetcher;
use crate::output;
use crate::render::{render_board, RenderedBoard};
use std::path::Path;
use tracing::info;

/// Loads `data` if given, otherwise the built-in sample, then drops exact
/// duplicate rows.
pub fn load_dataset(data: Option<&Path>) -> CfResult<Vec<Record>> {
    let raw = match data {
        Some(path) => {
            info!("📂 Loading records from {}", path.display());
            load_records_csv(path)?
        }
        None => {
            info!("📂 Using built-in sample records");
            sample_records()
        }
    };
    let raw_len = raw.len();
    let records = dedup_records(raw);
    info!("   -> {} records ({} after dedup)", raw_len, records.len());
    Ok(records)
}

/// Renders every card, encodes the PNG in memory, then writes it. Any error
/// before the write leaves the output path untouched.
pub fn run_pipeline(
    records: &[Record],
    config: &Config,
    fetcher: &dyn ImageFetcher,
) -> CfResult<RenderedBoard> {
    let board = render_board(records, &config.layout, config.output.icon_policy, fetcher)?;
    let png = board.encode_png(config.output.font_dir.as_deref())?;

    output::write_png(&config.output.output, &png)?;
    if let Some(path) = &config.output.manifest {
        output::write_manifest(path, &board)?;
    }
    if !config.output.no_show {
        output::show(&config.output.output);
    }
    Ok(board)
}
