pub mod card;
pub mod raster;

use crate::config::{IconPolicy, LayoutParams};
use crate::dataset::Record;
use crate::error::{CardForgeError, CfResult};
use crate::fetch::{IconCache, ImageFetcher};
use crate::format::{card_lines, CardText};
use crate::layout::GridPlan;
use crate::segments::style_for;
use card::CardFrame;
use serde::Serialize;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info, warn};

const FONT_STACK: &str = "DejaVu Sans, Liberation Sans, Arial, Helvetica, sans-serif";
const PAGE_BACKGROUND: &str = "#FFFFFF";

pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Where a record landed and what was drawn for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPlacement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub segment: String,
    pub color: String,
    pub text: CardText,
    pub icon: bool,
}

#[derive(Debug, Clone)]
pub struct RenderedBoard {
    pub plan: GridPlan,
    pub width: u32,
    pub height: u32,
    pub svg: String,
    pub cards: Vec<CardPlacement>,
}

#[derive(Serialize)]
struct Manifest<'a> {
    rows: usize,
    columns: usize,
    width: u32,
    height: u32,
    /// Serialized as `{"start": .., "end": ..}`.
    hidden_cells: Range<usize>,
    cards: &'a [CardPlacement],
}

impl RenderedBoard {
    pub fn encode_png(&self, font_dir: Option<&Path>) -> CfResult<Vec<u8>> {
        raster::svg_to_png(&self.svg, font_dir)
    }

    pub fn manifest_json(&self) -> CfResult<String> {
        let manifest = Manifest {
            rows: self.plan.num_rows,
            columns: self.plan.max_per_row,
            width: self.width,
            height: self.height,
            hidden_cells: self.plan.hidden_cells(),
            cards: &self.cards,
        };
        Ok(serde_json::to_string_pretty(&manifest)?)
    }
}

/// Lays out one card per record and builds the composite SVG.
///
/// Icons go through `fetcher` once per distinct URL. With
/// [`IconPolicy::Abort`] the first fetch or decode failure is returned and
/// nothing is produced; with [`IconPolicy::Skip`] the card is drawn bare.
pub fn render_board(
    records: &[Record],
    layout: &LayoutParams,
    policy: IconPolicy,
    fetcher: &dyn ImageFetcher,
) -> CfResult<RenderedBoard> {
    layout.validate()?;
    if records.is_empty() {
        return Err(CardForgeError::Validation(
            "no records to render".to_string(),
        ));
    }

    let plan = GridPlan::new(records.len(), layout.max_per_row)?;
    let (width, height) = plan.canvas_size(layout);
    info!(
        "🃏 Laying out {} cards on a {}x{} grid ({}x{} px)",
        plan.num_records, plan.num_rows, plan.max_per_row, width, height
    );

    let mut svg = String::with_capacity(4096 * records.len());
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    ));
    svg.push_str(&format!(
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        width, height, PAGE_BACKGROUND
    ));
    svg.push_str(&format!(r#"<g font-family="{}">"#, FONT_STACK));

    let mut cache = IconCache::new();
    let mut cards = Vec::with_capacity(records.len());

    for (record, pos) in records.iter().zip(plan.cells()) {
        let style = style_for(&record.segment);
        let text = card_lines(record);
        let (x, y) = plan.cell_origin(pos, layout);
        let frame = CardFrame {
            x,
            y,
            width: layout.card_width,
            height: layout.card_height,
        };

        let icon = match style.icon_url {
            Some(url) => match cache.get_or_fetch(url, fetcher) {
                Ok(icon) => Some(icon),
                Err(e) => match policy {
                    IconPolicy::Abort => return Err(e),
                    IconPolicy::Skip => {
                        warn!(
                            "⚠️  Card {} ({}): icon unavailable, drawing without it: {}",
                            pos.index, record.segment, e
                        );
                        None
                    }
                },
            },
            None => None,
        };

        debug!(
            "Card {} -> ({}, {}) {} {}",
            pos.index, pos.row, pos.col, record.segment, style.color
        );
        card::write_card(&mut svg, pos.index, frame, style.color, &text, icon);

        cards.push(CardPlacement {
            index: pos.index,
            row: pos.row,
            col: pos.col,
            segment: record.segment.clone(),
            color: style.color.to_string(),
            text,
            icon: icon.is_some(),
        });
    }

    svg.push_str("</g></svg>");

    Ok(RenderedBoard {
        plan,
        width,
        height,
        svg,
        cards,
    })
}
