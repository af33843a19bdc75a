use crate::config::LayoutParams;
use crate::error::{CardForgeError, CfResult};
use serde::Serialize;
use std::ops::Range;

/// A populated grid cell. `index` is the record's position in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPos {
    pub index: usize,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    pub num_records: usize,
    pub max_per_row: usize,
    pub num_rows: usize,
}

impl GridPlan {
    pub fn new(num_records: usize, max_per_row: usize) -> CfResult<Self> {
        if max_per_row == 0 {
            return Err(CardForgeError::Config(
                "max_per_row must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            num_records,
            max_per_row,
            num_rows: num_records.div_ceil(max_per_row),
        })
    }

    pub fn total_cells(&self) -> usize {
        self.num_rows * self.max_per_row
    }

    pub fn position(&self, index: usize) -> CellPos {
        CellPos {
            index,
            row: index / self.max_per_row,
            col: index % self.max_per_row,
        }
    }

    /// Row-major positions of every populated cell.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.num_records).map(|i| self.position(i))
    }

    /// Trailing cells of a partially filled last row. Never drawn.
    pub fn hidden_cells(&self) -> Range<usize> {
        self.num_records..self.total_cells()
    }

    pub fn occupied_columns(&self) -> usize {
        self.num_records.min(self.max_per_row)
    }

    /// Top-left pixel corner of a cell.
    pub fn cell_origin(&self, pos: CellPos, params: &LayoutParams) -> (f32, f32) {
        let x = params.margin + pos.col as f32 * (params.card_width + params.h_gap());
        let y = params.margin + pos.row as f32 * (params.card_height + params.v_gap());
        (x, y)
    }

    /// Canvas size cropped to the drawn cards plus the outer margin.
    pub fn canvas_size(&self, params: &LayoutParams) -> (u32, u32) {
        let cols = self.occupied_columns();
        let rows = self.num_rows;

        let span = |n: usize, size: f32, gap: f32| -> f32 {
            if n == 0 {
                0.0
            } else {
                n as f32 * size + (n - 1) as f32 * gap
            }
        };

        let width = span(cols, params.card_width, params.h_gap()) + 2.0 * params.margin;
        let height = span(rows, params.card_height, params.v_gap()) + 2.0 * params.margin;
        (width.ceil().max(1.0) as u32, height.ceil().max(1.0) as u32)
    }
}
