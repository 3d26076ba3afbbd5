//! Row metrics for layout

use crate::config::PageGeometry;
use crate::error::{LayoutError, Result};
use crate::table::RowSlice;
use unicode_segmentation::UnicodeSegmentation;

/// Source of rendered row heights.
///
/// The planner consults the oracle exactly once per row and caches the
/// result, so implementations are free to measure expensively.
pub trait RowMetrics {
    /// Number of visual rows the given row occupies (at least 1)
    fn rendered_height(&self, row: RowSlice<'_>) -> Result<usize>;
}

/// Every row is exactly one visual row
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRowMetrics;

impl RowMetrics for FixedRowMetrics {
    fn rendered_height(&self, _row: RowSlice<'_>) -> Result<usize> {
        Ok(1)
    }
}

/// Heights from grapheme counts against per-column character budgets.
///
/// A cell longer than its column budget wraps; the row's height is the
/// tallest cell. Footnote and source rows span the whole table width.
#[derive(Debug, Clone)]
pub struct CharWidthMetrics {
    /// Characters that fit in each column
    column_widths: Vec<usize>,
    /// Budget for columns beyond the configured ones
    default_width: usize,
}

impl CharWidthMetrics {
    pub fn new(column_widths: Vec<usize>, default_width: usize) -> Self {
        Self {
            column_widths,
            default_width,
        }
    }

    /// Split the geometry's column width evenly into character budgets
    pub fn from_geometry(geometry: &PageGeometry, n_cols: usize, chars_per_inch: usize) -> Self {
        let total = (geometry.col_total_width * chars_per_inch as f32) as usize;
        let per_column = if n_cols == 0 {
            total
        } else {
            (total / n_cols).max(1)
        };
        Self {
            column_widths: vec![per_column; n_cols],
            default_width: per_column,
        }
    }

    /// Get the character budget for a column
    fn width_for(&self, col: usize) -> usize {
        self.column_widths
            .get(col)
            .copied()
            .unwrap_or(self.default_width)
    }

    /// Get the budget for a row spanning all columns
    fn full_width(&self) -> usize {
        if self.column_widths.is_empty() {
            self.default_width
        } else {
            self.column_widths.iter().sum()
        }
    }
}

impl RowMetrics for CharWidthMetrics {
    fn rendered_height(&self, row: RowSlice<'_>) -> Result<usize> {
        let spans_table = row.kind.is_footnote() || row.kind.is_source();
        let mut height = 1;

        for (col, cell) in row.cells.iter().enumerate() {
            let budget = if spans_table {
                self.full_width()
            } else {
                self.width_for(col)
            };
            if budget == 0 {
                return Err(LayoutError::MetricsUnavailable {
                    row_index: row.index,
                });
            }

            let graphemes = cell.graphemes(true).count();
            let lines = ((graphemes + budget - 1) / budget).max(1);
            height = height.max(lines);
        }
        Ok(height)
    }
}
