//! Core page break calculation

use crate::config::{PagePlacement, PaginationConfiguration};
use crate::error::Result;
use crate::layout::metrics::RowMetrics;
use crate::layout::strategy::{BreakDecision, BreakStrategy};
use crate::table::Table;
use log::{debug, warn};

/// Inclusive range of data rows on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBreak {
    /// First data row on the page
    pub start_row: usize,
    /// Last data row on the page
    pub end_row: usize,
}

impl PageBreak {
    pub fn new(start_row: usize, end_row: usize) -> Self {
        Self { start_row, end_row }
    }

    /// Check if this page contains a given row
    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.start_row && row <= self.end_row
    }
}

/// Accumulator state while filling a page
#[derive(Debug, Clone, Copy)]
pub struct BreakState {
    /// Visual rows used by data on the current page
    pub used: usize,
    /// Data capacity of the current page
    pub capacity: usize,
}

/// Breaks and cached row heights for one plan
#[derive(Debug, Clone)]
pub struct BreakPlan {
    /// Page ranges over the data rows
    pub breaks: Vec<PageBreak>,
    /// Rendered height of every table row, indexed by row
    pub heights: Vec<usize>,
}

/// Splits a table's data rows into page-sized runs.
///
/// Soft breaks close a page when its data capacity is exhausted; the
/// active strategy may force breaks at group boundaries first.
#[derive(Debug, Clone, Copy)]
pub struct PageBreakCalculator<'a> {
    config: &'a PaginationConfiguration,
}

impl<'a> PageBreakCalculator<'a> {
    pub fn new(config: &'a PaginationConfiguration) -> Self {
        Self { config }
    }

    /// Visual rows consumed by fixtures on a page
    fn overhead_rows(
        &self,
        table: &Table,
        heights: &[usize],
        first_page: bool,
        has_subline: bool,
    ) -> usize {
        let mut overhead = 0;

        if has_subline {
            overhead += 1;
        }

        if first_page || self.config.repeat_column_headers {
            overhead += table
                .header_rows()
                .iter()
                .map(|&row| heights[row])
                .sum::<usize>();
        }

        if let Some(row) = table.footnote_row() {
            if fixture_reserved(self.config.placement.footnote, first_page) {
                overhead += heights[row];
            }
        }
        if let Some(row) = table.source_row() {
            if fixture_reserved(self.config.placement.source, first_page) {
                overhead += heights[row];
            }
        }

        overhead
    }

    /// Data capacity of a page after fixture overhead.
    /// Clamped to 1 so a page always makes progress.
    pub fn data_capacity(
        &self,
        table: &Table,
        heights: &[usize],
        first_page: bool,
        has_subline: bool,
    ) -> usize {
        let rows_per_page = self.config.geometry.rows_per_page;
        let overhead = self.overhead_rows(table, heights, first_page, has_subline);

        if overhead >= rows_per_page {
            warn!(
                "fixtures occupy {} of {} rows per page, clamping data capacity to 1",
                overhead, rows_per_page
            );
            return 1;
        }
        rows_per_page - overhead
    }

    /// Decide what happens at the boundary before the candidate row.
    /// A forced break outranks a capacity break.
    pub fn decide_break(
        &self,
        table: &Table,
        strategy: &BreakStrategy,
        prev_row: usize,
        candidate_row: usize,
        candidate_height: usize,
        state: BreakState,
    ) -> BreakDecision {
        if strategy.is_forced_boundary(table, prev_row, candidate_row) {
            return BreakDecision::ForcedBreak;
        }
        if state.used > 0 && state.used + candidate_height > state.capacity {
            return BreakDecision::SoftBreak;
        }
        BreakDecision::NoBreak
    }

    /// Measure every row once and compute page breaks over the data rows.
    ///
    /// The resulting ranges tile the data rows exactly: no gaps, no
    /// overlaps, and concatenation in order reproduces the input.
    pub fn calculate(
        &self,
        table: &Table,
        strategy: &BreakStrategy,
        metrics: &dyn RowMetrics,
    ) -> Result<BreakPlan> {
        let heights = self.measure(table, metrics)?;

        let data_rows = table.data_rows();
        if data_rows.is_empty() {
            return Ok(BreakPlan {
                breaks: Vec::new(),
                heights,
            });
        }

        let has_subline = strategy.subline_columns().is_some();
        let mut breaks: Vec<PageBreak> = Vec::new();
        let mut page_start = data_rows[0];
        let mut state = BreakState {
            used: 0,
            capacity: self.data_capacity(table, &heights, true, has_subline),
        };
        let mut prev: Option<usize> = None;

        for &row in &data_rows {
            let height = heights[row];

            if let Some(prev_row) = prev {
                let decision =
                    self.decide_break(table, strategy, prev_row, row, height, state);
                if decision != BreakDecision::NoBreak {
                    debug!(
                        "page {} closed after row {} ({:?})",
                        breaks.len() + 1,
                        prev_row,
                        decision
                    );
                    breaks.push(PageBreak::new(page_start, prev_row));
                    page_start = row;
                    state = BreakState {
                        used: 0,
                        capacity: self.data_capacity(table, &heights, false, has_subline),
                    };
                }
            }

            if height > state.capacity {
                warn!(
                    "row {} needs {} visual rows but the page fits {}",
                    row, height, state.capacity
                );
            }
            state.used += height;
            prev = Some(row);
        }

        if let Some(last) = prev {
            breaks.push(PageBreak::new(page_start, last));
        }

        Ok(BreakPlan { breaks, heights })
    }

    fn measure(&self, table: &Table, metrics: &dyn RowMetrics) -> Result<Vec<usize>> {
        (0..table.n_rows())
            .map(|row| metrics.rendered_height(table.row(row)))
            .collect()
    }
}

/// Whether a fixture's overhead is reserved on the given page.
/// `Last` reserves everywhere: any page might turn out to be the last.
fn fixture_reserved(placement: PagePlacement, first_page: bool) -> bool {
    match placement {
        PagePlacement::All | PagePlacement::Last => true,
        PagePlacement::First => first_page,
    }
}
