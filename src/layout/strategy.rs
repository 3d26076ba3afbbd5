//! Break strategies for grouped tables

use crate::config::PaginationConfiguration;
use crate::error::Result;
use crate::table::Table;
use smallvec::SmallVec;

/// Column indices driving forced breaks
type ColumnSet = SmallVec<[usize; 2]>;

/// Outcome of a break decision between two adjacent data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// Keep both rows on the current page
    NoBreak,
    /// Capacity exhausted, close the page before the candidate
    SoftBreak,
    /// Grouping demands a new page regardless of remaining capacity
    ForcedBreak,
}

/// Which pagination behavior is active.
///
/// Exactly one strategy drives a plan; `select` encodes the precedence
/// subline over page_by over default.
#[derive(Debug, Clone, PartialEq)]
pub enum BreakStrategy {
    /// Capacity-driven breaks only
    Default,
    /// Value changes in the page_by columns force breaks when new_page is set
    PageBy { columns: ColumnSet, new_page: bool },
    /// Every subline boundary forces a break and opens a subheader
    Subline { columns: ColumnSet },
}

impl BreakStrategy {
    /// Pick the active strategy for a configuration
    pub fn select(config: &PaginationConfiguration, table: &Table) -> Result<Self> {
        if !config.subline_by.is_empty() {
            let columns = config.subline_by_columns(table)?.into_iter().collect();
            return Ok(BreakStrategy::Subline { columns });
        }
        if !config.page_by.is_empty() {
            let columns = config.page_by_columns(table)?.into_iter().collect();
            return Ok(BreakStrategy::PageBy {
                columns,
                new_page: config.new_page,
            });
        }
        Ok(BreakStrategy::Default)
    }

    /// Whether a forced break separates the two rows
    pub fn is_forced_boundary(&self, table: &Table, prev_row: usize, candidate_row: usize) -> bool {
        match self {
            BreakStrategy::Default => false,
            BreakStrategy::PageBy { columns, new_page } => {
                *new_page && any_changed(table, columns, prev_row, candidate_row)
            }
            BreakStrategy::Subline { columns } => {
                any_changed(table, columns, prev_row, candidate_row)
            }
        }
    }

    /// Columns promoted to page subheaders, if any
    pub fn subline_columns(&self) -> Option<&[usize]> {
        match self {
            BreakStrategy::Subline { columns } => Some(columns),
            _ => None,
        }
    }
}

/// Check whether any of the columns changed between two rows
fn any_changed(table: &Table, columns: &[usize], a: usize, b: usize) -> bool {
    columns.iter().any(|&col| table.cell(a, col) != table.cell(b, col))
}
