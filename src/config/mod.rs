//! Pagination configuration and validation

mod geometry;

pub use geometry::{Orientation, PageGeometry};

use crate::error::{LayoutError, Result};
use crate::grouping;
use crate::table::{BorderStyle, Broadcast, Table};
use serde::{Deserialize, Serialize};

/// Which pages a fixture appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PagePlacement {
    /// Every page
    All,
    /// First page only
    First,
    /// Final page only
    Last,
}

impl Default for PagePlacement {
    fn default() -> Self {
        PagePlacement::All
    }
}

impl PagePlacement {
    /// Whether the fixture shows on the given 1-based page
    pub fn shows_on(&self, page_number: usize, total_pages: usize) -> bool {
        match self {
            PagePlacement::All => true,
            PagePlacement::First => page_number == 1,
            PagePlacement::Last => page_number == total_pages,
        }
    }
}

/// Placement of each page fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FixturePlacement {
    pub titles: PagePlacement,
    pub footnote: PagePlacement,
    pub source: PagePlacement,
}

/// Body-level border defaults, broadcast per cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyBorders {
    /// Top border of the first element on a page
    pub first: Broadcast<BorderStyle>,
    /// Bottom border of the last element on a page
    pub last: Broadcast<BorderStyle>,
}

impl Default for BodyBorders {
    fn default() -> Self {
        Self {
            first: Broadcast::Scalar(BorderStyle::Single),
            last: Broadcast::Scalar(BorderStyle::Single),
        }
    }
}

/// Border styles at the document's outer edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBorders {
    /// Top border of the document's first element
    pub first: BorderStyle,
    /// Bottom border of the document's last element
    pub last: BorderStyle,
}

impl Default for PageBorders {
    fn default() -> Self {
        Self {
            first: BorderStyle::Double,
            last: BorderStyle::Double,
        }
    }
}

/// Complete pagination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfiguration {
    /// Page geometry carrying the row capacity
    pub geometry: PageGeometry,
    /// Columns whose value changes may force page breaks
    pub page_by: Vec<String>,
    /// Columns suppressed after their first appearance
    pub group_by: Vec<String>,
    /// Columns promoted to page subheaders
    pub subline_by: Vec<String>,
    /// Force a break at every page_by boundary
    pub new_page: bool,
    /// Repeat column headers on every page, not just the first
    pub repeat_column_headers: bool,
    /// Fixture placement policy
    pub placement: FixturePlacement,
    /// Footnote rendered as a table row
    pub footnote_as_table: bool,
    /// Source rendered as a table row
    pub source_as_table: bool,
    /// Body-level borders
    pub body_borders: BodyBorders,
    /// Document-edge borders
    pub page_borders: PageBorders,
}

impl Default for PaginationConfiguration {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            page_by: Vec::new(),
            group_by: Vec::new(),
            subline_by: Vec::new(),
            new_page: false,
            repeat_column_headers: true,
            placement: FixturePlacement::default(),
            footnote_as_table: true,
            source_as_table: false,
            body_borders: BodyBorders::default(),
            page_borders: PageBorders::default(),
        }
    }
}

impl PaginationConfiguration {
    /// Resolve the page_by columns to table positions
    pub fn page_by_columns(&self, table: &Table) -> Result<Vec<usize>> {
        resolve_columns(table, &self.page_by)
    }

    /// Resolve the group_by columns to table positions
    pub fn group_by_columns(&self, table: &Table) -> Result<Vec<usize>> {
        resolve_columns(table, &self.group_by)
    }

    /// Resolve the subline_by columns to table positions
    pub fn subline_by_columns(&self, table: &Table) -> Result<Vec<usize>> {
        resolve_columns(table, &self.subline_by)
    }

    /// Validate the configuration against a table.
    /// Runs before any row is measured.
    pub fn validate(&self, table: &Table) -> Result<()> {
        if self.geometry.rows_per_page == 0 {
            return Err(LayoutError::config("`rows_per_page` must be at least 1"));
        }
        if self.new_page && self.page_by.is_empty() {
            return Err(LayoutError::config(
                "`new_page` must be `false` if `page_by` is not specified",
            ));
        }

        grouping::validate_no_overlap(&self.page_by, &self.group_by, &self.subline_by)?;

        self.body_borders.first.validate("border_first")?;
        self.body_borders.last.validate("border_last")?;

        // Sortedness is checked over page_by, then subline_by, then group_by
        let mut ordered = self.page_by_columns(table)?;
        ordered.extend(self.subline_by_columns(table)?);
        ordered.extend(self.group_by_columns(table)?);
        grouping::validate_sorted(table, &ordered)?;

        Ok(())
    }
}

fn resolve_columns(table: &Table, names: &[String]) -> Result<Vec<usize>> {
    names
        .iter()
        .map(|name| {
            table
                .column_position(name)
                .ok_or_else(|| LayoutError::config(format!("column `{}` not found in data", name)))
        })
        .collect()
}
