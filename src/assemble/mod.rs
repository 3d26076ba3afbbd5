//! Page assembly: render-ready page model

mod borders;

pub use borders::{BorderEdge, BorderOverride, BorderTarget};

use crate::config::PaginationConfiguration;
use crate::grouping;
use crate::layout::{BreakStrategy, PageBreak};
use crate::table::{RowMetadata, SublineHeader, Table};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One assembled page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    /// Annotated data rows on this page, in order
    pub rows: Vec<RowMetadata>,
    /// Column headers render on this page
    pub shows_column_headers: bool,
    /// Subheader opening the page, if a subline grouping is active
    pub subline: Option<SublineHeader>,
    /// Titles render on this page
    pub shows_titles: bool,
    /// The footnote renders on this page
    pub shows_footnote: bool,
    /// The source line renders on this page
    pub shows_source: bool,
    /// Border style overrides at the page edges
    pub border_overrides: Vec<BorderOverride>,
}

/// Complete plan for a table: annotated rows plus assembled pages
#[derive(Debug, Clone)]
pub struct PaginationPlan {
    /// Metadata for every table row, fixtures included
    pub rows: Vec<RowMetadata>,
    /// Assembled pages in order
    pub pages: Vec<Page>,
    /// Columns hidden from the body (promoted to subheaders)
    pub hidden_columns: Vec<usize>,
    /// Page lookup keyed by each page's first data row
    page_index: BTreeMap<usize, usize>,
}

impl PaginationPlan {
    /// Get the total page count
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Find the 1-based page containing a data row
    pub fn page_of_row(&self, row: usize) -> Option<usize> {
        let (_, &index) = self.page_index.range(..=row).next_back()?;
        let page = &self.pages[index];
        let last = page.rows.last()?;
        if row <= last.row_index {
            Some(page.number)
        } else {
            None
        }
    }
}

/// Build the page model from breaks and annotated rows.
///
/// Assigns page numbers and page-start flags, resolves fixture placement
/// and border overrides, and opens each page's subheader when a subline
/// grouping is active.
pub fn assemble(
    table: &Table,
    config: &PaginationConfiguration,
    strategy: &BreakStrategy,
    breaks: &[PageBreak],
    mut rows: Vec<RowMetadata>,
) -> PaginationPlan {
    let total_pages = breaks.len();
    let has_headers = !table.header_rows().is_empty();
    let hidden_columns: Vec<usize> = strategy
        .subline_columns()
        .map(|columns| columns.to_vec())
        .unwrap_or_default();

    // Fixture rows sit outside the data flow: headers belong to the first
    // page, footnote and source close the document.
    for row in rows.iter_mut() {
        if row.kind.is_header() {
            row.page_number = 1;
        } else if row.kind.is_footnote() || row.kind.is_source() {
            row.page_number = total_pages.max(1);
        }
    }

    let mut pages = Vec::with_capacity(total_pages);
    let mut page_index = BTreeMap::new();

    for (index, page_break) in breaks.iter().enumerate() {
        let number = index + 1;
        debug_assert!(
            page_break.start_row <= page_break.end_row,
            "empty page {} in break plan",
            number
        );

        for row in page_break.start_row..=page_break.end_row {
            rows[row].page_number = number;
            rows[row].is_page_start = row == page_break.start_row;
        }

        let shows_column_headers =
            has_headers && (number == 1 || config.repeat_column_headers);
        let shows_footnote =
            table.footnote_row().is_some() && config.placement.footnote.shows_on(number, total_pages);
        let shows_source =
            table.source_row().is_some() && config.placement.source.shows_on(number, total_pages);
        let shows_titles = config.placement.titles.shows_on(number, total_pages);

        let border_overrides = borders::overrides_for_page(
            config,
            number,
            total_pages,
            shows_column_headers,
            shows_footnote,
            shows_source,
            page_break.start_row,
            page_break.end_row,
        )
        .into_vec();

        let subline = strategy
            .subline_columns()
            .and_then(|columns| subline_for(table, columns, page_break.start_row));

        page_index.insert(page_break.start_row, index);
        pages.push(Page {
            number,
            rows: rows[page_break.start_row..=page_break.end_row].to_vec(),
            shows_column_headers,
            subline,
            shows_titles,
            shows_footnote,
            shows_source,
            border_overrides,
        });
    }

    debug!("assembled {} pages", pages.len());

    PaginationPlan {
        rows,
        pages,
        hidden_columns,
        page_index,
    }
}

/// Build the subheader text from the page's first data row.
/// Divider values are filtered out; an empty result means no subheader.
fn subline_for(table: &Table, columns: &[usize], first_row: usize) -> Option<SublineHeader> {
    let values: Vec<&str> = columns
        .iter()
        .map(|&col| table.cell(first_row, col))
        .filter(|value| !grouping::is_divider(value))
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(SublineHeader::new(values.join(", ")))
    }
}
