//! Border overrides at page edges

use crate::config::PaginationConfiguration;
use crate::table::BorderStyle;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which element on the page an override applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderTarget {
    /// First data row on the page
    FirstBodyRow,
    /// Last data row on the page
    LastBodyRow,
    /// The footnote rendered as a table row
    Footnote,
    /// The source line rendered as a table row
    Source,
}

/// Which edge of the target the style applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderEdge {
    Top,
    Bottom,
}

/// One border style override on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderOverride {
    pub target: BorderTarget,
    pub edge: BorderEdge,
    pub style: BorderStyle,
}

/// Resolve the element carrying the page's bottom border.
/// A source rendered as a table outranks the footnote, which outranks
/// the last data row.
fn bottom_target(
    config: &PaginationConfiguration,
    shows_footnote: bool,
    shows_source: bool,
) -> BorderTarget {
    if shows_source && config.source_as_table {
        BorderTarget::Source
    } else if shows_footnote && config.footnote_as_table {
        BorderTarget::Footnote
    } else {
        BorderTarget::LastBodyRow
    }
}

/// Compute the border overrides for one page.
///
/// The document's first and last edges take the page-level styles; every
/// other page edge keeps the body-level styles so no page is left open.
/// On the first page the column headers, when shown, carry the top edge
/// themselves, so no body override is emitted. A subheader opening a
/// page renders above the first body row and receives that row's top
/// override.
pub fn overrides_for_page(
    config: &PaginationConfiguration,
    page_number: usize,
    total_pages: usize,
    shows_column_headers: bool,
    shows_footnote: bool,
    shows_source: bool,
    first_row: usize,
    last_row: usize,
) -> SmallVec<[BorderOverride; 2]> {
    let mut overrides = SmallVec::new();
    let first_page = page_number == 1;
    let last_page = page_number == total_pages;

    let top_style = if first_page {
        if shows_column_headers {
            None
        } else {
            Some(config.page_borders.first)
        }
    } else {
        Some(*config.body_borders.first.resolve(first_row, 0))
    };
    if let Some(style) = top_style {
        overrides.push(BorderOverride {
            target: BorderTarget::FirstBodyRow,
            edge: BorderEdge::Top,
            style,
        });
    }

    let bottom_style = if last_page {
        config.page_borders.last
    } else {
        *config.body_borders.last.resolve(last_row, 0)
    };
    overrides.push(BorderOverride {
        target: bottom_target(config, shows_footnote, shows_source),
        edge: BorderEdge::Bottom,
        style: bottom_style,
    });

    overrides
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaginationConfiguration {
        PaginationConfiguration::default()
    }

    fn override_for(overrides: &[BorderOverride], edge: BorderEdge) -> Option<BorderOverride> {
        overrides.iter().copied().find(|o| o.edge == edge)
    }

    #[test]
    fn test_first_page_without_headers_takes_page_border() {
        let overrides = overrides_for_page(&config(), 1, 3, false, false, false, 0, 4);
        let top = override_for(&overrides, BorderEdge::Top).unwrap();
        assert_eq!(top.target, BorderTarget::FirstBodyRow);
        assert_eq!(top.style, BorderStyle::Double);
    }

    #[test]
    fn test_first_page_with_headers_leaves_body_top_alone() {
        let overrides = overrides_for_page(&config(), 1, 3, true, false, false, 0, 4);
        assert!(override_for(&overrides, BorderEdge::Top).is_none());
    }

    #[test]
    fn test_middle_page_closes_with_body_borders() {
        let overrides = overrides_for_page(&config(), 2, 3, true, false, false, 5, 9);
        let top = override_for(&overrides, BorderEdge::Top).unwrap();
        assert_eq!(top.style, BorderStyle::Single);
        let bottom = override_for(&overrides, BorderEdge::Bottom).unwrap();
        assert_eq!(bottom.target, BorderTarget::LastBodyRow);
        assert_eq!(bottom.style, BorderStyle::Single);
    }

    #[test]
    fn test_last_page_takes_double_bottom() {
        let overrides = overrides_for_page(&config(), 3, 3, true, false, false, 10, 12);
        let bottom = override_for(&overrides, BorderEdge::Bottom).unwrap();
        assert_eq!(bottom.style, BorderStyle::Double);
    }

    #[test]
    fn test_bottom_target_prefers_source_then_footnote() {
        let mut with_source = config();
        with_source.source_as_table = true;
        let overrides = overrides_for_page(&with_source, 3, 3, true, true, true, 0, 4);
        let bottom = override_for(&overrides, BorderEdge::Bottom).unwrap();
        assert_eq!(bottom.target, BorderTarget::Source);

        // Source not shown as a table: the footnote carries the edge
        let overrides = overrides_for_page(&config(), 3, 3, true, true, true, 0, 4);
        let bottom = override_for(&overrides, BorderEdge::Bottom).unwrap();
        assert_eq!(bottom.target, BorderTarget::Footnote);

        // Neither fixture present: the last data row does
        let overrides = overrides_for_page(&config(), 3, 3, true, false, false, 0, 4);
        let bottom = override_for(&overrides, BorderEdge::Bottom).unwrap();
        assert_eq!(bottom.target, BorderTarget::LastBodyRow);
    }
}
