//! Row-level element metadata

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Horizontal justification of a cell or subheader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Justification {
    Left,
    Center,
    Right,
}

impl Default for Justification {
    fn default() -> Self {
        Justification::Left
    }
}

/// Border line style at a row edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderStyle {
    /// No border line
    None,
    /// Single rule
    Single,
    /// Double rule
    Double,
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::Single
    }
}

/// The kind of table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// Regular data row
    Data,
    /// Column header row, repeated per page when configured
    ColumnHeader,
    /// Footnote line below the body
    Footnote,
    /// Data source line below the body
    Source,
    /// Generated group subheader spanning all columns
    SublineHeader,
}

impl Default for RowKind {
    fn default() -> Self {
        RowKind::Data
    }
}

impl RowKind {
    /// Check if this is a data row
    pub fn is_data(&self) -> bool {
        matches!(self, RowKind::Data)
    }

    /// Check if this is a column header row
    pub fn is_header(&self) -> bool {
        matches!(self, RowKind::ColumnHeader)
    }

    /// Check if this is a footnote row
    pub fn is_footnote(&self) -> bool {
        matches!(self, RowKind::Footnote)
    }

    /// Check if this is a source row
    pub fn is_source(&self) -> bool {
        matches!(self, RowKind::Source)
    }
}

/// Metadata the planner attaches to each table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowMetadata {
    /// Position in the source table, stable across the pipeline
    pub row_index: usize,
    /// The kind of row
    pub kind: RowKind,
    /// Visual rows this row occupies when rendered
    pub rendered_height: usize,
    /// 1-based page the row lands on; 0 until assigned
    pub page_number: usize,
    /// First row of a group
    pub is_group_start: bool,
    /// First data row on its page
    pub is_page_start: bool,
    /// Grouping columns blanked on this row
    pub suppressed_columns: FxHashSet<usize>,
}

impl RowMetadata {
    /// Create metadata for a row of the given kind
    pub fn new(row_index: usize, kind: RowKind) -> Self {
        Self {
            row_index,
            kind,
            rendered_height: 1,
            page_number: 0,
            is_group_start: false,
            is_page_start: false,
            suppressed_columns: FxHashSet::default(),
        }
    }

    /// Create metadata for a data row
    pub fn data(row_index: usize) -> Self {
        Self::new(row_index, RowKind::Data)
    }

    /// Check if a column is suppressed on this row
    pub fn is_suppressed(&self, column: usize) -> bool {
        self.suppressed_columns.contains(&column)
    }
}

/// Generated subheader spanning all columns at the top of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SublineHeader {
    /// Formatted group text shown in the spanning cell
    pub text: String,
    /// Render the text bold
    pub bold: bool,
    /// Text justification
    pub justification: Justification,
    /// Border above the subheader
    pub border_top: BorderStyle,
    /// Border below the subheader
    pub border_bottom: BorderStyle,
}

impl SublineHeader {
    /// Create a subheader with the default presentation
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            justification: Justification::Left,
            border_top: BorderStyle::Single,
            border_bottom: BorderStyle::Single,
        }
    }
}
