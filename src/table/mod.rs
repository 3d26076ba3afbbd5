//! Table model with kinded rows

mod broadcast;
mod row;

pub use broadcast::Broadcast;
pub use row::{BorderStyle, Justification, RowKind, RowMetadata, SublineHeader};

use crate::error::{LayoutError, Result};
use rustc_hash::FxHashMap;

/// One row of the table with its kind
#[derive(Debug, Clone, PartialEq)]
struct TableRow {
    kind: RowKind,
    cells: Vec<String>,
}

/// Borrowed view of one table row
#[derive(Debug, Clone, Copy)]
pub struct RowSlice<'a> {
    /// Position in the table
    pub index: usize,
    /// The row's kind
    pub kind: RowKind,
    /// Formatted cell text
    pub cells: &'a [String],
}

/// The main table structure.
///
/// Rows arrive pre-formatted: every cell is display text. Fixture rows
/// live alongside data rows in document order: column headers first,
/// then data, then footnote and source lines.
#[derive(Debug, Clone)]
pub struct Table {
    /// Column names in display order
    columns: Vec<String>,
    /// All rows, fixtures included
    rows: Vec<TableRow>,
    /// Column name lookup
    column_index: FxHashMap<String, usize>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn new(columns: &[&str]) -> Result<Self> {
        let mut column_index = FxHashMap::default();
        for (position, name) in columns.iter().enumerate() {
            if column_index.insert((*name).to_string(), position).is_some() {
                return Err(LayoutError::config(format!("duplicate column `{}`", name)));
            }
        }

        Ok(Self {
            columns: columns.iter().map(|name| (*name).to_string()).collect(),
            rows: Vec::new(),
            column_index,
        })
    }

    /// Append a data row; the cell count must match the columns
    pub fn push_data(&mut self, cells: &[&str]) -> Result<()> {
        if self.footnote_row().is_some() || self.source_row().is_some() {
            return Err(LayoutError::config(
                "data rows must precede footnote and source rows",
            ));
        }
        self.check_arity(cells)?;
        self.rows.push(TableRow {
            kind: RowKind::Data,
            cells: cells.iter().map(|cell| (*cell).to_string()).collect(),
        });
        Ok(())
    }

    /// Append a column header row
    pub fn push_header(&mut self, cells: &[&str]) -> Result<()> {
        if self.rows.iter().any(|row| !row.kind.is_header()) {
            return Err(LayoutError::config(
                "column header rows must precede all other rows",
            ));
        }
        self.check_arity(cells)?;
        self.rows.push(TableRow {
            kind: RowKind::ColumnHeader,
            cells: cells.iter().map(|cell| (*cell).to_string()).collect(),
        });
        Ok(())
    }

    /// Append the footnote line; at most one per table
    pub fn push_footnote(&mut self, text: &str) -> Result<()> {
        if self.footnote_row().is_some() {
            return Err(LayoutError::config("the table already has a footnote"));
        }
        self.rows.push(TableRow {
            kind: RowKind::Footnote,
            cells: vec![text.to_string()],
        });
        Ok(())
    }

    /// Append the source line; at most one per table
    pub fn push_source(&mut self, text: &str) -> Result<()> {
        if self.source_row().is_some() {
            return Err(LayoutError::config("the table already has a source line"));
        }
        self.rows.push(TableRow {
            kind: RowKind::Source,
            cells: vec![text.to_string()],
        });
        Ok(())
    }

    fn check_arity(&self, cells: &[&str]) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(LayoutError::config(format!(
                "row has {} cells but the table has {} columns",
                cells.len(),
                self.columns.len()
            )));
        }
        Ok(())
    }

    /// Get total row count, fixtures included
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the column count
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get column names in display order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Find the position of a named column
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    /// Get the kind of a row
    pub fn kind(&self, index: usize) -> RowKind {
        self.rows[index].kind
    }

    /// Get a borrowed view of a row
    pub fn row(&self, index: usize) -> RowSlice<'_> {
        RowSlice {
            index,
            kind: self.rows[index].kind,
            cells: &self.rows[index].cells,
        }
    }

    /// Get cell text at a position
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row].cells[col]
    }

    /// Get the indices of data rows in order
    pub fn data_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.kind.is_data())
            .map(|(index, _)| index)
            .collect()
    }

    /// Get the indices of column header rows in order
    pub fn header_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.kind.is_header())
            .map(|(index, _)| index)
            .collect()
    }

    /// Get the footnote row index, if present
    pub fn footnote_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.kind.is_footnote())
    }

    /// Get the source row index, if present
    pub fn source_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.kind.is_source())
    }
}
