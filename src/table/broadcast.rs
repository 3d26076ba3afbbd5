//! Scalar-or-matrix attribute values

use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// A cell attribute given as a scalar or a recycled vector or matrix.
///
/// Resolution is lazy: the full per-cell matrix is never materialized.
/// Vectors shorter than the table recycle by modulo, so a two-element
/// `PerRow` alternates over the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Broadcast<T> {
    /// One value for every cell
    Scalar(T),
    /// One value per row, recycled by row index
    PerRow(Vec<T>),
    /// One value per column, recycled by column index
    PerColumn(Vec<T>),
    /// Full matrix, both axes recycled
    PerCell(Vec<Vec<T>>),
}

impl<T: Default> Default for Broadcast<T> {
    fn default() -> Self {
        Broadcast::Scalar(T::default())
    }
}

impl<T> Broadcast<T> {
    /// Check vectors are non-empty so `resolve` cannot fail.
    pub fn validate(&self, name: &str) -> Result<()> {
        let empty = match self {
            Broadcast::Scalar(_) => false,
            Broadcast::PerRow(values) | Broadcast::PerColumn(values) => values.is_empty(),
            Broadcast::PerCell(matrix) => {
                matrix.is_empty() || matrix.iter().any(|row| row.is_empty())
            }
        };

        if empty {
            return Err(LayoutError::config(format!(
                "broadcast attribute `{}` must not be empty",
                name
            )));
        }
        Ok(())
    }

    /// Look up the value for a cell, recycling vectors by modulo.
    /// Vectors are validated non-empty before planning starts.
    pub fn resolve(&self, row: usize, col: usize) -> &T {
        match self {
            Broadcast::Scalar(value) => value,
            Broadcast::PerRow(values) => &values[row % values.len()],
            Broadcast::PerColumn(values) => &values[col % values.len()],
            Broadcast::PerCell(matrix) => {
                let values = &matrix[row % matrix.len()];
                &values[col % values.len()]
            }
        }
    }
}
