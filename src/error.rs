//! Error types for the pagination pipeline.

use thiserror::Error;

/// Errors that can occur while planning a table layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Configuration is structurally invalid for the given table.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The metrics oracle could not produce a height for a row.
    #[error("metrics unavailable for row {row_index}")]
    MetricsUnavailable { row_index: usize },
}

impl LayoutError {
    /// Build a configuration error from any message.
    pub fn config(message: impl Into<String>) -> Self {
        LayoutError::Configuration {
            message: message.into(),
        }
    }
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
