//! Error types for mapping operations.

use std::fmt;

/// Errors from manual mapping edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Column not found in the current mapping set.
    ColumnNotFound(String),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound(c) => write!(f, "Column not found: {c}"),
        }
    }
}

impl std::error::Error for MappingError {}
