//! Error types for group reconciliation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Selected column is not in the CSV header row.
    ColumnNotFound(String),
    /// No extracted value carries this normalized key.
    ValueNotFound(String),
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound(c) => write!(f, "Column not found: {c}"),
            Self::ValueNotFound(v) => write!(f, "Group value not found: {v}"),
        }
    }
}

impl std::error::Error for GroupError {}
