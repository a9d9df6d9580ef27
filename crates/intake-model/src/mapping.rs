use serde::{Deserialize, Serialize};

use crate::field::{ContactField, FieldType};

/// Proposed mapping of one CSV column onto the canonical contact schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Column name as it appears in the CSV header row.
    pub source_column: String,
    /// Assigned canonical field; `None` means unmapped.
    pub field: Option<ContactField>,
    /// Confidence score, 0-100.
    pub confidence: u8,
    /// Whether the assigned field is required for the active business
    /// type. Always recomputed from the registry, never stored
    /// independently of the assignment.
    pub required: bool,
    /// Sniffed data type for the assigned field.
    pub data_type: FieldType,
    /// Up to 3 sample non-empty values from the first 5 data rows.
    pub samples: Vec<String>,
    /// Up to 3 alternate field suggestions ordered by score.
    pub suggestions: Vec<ContactField>,
}

impl FieldMapping {
    pub fn unmapped(source_column: &str) -> Self {
        Self {
            source_column: source_column.to_string(),
            field: None,
            confidence: 0,
            required: false,
            data_type: FieldType::Text,
            samples: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.field.is_some()
    }
}

/// Summary counts over a mapping set, used for step gating and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingSummary {
    pub total_columns: usize,
    pub mapped: usize,
    pub required_total: usize,
    pub required_mapped: usize,
}

impl MappingSummary {
    pub fn all_required_mapped(&self) -> bool {
        self.required_mapped >= self.required_total
    }
}
