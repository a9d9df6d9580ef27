use serde::{Deserialize, Serialize};

/// What to do with one distinct group value during import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAction {
    /// Create a new group with this name.
    #[default]
    Create,
    /// Assign members to an existing group.
    Assign,
    /// Ignore this value entirely.
    Skip,
}

/// One distinct normalized value found in the detected group column,
/// aggregated across all rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupValue {
    /// Original casing as first seen.
    pub original_value: String,
    /// Lower-cased, trimmed dedup key.
    pub normalized: String,
    /// Number of tokens that collapsed onto this key (one increment per
    /// parsed token, not per cell).
    pub count: usize,
    pub action: GroupAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_group_id: Option<String>,
    /// 1-based row numbers containing this value.
    pub rows: Vec<usize>,
}

/// Existing group as returned by the backend lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingGroup {
    pub id: String,
    pub name: String,
    pub contact_count: usize,
}
