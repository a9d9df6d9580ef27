//! Group reconciliation: detects a group column, aggregates its distinct
//! values, and tracks the create/assign/skip routing the user picks for
//! each one.
//!
//! State is recomputed from scratch whenever the selected column or the
//! CSV changes; only `action` and `target_group_id` are edited in place.

use std::collections::BTreeMap;

use tracing::debug;

use intake_model::{CsvFile, GroupAction, GroupValue};

mod error;

pub use error::GroupError;

/// Header keywords that suggest a group-like column.
const GROUP_KEYWORDS: &[&str] = &[
    "group",
    "groups",
    "category",
    "categories",
    "department",
    "dept",
    "team",
    "division",
    "section",
    "type",
    "classification",
    "tag",
    "tags",
];

/// Separators splitting multi-value cells into tokens.
const VALUE_SEPARATORS: [char; 3] = [',', ';', '|'];

/// All headers that look like group columns, in original header order.
/// The first match is the default selection.
pub fn detect_group_columns(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .filter(|header| {
            let lowered = header.trim().to_lowercase();
            GROUP_KEYWORDS
                .iter()
                .any(|keyword| lowered == *keyword || lowered.contains(keyword))
        })
        .cloned()
        .collect()
}

/// Aggregate the distinct values of one column across all rows.
///
/// Cells are split on `,` `;` `|`, tokens are trimmed, and the
/// lower-cased token is the dedup key. Output is sorted by count
/// descending; the sort is stable so ties keep first-seen order.
pub fn extract_group_values(csv: &CsvFile, column: &str) -> Result<Vec<GroupValue>, GroupError> {
    let column_index = csv
        .column_index(column)
        .ok_or_else(|| GroupError::ColumnNotFound(column.to_string()))?;

    let mut order: Vec<String> = Vec::new();
    let mut by_key: BTreeMap<String, GroupValue> = BTreeMap::new();
    for (row_index, row) in csv.rows.iter().enumerate() {
        let cell = row.get(column_index).map(String::as_str).unwrap_or("");
        for token in cell.split(VALUE_SEPARATORS) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let key = token.to_lowercase();
            let entry = by_key.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                GroupValue {
                    original_value: token.to_string(),
                    normalized: key.clone(),
                    count: 0,
                    action: GroupAction::default(),
                    target_group_id: None,
                    rows: Vec::new(),
                }
            });
            entry.count += 1;
            // A token repeated inside one cell still counts per token,
            // but the row is listed once.
            let row_number = row_index + 1;
            if entry.rows.last() != Some(&row_number) {
                entry.rows.push(row_number);
            }
        }
    }

    let mut values: Vec<GroupValue> = order
        .iter()
        .filter_map(|key| by_key.remove(key))
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count));
    debug!(column, distinct = values.len(), "group values extracted");
    Ok(values)
}

/// Route one distinct value. Only `action` and `target_group_id` change;
/// counts and row memberships are never touched.
pub fn update_group_assignment(
    values: &mut [GroupValue],
    normalized: &str,
    action: GroupAction,
    target_group_id: Option<String>,
) -> Result<(), GroupError> {
    let value = values
        .iter_mut()
        .find(|v| v.normalized == normalized)
        .ok_or_else(|| GroupError::ValueNotFound(normalized.to_string()))?;
    value.action = action;
    value.target_group_id = target_group_id;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(headers: &[&str], rows: &[&[&str]]) -> CsvFile {
        CsvFile::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn detection_matches_keywords_case_insensitively() {
        let headers = vec![
            "Name".to_string(),
            "Department".to_string(),
            "Client Type".to_string(),
            "Phone".to_string(),
        ];
        assert_eq!(
            detect_group_columns(&headers),
            vec!["Department".to_string(), "Client Type".to_string()]
        );
    }

    #[test]
    fn detection_returns_empty_when_nothing_matches() {
        let headers = vec!["Name".to_string(), "Phone".to_string()];
        assert!(detect_group_columns(&headers).is_empty());
    }

    #[test]
    fn case_variants_collapse_to_first_seen_casing() {
        let file = csv(&["Group"], &[&["VIP"], &["vip "], &["Vip"]]);
        let values = extract_group_values(&file, "Group").unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].original_value, "VIP");
        assert_eq!(values[0].normalized, "vip");
        assert_eq!(values[0].count, 3);
        assert_eq!(values[0].rows, vec![1, 2, 3]);
        assert_eq!(values[0].action, GroupAction::Create);
    }

    #[test]
    fn multi_value_cells_count_per_token() {
        let file = csv(&["Tags"], &[&["vip, regular"], &["regular; new | vip"], &[""]]);
        let values = extract_group_values(&file, "Tags").unwrap();
        assert_eq!(values.len(), 3);
        // Ties keep first-seen order behind the count sort.
        assert_eq!(values[0].normalized, "vip");
        assert_eq!(values[0].count, 2);
        assert_eq!(values[1].normalized, "regular");
        assert_eq!(values[1].count, 2);
        assert_eq!(values[2].normalized, "new");
        assert_eq!(values[2].rows, vec![2]);
    }

    #[test]
    fn token_repeated_within_a_cell_lists_the_row_once() {
        let file = csv(&["Group"], &[&["vip, vip"], &["vip"]]);
        let values = extract_group_values(&file, "Group").unwrap();
        assert_eq!(values[0].count, 3);
        assert_eq!(values[0].rows, vec![1, 2]);
    }

    #[test]
    fn sort_is_count_descending() {
        let file = csv(&["Group"], &[&["a"], &["b"], &["b"]]);
        let values = extract_group_values(&file, "Group").unwrap();
        assert_eq!(values[0].normalized, "b");
        assert_eq!(values[1].normalized, "a");
    }

    #[test]
    fn assignment_updates_only_routing_fields() {
        let file = csv(&["Group"], &[&["vip"], &["vip"]]);
        let mut values = extract_group_values(&file, "Group").unwrap();
        update_group_assignment(
            &mut values,
            "vip",
            GroupAction::Assign,
            Some("grp_1".to_string()),
        )
        .unwrap();
        assert_eq!(values[0].action, GroupAction::Assign);
        assert_eq!(values[0].target_group_id.as_deref(), Some("grp_1"));
        assert_eq!(values[0].count, 2);

        let err = update_group_assignment(&mut values, "missing", GroupAction::Skip, None);
        assert!(err.is_err());
    }

    #[test]
    fn unknown_column_is_an_error() {
        let file = csv(&["Name"], &[]);
        assert!(matches!(
            extract_group_values(&file, "Group"),
            Err(GroupError::ColumnNotFound(_))
        ));
    }
}
