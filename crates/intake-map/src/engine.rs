//! Mapping engine: scores every CSV column against the canonical contact
//! schema and proposes assignments.
//!
//! Each column is scored in isolation. Two columns may legally map to the
//! same canonical field; the wizard surfaces duplicates for the user to
//! resolve rather than forcing a one-to-one assignment.

use tracing::debug;

use intake_model::{ContactField, CsvFile, FieldMapping, MappingSummary};
use intake_registry::BusinessConfig;

use crate::error::MappingError;
use crate::score::synonym_score;
use crate::sniff::sniff_samples;

/// Data rows inspected when collecting sample values.
const SAMPLE_ROW_WINDOW: usize = 5;
/// Sample values retained per column.
const MAX_SAMPLES: usize = 3;
/// Alternate suggestions retained per column.
const MAX_SUGGESTIONS: usize = 3;
/// Confidence bonus when every sample passes the type sniff.
const SNIFF_BONUS: u8 = 10;
/// Confidence penalty when any sample fails the type sniff.
const SNIFF_PENALTY: u8 = 20;
/// Confidence assigned to manual user overrides.
pub const MANUAL_CONFIDENCE: u8 = 85;

/// Build one [`FieldMapping`] per CSV column. Pure function of its
/// inputs: the same headers, rows, and config always produce the same
/// assignments and scores.
pub fn generate_field_mappings(csv: &CsvFile, config: &BusinessConfig) -> Vec<FieldMapping> {
    csv.headers
        .iter()
        .enumerate()
        .map(|(index, header)| map_column(csv, index, header, config))
        .collect()
}

fn map_column(
    csv: &CsvFile,
    column_index: usize,
    header: &str,
    config: &BusinessConfig,
) -> FieldMapping {
    let normalized = header.trim().to_lowercase();

    let mut ranked: Vec<(ContactField, u8)> = ContactField::ALL
        .iter()
        .copied()
        .map(|field| (field, synonym_score(&normalized, field)))
        .filter(|(_, score)| *score > 0)
        .collect();
    // Stable sort keeps field declaration order on score ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let samples = sample_values(csv, column_index);
    let Some(&(field, top_score)) = ranked.first() else {
        let mut mapping = FieldMapping::unmapped(header);
        mapping.samples = samples;
        return mapping;
    };

    let suggestions: Vec<ContactField> = ranked
        .iter()
        .skip(1)
        .take(MAX_SUGGESTIONS)
        .map(|(candidate, _)| *candidate)
        .collect();

    let data_type = field.expected_type();
    let mut confidence = top_score;
    // The sniff can demote the winner below an alternate's score but
    // never triggers re-ranking; only the top-ranked field is assigned.
    if let Some(passed) = sniff_samples(data_type, &samples) {
        confidence = if passed {
            confidence.saturating_add(SNIFF_BONUS).min(100)
        } else {
            confidence.saturating_sub(SNIFF_PENALTY)
        };
    }

    debug!(
        column = %header,
        field = %field,
        confidence,
        "column mapped"
    );

    FieldMapping {
        source_column: header.to_string(),
        field: Some(field),
        confidence,
        required: config.is_required(field),
        data_type,
        samples,
        suggestions,
    }
}

fn sample_values(csv: &CsvFile, column_index: usize) -> Vec<String> {
    let mut samples = Vec::new();
    for row in csv.rows.iter().take(SAMPLE_ROW_WINDOW) {
        let value = row.get(column_index).map(String::as_str).unwrap_or("");
        if value.is_empty() {
            continue;
        }
        samples.push(value.to_string());
        if samples.len() == MAX_SAMPLES {
            break;
        }
    }
    samples
}

/// Reassign a column by hand. Confidence becomes the fixed
/// human-asserted value and `required` is recomputed from the registry.
/// The caller is responsible for discarding stale validation findings.
pub fn remap_column(
    mappings: &mut [FieldMapping],
    column: &str,
    field: Option<ContactField>,
    config: &BusinessConfig,
) -> Result<(), MappingError> {
    let mapping = mappings
        .iter_mut()
        .find(|m| m.source_column == column)
        .ok_or_else(|| MappingError::ColumnNotFound(column.to_string()))?;
    mapping.field = field;
    mapping.confidence = if field.is_some() { MANUAL_CONFIDENCE } else { 0 };
    mapping.required = field.is_some_and(|f| config.is_required(f));
    mapping.data_type = field.map(|f| f.expected_type()).unwrap_or_default();
    Ok(())
}

/// Summary counts for step gating and reporting.
pub fn summarize_mappings(mappings: &[FieldMapping], config: &BusinessConfig) -> MappingSummary {
    let required_mapped = config
        .required_fields
        .iter()
        .filter(|required| mappings.iter().any(|m| m.field == Some(**required)))
        .count();
    MappingSummary {
        total_columns: mappings.len(),
        mapped: mappings.iter().filter(|m| m.is_mapped()).count(),
        required_total: config.required_fields.len(),
        required_mapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::BusinessType;

    fn csv(headers: &[&str], rows: &[&[&str]]) -> CsvFile {
        CsvFile::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn empty_header_list_yields_empty_mappings() {
        let file = csv(&[], &[]);
        let config = BusinessConfig::for_type(BusinessType::General);
        assert!(generate_field_mappings(&file, &config).is_empty());
    }

    #[test]
    fn unmatched_column_stays_unassigned() {
        let file = csv(&["Warehouse Code"], &[&["A-1"]]);
        let config = BusinessConfig::for_type(BusinessType::General);
        let mappings = generate_field_mappings(&file, &config);
        assert_eq!(mappings[0].field, None);
        assert_eq!(mappings[0].confidence, 0);
    }

    #[test]
    fn samples_come_from_first_five_rows_only() {
        let file = csv(
            &["Name"],
            &[&[""], &["a"], &["b"], &[""], &["c"], &["late"]],
        );
        let config = BusinessConfig::for_type(BusinessType::General);
        let mappings = generate_field_mappings(&file, &config);
        assert_eq!(mappings[0].samples, vec!["a", "b", "c"]);
    }

    #[test]
    fn manual_override_sets_fixed_confidence_and_required() {
        let file = csv(&["Mystery"], &[&["555-1234567"]]);
        let config = BusinessConfig::for_type(BusinessType::Medical);
        let mut mappings = generate_field_mappings(&file, &config);
        remap_column(&mut mappings, "Mystery", Some(ContactField::Phone), &config).unwrap();
        assert_eq!(mappings[0].field, Some(ContactField::Phone));
        assert_eq!(mappings[0].confidence, MANUAL_CONFIDENCE);
        assert!(mappings[0].required);

        remap_column(&mut mappings, "Mystery", None, &config).unwrap();
        assert_eq!(mappings[0].confidence, 0);
        assert!(!mappings[0].required);
    }

    #[test]
    fn remap_unknown_column_fails() {
        let file = csv(&["Name"], &[]);
        let config = BusinessConfig::for_type(BusinessType::General);
        let mut mappings = generate_field_mappings(&file, &config);
        let err = remap_column(&mut mappings, "Nope", None, &config).unwrap_err();
        assert_eq!(err, MappingError::ColumnNotFound("Nope".to_string()));
    }

    #[test]
    fn duplicate_assignments_are_allowed() {
        let file = csv(&["Phone", "Cell Phone"], &[&["555-1234567", "555-7654321"]]);
        let config = BusinessConfig::for_type(BusinessType::General);
        let mappings = generate_field_mappings(&file, &config);
        assert_eq!(mappings[0].field, Some(ContactField::Phone));
        assert_eq!(mappings[1].field, Some(ContactField::Phone));
    }
}
