//! Per-row validation engine.

use chrono::NaiveDate;
use tracing::debug;

use intake_model::{CsvFile, FieldMapping, ValidationFinding, ValidationReport};
use intake_registry::BusinessConfig;

use crate::{formats, phi, rules};

/// Validate every data row. Findings are concatenated in row order; the
/// report replaces any previous one wholesale.
pub fn validate_rows(
    csv: &CsvFile,
    mappings: &[FieldMapping],
    config: &BusinessConfig,
    today: NaiveDate,
) -> ValidationReport {
    let mut findings = Vec::new();
    for (index, row) in csv.rows.iter().enumerate() {
        findings.extend(validate_row(row, index + 1, mappings, config, today));
    }
    let report = ValidationReport { findings };
    debug!(
        rows = csv.row_count(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation complete"
    );
    report
}

/// Validate one data row. Pure function of its inputs; `row_number` is
/// 1-based. Mapped columns are checked in mapping order.
pub fn validate_row(
    row: &[String],
    row_number: usize,
    mappings: &[FieldMapping],
    config: &BusinessConfig,
    today: NaiveDate,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    for (column_index, mapping) in mappings.iter().enumerate() {
        let Some(field) = mapping.field else {
            continue;
        };
        // Findings carry the cell exactly as uploaded; only the checks
        // themselves trim.
        let value = row.get(column_index).map(String::as_str).unwrap_or("");
        if value.trim().is_empty() {
            // An empty required cell gets exactly one finding; empty
            // optional cells are always valid.
            if mapping.required {
                findings.push(
                    ValidationFinding::error(
                        row_number,
                        &mapping.source_column,
                        value,
                        format!("{} is required", field.label()),
                    )
                    .with_suggestion("Fill in the missing value or fix the source file"),
                );
            }
            continue;
        }
        if config.business_type.is_phi_regulated() {
            if let Some(finding) = phi::detect(field, value, row_number, &mapping.source_column) {
                findings.push(finding);
            }
        }
        findings.extend(rules::check(
            config,
            field,
            value,
            row_number,
            &mapping.source_column,
        ));
        findings.extend(formats::check(
            field,
            value,
            row_number,
            &mapping.source_column,
            today,
        ));
    }
    findings
}
