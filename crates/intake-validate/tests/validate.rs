//! Validation scenarios over full CSV snapshots.

use chrono::NaiveDate;

use intake_model::{BusinessType, ContactField, CsvFile, FieldMapping, PhiClass, Severity};
use intake_registry::BusinessConfig;
use intake_validate::validate_rows;

fn csv(headers: &[&str], rows: &[&[&str]]) -> CsvFile {
    CsvFile::new(
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    )
}

fn mapping(column: &str, field: ContactField, config: &BusinessConfig) -> FieldMapping {
    FieldMapping {
        source_column: column.to_string(),
        field: Some(field),
        confidence: 100,
        required: config.is_required(field),
        data_type: field.expected_type(),
        samples: Vec::new(),
        suggestions: Vec::new(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
}

#[test]
fn ssn_blocks_medical_import_even_when_everything_else_passes() {
    let config = BusinessConfig::for_type(BusinessType::Medical);
    let file = csv(
        &["Name", "Phone", "Date", "Time"],
        &[&["Jane Doe 123-45-6789", "555-1234567", "2030-04-01", "14:30"]],
    );
    let mappings = vec![
        mapping("Name", ContactField::Name, &config),
        mapping("Phone", ContactField::Phone, &config),
        mapping("Date", ContactField::AppointmentDate, &config),
        mapping("Time", ContactField::AppointmentTime, &config),
    ];
    let report = validate_rows(&file, &mappings, &config, today());
    assert_eq!(report.direct_phi_count(), 1);
    let hit = report
        .findings
        .iter()
        .find(|f| f.phi == Some(PhiClass::Direct))
        .unwrap();
    assert_eq!(hit.severity, Severity::Error);
    assert!(hit.hipaa_violation);
    assert!(report.blocks_import(BusinessType::Medical));
}

#[test]
fn same_ssn_passes_for_an_unregulated_business() {
    let config = BusinessConfig::for_type(BusinessType::General);
    let file = csv(&["Name"], &[&["Jane Doe 123-45-6789"]]);
    let mappings = vec![mapping("Name", ContactField::Name, &config)];
    let report = validate_rows(&file, &mappings, &config, today());
    assert_eq!(report.findings.len(), 0);
    assert!(!report.blocks_import(BusinessType::General));
}

#[test]
fn warnings_never_block() {
    let config = BusinessConfig::for_type(BusinessType::Salon);
    let file = csv(
        &["Name", "Phone", "Service", "Length"],
        &[&["Jane", "555-1234567", "Oil change", "600"]],
    );
    let mappings = vec![
        mapping("Name", ContactField::Name, &config),
        mapping("Phone", ContactField::Phone, &config),
        mapping("Service", ContactField::ServiceType, &config),
        mapping("Length", ContactField::Duration, &config),
    ];
    let report = validate_rows(&file, &mappings, &config, today());
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 2);
    assert!(!report.blocks_import(BusinessType::Salon));
}

#[test]
fn findings_preserve_row_order_and_numbering() {
    let config = BusinessConfig::for_type(BusinessType::Restaurant);
    let file = csv(
        &["Name", "Phone", "Guests"],
        &[
            &["Jane", "555-1234567", "4"],
            &["", "555-1234567", "30"],
            &["Bob", "nope", "2"],
        ],
    );
    let mappings = vec![
        mapping("Name", ContactField::Name, &config),
        mapping("Phone", ContactField::Phone, &config),
        mapping("Guests", ContactField::PartySize, &config),
    ];
    let report = validate_rows(&file, &mappings, &config, today());
    let rows: Vec<usize> = report.findings.iter().map(|f| f.row).collect();
    assert_eq!(rows, vec![2, 2, 3]);
    assert_eq!(report.error_count(), 3);
}

#[test]
fn report_serializes_with_wire_field_names() {
    let config = BusinessConfig::for_type(BusinessType::Medical);
    let file = csv(&["Notes"], &[&["patient id: 4521"]]);
    let mappings = vec![mapping("Notes", ContactField::Notes, &config)];
    let report = validate_rows(&file, &mappings, &config, today());
    let json = serde_json::to_value(&report.findings).unwrap();
    let first = &json[0];
    assert_eq!(first["phi"], "direct");
    assert_eq!(first["hipaaViolation"], true);
    assert_eq!(first["severity"], "error");
}
