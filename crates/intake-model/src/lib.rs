pub mod business;
pub mod csv_file;
pub mod field;
pub mod finding;
pub mod group;
pub mod mapping;
pub mod records;

pub use business::BusinessType;
pub use csv_file::CsvFile;
pub use field::{ContactField, FieldType};
pub use finding::{PhiClass, Severity, ValidationFinding, ValidationReport};
pub use group::{ExistingGroup, GroupAction, GroupValue};
pub use mapping::{FieldMapping, MappingSummary};
pub use records::{
    AppointmentBatchRequest, AppointmentBatchResult, AppointmentRecord, ContactBatchRequest,
    ContactBatchResult, ContactRecord, ReminderBatchRequest, ReminderBatchResult, ReminderRecord,
    RowError,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_by_severity() {
        let report = ValidationReport {
            findings: vec![
                ValidationFinding::error(2, "phone", "abc", "Invalid phone number format"),
                ValidationFinding::warning(3, "duration", "500", "Duration out of range"),
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.blocks_import(BusinessType::General));
    }

    #[test]
    fn direct_phi_blocks_medical_import() {
        let finding = ValidationFinding::warning(1, "notes", "x", "possible identifier")
            .with_phi(PhiClass::Direct);
        let report = ValidationReport {
            findings: vec![finding],
        };
        // No severity=error findings, but a direct identifier still blocks
        // a medical import.
        assert_eq!(report.error_count(), 0);
        assert!(report.blocks_import(BusinessType::Medical));
        assert!(!report.blocks_import(BusinessType::Salon));
    }

    #[test]
    fn contact_batch_result_round_trips() {
        let json = r#"{"created":2,"contactIds":["c1",""],"errors":[{"rowNumber":2,"error":"duplicate"}]}"#;
        let result: ContactBatchResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(result.created, 2);
        assert_eq!(result.contact_ids, vec!["c1".to_string(), String::new()]);
        assert_eq!(result.errors[0].row_number, Some(2));
    }
}
