//! Wizard state machine composing the mapper, validator, group engine,
//! and import planner.
//!
//! `WizardState` is an immutable value. Every transition consumes the
//! state and returns a new one or a [`WizardError`]; nothing mutates in
//! place, so a caller can keep the previous state for undo. Validation
//! runs only inside [`WizardState::advance_to_validation`], never as a
//! side effect of another transition.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use intake_groups::{
    GroupError, detect_group_columns, extract_group_values, update_group_assignment,
};
use intake_map::{MappingError, generate_field_mappings, remap_column, summarize_mappings};
use intake_model::{
    BusinessType, ContactField, ContactRecord, CsvFile, FieldMapping, GroupAction, GroupValue,
    MappingSummary, ValidationReport,
};
use intake_registry::BusinessConfig;
use intake_validate::validate_rows;

/// Wizard steps in order. Transitions only move forward; corrections
/// (remap, re-upload) happen within a step or restart from Upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Upload,
    Mapping,
    Validation,
    Groups,
    Import,
    Complete,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step {current:?} does not allow this transition")]
    WrongStep { current: WizardStep },
    #[error("{unmapped} of {total} required fields are not mapped")]
    RequiredFieldsUnmapped { unmapped: usize, total: usize },
    #[error("validation reported {errors} blocking finding(s)")]
    ValidationBlocked { errors: usize },
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Group(#[from] GroupError),
}

#[derive(Debug, Clone)]
pub struct WizardState {
    step: WizardStep,
    business_type: BusinessType,
    config: BusinessConfig,
    csv: Option<CsvFile>,
    mappings: Vec<FieldMapping>,
    report: Option<ValidationReport>,
    group_columns: Vec<String>,
    selected_group_column: Option<String>,
    group_values: Vec<GroupValue>,
}

impl WizardState {
    pub fn new(business_type: BusinessType) -> Self {
        Self {
            step: WizardStep::Upload,
            business_type,
            config: BusinessConfig::for_type(business_type),
            csv: None,
            mappings: Vec::new(),
            report: None,
            group_columns: Vec::new(),
            selected_group_column: None,
            group_values: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn business_type(&self) -> BusinessType {
        self.business_type
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn csv(&self) -> Option<&CsvFile> {
        self.csv.as_ref()
    }

    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    pub fn group_columns(&self) -> &[String] {
        &self.group_columns
    }

    pub fn selected_group_column(&self) -> Option<&str> {
        self.selected_group_column.as_deref()
    }

    pub fn group_values(&self) -> &[GroupValue] {
        &self.group_values
    }

    pub fn mapping_summary(&self) -> MappingSummary {
        summarize_mappings(&self.mappings, &self.config)
    }

    /// Accept an uploaded file and generate mappings. Allowed from any
    /// step; all downstream state is discarded.
    pub fn upload(self, csv: CsvFile) -> Self {
        let mappings = generate_field_mappings(&csv, &self.config);
        info!(
            columns = csv.headers.len(),
            rows = csv.row_count(),
            "file uploaded"
        );
        Self {
            step: WizardStep::Mapping,
            csv: Some(csv),
            mappings,
            report: None,
            group_columns: Vec::new(),
            selected_group_column: None,
            group_values: Vec::new(),
            ..self
        }
    }

    /// Switch the business vertical. Mappings are regenerated against
    /// the new requirements and findings are cleared.
    pub fn set_business_type(self, business_type: BusinessType) -> Self {
        let config = BusinessConfig::for_type(business_type);
        let mappings = match &self.csv {
            Some(csv) => generate_field_mappings(csv, &config),
            None => Vec::new(),
        };
        let step = if self.csv.is_some() {
            WizardStep::Mapping
        } else {
            WizardStep::Upload
        };
        Self {
            step,
            business_type,
            config,
            mappings,
            report: None,
            group_columns: Vec::new(),
            selected_group_column: None,
            group_values: Vec::new(),
            ..self
        }
    }

    /// Manually reassign one column. Stale findings are cleared, forcing
    /// re-validation before the next gate.
    pub fn remap(mut self, column: &str, field: Option<ContactField>) -> Result<Self, WizardError> {
        if self.step < WizardStep::Mapping || self.step > WizardStep::Validation {
            return Err(WizardError::WrongStep { current: self.step });
        }
        remap_column(&mut self.mappings, column, field, &self.config)?;
        Ok(Self {
            step: WizardStep::Mapping,
            report: None,
            ..self
        })
    }

    /// Gate: every required field must be mapped. Runs validation and
    /// enters the validation step.
    pub fn advance_to_validation(self, today: NaiveDate) -> Result<Self, WizardError> {
        if self.step != WizardStep::Mapping {
            return Err(WizardError::WrongStep { current: self.step });
        }
        let Some(csv) = &self.csv else {
            return Err(WizardError::WrongStep { current: self.step });
        };
        let summary = self.mapping_summary();
        if !summary.all_required_mapped() {
            return Err(WizardError::RequiredFieldsUnmapped {
                unmapped: summary.required_total - summary.required_mapped,
                total: summary.required_total,
            });
        }
        let report = validate_rows(csv, &self.mappings, &self.config, today);
        Ok(Self {
            step: WizardStep::Validation,
            report: Some(report),
            ..self
        })
    }

    /// Gate: zero blocking findings. Detects group columns and extracts
    /// values for the default (first) detected column.
    pub fn advance_to_groups(self) -> Result<Self, WizardError> {
        if self.step != WizardStep::Validation {
            return Err(WizardError::WrongStep { current: self.step });
        }
        let Some(report) = &self.report else {
            return Err(WizardError::WrongStep { current: self.step });
        };
        if report.blocks_import(self.business_type) {
            return Err(WizardError::ValidationBlocked {
                errors: report.error_count(),
            });
        }
        let Some(csv) = &self.csv else {
            return Err(WizardError::WrongStep { current: self.step });
        };
        let group_columns = detect_group_columns(&csv.headers);
        let selected = group_columns.first().cloned();
        let group_values = match &selected {
            Some(column) => extract_group_values(csv, column)?,
            None => Vec::new(),
        };
        Ok(Self {
            step: WizardStep::Groups,
            group_columns,
            selected_group_column: selected,
            group_values,
            ..self
        })
    }

    /// Re-derive group values from a different detected column. All
    /// previous routing decisions are discarded.
    pub fn select_group_column(self, column: &str) -> Result<Self, WizardError> {
        if self.step != WizardStep::Groups {
            return Err(WizardError::WrongStep { current: self.step });
        }
        let Some(csv) = &self.csv else {
            return Err(WizardError::WrongStep { current: self.step });
        };
        let group_values = extract_group_values(csv, column)?;
        Ok(Self {
            selected_group_column: Some(column.to_string()),
            group_values,
            ..self
        })
    }

    /// Route one distinct group value.
    pub fn set_group_action(
        mut self,
        normalized: &str,
        action: GroupAction,
        target_group_id: Option<String>,
    ) -> Result<Self, WizardError> {
        if self.step != WizardStep::Groups {
            return Err(WizardError::WrongStep { current: self.step });
        }
        update_group_assignment(&mut self.group_values, normalized, action, target_group_id)?;
        Ok(self)
    }

    /// Enter the import step and hand back the records to submit. The
    /// orchestrator itself runs outside the state machine, against a
    /// caller-chosen backend.
    pub fn advance_to_import(self) -> Result<(Self, Vec<ContactRecord>), WizardError> {
        if self.step != WizardStep::Groups {
            return Err(WizardError::WrongStep { current: self.step });
        }
        let Some(csv) = &self.csv else {
            return Err(WizardError::WrongStep { current: self.step });
        };
        let records =
            intake_import::build_contact_records(csv, &self.mappings, &self.group_values);
        let next = Self {
            step: WizardStep::Import,
            ..self
        };
        Ok((next, records))
    }

    /// Terminal transition once the orchestrator has finished.
    pub fn finish(self) -> Result<Self, WizardError> {
        if self.step != WizardStep::Import {
            return Err(WizardError::WrongStep { current: self.step });
        }
        Ok(Self {
            step: WizardStep::Complete,
            ..self
        })
    }
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn happy_path_walks_every_step() {
        let file = csv(
            &["Name", "Phone", "Group"],
            &[&["Jane", "555-1234567", "vip"]],
        );
        let state = WizardState::new(BusinessType::Salon).upload(file);
        assert_eq!(state.step(), WizardStep::Mapping);

        let state = state.advance_to_validation(today()).unwrap();
        assert_eq!(state.step(), WizardStep::Validation);
        assert_eq!(state.report().unwrap().error_count(), 0);

        let state = state.advance_to_groups().unwrap();
        assert_eq!(state.step(), WizardStep::Groups);
        assert_eq!(state.selected_group_column(), Some("Group"));
        assert_eq!(state.group_values().len(), 1);

        let (state, records) = state.advance_to_import().unwrap();
        assert_eq!(state.step(), WizardStep::Import);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].group_names, vec!["vip"]);

        let state = state.finish().unwrap();
        assert_eq!(state.step(), WizardStep::Complete);
    }

    #[test]
    fn missing_required_field_blocks_the_mapping_gate() {
        // Salon requires name and phone; this file has no phone column.
        let file = csv(&["Name"], &[&["Jane"]]);
        let state = WizardState::new(BusinessType::Salon).upload(file);
        let err = state.advance_to_validation(today()).unwrap_err();
        assert_eq!(
            err,
            WizardError::RequiredFieldsUnmapped {
                unmapped: 1,
                total: 2
            }
        );
    }

    #[test]
    fn blocking_findings_stop_the_validation_gate() {
        let file = csv(&["Name", "Phone"], &[&["Jane", "not a phone"]]);
        let state = WizardState::new(BusinessType::Salon)
            .upload(file)
            .advance_to_validation(today())
            .unwrap();
        let err = state.advance_to_groups().unwrap_err();
        assert!(matches!(err, WizardError::ValidationBlocked { .. }));
    }

    #[test]
    fn remap_clears_findings_and_returns_to_mapping() {
        let file = csv(&["Name", "Phone"], &[&["Jane", "555-1234567"]]);
        let state = WizardState::new(BusinessType::Salon)
            .upload(file)
            .advance_to_validation(today())
            .unwrap();
        assert!(state.report().is_some());

        let state = state.remap("Phone", None).unwrap();
        assert_eq!(state.step(), WizardStep::Mapping);
        assert!(state.report().is_none());
        // Phone is required again before validation can rerun.
        assert!(state.advance_to_validation(today()).is_err());
    }

    #[test]
    fn business_type_switch_regenerates_mappings() {
        let file = csv(&["Name", "Guests"], &[&["Jane", "4"]]);
        let state = WizardState::new(BusinessType::General).upload(file);
        let before = state.mapping_summary();
        assert!(before.all_required_mapped());

        let state = state.set_business_type(BusinessType::Restaurant);
        assert_eq!(state.business_type(), BusinessType::Restaurant);
        assert!(state.report().is_none());
        let summary = state.mapping_summary();
        assert_eq!(summary.required_total, 3);
        // Guests maps to party size, phone is missing.
        assert_eq!(summary.required_mapped, 2);
    }

    #[test]
    fn transitions_reject_the_wrong_step() {
        let state = WizardState::new(BusinessType::General);
        assert!(matches!(
            state.clone().advance_to_groups(),
            Err(WizardError::WrongStep { .. })
        ));
        assert!(matches!(
            state.clone().finish(),
            Err(WizardError::WrongStep { .. })
        ));
        assert!(matches!(
            state.advance_to_validation(today()),
            Err(WizardError::WrongStep { .. })
        ));
    }
}
