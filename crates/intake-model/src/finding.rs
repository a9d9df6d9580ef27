use serde::{Deserialize, Serialize};

use crate::business::BusinessType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    /// Reserved for non-actionable notices; no rule currently emits it.
    Info,
}

/// PHI classification of a flagged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhiClass {
    Direct,
    Quasi,
    Potential,
}

/// One (row, column, rule) violation found during validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFinding {
    /// 1-based data row number.
    pub row: usize,
    /// Source column name.
    pub column: String,
    /// Offending raw value.
    pub value: String,
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub hipaa_violation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phi: Option<PhiClass>,
}

impl ValidationFinding {
    pub fn error(row: usize, column: &str, value: &str, message: impl Into<String>) -> Self {
        Self::new(row, column, value, message, Severity::Error)
    }

    pub fn warning(row: usize, column: &str, value: &str, message: impl Into<String>) -> Self {
        Self::new(row, column, value, message, Severity::Warning)
    }

    fn new(
        row: usize,
        column: &str,
        value: &str,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            row,
            column: column.to_string(),
            value: value.to_string(),
            message: message.into(),
            severity,
            suggestion: None,
            hipaa_violation: false,
            phi: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Mark this finding as a HIPAA concern of the given class.
    pub fn with_phi(mut self, class: PhiClass) -> Self {
        self.hipaa_violation = true;
        self.phi = Some(class);
        self
    }
}

/// Full validation result for one CSV, recomputed wholesale on every run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub findings: Vec<ValidationFinding>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn direct_phi_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.phi == Some(PhiClass::Direct))
            .count()
    }

    /// Gate to proceed past validation: zero blocking errors, and for
    /// PHI-regulated verticals zero direct identifiers. Warnings never
    /// block.
    pub fn blocks_import(&self, business: BusinessType) -> bool {
        if self.error_count() > 0 {
            return true;
        }
        business.is_phi_regulated() && self.direct_phi_count() > 0
    }
}
