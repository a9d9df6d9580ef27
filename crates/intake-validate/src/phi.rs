//! PHI detection for HIPAA-regulated verticals.
//!
//! Patterns run in a fixed priority order and the first hit wins per
//! cell: direct identifiers first (blocking), then quasi identifiers,
//! then potential PHI from field context or medical terminology.

use std::sync::LazyLock;

use regex::Regex;

use intake_model::{ContactField, PhiClass, ValidationFinding};
use intake_registry::{MEDICAL_TERMINOLOGY, high_risk_field_reason};

struct PhiPattern {
    regex: &'static LazyLock<Regex>,
    message: &'static str,
}

macro_rules! phi_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("Invalid PHI regex"));
    };
}

phi_regex!(SSN, r"\b\d{3}-\d{2}-\d{4}\b");
phi_regex!(MRN, r"(?i)\bmrn\s*[:#-]?\s*\d{4,}");
phi_regex!(INSURANCE, r"(?i)\b(insurance|policy|member)\s*(no|number|id|#)?\s*[:#-]?\s*\d{5,}");
phi_regex!(ACCOUNT, r"(?i)\b(account|certificate|license)\s*(no|number|#)?\s*[:#-]?\s*\d{4,}");
phi_regex!(VEHICLE, r"(?i)\b(vin|license plate|plate)\s*[:#-]?\s*[a-z0-9-]{5,}");
phi_regex!(DEVICE, r"(?i)\b(device|serial)\s*(no|number|id|#)?\s*[:#-]?\s*[a-z0-9-]{5,}");
phi_regex!(URL, r"(?i)\bhttps?://\S+");
phi_regex!(IP_ADDRESS, r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b");
phi_regex!(BIOMETRIC, r"(?i)\b(fingerprint|biometric|retina|voiceprint)\b|\b\S+\.(jpe?g|png|gif)\b");
phi_regex!(GENERIC_ID, r"(?i)\b(patient|medical)\s*(id|identifier|number|no|#)\s*[:#-]?\s*\w+");

phi_regex!(RELATIVE_DATE, r"(?i)\b(dob|date of birth|admitted|admission|discharged?|deceased)\b");
phi_regex!(GEOGRAPHY, r"(?i)\b\d+\s+\w+\s+(street|st|avenue|ave|road|rd|drive|dr|lane|ln|blvd)\b|\b\d{5}(-\d{4})?\b");
phi_regex!(ELDERLY_AGE, r"(?i)\b(9\d|1[0-9]{2})\s*(years?\s*old|y/?o\b|yrs?\b)|\bage\s*[:#]?\s*(9\d|1[0-9]{2})\b");

static DIRECT_PATTERNS: &[PhiPattern] = &[
    PhiPattern { regex: &SSN, message: "Social Security number detected" },
    PhiPattern { regex: &MRN, message: "Medical record number detected" },
    PhiPattern { regex: &INSURANCE, message: "Insurance or member number detected" },
    PhiPattern { regex: &ACCOUNT, message: "Account or certificate number detected" },
    PhiPattern { regex: &VEHICLE, message: "Vehicle identifier detected" },
    PhiPattern { regex: &DEVICE, message: "Device identifier detected" },
    PhiPattern { regex: &URL, message: "URL detected" },
    PhiPattern { regex: &IP_ADDRESS, message: "IP address detected" },
    PhiPattern { regex: &BIOMETRIC, message: "Biometric or photo reference detected" },
    PhiPattern { regex: &GENERIC_ID, message: "Patient or medical identifier detected" },
];

static QUASI_PATTERNS: &[PhiPattern] = &[
    PhiPattern { regex: &RELATIVE_DATE, message: "Patient-related date detected" },
    PhiPattern { regex: &GEOGRAPHY, message: "Street address or postal code detected" },
    PhiPattern { regex: &ELDERLY_AGE, message: "Age over 89 detected" },
];

/// Classify one non-empty cell. At most one finding per cell; direct
/// hits block import for PHI-regulated businesses.
pub fn detect(
    field: ContactField,
    value: &str,
    row: usize,
    column: &str,
) -> Option<ValidationFinding> {
    for pattern in DIRECT_PATTERNS {
        if pattern.regex.is_match(value) {
            return Some(
                ValidationFinding::error(row, column, value, pattern.message)
                    .with_suggestion("Remove this identifier before importing")
                    .with_phi(PhiClass::Direct),
            );
        }
    }
    for pattern in QUASI_PATTERNS {
        if pattern.regex.is_match(value) {
            return Some(
                ValidationFinding::warning(row, column, value, pattern.message)
                    .with_phi(PhiClass::Quasi),
            );
        }
    }
    if let Some(reason) = high_risk_field_reason(field) {
        return Some(
            ValidationFinding::warning(row, column, value, reason).with_phi(PhiClass::Potential),
        );
    }
    let lowered = value.to_lowercase();
    if MEDICAL_TERMINOLOGY.iter().any(|term| lowered.contains(term)) {
        return Some(
            ValidationFinding::warning(row, column, value, "Medical terminology detected")
                .with_phi(PhiClass::Potential),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::Severity;

    #[test]
    fn ssn_is_a_blocking_direct_identifier() {
        let finding = detect(ContactField::Name, "SSN 123-45-6789", 1, "Name").unwrap();
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.phi, Some(PhiClass::Direct));
        assert!(finding.hipaa_violation);
    }

    #[test]
    fn direct_hit_wins_over_quasi_in_the_same_cell() {
        // Contains both an SSN (direct) and a DOB mention (quasi).
        let finding = detect(ContactField::Notes, "DOB noted, SSN 123-45-6789", 3, "Notes").unwrap();
        assert_eq!(finding.phi, Some(PhiClass::Direct));
    }

    #[test]
    fn elderly_age_is_quasi() {
        let finding = detect(ContactField::Name, "Jane, 92 years old", 2, "Name").unwrap();
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.phi, Some(PhiClass::Quasi));
    }

    #[test]
    fn high_risk_field_is_potential_even_without_terminology() {
        let finding = detect(ContactField::Diagnosis, "routine", 4, "Diagnosis").unwrap();
        assert_eq!(finding.phi, Some(PhiClass::Potential));
    }

    #[test]
    fn terminology_in_a_safe_field_is_potential() {
        let finding = detect(ContactField::Name, "diabetes follow-up", 5, "Visit").unwrap();
        assert_eq!(finding.phi, Some(PhiClass::Potential));
    }

    #[test]
    fn plain_values_are_clean() {
        assert!(detect(ContactField::Name, "Jane Doe", 1, "Name").is_none());
        assert!(detect(ContactField::Phone, "555-1234567", 1, "Phone").is_none());
    }
}
