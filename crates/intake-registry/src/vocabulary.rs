//! Business vocabularies and compliance word lists.

use intake_model::ContactField;

/// Words expected somewhere in a medical appointment-type value.
pub const MEDICAL_APPOINTMENT_TYPES: &[&str] = &[
    "consultation",
    "follow-up",
    "followup",
    "checkup",
    "check-up",
    "physical",
    "exam",
    "screening",
    "vaccination",
    "immunization",
    "lab",
    "procedure",
    "therapy",
    "telehealth",
];

/// Words expected somewhere in a salon service-type value.
pub const SALON_SERVICE_TYPES: &[&str] = &[
    "haircut",
    "cut",
    "color",
    "coloring",
    "highlights",
    "balayage",
    "blowout",
    "styling",
    "perm",
    "manicure",
    "pedicure",
    "facial",
    "waxing",
    "massage",
    "treatment",
    "extensions",
];

/// Medical terminology whose presence in any cell suggests potential PHI.
/// Matched as case-insensitive substrings.
pub const MEDICAL_TERMINOLOGY: &[&str] = &[
    "diagnosis",
    "diagnosed",
    "prescription",
    "prescribed",
    "medication",
    "dosage",
    "symptom",
    "treatment",
    "therapy",
    "surgery",
    "chronic",
    "diabetes",
    "hypertension",
    "asthma",
    "cancer",
    "allergy",
    "allergic",
    "anxiety",
    "depression",
    "icd-10",
    "icd10",
];

/// Fields that are inherently high-risk in a medical context, with the
/// reason reported to the user.
pub fn high_risk_field_reason(field: ContactField) -> Option<&'static str> {
    match field {
        ContactField::Notes => Some("Free-text notes often contain clinical details"),
        ContactField::Diagnosis => Some("Diagnosis codes and descriptions are PHI"),
        ContactField::Medication => Some("Medication lists are PHI"),
        _ => None,
    }
}
