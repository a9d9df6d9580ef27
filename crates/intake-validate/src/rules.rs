//! Business-specific semantic rules, cumulative with the format checks.

use intake_model::{BusinessType, ContactField, ValidationFinding};
use intake_registry::{BusinessConfig, MEDICAL_APPOINTMENT_TYPES, SALON_SERVICE_TYPES};

/// Party size bounds for restaurant reservations.
const MIN_PARTY: i64 = 1;
const MAX_PARTY: i64 = 20;

pub fn check(
    config: &BusinessConfig,
    field: ContactField,
    value: &str,
    row: usize,
    column: &str,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    match config.business_type {
        BusinessType::Medical => {
            if config.is_restricted(field) {
                findings.push(ValidationFinding::warning(
                    row,
                    column,
                    value,
                    format!("{} may contain protected health information", field.label()),
                ));
            }
            if field == ContactField::AppointmentType
                && !contains_vocabulary(value, MEDICAL_APPOINTMENT_TYPES)
            {
                findings.push(
                    ValidationFinding::warning(row, column, value, "Unrecognized appointment type")
                        .with_suggestion("Examples: consultation, follow-up, checkup"),
                );
            }
        }
        BusinessType::Salon => {
            if field == ContactField::ServiceType
                && !contains_vocabulary(value, SALON_SERVICE_TYPES)
            {
                findings.push(
                    ValidationFinding::warning(row, column, value, "Unrecognized service type")
                        .with_suggestion("Examples: haircut, color, manicure"),
                );
            }
        }
        BusinessType::Restaurant => {
            if field == ContactField::PartySize {
                match value.trim().parse::<i64>() {
                    Ok(size) if (MIN_PARTY..=MAX_PARTY).contains(&size) => {}
                    _ => {
                        findings.push(
                            ValidationFinding::error(
                                row,
                                column,
                                value,
                                format!("Party size must be a whole number {MIN_PARTY}-{MAX_PARTY}"),
                            ),
                        );
                    }
                }
            }
        }
        BusinessType::Consultant | BusinessType::General => {}
    }
    findings
}

fn contains_vocabulary(value: &str, vocabulary: &[&str]) -> bool {
    let lowered = value.to_lowercase();
    vocabulary.iter().any(|word| lowered.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::Severity;

    #[test]
    fn restaurant_party_size_bounds() {
        let config = BusinessConfig::for_type(BusinessType::Restaurant);
        assert!(check(&config, ContactField::PartySize, "4", 1, "Guests").is_empty());
        for bad in ["0", "21", "several"] {
            let findings = check(&config, ContactField::PartySize, bad, 1, "Guests");
            assert_eq!(findings.len(), 1, "{bad} should be rejected");
            assert_eq!(findings[0].severity, Severity::Error);
        }
    }

    #[test]
    fn unknown_appointment_type_warns_for_medical() {
        let config = BusinessConfig::for_type(BusinessType::Medical);
        assert!(check(&config, ContactField::AppointmentType, "Annual checkup", 1, "Type").is_empty());
        let findings = check(&config, ContactField::AppointmentType, "Stargazing", 1, "Type");
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn salon_vocabulary_only_applies_to_service_type() {
        let config = BusinessConfig::for_type(BusinessType::Salon);
        assert!(check(&config, ContactField::Notes, "anything", 1, "Notes").is_empty());
        let findings = check(&config, ContactField::ServiceType, "Oil change", 1, "Service");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn general_business_has_no_extra_rules() {
        let config = BusinessConfig::for_type(BusinessType::General);
        assert!(check(&config, ContactField::PartySize, "99", 1, "Guests").is_empty());
    }
}
