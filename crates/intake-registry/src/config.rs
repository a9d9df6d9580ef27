//! Static field requirements per business vertical.
//!
//! Supplied as configuration to the mapper and validator; never persisted
//! or mutated by the pipeline.

use serde::Serialize;

use intake_model::{BusinessType, ContactField};

/// Field requirements and restrictions for one business type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessConfig {
    pub business_type: BusinessType,
    pub required_fields: Vec<ContactField>,
    pub optional_fields: Vec<ContactField>,
    /// Fields that carry compliance risk for this vertical and trigger a
    /// warning when populated.
    pub restricted_fields: Vec<ContactField>,
}

impl BusinessConfig {
    pub fn for_type(business: BusinessType) -> Self {
        match business {
            BusinessType::Medical => Self {
                business_type: business,
                required_fields: vec![
                    ContactField::Name,
                    ContactField::Phone,
                    ContactField::AppointmentDate,
                    ContactField::AppointmentTime,
                ],
                optional_fields: vec![
                    ContactField::Email,
                    ContactField::AppointmentType,
                    ContactField::Duration,
                    ContactField::Notes,
                    ContactField::Group,
                ],
                restricted_fields: vec![
                    ContactField::Notes,
                    ContactField::Diagnosis,
                    ContactField::Medication,
                ],
            },
            BusinessType::Salon => Self {
                business_type: business,
                required_fields: vec![ContactField::Name, ContactField::Phone],
                optional_fields: vec![
                    ContactField::Email,
                    ContactField::AppointmentDate,
                    ContactField::AppointmentTime,
                    ContactField::ServiceType,
                    ContactField::Duration,
                    ContactField::Notes,
                    ContactField::Group,
                ],
                restricted_fields: Vec::new(),
            },
            BusinessType::Restaurant => Self {
                business_type: business,
                required_fields: vec![
                    ContactField::Name,
                    ContactField::Phone,
                    ContactField::PartySize,
                ],
                optional_fields: vec![
                    ContactField::Email,
                    ContactField::AppointmentDate,
                    ContactField::AppointmentTime,
                    ContactField::Notes,
                    ContactField::Group,
                ],
                restricted_fields: Vec::new(),
            },
            BusinessType::Consultant => Self {
                business_type: business,
                required_fields: vec![ContactField::Name, ContactField::Email],
                optional_fields: vec![
                    ContactField::Phone,
                    ContactField::AppointmentDate,
                    ContactField::AppointmentTime,
                    ContactField::Duration,
                    ContactField::Notes,
                    ContactField::Group,
                ],
                restricted_fields: Vec::new(),
            },
            BusinessType::General => Self {
                business_type: business,
                required_fields: vec![ContactField::Name],
                optional_fields: vec![
                    ContactField::Phone,
                    ContactField::Email,
                    ContactField::AppointmentDate,
                    ContactField::AppointmentTime,
                    ContactField::Notes,
                    ContactField::Group,
                ],
                restricted_fields: Vec::new(),
            },
        }
    }

    pub fn is_required(&self, field: ContactField) -> bool {
        self.required_fields.contains(&field)
    }

    pub fn is_restricted(&self, field: ContactField) -> bool {
        self.restricted_fields.contains(&field)
    }

    /// Required fields first, then optional, in declaration order.
    pub fn known_fields(&self) -> Vec<ContactField> {
        let mut fields = self.required_fields.clone();
        for field in &self.optional_fields {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_business_type_requires_a_name() {
        for business in BusinessType::ALL {
            let config = BusinessConfig::for_type(business);
            assert!(
                config.is_required(ContactField::Name),
                "{business} should require name"
            );
        }
    }

    #[test]
    fn medical_restricts_clinical_fields() {
        let config = BusinessConfig::for_type(BusinessType::Medical);
        assert!(config.is_restricted(ContactField::Notes));
        assert!(config.is_restricted(ContactField::Diagnosis));
        assert!(!config.is_restricted(ContactField::Phone));
    }

    #[test]
    fn restaurant_requires_party_size() {
        let config = BusinessConfig::for_type(BusinessType::Restaurant);
        assert!(config.is_required(ContactField::PartySize));
    }
}
