use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical contact-schema attribute that CSV columns are mapped onto.
///
/// The wire names use the backend's camelCase spelling so mappings can be
/// exchanged with the admin UI unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContactField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "appointmentDate")]
    AppointmentDate,
    #[serde(rename = "appointmentTime")]
    AppointmentTime,
    #[serde(rename = "appointmentType")]
    AppointmentType,
    #[serde(rename = "serviceType")]
    ServiceType,
    #[serde(rename = "duration")]
    Duration,
    #[serde(rename = "partySize")]
    PartySize,
    #[serde(rename = "notes")]
    Notes,
    #[serde(rename = "diagnosis")]
    Diagnosis,
    #[serde(rename = "medication")]
    Medication,
    #[serde(rename = "group")]
    Group,
}

impl ContactField {
    pub const ALL: [ContactField; 13] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::AppointmentDate,
        ContactField::AppointmentTime,
        ContactField::AppointmentType,
        ContactField::ServiceType,
        ContactField::Duration,
        ContactField::PartySize,
        ContactField::Notes,
        ContactField::Diagnosis,
        ContactField::Medication,
        ContactField::Group,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::AppointmentDate => "appointmentDate",
            ContactField::AppointmentTime => "appointmentTime",
            ContactField::AppointmentType => "appointmentType",
            ContactField::ServiceType => "serviceType",
            ContactField::Duration => "duration",
            ContactField::PartySize => "partySize",
            ContactField::Notes => "notes",
            ContactField::Diagnosis => "diagnosis",
            ContactField::Medication => "medication",
            ContactField::Group => "group",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone",
            ContactField::Email => "Email",
            ContactField::AppointmentDate => "Appointment Date",
            ContactField::AppointmentTime => "Appointment Time",
            ContactField::AppointmentType => "Appointment Type",
            ContactField::ServiceType => "Service Type",
            ContactField::Duration => "Duration (minutes)",
            ContactField::PartySize => "Party Size",
            ContactField::Notes => "Notes",
            ContactField::Diagnosis => "Diagnosis",
            ContactField::Medication => "Medication",
            ContactField::Group => "Group",
        }
    }

    /// Data type expected for values mapped to this field. Drives the
    /// sample sniff in the mapper and the format checks in the validator.
    pub fn expected_type(&self) -> FieldType {
        match self {
            ContactField::Phone => FieldType::Phone,
            ContactField::Email => FieldType::Email,
            ContactField::AppointmentDate => FieldType::Date,
            ContactField::AppointmentTime => FieldType::Time,
            ContactField::Duration | ContactField::PartySize => FieldType::Number,
            _ => FieldType::Text,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        ContactField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| format!("Unknown contact field: {normalized}"))
    }
}

/// Sniffed data type of a CSV column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Phone,
    Email,
    Date,
    Time,
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Phone => "phone",
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Number => "number",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
