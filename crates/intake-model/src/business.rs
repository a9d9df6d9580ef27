use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business vertical that parameterizes required fields, vocabulary, and
/// validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Medical,
    Salon,
    Restaurant,
    Consultant,
    General,
}

impl BusinessType {
    pub const ALL: [BusinessType; 5] = [
        BusinessType::Medical,
        BusinessType::Salon,
        BusinessType::Restaurant,
        BusinessType::Consultant,
        BusinessType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Medical => "medical",
            BusinessType::Salon => "salon",
            BusinessType::Restaurant => "restaurant",
            BusinessType::Consultant => "consultant",
            BusinessType::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::Medical => "Medical Practice",
            BusinessType::Salon => "Salon & Spa",
            BusinessType::Restaurant => "Restaurant",
            BusinessType::Consultant => "Consulting",
            BusinessType::General => "General Business",
        }
    }

    /// True if HIPAA/PHI detection applies to this vertical.
    pub fn is_phi_regulated(&self) -> bool {
        matches!(self, BusinessType::Medical)
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BusinessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "medical" => Ok(BusinessType::Medical),
            "salon" => Ok(BusinessType::Salon),
            "restaurant" => Ok(BusinessType::Restaurant),
            "consultant" | "consulting" => Ok(BusinessType::Consultant),
            "general" => Ok(BusinessType::General),
            other => Err(format!("Unknown business type: {other}")),
        }
    }
}
