pub mod config;
pub mod vocabulary;

pub use config::BusinessConfig;
pub use vocabulary::{
    MEDICAL_APPOINTMENT_TYPES, MEDICAL_TERMINOLOGY, SALON_SERVICE_TYPES, high_risk_field_reason,
};
