//! Wire types for the backend batch endpoints.
//!
//! Field names follow the backend's camelCase JSON contract. The
//! `contactIds` list returned by the contact endpoint is strictly
//! positional with the submitted array; rows whose creation failed carry
//! an empty-string placeholder so downstream phases can still zip IDs
//! back to source rows by index.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    /// Reservation headcount, restaurant imports only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i64>,
    /// Names of groups to create and attach.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_names: Vec<String>,
    /// IDs of existing groups to attach.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    /// 1-based CSV data row this record was built from.
    pub source_row: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactBatchRequest {
    pub contacts: Vec<ContactRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBatchResult {
    pub created: usize,
    /// Positionally aligned with the submitted contacts; empty string for
    /// rows that failed.
    pub contact_ids: Vec<String>,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub contact_id: String,
    /// ISO `YYYY-MM-DD` date.
    pub date: String,
    /// `HH:MM` 24-hour time.
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    pub source_row: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentBatchRequest {
    pub appointments: Vec<AppointmentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentBatchResult {
    pub created: usize,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    pub contact_id: String,
    /// Appointment timestamp, ISO `YYYY-MM-DDTHH:MM`.
    pub appointment_at: String,
    /// When to fire the reminder, ISO `YYYY-MM-DDTHH:MM`.
    pub remind_at: String,
    pub lead_minutes: i64,
    pub source_row: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderBatchRequest {
    pub reminders: Vec<ReminderRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderBatchResult {
    pub scheduled: usize,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

/// Per-item failure reported by a batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_number: Option<usize>,
    pub error: String,
}
