//! Backend contract for the three import endpoints.

use thiserror::Error;

use intake_model::{
    AppointmentBatchRequest, AppointmentBatchResult, ContactBatchRequest, ContactBatchResult,
    ExistingGroup, ReminderBatchRequest, ReminderBatchResult,
};

/// Failure of a whole batch call. Per-item failures travel inside the
/// result types instead.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("server rejected the request: {0}")]
    Rejected(String),
}

/// The three batch endpoints plus the existing-groups lookup.
///
/// Implementations must keep `contactIds` positionally aligned with the
/// submitted contacts, using an empty string for rows that failed.
pub trait ImportBackend {
    fn create_contacts(
        &mut self,
        request: &ContactBatchRequest,
    ) -> Result<ContactBatchResult, BackendError>;

    fn create_appointments(
        &mut self,
        request: &AppointmentBatchRequest,
    ) -> Result<AppointmentBatchResult, BackendError>;

    fn schedule_reminders(
        &mut self,
        request: &ReminderBatchRequest,
    ) -> Result<ReminderBatchResult, BackendError>;

    fn list_groups(&self) -> Result<Vec<ExistingGroup>, BackendError>;
}
