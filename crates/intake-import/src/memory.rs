//! In-memory backend for tests and dry runs.

use intake_model::{
    AppointmentBatchRequest, AppointmentBatchResult, AppointmentRecord, ContactBatchRequest,
    ContactBatchResult, ContactRecord, ExistingGroup, ReminderBatchRequest, ReminderBatchResult,
    ReminderRecord, RowError,
};

use crate::backend::{BackendError, ImportBackend};

/// Stores everything it is sent and assigns sequential IDs. Contacts
/// without a name fail individually and get the empty-string placeholder
/// slot, matching the real endpoint's contract.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    next_id: usize,
    pub contacts: Vec<ContactRecord>,
    pub appointments: Vec<AppointmentRecord>,
    pub reminders: Vec<ReminderRecord>,
    pub groups: Vec<ExistingGroup>,
    /// When set, every batch call fails outright with this message.
    pub fail_with: Option<String>,
    /// Batch calls received, per endpoint, in order.
    pub calls: Vec<&'static str>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(groups: Vec<ExistingGroup>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    fn check_transport(&self) -> Result<(), BackendError> {
        match &self.fail_with {
            Some(message) => Err(BackendError::Transport(message.clone())),
            None => Ok(()),
        }
    }

    fn next_contact_id(&mut self) -> String {
        self.next_id += 1;
        format!("c{}", self.next_id)
    }
}

impl ImportBackend for InMemoryBackend {
    fn create_contacts(
        &mut self,
        request: &ContactBatchRequest,
    ) -> Result<ContactBatchResult, BackendError> {
        self.calls.push("contacts");
        self.check_transport()?;
        let mut contact_ids = Vec::with_capacity(request.contacts.len());
        let mut errors = Vec::new();
        let mut created = 0;
        for record in &request.contacts {
            if record.name.trim().is_empty() {
                contact_ids.push(String::new());
                errors.push(RowError {
                    row_number: Some(record.source_row),
                    error: "Contact name is required".to_string(),
                });
                continue;
            }
            contact_ids.push(self.next_contact_id());
            self.contacts.push(record.clone());
            created += 1;
        }
        Ok(ContactBatchResult {
            created,
            contact_ids,
            errors,
        })
    }

    fn create_appointments(
        &mut self,
        request: &AppointmentBatchRequest,
    ) -> Result<AppointmentBatchResult, BackendError> {
        self.calls.push("appointments");
        self.check_transport()?;
        self.appointments.extend(request.appointments.iter().cloned());
        Ok(AppointmentBatchResult {
            created: request.appointments.len(),
            errors: Vec::new(),
        })
    }

    fn schedule_reminders(
        &mut self,
        request: &ReminderBatchRequest,
    ) -> Result<ReminderBatchResult, BackendError> {
        self.calls.push("reminders");
        self.check_transport()?;
        self.reminders.extend(request.reminders.iter().cloned());
        Ok(ReminderBatchResult {
            scheduled: request.reminders.len(),
            errors: Vec::new(),
        })
    }

    fn list_groups(&self) -> Result<Vec<ExistingGroup>, BackendError> {
        Ok(self.groups.clone())
    }
}
