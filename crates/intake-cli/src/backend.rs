//! JSON-exporting backend for offline imports.
//!
//! Stands in for the admin panel's batch endpoints: contacts,
//! appointments, and reminders are written as JSON files with locally
//! assigned IDs, honoring the same positional `contactIds` contract the
//! real endpoints use.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use intake_import::{BackendError, ImportBackend};
use intake_model::{
    AppointmentBatchRequest, AppointmentBatchResult, ContactBatchRequest, ContactBatchResult,
    ExistingGroup, ReminderBatchRequest, ReminderBatchResult, RowError,
};

pub struct JsonExportBackend {
    output_dir: PathBuf,
    next_id: usize,
    /// Files written so far, for the completion summary.
    pub written: Vec<PathBuf>,
}

impl JsonExportBackend {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            next_id: 0,
            written: Vec::new(),
        }
    }

    fn write_json<T: serde::Serialize>(&mut self, name: &str, value: &T) -> Result<(), BackendError> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| BackendError::Transport(format!("create {}: {e}", self.output_dir.display())))?;
        let path = self.output_dir.join(name);
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| BackendError::Rejected(format!("serialize {name}: {e}")))?;
        fs::write(&path, json)
            .map_err(|e| BackendError::Transport(format!("write {}: {e}", path.display())))?;
        info!(path = %path.display(), "export written");
        self.written.push(path);
        Ok(())
    }
}

impl ImportBackend for JsonExportBackend {
    fn create_contacts(
        &mut self,
        request: &ContactBatchRequest,
    ) -> Result<ContactBatchResult, BackendError> {
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
            self.next_id += 1;
            contact_ids.push(format!("c{}", self.next_id));
            created += 1;
        }
        self.write_json("contacts.json", request)?;
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
        self.write_json("appointments.json", request)?;
        Ok(AppointmentBatchResult {
            created: request.appointments.len(),
            errors: Vec::new(),
        })
    }

    fn schedule_reminders(
        &mut self,
        request: &ReminderBatchRequest,
    ) -> Result<ReminderBatchResult, BackendError> {
        self.write_json("reminders.json", request)?;
        Ok(ReminderBatchResult {
            scheduled: request.reminders.len(),
            errors: Vec::new(),
        })
    }

    fn list_groups(&self) -> Result<Vec<ExistingGroup>, BackendError> {
        // Offline exports have no pre-existing groups to assign into.
        Ok(Vec::new())
    }
}
