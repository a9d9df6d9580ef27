//! Sequential phase machine for the import run.

use chrono::{NaiveDateTime, Timelike};
use tracing::{info, warn};

use intake_model::{
    AppointmentBatchRequest, AppointmentRecord, ContactBatchRequest, ContactRecord,
    ReminderBatchRequest, ReminderRecord, RowError,
};
use intake_validate::{parse_date, parse_time};

use crate::backend::ImportBackend;

/// Phases in execution order. No backward transitions; `Complete` is
/// reachable from any phase on a fatal batch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    Contacts,
    Appointments,
    Reminders,
    Complete,
}

impl ImportPhase {
    pub fn label(&self) -> &'static str {
        match self {
            ImportPhase::Contacts => "Creating contacts",
            ImportPhase::Appointments => "Scheduling appointments",
            ImportPhase::Reminders => "Scheduling reminders",
            ImportPhase::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Orchestration start time; appointments must be strictly after it.
    pub now: NaiveDateTime,
    /// Minutes before the appointment to fire the reminder.
    pub reminder_lead_minutes: i64,
}

/// Aggregated outcome across all phases. Errors accumulate; a reminders
/// failure never erases a contacts failure.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub contacts_submitted: usize,
    pub contacts_created: usize,
    pub appointments_created: usize,
    pub reminders_scheduled: usize,
    pub errors: Vec<RowError>,
}

/// Run the three phases in order. `progress` is called with each phase
/// and its item count before the phase executes, and once with
/// `Complete` at the end.
pub fn run_import<B: ImportBackend>(
    backend: &mut B,
    contacts: Vec<ContactRecord>,
    options: &ImportOptions,
    mut progress: impl FnMut(ImportPhase, usize),
) -> ImportSummary {
    let mut summary = ImportSummary {
        contacts_submitted: contacts.len(),
        ..ImportSummary::default()
    };

    progress(ImportPhase::Contacts, contacts.len());
    let request = ContactBatchRequest { contacts };
    let contact_result = match backend.create_contacts(&request) {
        Ok(result) => result,
        Err(err) => {
            warn!(%err, "contact batch failed");
            summary.errors.push(RowError {
                row_number: None,
                error: format!("Contact creation failed: {err}"),
            });
            progress(ImportPhase::Complete, 0);
            return summary;
        }
    };
    summary.contacts_created = contact_result.created;
    summary.errors.extend(contact_result.errors);
    info!(created = summary.contacts_created, "contacts phase done");

    let appointments = upcoming_appointments(&request.contacts, &contact_result.contact_ids, options);
    let mut rejected_rows: Vec<usize> = Vec::new();
    if !appointments.is_empty() {
        progress(ImportPhase::Appointments, appointments.len());
        match backend.create_appointments(&AppointmentBatchRequest {
            appointments: appointments.clone(),
        }) {
            Ok(result) => {
                summary.appointments_created = result.created;
                rejected_rows = result.errors.iter().filter_map(|e| e.row_number).collect();
                summary.errors.extend(result.errors);
            }
            Err(err) => {
                warn!(%err, "appointment batch failed");
                summary.errors.push(RowError {
                    row_number: None,
                    error: format!("Appointment creation failed: {err}"),
                });
                progress(ImportPhase::Complete, 0);
                return summary;
            }
        }
        info!(created = summary.appointments_created, "appointments phase done");
    }

    let reminders = reminder_records(&appointments, &rejected_rows, options);
    if !reminders.is_empty() {
        progress(ImportPhase::Reminders, reminders.len());
        match backend.schedule_reminders(&ReminderBatchRequest { reminders }) {
            Ok(result) => {
                summary.reminders_scheduled = result.scheduled;
                summary.errors.extend(result.errors);
            }
            Err(err) => {
                warn!(%err, "reminder batch failed");
                summary.errors.push(RowError {
                    row_number: None,
                    error: format!("Reminder scheduling failed: {err}"),
                });
                progress(ImportPhase::Complete, 0);
                return summary;
            }
        }
        info!(scheduled = summary.reminders_scheduled, "reminders phase done");
    }

    progress(ImportPhase::Complete, 0);
    summary
}

/// Contacts with a parseable, strictly future appointment, zipped
/// positionally with the IDs the contact phase returned. Failed rows
/// carry an empty-string ID and are skipped here.
fn upcoming_appointments(
    contacts: &[ContactRecord],
    contact_ids: &[String],
    options: &ImportOptions,
) -> Vec<AppointmentRecord> {
    let mut appointments = Vec::new();
    for (record, contact_id) in contacts.iter().zip(contact_ids) {
        if contact_id.is_empty() {
            continue;
        }
        let Some(date) = record.appointment_date.as_deref().and_then(parse_date) else {
            continue;
        };
        let Some(time) = record.appointment_time.as_deref().and_then(parse_time) else {
            continue;
        };
        let when = NaiveDateTime::new(date, time);
        if when <= options.now {
            continue;
        }
        appointments.push(AppointmentRecord {
            contact_id: contact_id.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            time: format!("{:02}:{:02}", time.hour(), time.minute()),
            duration_minutes: record.duration_minutes,
            appointment_type: record.appointment_type.clone(),
            source_row: record.source_row,
        });
    }
    appointments
}

/// Reminders for the appointments the batch actually created. The
/// endpoint returns no ID list, so per-item rejections are matched back
/// by source row.
fn reminder_records(
    appointments: &[AppointmentRecord],
    rejected_rows: &[usize],
    options: &ImportOptions,
) -> Vec<ReminderRecord> {
    appointments
        .iter()
        .filter(|appointment| !rejected_rows.contains(&appointment.source_row))
        .filter_map(|appointment| {
            let date = parse_date(&appointment.date)?;
            let time = parse_time(&appointment.time)?;
            let at = NaiveDateTime::new(date, time);
            let remind_at = at - chrono::Duration::minutes(options.reminder_lead_minutes);
            Some(ReminderRecord {
                contact_id: appointment.contact_id.clone(),
                appointment_at: at.format("%Y-%m-%dT%H:%M").to_string(),
                remind_at: remind_at.format("%Y-%m-%dT%H:%M").to_string(),
                lead_minutes: options.reminder_lead_minutes,
                source_row: appointment.source_row,
            })
        })
        .collect()
}
