//! Import orchestration: contacts, then appointments, then reminders.
//!
//! Each phase is one batch call against an [`ImportBackend`]. The
//! contact endpoint returns IDs positionally aligned with the submitted
//! records; the later phases rely on that alignment to attach
//! appointments and reminders to the right contacts.

mod backend;
mod memory;
mod orchestrator;
mod plan;

pub use backend::{BackendError, ImportBackend};
pub use memory::InMemoryBackend;
pub use orchestrator::{ImportOptions, ImportPhase, ImportSummary, run_import};
pub use plan::build_contact_records;
