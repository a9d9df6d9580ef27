//! Row validation over mapped CSV columns.
//!
//! Produces [`intake_model::ValidationFinding`]s keyed by row and column.
//! The full report is recomputed on every run; callers discard the old
//! report whenever mappings, business type, or the file change.

mod engine;
mod formats;
mod phi;
mod rules;

pub use engine::{validate_row, validate_rows};
pub use formats::{parse_date, parse_time};
