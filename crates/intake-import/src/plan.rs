//! Builds contact records from the mapped CSV and routed group values.

use intake_model::{ContactField, ContactRecord, CsvFile, FieldMapping, GroupAction, GroupValue};

/// One record per data row, in row order. No filtering happens here:
/// rows with warnings are still submitted, and rows failing creation get
/// their placeholder slot from the backend.
pub fn build_contact_records(
    csv: &CsvFile,
    mappings: &[FieldMapping],
    group_values: &[GroupValue],
) -> Vec<ContactRecord> {
    csv.rows
        .iter()
        .enumerate()
        .map(|(index, row)| build_record(row, index + 1, mappings, group_values))
        .collect()
}

fn build_record(
    row: &[String],
    row_number: usize,
    mappings: &[FieldMapping],
    group_values: &[GroupValue],
) -> ContactRecord {
    let value = |field: ContactField| mapped_value(row, mappings, field);

    let mut group_names = Vec::new();
    let mut group_ids = Vec::new();
    for group in group_values {
        if !group.rows.contains(&row_number) {
            continue;
        }
        match group.action {
            GroupAction::Create => group_names.push(group.original_value.clone()),
            GroupAction::Assign => {
                if let Some(id) = &group.target_group_id {
                    group_ids.push(id.clone());
                }
            }
            GroupAction::Skip => {}
        }
    }

    ContactRecord {
        name: value(ContactField::Name).unwrap_or_default(),
        phone: value(ContactField::Phone),
        email: value(ContactField::Email),
        notes: value(ContactField::Notes),
        appointment_date: value(ContactField::AppointmentDate),
        appointment_time: value(ContactField::AppointmentTime),
        // Salon imports map the service column here; the backend treats
        // both as the appointment label.
        appointment_type: value(ContactField::AppointmentType)
            .or_else(|| value(ContactField::ServiceType)),
        duration_minutes: value(ContactField::Duration).and_then(|v| v.trim().parse().ok()),
        party_size: value(ContactField::PartySize).and_then(|v| v.trim().parse().ok()),
        group_names,
        group_ids,
        source_row: row_number,
    }
}

/// First mapped, non-empty value for a canonical field. Diagnosis and
/// medication columns are deliberately never copied into records.
fn mapped_value(row: &[String], mappings: &[FieldMapping], field: ContactField) -> Option<String> {
    mappings
        .iter()
        .position(|m| m.field == Some(field))
        .and_then(|index| row.get(index))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
}
