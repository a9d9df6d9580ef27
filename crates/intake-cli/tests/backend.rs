//! JSON export backend behavior.

use intake_cli::backend::JsonExportBackend;
use intake_import::ImportBackend;
use intake_model::{ContactBatchRequest, ContactRecord};

fn contact(name: &str, row: usize) -> ContactRecord {
    ContactRecord {
        name: name.to_string(),
        source_row: row,
        ..ContactRecord::default()
    }
}

#[test]
fn export_assigns_positional_ids_with_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = JsonExportBackend::new(dir.path());
    let request = ContactBatchRequest {
        contacts: vec![contact("Jane", 1), contact("", 2), contact("Ada", 3)],
    };
    let result = backend.create_contacts(&request).unwrap();

    assert_eq!(result.created, 2);
    assert_eq!(result.contact_ids, vec!["c1", "", "c2"]);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row_number, Some(2));

    let exported = dir.path().join("contacts.json");
    assert!(exported.exists());
    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&exported).unwrap()).unwrap();
    assert_eq!(json["contacts"][0]["name"], "Jane");
    assert_eq!(json["contacts"][2]["sourceRow"], 3);
}

#[test]
fn unwritable_directory_is_a_transport_error() {
    let mut backend = JsonExportBackend::new(std::path::Path::new(
        "/proc/definitely/not/writable",
    ));
    let request = ContactBatchRequest {
        contacts: vec![contact("Jane", 1)],
    };
    assert!(backend.create_contacts(&request).is_err());
}
