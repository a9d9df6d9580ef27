//! Synonym dictionaries for header matching.
//!
//! All entries are lowercase; headers are normalized before comparison.

use intake_model::ContactField;

pub fn synonyms_for(field: ContactField) -> &'static [&'static str] {
    match field {
        ContactField::Name => &[
            "name",
            "full name",
            "fullname",
            "client",
            "client name",
            "customer",
            "customer name",
            "patient",
            "patient name",
            "contact",
            "contact name",
            "first name",
            "last name",
        ],
        ContactField::Phone => &[
            "phone",
            "phone number",
            "telephone",
            "tel",
            "mobile",
            "cell",
            "cell phone",
            "contact number",
        ],
        ContactField::Email => &["email", "e-mail", "email address", "mail"],
        ContactField::AppointmentDate => &[
            "appointment date",
            "date",
            "visit date",
            "booking date",
            "scheduled date",
            "service date",
            "reservation date",
        ],
        ContactField::AppointmentTime => &[
            "appointment time",
            "time",
            "visit time",
            "booking time",
            "scheduled time",
            "start time",
            "reservation time",
        ],
        ContactField::AppointmentType => &[
            "appointment type",
            "visit type",
            "visit reason",
            "reason",
            "booking type",
        ],
        ContactField::ServiceType => &["service type", "service", "treatment", "style"],
        ContactField::Duration => &[
            "duration",
            "length",
            "minutes",
            "appointment length",
            "session length",
        ],
        ContactField::PartySize => &[
            "party size",
            "party",
            "guests",
            "covers",
            "seats",
            "number of guests",
        ],
        ContactField::Notes => &["notes", "note", "comments", "comment", "remarks", "memo"],
        ContactField::Diagnosis => &["diagnosis", "condition", "icd"],
        ContactField::Medication => &["medication", "medications", "meds", "prescription"],
        ContactField::Group => &["group", "groups", "category", "segment", "tags", "tag"],
    }
}
