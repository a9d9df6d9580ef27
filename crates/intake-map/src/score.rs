//! Fixed-point synonym scoring for column-to-field matching.

use intake_model::ContactField;

use crate::patterns::synonyms_for;

/// Header equals a synonym exactly.
pub const SCORE_EXACT: u8 = 100;
/// Header contains a synonym as a substring.
pub const SCORE_HEADER_CONTAINS: u8 = 85;
/// A synonym contains the header (headers of 2 chars or less excluded to
/// keep "id"-style fragments from matching everything).
pub const SCORE_SYNONYM_CONTAINS: u8 = 70;
/// "appt" abbreviation against an "appointment" synonym.
pub const SCORE_APPT_ABBREVIATION: u8 = 80;

/// Score one normalized header against one synonym. Precedence is fixed:
/// the first matching rule wins.
fn match_score(header: &str, synonym: &str) -> u8 {
    if header == synonym {
        return SCORE_EXACT;
    }
    if header.contains(synonym) {
        return SCORE_HEADER_CONTAINS;
    }
    if header.len() > 2 && synonym.contains(header) {
        return SCORE_SYNONYM_CONTAINS;
    }
    if header.contains("appt") && synonym.contains("appointment") {
        return SCORE_APPT_ABBREVIATION;
    }
    0
}

/// Best synonym score of a normalized (lowercase, trimmed) header
/// against a canonical field.
pub fn synonym_score(header: &str, field: ContactField) -> u8 {
    synonyms_for(field)
        .iter()
        .map(|synonym| match_score(header, synonym))
        .max()
        .unwrap_or(0)
}
