//! Format checks for typed fields, independent of business type.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use intake_model::{ContactField, ValidationFinding};

/// Accepted appointment date spellings, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y", "%d-%m-%Y"];

/// Duration bounds in minutes.
const MIN_DURATION: i64 = 15;
const MAX_DURATION: i64 = 480;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9().-]{7,20}$").expect("phone regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static TIME_24H_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?\d|2[0-3]):[0-5]\d$").expect("24h time regex"));
static TIME_12H_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(1[0-2]|0?[1-9]):[0-5]\d\s*[ap]m$").expect("12h time regex"));

/// Parse an appointment date in any accepted spelling.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parse an appointment time, 24-hour or 12-hour with AM/PM.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if TIME_24H_RE.is_match(trimmed) {
        return NaiveTime::parse_from_str(trimmed, "%H:%M").ok();
    }
    if TIME_12H_RE.is_match(trimmed) {
        let upper = trimmed.to_uppercase().replace(' ', "");
        return NaiveTime::parse_from_str(&upper, "%I:%M%p").ok();
    }
    None
}

/// Format findings for one non-empty cell. Cumulative with the other
/// check categories; `today` anchors the past-date warning.
pub fn check(
    field: ContactField,
    value: &str,
    row: usize,
    column: &str,
    today: NaiveDate,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    match field {
        ContactField::Phone => {
            let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            let digits = stripped.chars().filter(char::is_ascii_digit).count();
            if digits < 7 || !PHONE_RE.is_match(&stripped) {
                findings.push(
                    ValidationFinding::error(row, column, value, "Invalid phone number")
                        .with_suggestion("Use at least 7 digits with optional +, -, () separators"),
                );
            }
        }
        ContactField::Email => {
            if !EMAIL_RE.is_match(value.trim()) {
                findings.push(
                    ValidationFinding::error(row, column, value, "Invalid email address")
                        .with_suggestion("Expected name@domain.tld"),
                );
            }
        }
        ContactField::AppointmentDate => match parse_date(value) {
            Some(date) if date < today => {
                findings.push(ValidationFinding::warning(
                    row,
                    column,
                    value,
                    "Appointment date is in the past",
                ));
            }
            Some(_) => {}
            None => {
                findings.push(
                    ValidationFinding::error(row, column, value, "Unrecognized date")
                        .with_suggestion("Use YYYY-MM-DD or MM/DD/YYYY"),
                );
            }
        },
        ContactField::AppointmentTime => {
            if parse_time(value).is_none() {
                findings.push(
                    ValidationFinding::error(row, column, value, "Unrecognized time")
                        .with_suggestion("Use HH:MM (24h) or H:MM AM/PM"),
                );
            }
        }
        ContactField::Duration => match value.trim().parse::<i64>() {
            Ok(minutes) if (MIN_DURATION..=MAX_DURATION).contains(&minutes) => {}
            _ => {
                findings.push(ValidationFinding::warning(
                    row,
                    column,
                    value,
                    format!("Duration should be {MIN_DURATION}-{MAX_DURATION} minutes"),
                ));
            }
        },
        _ => {}
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn accepted_date_spellings_parse() {
        for value in ["2030-04-01", "2030/04/01", "04/01/2030", "4/1/30", "01-04-2030"] {
            assert!(parse_date(value).is_some(), "{value} should parse");
        }
        assert!(parse_date("April first").is_none());
    }

    #[test]
    fn time_parses_both_clock_styles() {
        assert_eq!(
            parse_time("14:30"),
            NaiveTime::from_hms_opt(14, 30, 0)
        );
        assert_eq!(
            parse_time("2:30 PM"),
            NaiveTime::from_hms_opt(14, 30, 0)
        );
        assert!(parse_time("25:00").is_none());
        assert!(parse_time("230").is_none());
    }

    #[test]
    fn past_date_warns_but_does_not_error() {
        let findings = check(
            ContactField::AppointmentDate,
            "2020-01-01",
            1,
            "Date",
            today(),
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].severity,
            intake_model::Severity::Warning
        );
    }

    #[test]
    fn bad_phone_is_blocking() {
        let findings = check(ContactField::Phone, "call me", 2, "Phone", today());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, intake_model::Severity::Error);
        assert!(findings[0].suggestion.is_some());
    }

    #[test]
    fn duration_out_of_range_warns() {
        assert!(check(ContactField::Duration, "60", 1, "Length", today()).is_empty());
        let findings = check(ContactField::Duration, "600", 1, "Length", today());
        assert_eq!(findings[0].severity, intake_model::Severity::Warning);
    }
}
