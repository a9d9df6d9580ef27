//! Lightweight data-type sniffs over sample values.
//!
//! These are heuristics that nudge mapping confidence; the validator owns
//! the authoritative format checks.

use intake_model::FieldType;

/// Check all samples against the expected type. `None` when the type has
/// no sniff rule (plain text) or there is nothing to check; otherwise
/// every sample must pass.
pub fn sniff_samples(expected: FieldType, samples: &[String]) -> Option<bool> {
    if samples.is_empty() {
        return None;
    }
    let check: fn(&str) -> bool = match expected {
        FieldType::Text => return None,
        FieldType::Phone => looks_like_phone,
        FieldType::Email => looks_like_email,
        FieldType::Date => looks_like_date,
        FieldType::Time => looks_like_time,
        FieldType::Number => looks_like_number,
    };
    Some(samples.iter().all(|sample| check(sample)))
}

fn looks_like_phone(value: &str) -> bool {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned.chars().filter(char::is_ascii_digit).count();
    digits >= 7
        && cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.'))
}

fn looks_like_email(value: &str) -> bool {
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !trimmed.contains(char::is_whitespace)
}

fn looks_like_date(value: &str) -> bool {
    let trimmed = value.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    digits >= 4 && (trimmed.contains('-') || trimmed.contains('/'))
}

fn looks_like_time(value: &str) -> bool {
    let trimmed = value.trim().to_lowercase();
    let core = trimmed
        .trim_end_matches("am")
        .trim_end_matches("pm")
        .trim();
    let Some((hours, minutes)) = core.split_once(':') else {
        return false;
    };
    hours.len() <= 2
        && minutes.len() == 2
        && hours.chars().all(|c| c.is_ascii_digit())
        && minutes.chars().all(|c| c.is_ascii_digit())
}

fn looks_like_number(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_has_no_sniff_rule() {
        assert_eq!(
            sniff_samples(FieldType::Text, &["anything".to_string()]),
            None
        );
    }

    #[test]
    fn phone_sniff_requires_every_sample_to_pass() {
        let samples = vec!["555-1234567".to_string(), "abc".to_string()];
        assert_eq!(sniff_samples(FieldType::Phone, &samples), Some(false));
        let good = vec!["555-1234567".to_string(), "(555) 987 6543".to_string()];
        assert_eq!(sniff_samples(FieldType::Phone, &good), Some(true));
    }

    #[test]
    fn time_sniff_accepts_12h_and_24h() {
        assert!(looks_like_time("14:30"));
        assert!(looks_like_time("2:30 PM"));
        assert!(!looks_like_time("230"));
    }

    #[test]
    fn date_sniff_accepts_common_shapes() {
        assert!(looks_like_date("2030-04-01"));
        assert!(looks_like_date("4/1/2030"));
        assert!(!looks_like_date("tomorrow"));
    }
}
