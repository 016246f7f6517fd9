use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Validation errors for booking form fields.
///
/// These reproduce what the browser's native input constraints would
/// enforce (`required`, `type=email`, `type=date` with a `min` of
/// today). The delivery layer performs no validation of its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("date is in the past: {0}")]
    DateInPast(String),
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid hardcoded regex"));

/// Validates that a required field is non-empty.
pub fn validate_required(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(())
    }
}

/// Validates an email address shape: local part, `@`, dotted domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validates an ISO calendar date that must not be before `today`.
pub fn validate_date_not_past(date: &str, today: NaiveDate) -> Result<(), ValidationError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
    if parsed < today {
        Err(ValidationError::DateInPast(date.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()
    }

    // --- validate_required ---

    #[test]
    fn required_rejects_empty() {
        assert_eq!(
            validate_required("First name", ""),
            Err(ValidationError::Required("First name"))
        );
    }

    #[test]
    fn required_accepts_any_nonempty_value() {
        assert_eq!(validate_required("First name", "Anu"), Ok(()));
        assert_eq!(validate_required("First name", " "), Ok(()));
    }

    // --- validate_email ---

    #[test]
    fn email_simple() {
        assert_eq!(validate_email("anu@example.com"), Ok(()));
    }

    #[test]
    fn email_with_plus_tag() {
        assert_eq!(validate_email("anu+booking@example.com.np"), Ok(()));
    }

    #[test]
    fn email_empty() {
        assert_eq!(
            validate_email(""),
            Err(ValidationError::InvalidEmail(String::new()))
        );
    }

    #[test]
    fn email_missing_at() {
        assert_eq!(
            validate_email("anu.example.com"),
            Err(ValidationError::InvalidEmail("anu.example.com".to_string()))
        );
    }

    #[test]
    fn email_missing_domain_dot() {
        assert_eq!(
            validate_email("anu@example"),
            Err(ValidationError::InvalidEmail("anu@example".to_string()))
        );
    }

    #[test]
    fn email_with_spaces() {
        assert_eq!(
            validate_email("anu @example.com"),
            Err(ValidationError::InvalidEmail("anu @example.com".to_string()))
        );
    }

    #[quickcheck]
    fn email_local_at_dotted_domain_is_valid(local: String, domain: String) -> bool {
        let clean = |s: &str| {
            s.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        };
        let local = clean(&local);
        let domain = clean(&domain);
        if local.is_empty() || domain.is_empty() {
            return true; // skip degenerate inputs
        }
        validate_email(&format!("{local}@{domain}.com")).is_ok()
    }

    // --- validate_date_not_past ---

    #[test]
    fn date_today_is_accepted() {
        assert_eq!(validate_date_not_past("2025-01-08", today()), Ok(()));
    }

    #[test]
    fn date_future_is_accepted() {
        assert_eq!(validate_date_not_past("2025-01-10", today()), Ok(()));
    }

    #[test]
    fn date_past_is_rejected() {
        assert_eq!(
            validate_date_not_past("2025-01-07", today()),
            Err(ValidationError::DateInPast("2025-01-07".to_string()))
        );
    }

    #[test]
    fn date_malformed_is_rejected() {
        assert_eq!(
            validate_date_not_past("10/01/2025", today()),
            Err(ValidationError::InvalidDate("10/01/2025".to_string()))
        );
    }

    #[test]
    fn date_empty_is_rejected() {
        assert_eq!(
            validate_date_not_past("", today()),
            Err(ValidationError::InvalidDate(String::new()))
        );
    }

    #[test]
    fn date_nonexistent_day_is_rejected() {
        assert_eq!(
            validate_date_not_past("2025-02-30", today()),
            Err(ValidationError::InvalidDate("2025-02-30".to_string()))
        );
    }
}
