//! Registration input checks
//!
//! Pure predicates over already-trimmed strings, plus the ordered
//! validation pass used by registration.

use regex::Regex;
use shared::error::{AppError, ErrorCode};
use shared::models::MemberCreate;
use std::sync::LazyLock;

/// `mopas` + a number >= 500 without leading zeros + `J`
static GROUP_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^mopas([5-9][0-9]{2,}|[1-9][0-9]{3,})J$").expect("group code regex")
});

/// `local@domain.tld`: one `@`, at least one `.` after it, no empty parts
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email regex"));

pub fn is_valid_group_code(value: &str) -> bool {
    GROUP_CODE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check a normalized registration form. The first failing rule wins:
/// group code, then email, then the required text fields.
pub fn validate_registration(form: &MemberCreate) -> Result<(), AppError> {
    if !is_valid_group_code(&form.group_code) {
        return Err(AppError::new(ErrorCode::InvalidGroupCode));
    }
    if !is_valid_email(&form.email) {
        return Err(AppError::new(ErrorCode::InvalidEmail));
    }
    for (field, value) in [
        ("first_name", &form.first_name),
        ("last_name", &form.last_name),
        ("contact", &form.contact),
    ] {
        if value.is_empty() {
            return Err(AppError::required_field(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_code_threshold() {
        assert!(!is_valid_group_code("mopas499J"));
        assert!(is_valid_group_code("mopas500J"));
        assert!(is_valid_group_code("mopas532J"));
        assert!(is_valid_group_code("mopas999J"));
        assert!(is_valid_group_code("mopas1000J"));
        assert!(is_valid_group_code("mopas5000J"));
        assert!(is_valid_group_code("mopas123456J"));
    }

    #[test]
    fn test_group_code_shape() {
        assert!(!is_valid_group_code("mopas50J"));
        assert!(!is_valid_group_code("mopas0500J"));
        assert!(!is_valid_group_code("mopasJ"));
        assert!(!is_valid_group_code("mopas600j"));
        assert!(!is_valid_group_code("MOPAS600J"));
        assert!(!is_valid_group_code("mopas600"));
        assert!(!is_valid_group_code("xmopas600J"));
        assert!(!is_valid_group_code("mopas600Jx"));
        assert!(!is_valid_group_code("mopas 600J"));
        assert!(!is_valid_group_code(""));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(""));
    }

    fn valid_form() -> MemberCreate {
        MemberCreate {
            first_name: "Ada".into(),
            second_name: None,
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            group_code: "mopas532J".into(),
            contact: "0700000000".into(),
        }
    }

    #[test]
    fn test_validate_registration_ok() {
        assert!(validate_registration(&valid_form()).is_ok());
    }

    #[test]
    fn test_group_code_checked_before_email() {
        let form = MemberCreate {
            email: "not-an-email".into(),
            group_code: "mopas1J".into(),
            ..valid_form()
        };
        let err = validate_registration(&form).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidGroupCode);
    }

    #[test]
    fn test_email_checked_before_required_fields() {
        let form = MemberCreate {
            first_name: String::new(),
            email: "a@b".into(),
            ..valid_form()
        };
        let err = validate_registration(&form).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEmail);
    }

    #[test]
    fn test_missing_required_field() {
        let form = MemberCreate {
            contact: String::new(),
            ..valid_form()
        };
        let err = validate_registration(&form).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(
            err.details.as_ref().unwrap().get("field").unwrap(),
            "contact"
        );
    }
}
