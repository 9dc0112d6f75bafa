//! Request body validation and sanitization for the login endpoint.
//!
//! The body is inspected as a raw [`serde_json::Value`] rather than a typed
//! struct so that every rule can run and report independently.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::model::{SanitizedCredentials, ValidationError};

/// Minimum password length, counted in UTF-16 code units.
pub const PASSWORD_MIN_LEN: usize = 6;

pub const GENERAL_FIELD: &str = "general";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

const INVALID_BODY: &str = "Invalid request body";
const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Please provide a valid email address";
const PASSWORD_REQUIRED: &str = "Password is required";
const PASSWORD_NOT_STRING: &str = "Password must be a string";

/// Return true if `email` has the loose `local@domain.tld` shape.
///
/// No RFC compliance is attempted; `a@b..c` is accepted.
pub fn is_valid_email(email: &str) -> bool {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
    RE.is_match(email)
}

/// Collect every rule violation in `input`. An empty list means the body is valid.
pub fn validate_login_input(input: &Value) -> Vec<ValidationError> {
    let Some(body) = input.as_object() else {
        return vec![ValidationError::new(GENERAL_FIELD, INVALID_BODY)];
    };

    let mut errors = Vec::new();
    if let Some(error) = check_email(body) {
        errors.push(error);
    }
    if let Some(error) = check_password(body) {
        errors.push(error);
    }
    errors
}

fn check_email(body: &Map<String, Value>) -> Option<ValidationError> {
    match field(body, EMAIL_FIELD) {
        None => Some(ValidationError::new(EMAIL_FIELD, EMAIL_REQUIRED)),
        Some(Value::String(email)) if is_valid_email(email) => None,
        Some(_) => Some(ValidationError::new(EMAIL_FIELD, EMAIL_INVALID)),
    }
}

fn check_password(body: &Map<String, Value>) -> Option<ValidationError> {
    match field(body, PASSWORD_FIELD) {
        None => Some(ValidationError::new(PASSWORD_FIELD, PASSWORD_REQUIRED)),
        Some(Value::String(password)) if utf16_len(password) < PASSWORD_MIN_LEN => {
            Some(ValidationError {
                field: PASSWORD_FIELD.to_string(),
                message: format!("Password must be at least {PASSWORD_MIN_LEN} characters long"),
            })
        }
        Some(Value::String(_)) => None,
        Some(_) => Some(ValidationError::new(PASSWORD_FIELD, PASSWORD_NOT_STRING)),
    }
}

// Present means not absent, not null and not the empty string.
fn field<'a>(body: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    match body.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Normalise a body that already passed [`validate_login_input`].
///
/// Missing or non-string fields become empty strings instead of failing.
pub fn sanitize_credentials(input: &Value) -> SanitizedCredentials {
    let text = |name: &str| {
        input
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    SanitizedCredentials {
        email: text(EMAIL_FIELD).trim().to_lowercase(),
        password: text(PASSWORD_FIELD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        let errors = validate_login_input(&json!({
            "email": "test@example.com",
            "password": "password123"
        }));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_non_object_bodies_yield_single_general_error() {
        for body in [json!(null), json!([]), json!("text"), json!(42), json!(true)] {
            let errors = validate_login_input(&body);
            assert_eq!(errors.len(), 1, "body {body} should give one error");
            assert_eq!(errors[0].field, GENERAL_FIELD);
            assert_eq!(errors[0].message, "Invalid request body");
        }
    }

    #[test]
    fn test_empty_object_reports_both_fields() {
        let errors = validate_login_input(&json!({}));
        assert_eq!(fields(&errors), vec!["email", "password"]);
        assert_eq!(errors[0].message, "Email is required");
        assert_eq!(errors[1].message, "Password is required");
    }

    #[test]
    fn test_missing_email_always_reported() {
        let bodies = [
            json!({ "password": "password123" }),
            json!({ "email": null, "password": "password123" }),
            json!({ "email": "", "password": "short" }),
        ];
        for body in &bodies {
            let errors = validate_login_input(body);
            assert!(fields(&errors).contains(&"email"), "body {body}");
        }
    }

    #[test]
    fn test_invalid_email_formats() {
        for email in ["plainaddress", "no@tld", "@example.com", "a b@example.com", " test@example.com"] {
            let errors = validate_login_input(&json!({ "email": email, "password": "password123" }));
            assert_eq!(errors, vec![ValidationError::new("email", "Please provide a valid email address")], "email {email:?}");
        }
    }

    #[test]
    fn test_non_string_email_is_invalid_format() {
        let errors = validate_login_input(&json!({ "email": 12, "password": "password123" }));
        assert_eq!(errors[0].message, "Please provide a valid email address");
    }

    #[test]
    fn test_permissive_email_pattern_is_preserved() {
        assert!(is_valid_email("a@b..com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn test_password_length_boundary() {
        let short = validate_login_input(&json!({ "email": "test@example.com", "password": "12345" }));
        assert_eq!(fields(&short), vec!["password"]);
        assert_eq!(short[0].message, "Password must be at least 6 characters long");

        let exact = validate_login_input(&json!({ "email": "test@example.com", "password": "123456" }));
        assert!(exact.is_empty());
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Each emoji is two UTF-16 code units, so three of them reach six.
        let errors = validate_login_input(&json!({ "email": "test@example.com", "password": "😀😀😀" }));
        assert!(errors.is_empty());

        let errors = validate_login_input(&json!({ "email": "test@example.com", "password": "ééééé" }));
        assert_eq!(fields(&errors), vec!["password"]);
    }

    #[test]
    fn test_non_string_password() {
        let errors = validate_login_input(&json!({ "email": "test@example.com", "password": 1234567 }));
        assert_eq!(errors, vec![ValidationError::new("password", "Password must be a string")]);
    }

    #[test]
    fn test_errors_collected_without_short_circuit() {
        let errors = validate_login_input(&json!({ "email": "bad", "password": "123" }));
        assert_eq!(fields(&errors), vec!["email", "password"]);
    }

    #[test]
    fn test_sanitize_trims_and_lowercases_email() {
        let creds = sanitize_credentials(&json!({ "email": "  Test@Example.COM ", "password": " PassWord " }));
        assert_eq!(creds.email, "test@example.com");
        assert_eq!(creds.password, " PassWord ");
    }

    #[test]
    fn test_sanitize_missing_fields_become_empty() {
        let creds = sanitize_credentials(&json!({}));
        assert_eq!(creds.email, "");
        assert_eq!(creds.password, "");

        let creds = sanitize_credentials(&json!(null));
        assert_eq!(creds, SanitizedCredentials { email: String::new(), password: String::new() });
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for email in ["Test@Example.com", "  MIXED@case.ORG  ", "already@lower.io"] {
            let once = sanitize_credentials(&json!({ "email": email, "password": "x" }));
            let twice = sanitize_credentials(&json!({ "email": once.email, "password": once.password }));
            assert_eq!(once, twice);
        }
    }
}
