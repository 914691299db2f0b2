//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Form submissions collect every failure into [`FieldErrors`] so the
//! form can be redisplayed with all messages at once.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Employee names
pub const MAX_NAME_LEN: usize = 50;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Department names
pub const MAX_DEPARTMENT_LEN: usize = 100;

/// Account usernames
pub const MAX_USERNAME_LEN: usize = 64;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} cannot exceed {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate an email address: required, bounded, and `local@domain.tld` shaped.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    if !is_valid_email(value.trim()) {
        return Err(AppError::validation(format!("{field} has an invalid format")));
    }
    Ok(())
}

/// Character classes follow `[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+`
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
    {
        return false;
    }
    let Some((host, tld)) = domain.split_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && tld
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
}

/// Field-level validation messages, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field`
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// Record the outcome of a validation helper
    pub fn check(&mut self, field: &str, result: Result<(), AppError>) {
        if let Err(e) = result {
            self.add(field, e.message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Ann", "Name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "Name", MAX_NAME_LEN).is_err());

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "Name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.message, "Name cannot exceed 50 characters");
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@x.com", "Email").is_ok());
        assert!(validate_email("first.last+tag@mail-host.co.uk", "Email").is_ok());

        assert!(validate_email("", "Email").is_err());
        assert!(validate_email("no-at-sign", "Email").is_err());
        assert!(validate_email("@x.com", "Email").is_err());
        assert!(validate_email("a@nodot", "Email").is_err());
        assert!(validate_email("a@.com", "Email").is_err());
        assert!(validate_email("a b@x.com", "Email").is_err());
    }

    #[test]
    fn test_field_errors_collects_per_field() {
        let mut errors = FieldErrors::new();
        errors.check("name", validate_required_text("", "Name", MAX_NAME_LEN));
        errors.check("email", validate_email("bad", "Email"));
        errors.check("department", validate_required_text("HR", "Department", 10));

        assert!(!errors.is_empty());
        assert_eq!(errors.get("name"), Some(&["Name is required".to_string()][..]));
        assert!(errors.get("email").is_some());
        assert!(errors.get("department").is_none());

        let json = serde_json::to_value(&errors).unwrap();
        assert!(json["name"].is_array());
    }
}
