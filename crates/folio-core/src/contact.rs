//! Contact form wire types and validation
//!
//! Shared by the `POST /api/contact` handler and `SiteClient`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MSG_REQUIRED: &str = "Name, email, and message are required";
pub const MSG_INVALID_EMAIL: &str = "Please provide a valid email address";
pub const MSG_THANKS: &str = "Thank you for your message! I'll get back to you soon.";

/// `local@domain.tld` shape, no whitespace
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Body of every `/api/*` JSON response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    pub message: String,
}

impl ContactReply {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("{}", MSG_REQUIRED)]
    MissingFields,
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject,
            message: message.into(),
        }
    }

    /// Server-side checks: name, email and message present, email well-formed.
    /// Subject is optional on the wire.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name() {
        let submission = ContactSubmission::new("", "a@b.com", None, "hi");
        assert_eq!(submission.validate(), Err(ContactError::MissingFields));
        assert!(ContactError::MissingFields.to_string().contains("required"));
    }

    #[test]
    fn test_invalid_email() {
        let submission = ContactSubmission::new("A", "not-an-email", None, "hi");
        assert_eq!(submission.validate(), Err(ContactError::InvalidEmail));
        assert!(ContactError::InvalidEmail.to_string().contains("valid email"));
    }

    #[test]
    fn test_subject_optional() {
        let submission = ContactSubmission::new("A", "a@b.com", None, "hi");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("alex.morgan@email.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
        assert!(!is_valid_email("a@@c.com"));
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"email":"a@b.com","message":"hi"}"#).unwrap();
        assert_eq!(submission.name, "");
        assert_eq!(submission.validate(), Err(ContactError::MissingFields));
    }
}
