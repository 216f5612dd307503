use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_TOO_LONG: &str = "Message is too long";

pub const MAX_MESSAGE_CHARS: usize = 5000;

pub const USE_CASES: &[&str] = &[
    "AI & Machine Learning",
    "Cloud Migration",
    "Cybersecurity",
    "Data Engineering",
    "Custom Software",
    "Other",
];

pub const SITUATIONS: &[&str] = &[
    "Exploring options",
    "Have a defined project",
    "Need help with an existing system",
    "Looking for a long-term partner",
];

pub const TIMELINES: &[&str] = &[
    "ASAP",
    "Within 1 month",
    "1-3 months",
    "3-6 months",
    "Just researching",
];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Body of the contact form submission.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub use_case: String,
    pub situation: String,
    pub timeline: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

pub type ContactErrors = BTreeMap<ContactField, String>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

impl ContactRequest {
    /// Checks every field and returns all failures at once.
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, NAME_REQUIRED.to_string());
        }
        if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, EMAIL_INVALID.to_string());
        }
        if self.message.chars().count() > MAX_MESSAGE_CHARS {
            errors.insert(ContactField::Message, MESSAGE_TOO_LONG.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            use_case: self.use_case.trim().to_string(),
            situation: self.situation.trim().to_string(),
            timeline: self.timeline.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: "Analytical Engines".into(),
            use_case: "Data Engineering".into(),
            situation: "Have a defined project".into(),
            timeline: "1-3 months".into(),
            message: "We need a pipeline.".into(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn empty_name_and_bad_email_give_exactly_two_errors() {
        let req = ContactRequest {
            name: "   ".into(),
            email: "not-an-email".into(),
            ..valid()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&ContactField::Name], "Name is required");
        assert_eq!(errors[&ContactField::Email], "Please enter a valid email address");
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let req = ContactRequest {
            name: "Grace".into(),
            email: "grace@navy.mil".into(),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  padded@example.org "));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn overlong_message_is_rejected() {
        let req = ContactRequest {
            message: "x".repeat(MAX_MESSAGE_CHARS + 1),
            ..valid()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&ContactField::Message));
    }

    #[test]
    fn errors_serialize_with_field_keys() {
        let errors = ContactRequest::default().validate().unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["name"], "Name is required");
        assert_eq!(json["email"], "Please enter a valid email address");
    }

    #[test]
    fn request_uses_camel_case_keys() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["useCase"], "Data Engineering");
        let back: ContactRequest =
            serde_json::from_str(r#"{"name":"x","email":"x@y.z","useCase":"Other"}"#).unwrap();
        assert_eq!(back.use_case, "Other");
        assert!(back.message.is_empty());
    }
}
