//! Per-field validation rules.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::password::score_password;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const WEAK_PASSWORD_MESSAGE: &str = "Password must meet security requirements";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Other,
}

impl FieldKind {
    /// Maps an `<input type="...">` attribute onto a field kind.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "password" => FieldKind::Password,
            "text" | "" => FieldKind::Text,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub fn required(kind: FieldKind) -> Self {
        Self {
            kind,
            required: true,
        }
    }

    pub fn optional(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl FieldValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    })
}

/// `local@domain.tld` with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validates a required field of the given kind.
pub fn validate_field(value: &str, kind: FieldKind) -> FieldValidationResult {
    validate_field_with(value, FieldRule::required(kind))
}

/// Applies the rules in order; the first failing rule decides the message.
pub fn validate_field_with(value: &str, rule: FieldRule) -> FieldValidationResult {
    let value = value.trim();

    if rule.required && value.is_empty() {
        return FieldValidationResult::invalid(REQUIRED_MESSAGE);
    }

    if value.is_empty() {
        return FieldValidationResult::valid();
    }

    match rule.kind {
        FieldKind::Email if !is_valid_email(value) => {
            FieldValidationResult::invalid(INVALID_EMAIL_MESSAGE)
        }
        FieldKind::Password if !score_password(value).is_valid => {
            FieldValidationResult::invalid(WEAK_PASSWORD_MESSAGE)
        }
        _ => FieldValidationResult::valid(),
    }
}

/// Exact comparison. Whether an empty confirmation should be reported is
/// left to the caller.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_required() {
        let result = validate_field("", FieldKind::Email);
        assert!(!result.is_valid);
        assert_eq!(result.message, REQUIRED_MESSAGE);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let result = validate_field("   \t", FieldKind::Text);
        assert_eq!(result, FieldValidationResult::invalid(REQUIRED_MESSAGE));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = validate_field("not-an-email", FieldKind::Email);
        assert!(!result.is_valid);
        assert_eq!(result.message, INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn well_formed_email_is_accepted() {
        let result = validate_field("user@example.com", FieldKind::Email);
        assert!(result.is_valid);
        assert!(result.message.is_empty());
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        assert!(validate_field("  user@example.com ", FieldKind::Email).is_valid);
    }

    #[test]
    fn email_pattern_edges() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn weak_password_is_rejected() {
        let result = validate_field("password", FieldKind::Password);
        assert_eq!(result, FieldValidationResult::invalid(WEAK_PASSWORD_MESSAGE));
    }

    #[test]
    fn good_password_is_accepted() {
        assert!(validate_field("Password1", FieldKind::Password).is_valid);
    }

    #[test]
    fn text_and_other_only_need_a_value() {
        assert!(validate_field("x", FieldKind::Text).is_valid);
        assert!(validate_field("x", FieldKind::Other).is_valid);
        assert!(!validate_field("", FieldKind::Other).is_valid);
    }

    #[test]
    fn optional_fields_accept_empty_values() {
        let rule = FieldRule::optional(FieldKind::Email);
        assert!(validate_field_with("", rule).is_valid);
        assert!(!validate_field_with("nope", rule).is_valid);
    }

    #[test]
    fn input_types_map_to_kinds() {
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("PASSWORD"), FieldKind::Password);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type(""), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Other);
        assert_eq!(FieldKind::from_input_type("checkbox"), FieldKind::Other);
    }

    #[test]
    fn passwords_match_is_exact() {
        assert!(passwords_match("Secret1!", "Secret1!"));
        assert!(!passwords_match("Secret1!", "secret1!"));
        assert!(!passwords_match("Secret1!", "Secret1! "));
    }
}
