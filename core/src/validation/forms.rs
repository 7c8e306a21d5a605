//! Submit-time checks for whole forms.

use thiserror::Error;

use super::password::{score_password, MIN_PASSWORD_LENGTH};
use super::rules::{is_valid_email, passwords_match};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields(Vec<&'static str>),
    #[error("Password does not meet security requirements")]
    WeakPassword,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn validate_login(email: &str) -> Result<(), FormError> {
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_registration(form: &RegistrationForm) -> Result<(), FormError> {
    if !score_password(&form.password).is_valid {
        return Err(FormError::WeakPassword);
    }
    if !passwords_match(&form.password, &form.confirm_password) {
        return Err(FormError::PasswordMismatch);
    }
    validate_login(&form.email)
}

/// Admin "create user" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl NewUserForm {
    pub const FIELD_NAMES: [&'static str; 6] = [
        "first_name",
        "last_name",
        "email",
        "username",
        "password1",
        "password2",
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "username" => &self.username,
            "password1" => &self.password1,
            "password2" => &self.password2,
            _ => "",
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELD_NAMES
            .into_iter()
            .filter(|name| self.field(name).trim().is_empty())
            .collect()
    }
}

pub fn validate_new_user(form: &NewUserForm) -> Result<(), FormError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(FormError::MissingFields(missing));
    }
    if !passwords_match(&form.password1, &form.password2) {
        return Err(FormError::PasswordMismatch);
    }
    if form.password1.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FormError::PasswordTooShort);
    }
    validate_login(&form.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUserForm {
        NewUserForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            username: "ada".into(),
            password1: "analytical".into(),
            password2: "analytical".into(),
        }
    }

    #[test]
    fn login_requires_email_shape() {
        assert_eq!(validate_login("nobody"), Err(FormError::InvalidEmail));
        assert!(validate_login("me@example.org").is_ok());
    }

    #[test]
    fn registration_checks_strength_before_match() {
        let form = RegistrationForm {
            email: "bad".into(),
            password: "weak".into(),
            confirm_password: "other".into(),
        };
        assert_eq!(validate_registration(&form), Err(FormError::WeakPassword));
    }

    #[test]
    fn registration_reports_mismatch_then_email() {
        let mut form = RegistrationForm {
            email: "bad".into(),
            password: "Str0ng!pass".into(),
            confirm_password: "Str0ng!pas".into(),
        };
        assert_eq!(validate_registration(&form), Err(FormError::PasswordMismatch));

        form.confirm_password = form.password.clone();
        assert_eq!(validate_registration(&form), Err(FormError::InvalidEmail));

        form.email = "new@example.com".into();
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn new_user_lists_every_blank_field() {
        let form = NewUserForm {
            username: "ada".into(),
            last_name: "  ".into(),
            ..Default::default()
        };
        let err = validate_new_user(&form).unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields(vec![
                "first_name",
                "last_name",
                "email",
                "password1",
                "password2"
            ])
        );
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn new_user_checks_match_then_length_then_email() {
        let mut form = new_user();
        form.password2 = "analytic".into();
        assert_eq!(validate_new_user(&form), Err(FormError::PasswordMismatch));

        form.password1 = "short".into();
        form.password2 = "short".into();
        assert_eq!(validate_new_user(&form), Err(FormError::PasswordTooShort));
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );

        let mut form = new_user();
        form.email = "ada at example".into();
        assert_eq!(validate_new_user(&form), Err(FormError::InvalidEmail));
    }

    #[test]
    fn complete_new_user_passes() {
        assert!(validate_new_user(&new_user()).is_ok());
    }
}
