//! Field and password validation shared by the login, register and
//! create-user forms.

pub mod forms;
pub mod password;
pub mod rules;

pub use forms::{
    validate_login, validate_new_user, validate_registration, FormError, NewUserForm,
    RegistrationForm,
};
pub use password::{
    score_password, PasswordReport, PasswordRequirements, PasswordStrength, Requirement,
};
pub use rules::{
    is_valid_email, passwords_match, validate_field, validate_field_with, FieldKind, FieldRule,
    FieldValidationResult,
};
