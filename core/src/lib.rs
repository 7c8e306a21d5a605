//! Decision logic behind the Helix authentication and admin pages.
//!
//! Everything in this crate is a pure function over plain values. The
//! browser bindings live in `helix-auth-frontend` and call into here on
//! every input event.

pub mod alert;
pub mod config;
pub mod search;
pub mod shortcuts;
pub mod validation;

pub use search::{filter_rows, SearchResult, SearchableRow};
pub use validation::{
    passwords_match, score_password, validate_field, FieldKind, FieldValidationResult,
    PasswordReport, PasswordStrength,
};
