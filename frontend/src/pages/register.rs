use helix_auth_core::alert::AlertKind;
use helix_auth_core::validation::{passwords_match, validate_registration, RegistrationForm};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::components::alert::{alert, notify};
use crate::components::{feedback, form, strength};
use crate::error::BindingResult;
use crate::utils::dom;

pub const FORM_ID: &str = "registerForm";
const MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Live state of the confirm-password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    /// Nothing typed yet; no feedback is shown.
    Pending,
    Match,
    Mismatch,
}

pub fn confirm_state(password: &str, confirmation: &str) -> ConfirmState {
    if confirmation.is_empty() {
        ConfirmState::Pending
    } else if passwords_match(password, confirmation) {
        ConfirmState::Match
    } else {
        ConfirmState::Mismatch
    }
}

fn named_value(root: &HtmlFormElement, name: &str) -> String {
    dom::input_by_selector(root, &format!("input[name=\"{name}\"]"))
        .ok()
        .flatten()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn read_form(root: &HtmlFormElement) -> RegistrationForm {
    RegistrationForm {
        email: named_value(root, "email"),
        password: named_value(root, "password"),
        confirm_password: named_value(root, "confirm_password"),
    }
}

pub fn init() -> BindingResult<bool> {
    let Some(form) = dom::by_id(FORM_ID)? else {
        return Ok(false);
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return Ok(false);
    };

    form::handle_submit(&form, handle_register)?;
    init_password_strength(&form)?;
    init_confirm_password(&form)?;

    log::info!("register form initialized");
    Ok(true)
}

fn handle_register(form: &HtmlFormElement) {
    match validate_registration(&read_form(form)) {
        Ok(()) => form::submit(form),
        Err(err) => notify(alert(AlertKind::Danger, err.to_string())),
    }
}

fn init_password_strength(form: &HtmlFormElement) -> BindingResult<()> {
    let Some(password) = dom::input_by_selector(form, "input[name=\"password\"]")? else {
        return Ok(());
    };
    let target = password.clone();
    dom::listen(&password, "input", move |_: Event| {
        if let Err(err) = strength::update_from_document(&target.value()) {
            log::warn!("could not update strength meter: {}", err);
        }
    })
}

pub fn apply_confirm_state(confirm: &HtmlInputElement, state: ConfirmState) -> BindingResult<()> {
    match state {
        ConfirmState::Pending => Ok(()),
        ConfirmState::Match => feedback::mark_valid(confirm),
        ConfirmState::Mismatch => feedback::mark_invalid(confirm, MISMATCH_MESSAGE),
    }
}

fn init_confirm_password(form: &HtmlFormElement) -> BindingResult<()> {
    let password = dom::input_by_selector(form, "input[name=\"password\"]")?;
    let confirm = dom::input_by_selector(form, "input[name=\"confirm_password\"]")?;
    let (Some(password), Some(confirm)) = (password, confirm) else {
        return Ok(());
    };

    for source in [password.clone(), confirm.clone()] {
        let password = password.clone();
        let confirm = confirm.clone();
        dom::listen(&source, "input", move |_: Event| {
            let state = confirm_state(&password.value(), &confirm.value());
            if let Err(err) = apply_confirm_state(&confirm, state) {
                log::warn!("could not mark confirm password: {}", err);
            }
        })?;
    }
    Ok(())
}
