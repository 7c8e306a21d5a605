use helix_auth_core::alert::AlertKind;
use helix_auth_core::validation::{passwords_match, validate_new_user, NewUserForm};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement};

use crate::components::alert::{alert, notify};
use crate::components::form::field_value;
use crate::error::BindingResult;
use crate::utils::dom::{self, set_class};

pub const FORM_ID: &str = "createUserForm";
const ERROR_CLASS: &str = "validation-error";

fn named_value(root: &Element, name: &str) -> String {
    dom::query(root, &format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
        .map(|field| field_value(&field))
        .unwrap_or_default()
}

pub fn read_form(root: &Element) -> NewUserForm {
    NewUserForm {
        first_name: named_value(root, "first_name"),
        last_name: named_value(root, "last_name"),
        email: named_value(root, "email"),
        username: named_value(root, "username"),
        password1: named_value(root, "password1"),
        password2: named_value(root, "password2"),
    }
}

/// Flags the second password field while it disagrees with the first.
/// An empty second field is never flagged.
pub fn validate_password_match(password1: &HtmlInputElement, password2: &HtmlInputElement) {
    let confirmation = password2.value();
    let mismatch = !confirmation.is_empty() && !passwords_match(&password1.value(), &confirmation);
    password2.set_custom_validity(if mismatch { "Passwords do not match" } else { "" });
    set_class(password2, ERROR_CLASS, mismatch);
}

pub fn init() -> BindingResult<bool> {
    let Some(form) = dom::by_id(FORM_ID)? else {
        return Ok(false);
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return Ok(false);
    };

    let target = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        if let Err(err) = validate_new_user(&read_form(&target)) {
            event.prevent_default();
            notify(alert(AlertKind::Danger, err.to_string()));
            return;
        }
        notify(alert(AlertKind::Info, "Creating user..."));
    })?;

    setup_password_validation()?;

    log::info!("create user form initialized");
    Ok(true)
}

fn setup_password_validation() -> BindingResult<()> {
    let password1 = dom::by_id("id_password1")?.map(dom::as_input).transpose()?;
    let password2 = dom::by_id("id_password2")?.map(dom::as_input).transpose()?;
    let (Some(password1), Some(password2)) = (password1, password2) else {
        return Ok(());
    };

    {
        let (first, second) = (password1.clone(), password2.clone());
        dom::listen(&password2, "input", move |_: Event| {
            validate_password_match(&first, &second);
        })?;
    }

    let (first, second) = (password1.clone(), password2.clone());
    dom::listen(&password1, "input", move |_: Event| {
        if !second.value().is_empty() {
            validate_password_match(&first, &second);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use helix_auth_core::validation::FormError;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn input(value: &str) -> HtmlInputElement {
        let el = dom::document()
            .unwrap()
            .create_element("input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        el.set_value(value);
        el
    }

    #[wasm_bindgen_test]
    fn mismatch_is_flagged_only_when_second_field_has_text() {
        let first = input("analytical");
        let second = input("");
        validate_password_match(&first, &second);
        assert!(!second.class_list().contains(ERROR_CLASS));

        second.set_value("analytic");
        validate_password_match(&first, &second);
        assert!(second.class_list().contains(ERROR_CLASS));
        assert_eq!(second.validation_message().unwrap(), "Passwords do not match");

        second.set_value("analytical");
        validate_password_match(&first, &second);
        assert!(!second.class_list().contains(ERROR_CLASS));
    }

    #[wasm_bindgen_test]
    fn blank_form_reports_missing_fields() {
        let root = dom::document().unwrap().create_element("form").unwrap();
        root.set_inner_html(r#"<input name="username" value="ada">"#);
        let values = read_form(&root);
        assert_eq!(values.username, "ada");
        assert!(matches!(
            validate_new_user(&values),
            Err(FormError::MissingFields(fields)) if fields.len() == 5
        ));
    }
}
