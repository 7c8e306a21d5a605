use helix_auth_core::alert::AlertKind;
use helix_auth_core::validation::validate_login;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::components::alert::{alert, notify};
use crate::components::form;
use crate::error::BindingResult;
use crate::utils::{dom, storage};

pub const FORM_ID: &str = "loginForm";
const REMEMBER_ID: &str = "rememberMe";
const EMAIL_SELECTOR: &str = "input[type=\"email\"]";

fn email_input() -> BindingResult<Option<HtmlInputElement>> {
    dom::query_document(EMAIL_SELECTOR)?
        .map(dom::as_input)
        .transpose()
}

/// Binds the login form if this page has one.
pub fn init() -> BindingResult<bool> {
    let Some(form) = dom::by_id(FORM_ID)? else {
        return Ok(false);
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return Ok(false);
    };

    form::handle_submit(&form, handle_login)?;
    init_remember_me()?;

    log::info!("login form initialized");
    Ok(true)
}

fn handle_login(form: &HtmlFormElement) {
    let email = dom::input_by_selector(form, EMAIL_SELECTOR)
        .ok()
        .flatten()
        .map(|input| input.value())
        .unwrap_or_default();

    match validate_login(&email) {
        Ok(()) => form::submit(form),
        Err(err) => notify(alert(AlertKind::Danger, err.to_string())),
    }
}

fn init_remember_me() -> BindingResult<()> {
    let Some(checkbox) = dom::by_id(REMEMBER_ID)? else {
        return Ok(());
    };
    let checkbox = dom::as_input(checkbox)?;

    if let Some(saved) = storage::load_remembered_email()? {
        if let Some(input) = email_input()? {
            input.set_value(&saved);
            checkbox.set_checked(true);
        }
    }

    let target = checkbox.clone();
    dom::listen(&checkbox, "change", move |_: Event| {
        let email = email_input()
            .ok()
            .flatten()
            .map(|input| input.value())
            .unwrap_or_default();
        if let Err(err) = storage::sync_remembered_email(target.checked(), &email) {
            log::warn!("could not update remembered email: {}", err);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_form_is_not_an_error() {
        assert!(!init().unwrap());
    }

    #[wasm_bindgen_test]
    fn remembered_email_is_restored() {
        let document = dom::document().unwrap();
        let holder = document.create_element("div").unwrap();
        holder.set_inner_html(
            r#"<input type="email" id="loginEmail"><input type="checkbox" id="rememberMe">"#,
        );
        document.body().unwrap().append_child(&holder).unwrap();
        storage::store_remembered_email("ada@example.com").unwrap();

        init_remember_me().unwrap();

        let email = email_input().unwrap().unwrap();
        assert_eq!(email.value(), "ada@example.com");
        let checkbox = dom::as_input(dom::by_id(REMEMBER_ID).unwrap().unwrap()).unwrap();
        assert!(checkbox.checked());

        storage::forget_remembered_email().unwrap();
        holder.remove();
    }
}
