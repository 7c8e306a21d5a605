//! Validation wiring shared by every `.auth-form`.

use helix_auth_core::validation::{validate_field_with, FieldKind, FieldRule};
use helix_auth_core::FieldValidationResult;
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, HtmlFormElement};

use super::{feedback, strength};
use crate::error::BindingResult;
use crate::utils::dom;

pub const FIELD_SELECTOR: &str = "input, select, textarea";

/// Reads `.value` from any form control.
pub fn field_value(field: &Element) -> String {
    js_sys::Reflect::get(field, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

pub fn field_rule(field: &Element) -> FieldRule {
    let kind = if field.tag_name().eq_ignore_ascii_case("input") {
        FieldKind::from_input_type(&field.get_attribute("type").unwrap_or_default())
    } else {
        FieldKind::Other
    };
    FieldRule {
        kind,
        required: field.has_attribute("required"),
    }
}

pub fn validate_element(field: &Element) -> FieldValidationResult {
    validate_field_with(&field_value(field), field_rule(field))
}

/// Validates every control in `form`, marking each one. Returns whether
/// all of them passed.
pub fn validate_form(form: &Element) -> BindingResult<bool> {
    let mut all_valid = true;
    for field in dom::query_all(form, FIELD_SELECTOR)? {
        let result = validate_element(&field);
        all_valid &= result.is_valid;
        feedback::apply(&field, &result)?;
    }
    Ok(all_valid)
}

/// Runs `on_valid` after a submit event only when every field passes.
/// The native submit is always cancelled; `on_valid` decides whether to
/// submit the form itself.
pub fn handle_submit(
    form: &HtmlFormElement,
    mut on_valid: impl FnMut(&HtmlFormElement) + 'static,
) -> BindingResult<()> {
    let target = form.clone();
    dom::listen(form, "submit", move |event: Event| {
        event.prevent_default();
        match validate_form(&target) {
            Ok(true) => on_valid(&target),
            Ok(false) => {}
            Err(err) => log::warn!("form validation failed: {}", err),
        }
    })
}

/// Blur validates non-empty fields, typing clears the error marker and
/// password fields drive the strength meter.
pub fn add_real_time_validation(form: &Element) -> BindingResult<()> {
    for field in dom::query_all(form, FIELD_SELECTOR)? {
        let on_blur = field.clone();
        dom::listen(&field, "blur", move |_: Event| {
            if field_value(&on_blur).trim().is_empty() {
                return;
            }
            let result = validate_element(&on_blur);
            if let Err(err) = feedback::apply(&on_blur, &result) {
                log::warn!("could not mark field: {}", err);
            }
        })?;

        let on_input = field.clone();
        let is_password = field_rule(&field).kind == FieldKind::Password;
        dom::listen(&field, "input", move |_: Event| {
            dom::set_class(&on_input, "is-invalid", false);
            if is_password {
                if let Err(err) = strength::update_from_document(&field_value(&on_input)) {
                    log::warn!("could not update strength meter: {}", err);
                }
            }
        })?;
    }
    Ok(())
}

pub fn submit(form: &HtmlFormElement) {
    if let Err(err) = form.submit() {
        log::error!("form submit failed: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn form_with(html: &str) -> Element {
        let document = dom::document().unwrap();
        let form = document.create_element("form").unwrap();
        form.set_inner_html(html);
        document.body().unwrap().append_child(&form).unwrap();
        form
    }

    #[wasm_bindgen_test]
    fn rules_follow_type_and_required_attributes() {
        let form = form_with(
            r#"<div><input id="e" type="email" required></div>
               <div><input id="n" type="text"></div>
               <div><textarea id="t" required></textarea></div>"#,
        );
        let email = form.query_selector("#e").unwrap().unwrap();
        assert_eq!(field_rule(&email), FieldRule::required(FieldKind::Email));
        let name = form.query_selector("#n").unwrap().unwrap();
        assert_eq!(field_rule(&name), FieldRule::optional(FieldKind::Text));
        let notes = form.query_selector("#t").unwrap().unwrap();
        assert_eq!(field_rule(&notes), FieldRule::required(FieldKind::Other));
        form.remove();
    }

    #[wasm_bindgen_test]
    fn validate_form_marks_each_field() {
        let form = form_with(
            r#"<div><input id="e" type="email" required value="bad"></div>
               <div><input id="n" type="text" value="Ada"></div>"#,
        );
        assert!(!validate_form(&form).unwrap());

        let email = form.query_selector("#e").unwrap().unwrap();
        assert!(email.class_list().contains("is-invalid"));
        let name = form.query_selector("#n").unwrap().unwrap();
        assert!(name.class_list().contains("is-valid"));

        email
            .clone()
            .dyn_into::<web_sys::HtmlInputElement>()
            .unwrap()
            .set_value("ada@example.com");
        assert!(validate_form(&form).unwrap());
        form.remove();
    }
}
