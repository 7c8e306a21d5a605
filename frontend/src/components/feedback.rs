//! Bootstrap-style validity markers for form fields.

use helix_auth_core::FieldValidationResult;
use web_sys::Element;

use crate::error::BindingResult;
use crate::utils::dom::{self, set_class};

const INVALID_CLASS: &str = "is-invalid";
const VALID_CLASS: &str = "is-valid";
const FEEDBACK_SELECTOR: &str = ".invalid-feedback";

fn feedback_node(field: &Element) -> BindingResult<Option<Element>> {
    match field.parent_element() {
        Some(parent) => dom::query(&parent, FEEDBACK_SELECTOR),
        None => Ok(None),
    }
}

pub fn mark_invalid(field: &Element, message: &str) -> BindingResult<()> {
    set_class(field, INVALID_CLASS, true);
    set_class(field, VALID_CLASS, false);

    let Some(parent) = field.parent_element() else {
        return Ok(());
    };
    let feedback = match feedback_node(field)? {
        Some(node) => node,
        None => {
            let node = dom::document()?.create_element("div")?;
            node.set_class_name("invalid-feedback");
            parent.append_child(&node)?;
            node
        }
    };
    feedback.set_text_content(Some(message));
    Ok(())
}

pub fn mark_valid(field: &Element) -> BindingResult<()> {
    set_class(field, INVALID_CLASS, false);
    set_class(field, VALID_CLASS, true);
    if let Some(node) = feedback_node(field)? {
        node.remove();
    }
    Ok(())
}

/// Drops both markers, e.g. while the user is still typing.
pub fn clear(field: &Element) {
    set_class(field, INVALID_CLASS, false);
    set_class(field, VALID_CLASS, false);
}

pub fn apply(field: &Element, result: &FieldValidationResult) -> BindingResult<()> {
    if result.is_valid {
        mark_valid(field)
    } else {
        mark_invalid(field, &result.message)
    }
}
