//! JavaScript entry points for inline template scripts.

use helix_auth_core::search::{filter_rows, SearchableRow};
use helix_auth_core::validation::{score_password, validate_field_with, FieldKind, FieldRule};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    js_sys::JSON::parse(&json)
}

#[wasm_bindgen(js_name = scorePassword)]
pub fn score_password_js(password: &str) -> Result<JsValue, JsValue> {
    to_js(&score_password(password))
}

/// `kind` is an input `type` attribute; fields are required unless
/// `required` is `false`.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(
    value: &str,
    kind: &str,
    required: Option<bool>,
) -> Result<JsValue, JsValue> {
    let rule = FieldRule {
        kind: FieldKind::from_input_type(kind),
        required: required.unwrap_or(true),
    };
    to_js(&validate_field_with(value, rule))
}

/// Reads one `{ id, name, email }` entry. Anything missing or of the wrong
/// type is treated as absent.
fn project_row(entry: &Value) -> SearchableRow<Value> {
    let text = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_owned);
    SearchableRow {
        id: entry.get("id").cloned().unwrap_or(Value::Null),
        name: text("name"),
        email: text("email"),
    }
}

fn rows_from_js(rows: &JsValue) -> Vec<SearchableRow<Value>> {
    let parsed = js_sys::JSON::stringify(rows)
        .ok()
        .and_then(|raw| raw.as_string())
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok());
    match parsed {
        Some(Value::Array(entries)) => entries.iter().map(project_row).collect(),
        _ => {
            log::debug!("filterRows called without an array; using no rows");
            Vec::new()
        }
    }
}

/// `rows` is an array of `{ id, name, email }` objects; ids are passed
/// through untouched.
#[wasm_bindgen(js_name = filterRows)]
pub fn filter_rows_js(rows: JsValue, query: &str) -> Result<JsValue, JsValue> {
    to_js(&filter_rows(&rows_from_js(&rows), query))
}
