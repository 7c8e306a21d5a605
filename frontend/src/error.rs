use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("No window object")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("No localStorage")]
    NoStorage,
    #[error("Element {0} is not a {1}")]
    WrongElement(String, &'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for BindingError {
    fn from(value: JsValue) -> Self {
        BindingError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type BindingResult<T> = Result<T, BindingError>;
