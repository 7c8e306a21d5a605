use web_sys::Storage;

use super::dom::window;
use crate::config;
use crate::error::{BindingError, BindingResult};

pub fn local_storage() -> BindingResult<Storage> {
    window()?
        .local_storage()
        .map_err(|_| BindingError::NoStorage)?
        .ok_or(BindingError::NoStorage)
}

pub fn load_remembered_email() -> BindingResult<Option<String>> {
    let key = &config::ui().remembered_email_key;
    let value = local_storage()?.get_item(key)?;
    Ok(value.filter(|email| !email.trim().is_empty()))
}

pub fn store_remembered_email(email: &str) -> BindingResult<()> {
    let key = &config::ui().remembered_email_key;
    local_storage()?.set_item(key, email)?;
    Ok(())
}

pub fn forget_remembered_email() -> BindingResult<()> {
    let key = &config::ui().remembered_email_key;
    local_storage()?.remove_item(key)?;
    Ok(())
}

/// Stores the email while "remember me" is ticked and a value is present,
/// clears it otherwise.
pub fn sync_remembered_email(remember: bool, email: &str) -> BindingResult<()> {
    if remember && !email.is_empty() {
        store_remembered_email(email)
    } else {
        forget_remembered_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn remembered_email_round_trips_through_storage() {
        forget_remembered_email().unwrap();
        assert_eq!(load_remembered_email().unwrap(), None);

        sync_remembered_email(true, "ada@example.com").unwrap();
        assert_eq!(
            load_remembered_email().unwrap().as_deref(),
            Some("ada@example.com")
        );

        sync_remembered_email(false, "ada@example.com").unwrap();
        assert_eq!(load_remembered_email().unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn empty_email_is_never_remembered() {
        sync_remembered_email(true, "").unwrap();
        assert_eq!(load_remembered_email().unwrap(), None);
    }
}
