use web_sys::console;

pub mod components;
pub mod config;
pub mod error;
pub mod exports;
pub mod pages;
pub mod utils;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        console::warn_1(&"Logger already initialized".into());
    }
}

/// Binds every enhancement whose markup is present on the current page.
pub fn init_page() {
    config::init();

    let bindings: [(&str, fn() -> error::BindingResult<bool>); 4] = [
        ("login", pages::login::init),
        ("register", pages::register::init),
        ("create user", pages::create_user::init),
        ("admin users", pages::admin_users::init),
    ];

    for (name, init) in bindings {
        match init() {
            Ok(true) => log::debug!("{} bindings attached", name),
            Ok(false) => {}
            Err(err) => log::error!("{} bindings failed: {}", name, err),
        }
    }

    if let Ok(forms) = utils::dom::query_all_document(".auth-form") {
        for form in forms {
            if let Err(err) = components::form::add_real_time_validation(&form) {
                log::warn!("auth form validation not attached: {}", err);
            }
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting Helix auth scripts (wasm)");

    let ready = utils::dom::document()
        .map(|document| document.ready_state() != "loading")
        .unwrap_or(false);
    if ready {
        init_page();
        return;
    }

    match utils::dom::document() {
        Ok(document) => {
            let on_loaded = |_: web_sys::Event| init_page();
            if let Err(err) = utils::dom::listen(&document, "DOMContentLoaded", on_loaded) {
                log::error!("could not wait for DOMContentLoaded: {}", err);
            }
        }
        Err(err) => log::error!("no document to enhance: {}", err),
    }
}
