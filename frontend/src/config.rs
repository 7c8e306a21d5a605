use helix_auth_core::config::UiConfig;
use std::sync::OnceLock;

static UI_CONFIG: OnceLock<UiConfig> = OnceLock::new();

const WINDOW_CONFIG_KEY: &str = "__HELIX_CONFIG";

fn get_from_window_config() -> Option<String> {
    // Optional global set by the template: window.__HELIX_CONFIG = { search_input_id: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &WINDOW_CONFIG_KEY.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

pub fn parse_config(raw: &str) -> UiConfig {
    match serde_json::from_str::<UiConfig>(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("ignoring malformed {}: {}", WINDOW_CONFIG_KEY, err);
            UiConfig::default()
        }
    }
}

fn load() -> UiConfig {
    get_from_window_config()
        .map(|raw| parse_config(&raw))
        .unwrap_or_default()
}

/// Page configuration, read from the window once and cached.
pub fn ui() -> &'static UiConfig {
    UI_CONFIG.get_or_init(load)
}

pub fn init() {
    let cfg = ui();
    log::debug!("ui config loaded: {:?}", cfg);
}
