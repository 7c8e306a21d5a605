use gloo_timers::callback::Timeout;
use helix_auth_core::alert::{Alert, AlertKind};
use web_sys::Element;

use crate::config;
use crate::error::{BindingError, BindingResult};
use crate::utils::dom::{self, as_html, set_style};

/// Marker class shared by every toast so a new one replaces the old.
const ALERT_MARKER: &str = "helix-alert";

pub fn alert(kind: AlertKind, message: impl Into<String>) -> Alert {
    Alert::new(kind, message, config::ui().alert_duration_ms)
}

pub fn hint(kind: AlertKind, message: impl Into<String>) -> Alert {
    Alert::new(kind, message, config::ui().hint_duration_ms)
}

fn build(alert: &Alert) -> BindingResult<Element> {
    let document = dom::document()?;

    let container = document.create_element("div")?;
    container.set_class_name(&format!("{} {}", alert.kind.class_name(), ALERT_MARKER));
    container.set_attribute("role", "alert")?;

    let icon = document.create_element("i")?;
    icon.set_class_name(&format!("fas fa-{} me-2", alert.kind.icon()));
    container.append_child(&icon)?;

    let text = document.create_text_node(&alert.message);
    container.append_child(&text)?;

    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close");
    close.set_attribute("aria-label", "Close")?;
    let target = container.clone();
    dom::listen(&close, "click", move |_: web_sys::MouseEvent| target.remove())?;
    container.append_child(&close)?;

    let html = as_html(container.clone())?;
    for (property, value) in [
        ("position", "fixed"),
        ("top", "20px"),
        ("right", "20px"),
        ("z-index", "9999"),
        ("max-width", "400px"),
        ("border-radius", "12px"),
    ] {
        set_style(&html, property, value);
    }

    Ok(container)
}

pub fn clear_alerts() -> BindingResult<()> {
    for existing in dom::query_all_document(&format!(".{ALERT_MARKER}"))? {
        existing.remove();
    }
    Ok(())
}

/// Replaces any visible toast with `alert`.
pub fn show_alert(alert: &Alert) -> BindingResult<Element> {
    clear_alerts()?;

    let element = build(alert)?;
    dom::document()?
        .body()
        .ok_or(BindingError::NoDocument)?
        .append_child(&element)?;

    if !alert.is_sticky() {
        let target = element.clone();
        Timeout::new(alert.duration_ms, move || target.remove()).forget();
    }

    Ok(element)
}

/// Shows a toast, logging instead of failing when the page cannot host one.
pub fn notify(alert: Alert) {
    if let Err(err) = show_alert(&alert) {
        log::warn!("could not show alert {:?}: {}", alert.message, err);
    }
}
