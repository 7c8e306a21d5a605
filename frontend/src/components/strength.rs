use helix_auth_core::validation::{score_password, PasswordReport};
use web_sys::Element;

use crate::error::BindingResult;
use crate::utils::dom::{self, set_class};

pub const METER_SELECTOR: &str = ".strength-meter";
pub const REQUIREMENTS_SELECTOR: &str = ".password-requirements";

/// Paints the strength meter fill and ticks the requirement list items.
/// The n-th `.requirement` item reflects the n-th requirement check.
pub fn update_password_strength(
    password: &str,
    meter: Option<&Element>,
    requirements: Option<&Element>,
) -> BindingResult<PasswordReport> {
    let report = score_password(password);

    if let Some(meter) = meter {
        if let Some(fill) = dom::query(meter, ".strength-fill")? {
            fill.set_class_name(&report.strength.css_class());
        }
    }

    if let Some(list) = requirements {
        let checks: Vec<bool> = report.requirements.iter().map(|(_, met)| met).collect();
        for (index, item) in dom::query_all(list, ".requirement")?.iter().enumerate() {
            let met = checks.get(index).copied().unwrap_or(false);
            set_class(item, "met", met);
            if let Some(icon) = dom::query(item, "i")? {
                icon.set_class_name(if met { "fas fa-check" } else { "fas fa-times" });
            }
        }
    }

    Ok(report)
}

pub fn update_from_document(password: &str) -> BindingResult<Option<PasswordReport>> {
    let meter = dom::query_document(METER_SELECTOR)?;
    let requirements = dom::query_document(REQUIREMENTS_SELECTOR)?;
    if meter.is_none() && requirements.is_none() {
        return Ok(None);
    }
    update_password_strength(password, meter.as_ref(), requirements.as_ref()).map(Some)
}
