//! Admin dashboard: live user search, keyboard shortcuts and row links.

use helix_auth_core::alert::AlertKind;
use helix_auth_core::search::{
    filter_rows, SearchFeedback, SearchResult, SearchTone, SearchableRow,
};
use helix_auth_core::shortcuts::{resolve_dashboard_shortcut, DashboardShortcut, KeyChord};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::components::alert::{alert, hint, notify};
use crate::config;
use crate::error::BindingResult;
use crate::utils::dom::{self, as_html, set_style};

const DETAILS_SELECTOR: &str = ".user-details";
const NO_RESULTS_CLASS: &str = "no-results-message";

/// A rendered table row together with its search projection.
pub struct UserRow {
    pub element: Element,
    pub row: SearchableRow<usize>,
}

/// Projects the rendered rows. A row without a `.user-details` block is
/// searched as an empty row; the no-results placeholder is left out.
pub fn collect_rows(selector: &str) -> BindingResult<Vec<UserRow>> {
    let mut rows = Vec::new();
    for (index, element) in dom::query_all_document(selector)?.into_iter().enumerate() {
        if element.class_list().contains(NO_RESULTS_CLASS) {
            continue;
        }
        let row = match dom::query(&element, DETAILS_SELECTOR)? {
            Some(details) => SearchableRow {
                id: index,
                name: dom::text_of(dom::query(&details, "h6")?),
                email: dom::text_of(dom::query(&details, "p")?),
            },
            None => {
                log::debug!("row {} has no {}", index, DETAILS_SELECTOR);
                SearchableRow {
                    id: index,
                    name: None,
                    email: None,
                }
            }
        };
        rows.push(UserRow { element, row });
    }
    Ok(rows)
}

fn apply_visibility(rows: &[UserRow], result: &SearchResult<usize>) -> BindingResult<()> {
    for user_row in rows {
        let visible = result.visible_ids.contains(&user_row.row.id);
        let html = as_html(user_row.element.clone())?;
        set_style(&html, "display", if visible { "" } else { "none" });
        set_style(&html, "opacity", if visible { "1" } else { "0.5" });
    }
    Ok(())
}

fn tone_colors(tone: SearchTone) -> (&'static str, &'static str) {
    match tone {
        SearchTone::Neutral => ("", ""),
        SearchTone::Found => ("#198754", "#f0fff4"),
        SearchTone::Empty => ("#dc3545", "#fff5f5"),
    }
}

fn style_search_input(input: &HtmlInputElement, tone: SearchTone) {
    let (border, background) = tone_colors(tone);
    set_style(input, "border-color", border);
    set_style(input, "background-color", background);
}

fn show_no_results(feedback: &SearchFeedback) -> BindingResult<()> {
    if dom::query_document(&format!(".{NO_RESULTS_CLASS}"))?.is_some() {
        return Ok(());
    }
    let Some(body) = dom::query_document(".custom-table tbody")? else {
        return Ok(());
    };
    let document = dom::document()?;

    let row = document.create_element("tr")?;
    row.set_class_name(NO_RESULTS_CLASS);
    let cell = document.create_element("td")?;
    cell.set_attribute("colspan", "5")?;
    cell.set_class_name("text-center py-4");

    let message = document.create_element("p")?;
    message.set_class_name("text-muted mb-0");
    message.set_text_content(Some(&feedback.no_results_text()));
    cell.append_child(&message)?;

    let tip = document.create_element("small")?;
    tip.set_class_name("text-muted");
    tip.set_text_content(Some("Try a different search term or clear the search"));
    cell.append_child(&tip)?;

    row.append_child(&cell)?;
    body.append_child(&row)?;
    Ok(())
}

fn hide_no_results() -> BindingResult<()> {
    if let Some(row) = dom::query_document(&format!(".{NO_RESULTS_CLASS}"))? {
        row.remove();
    }
    Ok(())
}

/// Re-filters the table for `query` and paints the outcome.
pub fn perform_search(input: &HtmlInputElement, query: &str) -> BindingResult<SearchFeedback> {
    let rows = collect_rows(&config::ui().table_row_selector)?;
    let projection: Vec<SearchableRow<usize>> = rows.iter().map(|r| r.row.clone()).collect();
    let result = filter_rows(&projection, query);
    apply_visibility(&rows, &result)?;

    let feedback = SearchFeedback::from_result(&result, query);
    style_search_input(input, feedback.tone);
    if feedback.show_no_results {
        show_no_results(&feedback)?;
    } else {
        hide_no_results()?;
    }
    if let Some(status) = feedback.status_text() {
        log::debug!("{} for {:?}", status, feedback.query);
    }
    Ok(feedback)
}

fn search_input() -> BindingResult<Option<HtmlInputElement>> {
    dom::by_id(&config::ui().search_input_id)?
        .map(dom::as_input)
        .transpose()
}

fn run_shortcut(shortcut: DashboardShortcut, event: &KeyboardEvent) -> BindingResult<()> {
    if shortcut.prevents_default() {
        event.prevent_default();
    }
    match shortcut {
        DashboardShortcut::FocusSearch => {
            let Some(input) = search_input()? else {
                log::warn!("search input not found");
                return Ok(());
            };
            input.focus()?;
            input.select();
            notify(hint(AlertKind::Info, shortcut.hint()));
        }
        DashboardShortcut::ClearSearch => {
            let Some(input) = search_input()? else {
                return Ok(());
            };
            if input.value().is_empty() {
                return Ok(());
            }
            input.set_value("");
            input.dispatch_event(&Event::new("input")?)?;
            notify(hint(AlertKind::Info, shortcut.hint()));
        }
        DashboardShortcut::NewUser => {
            notify(alert(AlertKind::Info, shortcut.hint()));
            dom::navigate(&config::ui().create_user_path)?;
        }
    }
    Ok(())
}

pub fn chord_of(event: &KeyboardEvent) -> KeyChord {
    KeyChord {
        key: event.key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
    }
}

/// First run of digits in a legacy `onclick="viewUser(42)"` handler.
pub fn user_id_from_onclick(onclick: &str) -> Option<String> {
    let digits: String = onclick
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    (!digits.is_empty()).then_some(digits)
}

fn row_user_id(row: &Element) -> BindingResult<Option<String>> {
    if let Some(id) = row.get_attribute("data-user-id") {
        return Ok(Some(id));
    }
    Ok(dom::query(row, ".btn-view")?
        .and_then(|button| button.get_attribute("onclick"))
        .and_then(|onclick| user_id_from_onclick(&onclick)))
}

fn init_row_links(rows: &[UserRow]) -> BindingResult<()> {
    for user_row in rows {
        let row = user_row.element.clone();
        dom::listen(&user_row.element, "click", move |event: MouseEvent| {
            let on_action = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(".btn-action").ok().flatten())
                .is_some();
            if on_action {
                return;
            }
            let id = match row_user_id(&row) {
                Ok(Some(id)) => id,
                Ok(None) => return,
                Err(err) => {
                    log::warn!("could not read user id: {}", err);
                    return;
                }
            };
            notify(alert(AlertKind::Info, "Loading user details..."));
            if let Err(err) = dom::navigate(&config::ui().user_view_path(&id)) {
                log::error!("navigation failed: {}", err);
            }
        })?;
    }
    Ok(())
}

pub fn init() -> BindingResult<bool> {
    let Some(input) = search_input()? else {
        return Ok(false);
    };

    input.set_attribute("title", "Press Ctrl+K to focus, Escape to clear")?;
    input.set_attribute("placeholder", "Search users by name or email... (Ctrl+K)")?;

    let target = input.clone();
    dom::listen(&input, "input", move |_: Event| {
        if let Err(err) = perform_search(&target, &target.value()) {
            log::warn!("search failed: {}", err);
        }
    })?;

    dom::listen(&*dom::document()?, "keydown", move |event: KeyboardEvent| {
        let Some(shortcut) = resolve_dashboard_shortcut(&chord_of(&event)) else {
            return;
        };
        if let Err(err) = run_shortcut(shortcut, &event) {
            log::warn!("shortcut {:?} failed: {}", shortcut, err);
        }
    })?;

    let rows = collect_rows(&config::ui().table_row_selector)?;
    init_row_links(&rows)?;

    log::info!("admin dashboard initialized with {} rows", rows.len());
    notify(hint(
        AlertKind::Success,
        "Dashboard loaded! Press Ctrl+K to search, Ctrl+N for new user",
    ));
    Ok(true)
}
