use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, Window};

use crate::error::{BindingError, BindingResult};

pub fn window() -> BindingResult<Window> {
    web_sys::window().ok_or(BindingError::NoWindow)
}

pub fn document() -> BindingResult<Document> {
    window()?.document().ok_or(BindingError::NoDocument)
}

pub fn by_id(id: &str) -> BindingResult<Option<Element>> {
    Ok(document()?.get_element_by_id(id))
}

pub fn query(root: &Element, selector: &str) -> BindingResult<Option<Element>> {
    Ok(root.query_selector(selector)?)
}

pub fn query_document(selector: &str) -> BindingResult<Option<Element>> {
    Ok(document()?.query_selector(selector)?)
}

/// Collects every match of `selector` under `root`, in document order.
pub fn query_all(root: &Element, selector: &str) -> BindingResult<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_document(selector: &str) -> BindingResult<Vec<Element>> {
    let root = document()?
        .document_element()
        .ok_or(BindingError::NoDocument)?;
    query_all(&root, selector)
}

pub fn as_input(element: Element) -> BindingResult<HtmlInputElement> {
    let label = element.id();
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| BindingError::WrongElement(label, "input"))
}

pub fn as_html(element: Element) -> BindingResult<HtmlElement> {
    let label = element.id();
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindingError::WrongElement(label, "html element"))
}

pub fn input_by_selector(
    root: &Element,
    selector: &str,
) -> BindingResult<Option<HtmlInputElement>> {
    query(root, selector)?.map(as_input).transpose()
}

pub fn text_of(element: Option<Element>) -> Option<String> {
    element.and_then(|el| el.text_content())
}

pub fn set_class(element: &Element, class: &str, enabled: bool) {
    let list = element.class_list();
    let _ = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let _ = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
}

/// Attaches a listener that lives as long as the page.
pub fn listen<E>(
    target: &EventTarget,
    event_name: &str,
    mut handler: impl FnMut(E) + 'static,
) -> BindingResult<()>
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn navigate(path: &str) -> BindingResult<()> {
    window()?.location().set_href(path)?;
    Ok(())
}
