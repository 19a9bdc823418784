//! Thin web-sys helpers.
//!
//! Every DOM write here is best-effort: a failure is logged at `warn!` and
//! the page carries on.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use reveal::ElementSnapshot;
use reveal::consts::MARKER_ATTRIBUTES;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// First match for `selector` in the document.
pub fn query(selector: &str) -> Option<Element> {
    match document().and_then(|doc| doc.query_selector(selector).map_err(DomError::from)) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("dom: query `{selector}` failed: {err}");
            None
        }
    }
}

/// Every match for `selector` in the document.
pub fn query_all(selector: &str) -> Vec<Element> {
    match document().and_then(|doc| doc.query_selector_all(selector).map_err(DomError::from)) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("dom: query `{selector}` failed: {err}");
            Vec::new()
        }
    }
}

/// Every match for `selector` under `root`.
pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("dom: query `{selector}` failed: {}", DomError::from(err));
            Vec::new()
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Log a failed JavaScript call.
pub fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("dom: {what} failed: {}", DomError::from(err));
    }
}

/// Set an inline style; an empty value removes the property.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    if value.is_empty() {
        warn_on_err("remove style", style.remove_property(property));
    } else {
        warn_on_err("set style", style.set_property(property, value));
    }
}

pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(el, property, value);
    }
}

pub fn add_class(el: &Element, class: &str) {
    warn_on_err("add class", el.class_list().add_1(class));
}

pub fn remove_class(el: &Element, class: &str) {
    warn_on_err("remove class", el.class_list().remove_1(class));
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    warn_on_err("set attribute", el.set_attribute(name, value));
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Attach a listener for the life of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    listen_owned(target, event, handler).forget();
}

/// Attach a listener owned by the caller. Dropping the closure detaches the
/// JavaScript function, so keep it as long as the target lives.
pub fn listen_owned(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Closure<dyn FnMut(Event)> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    warn_on_err(
        "add listener",
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
    );
    callback
}

/// Read the fields the reveal engine looks at.
pub fn snapshot(el: &Element) -> ElementSnapshot {
    let list = el.class_list();
    let classes = (0..list.length()).filter_map(|i| list.item(i)).collect();
    let attributes = MARKER_ATTRIBUTES
        .iter()
        .filter_map(|name| el.get_attribute(name).map(|value| ((*name).to_owned(), value)))
        .collect();
    ElementSnapshot {
        tag: el.tag_name().to_ascii_uppercase(),
        classes,
        attributes,
        text: el.text_content().unwrap_or_default(),
        child_count: el.child_element_count() as usize,
    }
}
