//! DOM lookup and mutation helpers.
//!
//! Lookups come in two flavours: `find_*` returns `None` for an absent
//! element, `require_*` turns absence into [`ClientError::MissingElement`].
//! Mutations log and swallow DOM exceptions.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::ClientError;

pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or(ClientError::NoBrowser)
}

pub fn document() -> Result<Document, ClientError> {
    window()?.document().ok_or(ClientError::NoBrowser)
}

pub fn find_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn find_html(document: &Document, id: &str) -> Result<Option<HtmlElement>, ClientError> {
    find_id(document, id).map(|el| cast(el, id, "HtmlElement")).transpose()
}

pub fn require_id(document: &Document, id: &str) -> Result<Element, ClientError> {
    find_id(document, id).ok_or_else(|| ClientError::missing(format!("#{id}")))
}

pub fn require_html(document: &Document, id: &str) -> Result<HtmlElement, ClientError> {
    cast(require_id(document, id)?, id, "HtmlElement")
}

pub fn cast<T: JsCast>(element: Element, selector: &str, expected: &'static str) -> Result<T, ClientError> {
    element
        .dyn_into::<T>()
        .map_err(|_| ClientError::WrongElement { selector: selector.to_owned(), expected })
}

/// First match of `selector`; an invalid selector reads as no match.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("bad selector {selector}: {}", describe(&e));
            None
        }
    }
}

/// All matches of `selector` in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {selector}: {}", describe(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element children of `parent`.
pub fn children(parent: &Element) -> Vec<Element> {
    let list = parent.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("style {property}={value} failed: {}", describe(&e));
    }
}

pub fn navigate(url: &str) {
    let result = window().map(|w| w.location().set_href(url));
    match result {
        Ok(Ok(())) => log::debug!("navigating to {url}"),
        Ok(Err(e)) => log::warn!("navigation to {url} failed: {}", describe(&e)),
        Err(e) => log::warn!("navigation to {url} failed: {e}"),
    }
}

/// Create an element with the given classes.
pub fn create(document: &Document, tag: &str, classes: &[&str]) -> Result<Element, ClientError> {
    let element = document
        .create_element(tag)
        .map_err(|e| ClientError::Dom(describe(&e)))?;
    for class in classes {
        element
            .class_list()
            .add_1(class)
            .map_err(|e| ClientError::Dom(describe(&e)))?;
    }
    Ok(element)
}
