// crates/rxlabel-web/src/dom.rs
// Small web_sys helpers shared by the page sections

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it; `None` if missing or of another type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("Invalid selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::warn!("class_list update failed for '{}': {:?}", class, e);
    }
}

/// Attach a listener for the lifetime of the page
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to bind '{}' listener: {:?}", event, e);
    }
    closure.forget();
}

/// Like [`listen`], registered as passive so touch scrolling is never blocked
pub fn listen_passive<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("Failed to bind '{}' listener: {:?}", event, e);
    }
    closure.forget();
}

/// Current value of an input, select or textarea
pub fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }
}

pub fn set_control_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}
