//! Small DOM helpers shared by the bindings.

use crate::WebError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement};

/// Adds a listener that lives as long as the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| WebError::js("addEventListener", err))?;
    closure.forget();
    Ok(())
}

/// Every element matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| WebError::js("querySelectorAll", err))?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub(crate) fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("failed to set class '{class}': {err:?}");
    }
}

pub(crate) fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) {
    if let Err(err) = style.set_property(property, value) {
        log::warn!("failed to set style {property}: {err:?}");
    }
}

/// `true` when `name` is a property of `target`, e.g. a global constructor.
pub(crate) fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Current viewport size in CSS pixels.
pub(crate) fn viewport_size(window: &web_sys::Window) -> (f32, f32) {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|value| value.as_f64()).map(|value| value as f32)
    };
    let width = dimension(window.inner_width()).unwrap_or_else(|| {
        log::debug!("viewport width unavailable, assuming a desktop display");
        f32::MAX
    });
    let height = dimension(window.inner_height()).unwrap_or(0.0);
    (width, height)
}
