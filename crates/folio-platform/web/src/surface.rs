use crate::dom::set_style;
use crate::WebError;
use folio_core::{ElementSpec, NullElement, Surface, VisualElement};
use folio_graphics::Point;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Inline style for an overlay element described by `spec`.
///
/// Elements are centered on their position with a `translate(-50%, -50%)`
/// that scale changes keep.
pub fn element_css(spec: &ElementSpec) -> String {
    let mut css = format!(
        "width: {size}px; height: {size}px; border-radius: 50%; position: fixed; \
         left: 0px; top: 0px; pointer-events: {events}; z-index: {z}; \
         transform: {transform}; mix-blend-mode: difference;",
        size = spec.size,
        events = if spec.pointer_events { "auto" } else { "none" },
        z = spec.z_index,
        transform = transform_css(1.0),
    );
    if spec.transition_millis > 0 {
        css.push_str(&format!(
            " transition: transform {}s ease;",
            spec.transition_millis as f32 / 1000.0
        ));
    }
    if let Some(fill) = spec.fill {
        css.push_str(&format!(" background-color: {};", fill.to_css()));
    }
    if let Some((width, color)) = spec.border {
        css.push_str(&format!(" border: {}px solid {};", width, color.to_css()));
    }
    css
}

fn transform_css(scale: f32) -> String {
    format!("translate(-50%, -50%) scale({scale})")
}

/// Creates overlay `div`s under a parent element, normally `<body>`.
pub struct DomSurface {
    document: Document,
    parent: HtmlElement,
}

impl DomSurface {
    pub fn new(document: Document) -> Result<Self, WebError> {
        let parent = document.body().ok_or(WebError::MissingElement("body"))?;
        Ok(Self { document, parent })
    }

    fn build(&self, spec: &ElementSpec) -> Result<HtmlElement, WebError> {
        let element = self
            .document
            .create_element("div")
            .map_err(|err| WebError::js("createElement", err))?
            .unchecked_into::<HtmlElement>();
        element
            .class_list()
            .add_1(&spec.class_name)
            .map_err(|err| WebError::js("classList.add", err))?;
        element.style().set_css_text(&element_css(spec));
        self.parent
            .append_child(&element)
            .map_err(|err| WebError::js("appendChild", err))?;
        Ok(element)
    }
}

impl Surface for DomSurface {
    fn create_element(&self, spec: &ElementSpec) -> Box<dyn VisualElement> {
        match self.build(spec) {
            Ok(element) => Box::new(DomElement::new(element)),
            Err(err) => {
                log::warn!("could not create '{}': {err}", spec.class_name);
                Box::new(NullElement)
            }
        }
    }
}

/// Fixed-position element positioned through inline `left`/`top`.
pub struct DomElement {
    element: HtmlElement,
}

impl DomElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl VisualElement for DomElement {
    fn set_position(&mut self, position: Point) {
        let style = self.element.style();
        set_style(&style, "left", &format!("{}px", position.x));
        set_style(&style, "top", &format!("{}px", position.y));
    }

    fn set_scale(&mut self, scale: f32) {
        set_style(&self.element.style(), "transform", &transform_css(scale));
    }

    fn set_visible(&mut self, visible: bool) {
        set_style(
            &self.element.style(),
            "display",
            if visible { "" } else { "none" },
        );
    }

    fn remove(&mut self) {
        self.element.remove();
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;
