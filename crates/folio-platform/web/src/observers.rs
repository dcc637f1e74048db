//! Reveal-on-scroll, lazy images and image fallback logging.

use crate::dom::{has_property, listen, query_all, set_class, viewport_size};
use crate::WebError;
use folio_effects::{resolve_image_source, ObserverOptions, RevealAction, RevealConfig, RevealTracker};
use folio_graphics::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

type RevealHandler = Box<dyn Fn(&Element)>;

/// Observes `elements` and calls `on_reveal` the first time each one
/// intersects. The observer lives as long as the page.
fn observe_once(
    elements: Vec<Element>,
    mut tracker: RevealTracker<usize>,
    options: Option<&ObserverOptions>,
    on_reveal: RevealHandler,
) -> Result<(), WebError> {
    for index in 0..elements.len() {
        tracker.observe(index);
    }
    let elements = Rc::new(elements);
    let tracker = RefCell::new(tracker);

    let callback = {
        let elements = Rc::clone(&elements);
        Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = elements.iter().position(|element| *element == target) else {
                    continue;
                };
                let action = tracker
                    .borrow_mut()
                    .on_intersection(&index, entry.is_intersecting());
                match action {
                    RevealAction::None => {}
                    RevealAction::Reveal => on_reveal(&target),
                    RevealAction::RevealAndUnobserve => {
                        on_reveal(&target);
                        observer.unobserve(&target);
                    }
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let observer = match options {
        Some(options) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold as f64));
            init.set_root_margin(&options.root_margin.to_css_margin());
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    }
    .map_err(|err| WebError::js("IntersectionObserver", err))?;
    callback.forget();

    for element in elements.iter() {
        observer.observe(element);
    }
    Ok(())
}

/// Adds the visible class to `[data-aos]` elements as they scroll in.
pub(crate) fn bind_reveal(
    window: &Window,
    document: &Document,
    config: &RevealConfig,
) -> Result<(), WebError> {
    let elements = query_all(document, "[data-aos]")?;
    if elements.is_empty() {
        return Ok(());
    }
    let visible_class = config.visible_class.clone();
    let reveal = move |element: &Element| set_class(element, &visible_class, true);

    if has_property(window, "IntersectionObserver") {
        return observe_once(
            elements,
            RevealTracker::for_animations(),
            Some(&config.options),
            Box::new(reveal),
        );
    }

    log::debug!("IntersectionObserver unavailable, revealing on scroll events");
    let mut tracker = RevealTracker::for_animations();
    for index in 0..elements.len() {
        tracker.observe(index);
    }
    let options = config.options;
    let source = window.clone();
    let mut scan = move || {
        let (width, height) = viewport_size(&source);
        let viewport = Rect::new(0.0, 0.0, width, height);
        let bounds_of = |index: &usize| {
            elements.get(*index).map(|element| {
                let rect = element.get_bounding_client_rect();
                Rect::new(
                    rect.x() as f32,
                    rect.y() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                )
            })
        };
        for (index, _) in tracker.scan(viewport, &options, bounds_of) {
            if let Some(element) = elements.get(index) {
                reveal(element);
            }
        }
    };
    scan();
    listen(window, "scroll", move |_| scan())
}

/// Swaps in `data-src` and marks images loaded once they become visible.
pub(crate) fn bind_lazy_images(
    window: &Window,
    document: &Document,
    config: &RevealConfig,
) -> Result<(), WebError> {
    if !has_property(window, "IntersectionObserver") {
        log::debug!("IntersectionObserver unavailable, images load eagerly");
        return Ok(());
    }
    let images = query_all(document, "img")?;
    let loaded_class = config.loaded_class.clone();
    let load = move |element: &Element| {
        if let Some(image) = element.dyn_ref::<HtmlImageElement>() {
            let data_src = image.get_attribute("data-src");
            let source = resolve_image_source(&image.src(), data_src.as_deref());
            if source != image.src() {
                image.set_src(&source);
            }
        }
        set_class(element, &loaded_class, true);
    };
    observe_once(images, RevealTracker::for_lazy_images(), None, Box::new(load))
}

/// Logs project images that fell back to their placeholder.
pub(crate) fn bind_image_errors(document: &Document) -> Result<(), WebError> {
    for element in query_all(document, ".project-image img")? {
        let source = element.clone();
        listen(&element, "error", move |_| {
            let alt = source
                .dyn_ref::<HtmlImageElement>()
                .map(HtmlImageElement::alt)
                .unwrap_or_default();
            log::info!("Using fallback image for: {alt}");
        })?;
    }
    Ok(())
}
