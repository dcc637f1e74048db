//! Right-click on a `mailto:` link copies the address and confirms with a
//! toast.

use crate::dom::{has_property, listen, query_all, set_style};
use crate::WebError;
use folio_core::{FrameLoop, FrameTaskRegistration};
use folio_effects::{email_from_href, Toast, ToastConfig, ToastPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Window};

/// Keyframes referenced by the toast's `animation` values.
pub(crate) const SLIDE_KEYFRAMES: &str = "
@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}
";

pub(crate) fn toast_css(config: &ToastConfig) -> String {
    format!(
        "position: fixed; bottom: {inset}px; right: {inset}px; background-color: {background}; \
         color: {foreground}; padding: 15px 25px; border-radius: 5px; font-weight: 500; \
         z-index: 10000;",
        inset = config.inset,
        background = config.background.to_css(),
        foreground = config.foreground.to_css(),
    )
}

pub(crate) fn bind_email_copy(
    window: &Window,
    document: &Document,
    frame_loop: &FrameLoop,
    config: &ToastConfig,
) -> Result<(), WebError> {
    let links = query_all(document, "a[href^=\"mailto:\"]")?;
    if links.is_empty() {
        return Ok(());
    }
    install_keyframes(document)?;

    for link in links {
        let source = link.clone();
        let window = window.clone();
        let document = document.clone();
        let frame_loop = frame_loop.clone();
        let config = config.clone();
        listen(&link, "contextmenu", move |event| {
            event.prevent_default();
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let email = email_from_href(&href);
            let navigator = window.navigator();
            if !has_property(&navigator, "clipboard") {
                log::debug!("clipboard API unavailable, not copying {email}");
                return;
            }
            let promise = navigator.clipboard().write_text(&email);
            let document = document.clone();
            let frame_loop = frame_loop.clone();
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        log::debug!("copied {email} to clipboard");
                        if let Err(err) = show_toast(&document, &frame_loop, config) {
                            log::warn!("could not show copy notification: {err}");
                        }
                    }
                    Err(err) => log::warn!("clipboard write rejected: {err:?}"),
                }
            });
        })?;
    }
    Ok(())
}

fn install_keyframes(document: &Document) -> Result<(), WebError> {
    let head = document.head().ok_or(WebError::MissingElement("head"))?;
    let style = document
        .create_element("style")
        .map_err(|err| WebError::js("createElement", err))?;
    style.set_text_content(Some(SLIDE_KEYFRAMES));
    head.append_child(&style)
        .map_err(|err| WebError::js("appendChild", err))?;
    Ok(())
}

/// Appends the toast and lets the frame loop play its timeline, removing
/// the element when it finishes.
fn show_toast(document: &Document, frame_loop: &FrameLoop, config: ToastConfig) -> Result<(), WebError> {
    let body = document.body().ok_or(WebError::MissingElement("body"))?;
    let element = document
        .create_element("div")
        .map_err(|err| WebError::js("createElement", err))?
        .unchecked_into::<HtmlElement>();
    element.set_text_content(Some(&config.message));
    element.style().set_css_text(&toast_css(&config));

    let mut toast = Toast::new(config);
    if let Some(animation) = toast.animation_for(ToastPhase::Entering) {
        set_style(&element.style(), "animation", &animation);
    }
    body.append_child(&element)
        .map_err(|err| WebError::js("appendChild", err))?;

    let slot: Rc<RefCell<Option<FrameTaskRegistration>>> = Rc::new(RefCell::new(None));
    let registration = {
        let slot = Rc::clone(&slot);
        frame_loop.register(move |frame| {
            let previous = toast.phase();
            let phase = toast.advance(frame.time_nanos);
            if phase == previous {
                return;
            }
            if phase == ToastPhase::Removed {
                element.remove();
                if let Some(registration) = slot.borrow_mut().take() {
                    registration.cancel();
                }
            } else if let Some(animation) = toast.animation_for(phase) {
                set_style(&element.style(), "animation", &animation);
            }
        })
    };
    *slot.borrow_mut() = Some(registration);
    frame_loop.start();
    Ok(())
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
