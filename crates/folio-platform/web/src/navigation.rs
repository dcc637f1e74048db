//! Mobile menu toggle and smooth in-page scrolling.

use crate::dom::{html_element_by_id, listen, query_all, set_class};
use crate::WebError;
use folio_effects::{NavMenu, NavigationConfig, SmoothScroll};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

pub(crate) fn bind_menu(document: &Document, config: &NavigationConfig) -> Result<(), WebError> {
    let (Some(hamburger), Some(menu)) = (
        html_element_by_id(document, "hamburger"),
        html_element_by_id(document, "nav-menu"),
    ) else {
        log::debug!("no #hamburger/#nav-menu pair, mobile menu disabled");
        return Ok(());
    };

    let state = Rc::new(RefCell::new(NavMenu::new()));
    let apply = {
        let hamburger = hamburger.clone();
        let active_class = config.active_class.clone();
        Rc::new(move |open: bool| {
            set_class(&hamburger, &active_class, open);
            set_class(&menu, &active_class, open);
        })
    };

    {
        let state = Rc::clone(&state);
        let apply = Rc::clone(&apply);
        listen(&hamburger, "click", move |_| {
            let open = state.borrow_mut().toggle();
            apply(open);
        })?;
    }

    for link in query_all(document, ".nav-link")? {
        let state = Rc::clone(&state);
        let apply = Rc::clone(&apply);
        listen(&link, "click", move |_| {
            state.borrow_mut().close();
            apply(false);
        })?;
    }
    Ok(())
}

pub(crate) fn bind_smooth_scroll(
    window: &Window,
    document: &Document,
    config: &NavigationConfig,
) -> Result<(), WebError> {
    let scroll = SmoothScroll::from_config(config);
    for anchor in query_all(document, "a[href^=\"#\"]")? {
        let window = window.clone();
        let document = document.clone();
        let source = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let offset_top = |id: &str| {
                html_element_by_id(&document, id).map(|target| target.offset_top() as f32)
            };
            if let Some(top) = scroll.target_for(&href, offset_top) {
                let options = ScrollToOptions::new();
                options.set_top(top as f64);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            } else {
                log::debug!("no scroll target for {href}");
            }
        })?;
    }
    Ok(())
}
