//! Scroll-driven effects: navbar shadow, scroll-spy and hero parallax.

use crate::dom::{html_element_by_id, listen, query_all, set_class, set_style, viewport_size};
use crate::WebError;
use folio_effects::{FolioSettings, HeroParallax, NavbarShadow, ScrollSpy, Section};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub(crate) fn bind_scroll_effects(
    window: &Window,
    document: &Document,
    settings: &FolioSettings,
) -> Result<(), WebError> {
    let navbar = html_element_by_id(document, "navbar");
    let shadow = NavbarShadow::from_config(&settings.navigation);

    let sections: Vec<HtmlElement> = query_all(document, "section[id]")?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect();
    let links = query_all(document, ".nav-link")?;
    let mut spy = ScrollSpy::from_config(&settings.navigation);
    let active_class = settings.navigation.active_class.clone();

    let hero = document
        .query_selector(".hero-content")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let parallax = HeroParallax::new(settings.parallax.clone());

    log::debug!(
        "scroll effects: navbar={}, {} sections, hero={}",
        navbar.is_some(),
        sections.len(),
        hero.is_some()
    );

    let source = window.clone();
    listen(window, "scroll", move |_| {
        let scroll_y = source.scroll_y().unwrap_or(0.0) as f32;

        if let Some(navbar) = &navbar {
            let value = shadow.shadow_for(scroll_y).unwrap_or("none");
            set_style(&navbar.style(), "box-shadow", value);
        }

        spy.set_sections(sections.iter().filter_map(section_bounds).collect());
        if spy.update(scroll_y).is_some() {
            highlight_links(&links, &spy, &active_class);
        }

        if let Some(hero) = &hero {
            let (_, viewport_height) = viewport_size(&source);
            if let Some(style) = parallax.style_at(scroll_y, viewport_height) {
                let css = hero.style();
                set_style(&css, "transform", &style.transform_css());
                set_style(&css, "opacity", &style.opacity.to_string());
            }
        }
    })
}

fn section_bounds(section: &HtmlElement) -> Option<Section> {
    let id = section.get_attribute("id")?;
    Some(Section::new(
        id,
        section.offset_top() as f32,
        section.offset_height() as f32,
    ))
}

fn highlight_links(links: &[Element], spy: &ScrollSpy, active_class: &str) {
    for link in links {
        let active = link
            .get_attribute("href")
            .map(|href| spy.is_link_active(&href))
            .unwrap_or(false);
        set_class(link, active_class, active);
    }
}
