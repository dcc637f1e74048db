//! Navigation behaviors: mobile menu, smooth scrolling, navbar shadow and
//! the scroll-spy that highlights the current section's link.

use crate::NavigationConfig;

/// Open/closed state shared by the hamburger button and the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu, as after following a nav link.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Returns the element id referenced by an in-page `href`, if any.
///
/// A bare `#` references nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth scrolling to in-page anchors below a fixed header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    offset: f32,
}

impl SmoothScroll {
    pub fn new(offset: f32) -> Self {
        Self { offset }
    }

    pub fn from_config(config: &NavigationConfig) -> Self {
        Self::new(config.scroll_offset)
    }

    /// Vertical scroll position for `href`, or `None` when the link does
    /// not point at an existing element. `offset_top` resolves an element id
    /// to its document offset.
    pub fn target_for(
        &self,
        href: &str,
        offset_top: impl FnOnce(&str) -> Option<f32>,
    ) -> Option<f32> {
        let id = fragment_id(href)?;
        let top = offset_top(id)?;
        Some(top - self.offset)
    }
}

/// Navbar drop shadow, present only once the page has scrolled.
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarShadow {
    shadow: String,
}

impl NavbarShadow {
    pub fn new(shadow: impl Into<String>) -> Self {
        Self {
            shadow: shadow.into(),
        }
    }

    pub fn from_config(config: &NavigationConfig) -> Self {
        Self::new(config.scrolled_shadow.clone())
    }

    /// `None` means no shadow.
    pub fn shadow_for(&self, scroll_y: f32) -> Option<&str> {
        if scroll_y <= 0.0 {
            None
        } else {
            Some(&self.shadow)
        }
    }
}

/// A page section tracked by the [`ScrollSpy`].
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    offset: f32,
    sections: Vec<Section>,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            sections: Vec::new(),
            active: None,
        }
    }

    pub fn from_config(config: &NavigationConfig) -> Self {
        Self::new(config.spy_offset)
    }

    /// Replaces the tracked sections. Sections are expected in document
    /// order; layout may move them, so hosts refresh before each update.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Recomputes the active section for `scroll_y`.
    ///
    /// A section matches while `scroll_y` lies in `(top - offset,
    /// top - offset + height]`. When several match the last one wins; when
    /// none match the previous selection is kept.
    pub fn update(&mut self, scroll_y: f32) -> Option<&str> {
        let offset = self.offset;
        let matched = self
            .sections
            .iter()
            .filter(|section| {
                let top = section.top - offset;
                scroll_y > top && scroll_y <= top + section.height
            })
            .last();
        if let Some(section) = matched {
            if self.active.as_deref() != Some(section.id.as_str()) {
                log::debug!("scroll-spy now on #{}", section.id);
                self.active = Some(section.id.clone());
            }
        }
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the nav link with `href` should carry the active class.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (self.active.as_deref(), fragment_id(href)) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
