//! Page launcher.
//!
//! [`PortfolioLauncher`] collects settings and, on [`run`](PortfolioLauncher::run),
//! binds every effect to the current document.

use crate::clipboard::bind_email_copy;
use crate::cursor::bind_cursor;
use crate::navigation::{bind_menu, bind_smooth_scroll};
use crate::observers::{bind_image_errors, bind_lazy_images, bind_reveal};
use crate::scroll::bind_scroll_effects;
use crate::{AnimationFrameScheduler, DomSurface, WebError};
use folio_core::FrameLoop;
use folio_effects::{
    CursorConfig, CursorFollower, FolioSettings, NavigationConfig, ParallaxConfig, RevealConfig,
    ToastConfig,
};
use std::rc::Rc;

/// Lines logged to the browser console when the page starts.
pub const CONSOLE_BANNER: &[&str] = &[
    "🚀 Welcome to my portfolio!",
    "Built with passion using HTML, CSS, and JavaScript",
    "GitHub: @unseen2004",
];

/// Builder for a running [`Portfolio`].
///
/// # Example
///
/// ```no_run
/// use folio_platform_web::PortfolioLauncher;
///
/// let portfolio = PortfolioLauncher::new()
///     .with_cursor_ease(0.2)
///     .run()
///     .expect("portfolio failed to start");
/// ```
pub struct PortfolioLauncher {
    settings: FolioSettings,
}

impl PortfolioLauncher {
    pub fn new() -> Self {
        Self {
            settings: FolioSettings::default(),
        }
    }

    /// Replaces all settings at once.
    pub fn with_settings(mut self, settings: FolioSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_cursor(mut self, cursor: CursorConfig) -> Self {
        self.settings.cursor = cursor;
        self
    }

    /// Sets the fraction of the remaining distance the ring closes per frame.
    pub fn with_cursor_ease(mut self, ease_factor: f32) -> Self {
        self.settings.cursor.ease_factor = ease_factor;
        self
    }

    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.settings.navigation = navigation;
        self
    }

    pub fn with_parallax(mut self, parallax: ParallaxConfig) -> Self {
        self.settings.parallax = parallax;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.settings.reveal = reveal;
        self
    }

    pub fn with_toast(mut self, toast: ToastConfig) -> Self {
        self.settings.toast = toast;
        self
    }

    pub fn settings(&self) -> &FolioSettings {
        &self.settings
    }

    /// Binds every effect to the current page and starts the frame loop.
    pub fn run(self) -> Result<Portfolio, WebError> {
        let window = web_sys::window().ok_or(WebError::MissingWindow)?;
        let document = window.document().ok_or(WebError::MissingDocument)?;

        for line in CONSOLE_BANNER {
            log::info!("{line}");
        }

        // The loop owns the scheduler; the scheduler only holds a weak
        // handle back to the loop.
        let scheduler = Rc::new(AnimationFrameScheduler::new(window.clone()));
        let frame_loop = FrameLoop::new(scheduler.clone());
        scheduler.bind(&frame_loop);
        let surface = DomSurface::new(document.clone())?;

        let settings = self.settings;
        bind_menu(&document, &settings.navigation)?;
        bind_smooth_scroll(&window, &document, &settings.navigation)?;
        bind_scroll_effects(&window, &document, &settings)?;
        bind_reveal(&window, &document, &settings.reveal)?;
        bind_lazy_images(&window, &document, &settings.reveal)?;
        bind_image_errors(&document)?;
        bind_email_copy(&window, &document, &frame_loop, &settings.toast)?;
        let cursor = bind_cursor(&window, &document, &surface, &frame_loop, settings.cursor)?;

        log::info!("Portfolio initialized successfully! ✨");
        Ok(Portfolio { frame_loop, cursor })
    }
}

impl Default for PortfolioLauncher {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the effects bound by [`PortfolioLauncher::run`].
///
/// Event listeners live as long as the page regardless of this handle.
pub struct Portfolio {
    frame_loop: FrameLoop,
    cursor: Rc<CursorFollower>,
}

impl Portfolio {
    /// Stops the frame loop. Pending `requestAnimationFrame` callbacks run
    /// but deliver nothing.
    pub fn stop(&self) {
        self.cursor.stop();
        self.frame_loop.stop();
        log::debug!("portfolio frame loop stopped");
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn cursor(&self) -> &CursorFollower {
        &self.cursor
    }
}

#[cfg(test)]
#[path = "tests/launcher_tests.rs"]
mod tests;
