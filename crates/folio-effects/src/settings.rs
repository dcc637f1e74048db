//! Configuration for every effect.
//!
//! Defaults reproduce the portfolio page as shipped; platform launchers
//! override individual fields through builders.

use crate::ObserverOptions;
use folio_core::ElementSpec;
use folio_graphics::{Color, EdgeInsets};

/// Configuration for the whole page.
#[derive(Clone, Debug, Default)]
pub struct FolioSettings {
    pub cursor: CursorConfig,
    pub navigation: NavigationConfig,
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub toast: ToastConfig,
}

/// Cursor follower tuning.
#[derive(Clone, Debug)]
pub struct CursorConfig {
    /// Fraction of the remaining distance the ring closes per frame.
    pub ease_factor: f32,
    /// Viewports at or below this width (logical px) hide the cursor.
    pub mobile_breakpoint: f32,
    pub dot_hover_scale: f32,
    pub ring_hover_scale: f32,
    pub dot: ElementSpec,
    pub ring: ElementSpec,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ease_factor: 0.1,
            mobile_breakpoint: 768.0,
            dot_hover_scale: 2.0,
            ring_hover_scale: 1.5,
            dot: ElementSpec::new("custom-cursor", 10.0)
                .with_fill(Color::ACCENT)
                .with_z_index(10_000)
                .with_transition_millis(200),
            ring: ElementSpec::new("cursor-follower", 40.0)
                .with_border(2.0, Color::ACCENT)
                .with_z_index(9_999)
                .with_transition_millis(200),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavigationConfig {
    /// Height of the fixed header subtracted from smooth-scroll targets.
    pub scroll_offset: f32,
    /// Distance above a section at which the scroll-spy already selects it.
    pub spy_offset: f32,
    /// Navbar `box-shadow` once the page is scrolled.
    pub scrolled_shadow: String,
    pub active_class: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_offset: 80.0,
            spy_offset: 100.0,
            scrolled_shadow: "0 10px 30px -10px rgba(2, 12, 27, 0.7)".into(),
            active_class: "active".into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParallaxConfig {
    /// Hero translation per scrolled pixel.
    pub factor: f32,
    /// Scroll distance over which the hero fades out completely.
    pub fade_distance: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            factor: 0.5,
            fade_distance: 600.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RevealConfig {
    pub options: ObserverOptions,
    pub visible_class: String,
    pub loaded_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            options: ObserverOptions {
                threshold: 0.1,
                root_margin: EdgeInsets::from_components(0.0, 0.0, 0.0, -100.0),
            },
            visible_class: "visible".into(),
            loaded_class: "loaded".into(),
        }
    }
}

/// Copy notification appearance and timing.
#[derive(Clone, Debug)]
pub struct ToastConfig {
    pub message: String,
    /// Time from appearance until the exit animation starts.
    pub visible_millis: u64,
    /// Duration of the slide-in and slide-out animations.
    pub transition_millis: u64,
    pub background: Color,
    pub foreground: Color,
    /// Distance from the bottom-right corner of the viewport.
    pub inset: f32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            message: "Email copied to clipboard!".into(),
            visible_millis: 2_000,
            transition_millis: 300,
            background: Color::ACCENT,
            foreground: Color::NAVY,
            inset: 30.0,
        }
    }
}
