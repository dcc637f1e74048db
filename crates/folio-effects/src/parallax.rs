//! Hero parallax: the hero drifts down at half the scroll speed and fades.

use crate::ParallaxConfig;

/// Style to apply to the hero content for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub translate_y: f32,
    pub opacity: f32,
}

impl HeroStyle {
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HeroParallax {
    config: ParallaxConfig,
}

impl HeroParallax {
    pub fn new(config: ParallaxConfig) -> Self {
        Self { config }
    }

    /// Style for `scroll_y`, or `None` once the hero has scrolled out of a
    /// viewport of `viewport_height`; the last applied style then stays.
    pub fn style_at(&self, scroll_y: f32, viewport_height: f32) -> Option<HeroStyle> {
        if scroll_y >= viewport_height {
            return None;
        }
        let fade = if self.config.fade_distance > 0.0 {
            scroll_y / self.config.fade_distance
        } else {
            1.0
        };
        Some(HeroStyle {
            translate_y: scroll_y * self.config.factor,
            opacity: (1.0 - fade).clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
#[path = "tests/parallax_tests.rs"]
mod tests;
