//! Color representation and CSS serialization

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Serializes as `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (channel(self.0), channel(self.1), channel(self.2));
        if self.3 >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.3.clamp(0.0, 1.0))
        }
    }

    /// Accent used by the cursor, links and the copy notification.
    pub const ACCENT: Color = Color(100.0 / 255.0, 1.0, 218.0 / 255.0, 1.0);
    /// Page background navy, used as text color on accent surfaces.
    pub const NAVY: Color = Color(10.0 / 255.0, 25.0 / 255.0, 47.0 / 255.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
