//! Pure math/data for positions, bounds and colors in Folio
//!
//! This crate contains the geometry primitives and color definitions
//! shared by the effect controllers and the platform adapters.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
