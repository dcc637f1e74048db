//! Rendering surface contracts.
//!
//! Controllers never touch the DOM directly. They ask a [`Surface`] for
//! [`VisualElement`]s described by an [`ElementSpec`] and then only move,
//! scale and show/hide them.

use folio_graphics::{Color, Point};

/// Static description of an overlay element created on a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementSpec {
    /// Class name applied to the element, also used to look it up in tests.
    pub class_name: String,
    /// Diameter in logical pixels.
    pub size: f32,
    pub fill: Option<Color>,
    /// Border width and color.
    pub border: Option<(f32, Color)>,
    pub z_index: i32,
    /// Whether the element may receive pointer events. Overlays that
    /// follow the pointer must not intercept input.
    pub pointer_events: bool,
    /// Duration of the CSS transition applied to scale changes.
    pub transition_millis: u32,
}

impl ElementSpec {
    pub fn new(class_name: impl Into<String>, size: f32) -> Self {
        Self {
            class_name: class_name.into(),
            size,
            fill: None,
            border: None,
            z_index: 0,
            pointer_events: false,
            transition_millis: 0,
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border = Some((width, color));
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_transition_millis(mut self, millis: u32) -> Self {
        self.transition_millis = millis;
        self
    }
}

/// A positioned element owned by a controller.
pub trait VisualElement {
    /// Moves the element's center to `position` in viewport coordinates.
    fn set_position(&mut self, position: Point);
    fn set_scale(&mut self, scale: f32);
    fn set_visible(&mut self, visible: bool);
    /// Detaches the element from its surface.
    fn remove(&mut self);
}

/// Creates visual elements on behalf of controllers.
pub trait Surface {
    fn create_element(&self, spec: &ElementSpec) -> Box<dyn VisualElement>;
}

/// Element that ignores every write. Used when a surface cannot create a
/// real element, which turns the owning effect into a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullElement;

impl VisualElement for NullElement {
    fn set_position(&mut self, _position: Point) {}

    fn set_scale(&mut self, _scale: f32) {}

    fn set_visible(&mut self, _visible: bool) {}

    fn remove(&mut self) {}
}
