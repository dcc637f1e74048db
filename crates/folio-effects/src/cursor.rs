//! Custom cursor: a dot pinned to the pointer and a ring easing after it.
//!
//! The dot moves synchronously with every pointer-move notification. The
//! ring only moves on frame ticks, closing `ease_factor` of the remaining
//! distance each frame. The step is not corrected for frame rate, so faster
//! displays converge sooner in wall-clock time.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FrameLoop, FrameTaskRegistration, Surface, VisualElement};
use folio_graphics::Point;

use crate::CursorConfig;

/// Elements that enlarge the cursor while hovered.
pub const INTERACTIVE_SELECTORS: &[&str] = &["a", "button", ".project-card", ".skill-item"];

/// [`INTERACTIVE_SELECTORS`] joined into one selector list.
pub fn interactive_selector() -> String {
    INTERACTIVE_SELECTORS.join(", ")
}

/// Cursor follower controller. One instance per page.
///
/// Cloning is not supported; share it behind an `Rc` when several input
/// callbacks need it.
pub struct CursorFollower {
    inner: Rc<RefCell<FollowerInner>>,
    registration: RefCell<Option<FrameTaskRegistration>>,
}

struct FollowerInner {
    config: CursorConfig,
    pointer: Point,
    follower: Point,
    dot: Option<Box<dyn VisualElement>>,
    ring: Option<Box<dyn VisualElement>>,
    hidden: bool,
    hovered: bool,
}

impl FollowerInner {
    fn step(&mut self) -> Point {
        self.follower = self.follower.lerp(self.pointer, self.config.ease_factor);
        if let Some(ring) = self.ring.as_mut() {
            ring.set_position(self.follower);
        }
        self.follower
    }

    fn apply_scale(&mut self) {
        let (dot_scale, ring_scale) = if self.hovered {
            (self.config.dot_hover_scale, self.config.ring_hover_scale)
        } else {
            (1.0, 1.0)
        };
        if let Some(dot) = self.dot.as_mut() {
            dot.set_scale(dot_scale);
        }
        if let Some(ring) = self.ring.as_mut() {
            ring.set_scale(ring_scale);
        }
    }
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FollowerInner {
                config,
                pointer: Point::ZERO,
                follower: Point::ZERO,
                dot: None,
                ring: None,
                hidden: false,
                hovered: false,
            })),
            registration: RefCell::new(None),
        }
    }

    /// Creates the dot and ring on `surface`.
    ///
    /// `viewport_width` is checked once, here. At or below the configured
    /// breakpoint both elements stay hidden for the rest of the session,
    /// even if the viewport is later resized.
    pub fn attach(&self, surface: &dyn Surface, viewport_width: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.dot.is_some() {
            log::debug!("cursor follower already attached");
            return;
        }

        let mut dot = surface.create_element(&inner.config.dot);
        let mut ring = surface.create_element(&inner.config.ring);
        dot.set_position(inner.pointer);
        ring.set_position(inner.follower);

        inner.hidden = viewport_width <= inner.config.mobile_breakpoint;
        if inner.hidden {
            log::debug!("viewport {viewport_width}px is touch sized, hiding cursor follower");
            dot.set_visible(false);
            ring.set_visible(false);
        }

        inner.dot = Some(dot);
        inner.ring = Some(ring);
    }

    /// Removes both elements from their surface. The frame task, if any,
    /// keeps updating positions with no visible effect.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        for mut element in [inner.dot.take(), inner.ring.take()].into_iter().flatten() {
            element.remove();
        }
    }

    /// Registers the per-frame update on `frame_loop` and starts the loop.
    pub fn start(&self, frame_loop: &FrameLoop) {
        let mut registration = self.registration.borrow_mut();
        if registration.is_none() {
            let inner = Rc::clone(&self.inner);
            *registration = Some(frame_loop.register(move |_frame| {
                inner.borrow_mut().step();
            }));
        }
        frame_loop.start();
    }

    /// Cancels the per-frame update. The loop itself keeps serving any
    /// other tasks registered on it.
    pub fn stop(&self) {
        if let Some(registration) = self.registration.borrow_mut().take() {
            registration.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.registration
            .borrow()
            .as_ref()
            .map(FrameTaskRegistration::is_active)
            .unwrap_or(false)
    }

    /// Records the pointer and moves the dot there with no smoothing.
    pub fn on_pointer_move(&self, x: f32, y: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.pointer = Point::new(x, y);
        let pointer = inner.pointer;
        if let Some(dot) = inner.dot.as_mut() {
            dot.set_position(pointer);
        }
    }

    /// Advances the ring one frame towards the pointer and returns its new
    /// position.
    pub fn step(&self) -> Point {
        self.inner.borrow_mut().step()
    }

    pub fn on_hover_enter(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.hovered = true;
        inner.apply_scale();
    }

    pub fn on_hover_leave(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.hovered = false;
        inner.apply_scale();
    }

    pub fn pointer(&self) -> Point {
        self.inner.borrow().pointer
    }

    pub fn follower(&self) -> Point {
        self.inner.borrow().follower
    }

    pub fn is_hidden(&self) -> bool {
        self.inner.borrow().hidden
    }

    pub fn is_hovered(&self) -> bool {
        self.inner.borrow().hovered
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CursorConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/cursor_tests.rs"]
mod tests;
