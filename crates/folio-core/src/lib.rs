//! Core runtime services for Folio.
//!
//! Folio drives page effects from a single-threaded frame loop. This crate
//! owns that loop together with the traits the host platform implements:
//! frame scheduling, a monotonic clock, and a surface that can create
//! positioned visual elements.

mod clock;
mod frame_loop;
mod platform;
mod surface;

pub use clock::SystemClock;
pub use frame_loop::{Frame, FrameLoop, FrameTaskRegistration, WeakFrameLoop};
pub use platform::{Clock, FrameScheduler};
pub use surface::{ElementSpec, NullElement, Surface, VisualElement};

pub mod prelude {
    pub use crate::{Clock, Frame, FrameLoop, FrameScheduler, Surface, VisualElement};
}
