//! Web platform adapter for Folio.
//!
//! Binds the host-independent effects from `folio-effects` to the DOM with
//! `web-sys`: listeners forward browser events to the controllers,
//! `requestAnimationFrame` drives the frame loop, and [`DomSurface`] turns
//! visual elements into fixed-position `div`s.

mod clipboard;
mod cursor;
mod dom;
mod error;
mod launcher;
mod navigation;
mod observers;
mod scheduler;
mod scroll;
mod surface;

pub use error::WebError;
pub use launcher::{Portfolio, PortfolioLauncher, CONSOLE_BANNER};
pub use scheduler::AnimationFrameScheduler;
pub use surface::{element_css, DomElement, DomSurface};
