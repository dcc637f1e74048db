//! Page effects for Folio.
//!
//! Every effect is a host-independent controller: it consumes plain inputs
//! (pointer coordinates, scroll offsets, intersection notifications, frame
//! ticks) and produces positions, styles or class decisions that a platform
//! adapter applies to the page.

mod clipboard;
mod cursor;
mod navigation;
mod parallax;
mod reveal;
mod settings;

pub use clipboard::{email_from_href, Toast, ToastPhase};
pub use cursor::{interactive_selector, CursorFollower, INTERACTIVE_SELECTORS};
pub use navigation::{fragment_id, NavMenu, NavbarShadow, ScrollSpy, Section, SmoothScroll};
pub use parallax::{HeroParallax, HeroStyle};
pub use reveal::{resolve_image_source, ObserverOptions, RevealAction, RevealTracker};
pub use settings::{
    CursorConfig, FolioSettings, NavigationConfig, ParallaxConfig, RevealConfig, ToastConfig,
};
