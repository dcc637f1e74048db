//! Copying the address of a `mailto:` link and the notification that
//! confirms it.

use crate::ToastConfig;

/// Address carried by a `mailto:` href. Only the first `mailto:` is
/// removed; anything else is returned as is.
pub fn email_from_href(href: &str) -> String {
    href.replacen("mailto:", "", 1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToastPhase {
    /// Sliding in.
    Entering,
    Visible,
    /// Sliding out.
    Exiting,
    /// Finished; the host removes the element.
    Removed,
}

/// Transient notification driven by frame timestamps.
///
/// The timeline is anchored to the first frame the toast observes, so a
/// toast created between frames starts on the next one.
#[derive(Clone, Debug)]
pub struct Toast {
    config: ToastConfig,
    shown_at_nanos: Option<u64>,
    phase: ToastPhase,
}

impl Toast {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            shown_at_nanos: None,
            phase: ToastPhase::Entering,
        }
    }

    pub fn message(&self) -> &str {
        &self.config.message
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Moves the timeline to `now_nanos` and returns the phase. Phases never
    /// go backwards.
    pub fn advance(&mut self, now_nanos: u64) -> ToastPhase {
        let shown_at = *self.shown_at_nanos.get_or_insert(now_nanos);
        let elapsed_millis = now_nanos.saturating_sub(shown_at) / 1_000_000;
        let transition = self.config.transition_millis;
        let visible = self.config.visible_millis;

        let phase = if elapsed_millis < transition.min(visible) {
            ToastPhase::Entering
        } else if elapsed_millis < visible {
            ToastPhase::Visible
        } else if elapsed_millis < visible + transition {
            ToastPhase::Exiting
        } else {
            ToastPhase::Removed
        };
        if phase > self.phase {
            log::trace!("toast {:?} -> {:?} at {}ms", self.phase, phase, elapsed_millis);
            self.phase = phase;
        }
        self.phase
    }

    /// CSS `animation` value for entering or leaving the screen.
    pub fn animation_for(&self, phase: ToastPhase) -> Option<String> {
        let seconds = self.config.transition_millis as f32 / 1000.0;
        match phase {
            ToastPhase::Entering => Some(format!("slideIn {seconds}s ease")),
            ToastPhase::Exiting => Some(format!("slideOut {seconds}s ease")),
            ToastPhase::Visible | ToastPhase::Removed => None,
        }
    }

    pub fn is_removed(&self) -> bool {
        self.phase == ToastPhase::Removed
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
