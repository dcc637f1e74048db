//! Reveal-on-scroll and lazy image bookkeeping.
//!
//! Hosts report intersection changes; the tracker decides, once per
//! element, when to reveal it and whether to stop observing it.

use std::collections::HashSet;
use std::hash::Hash;

use folio_graphics::{EdgeInsets, Rect};

/// Geometry of an intersection check, mirroring `IntersectionObserver`
/// options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the element.
    pub threshold: f32,
    /// Applied to the viewport before testing; negative values shrink it.
    pub root_margin: EdgeInsets,
}

impl ObserverOptions {
    /// Fraction of `bounds` inside the margin-adjusted `viewport`.
    pub fn intersection_ratio(&self, bounds: Rect, viewport: Rect) -> f32 {
        let root = viewport.outset(self.root_margin);
        let Some(overlap) = bounds.intersect(&root) else {
            return 0.0;
        };
        let area = bounds.size().area();
        if area == 0.0 {
            // Zero-sized targets count as fully visible when touching the root.
            return 1.0;
        }
        overlap.size().area() / area
    }

    pub fn intersects(&self, bounds: Rect, viewport: Rect) -> bool {
        let root = viewport.outset(self.root_margin);
        if bounds.intersect(&root).is_none() {
            return false;
        }
        self.intersection_ratio(bounds, viewport) >= self.threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    None,
    /// Mark the element revealed; keep observing it.
    Reveal,
    /// Mark the element revealed and stop observing it.
    RevealAndUnobserve,
}

/// Tracks which observed elements are still waiting to be revealed.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    pending: HashSet<K>,
    revealed: HashSet<K>,
    unobserve_on_reveal: bool,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    /// Tracker for scroll animations: revealed elements stay observed.
    pub fn for_animations() -> Self {
        Self::new(false)
    }

    /// Tracker for lazy images: loaded images are unobserved.
    pub fn for_lazy_images() -> Self {
        Self::new(true)
    }

    fn new(unobserve_on_reveal: bool) -> Self {
        Self {
            pending: HashSet::new(),
            revealed: HashSet::new(),
            unobserve_on_reveal,
        }
    }

    /// Starts tracking `key`. Returns `false` if it was already known.
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    /// Handles one intersection notification for `key`.
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> RevealAction {
        if !is_intersecting || !self.pending.remove(key) {
            return RevealAction::None;
        }
        self.revealed.insert(key.clone());
        if self.unobserve_on_reveal {
            RevealAction::RevealAndUnobserve
        } else {
            RevealAction::Reveal
        }
    }

    /// Geometric fallback for hosts without intersection notifications:
    /// checks every pending key against `viewport`.
    pub fn scan(
        &mut self,
        viewport: Rect,
        options: &ObserverOptions,
        bounds_of: impl Fn(&K) -> Option<Rect>,
    ) -> Vec<(K, RevealAction)> {
        let visible: Vec<K> = self
            .pending
            .iter()
            .filter(|key| {
                bounds_of(key)
                    .map(|bounds| options.intersects(bounds, viewport))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        visible
            .into_iter()
            .map(|key| {
                let action = self.on_intersection(&key, true);
                (key, action)
            })
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }
}

/// Source a lazy image should load: its `data-src` when set and non-empty,
/// otherwise its current `src`.
pub fn resolve_image_source(src: &str, data_src: Option<&str>) -> String {
    match data_src {
        Some(data_src) if !data_src.is_empty() => data_src.to_string(),
        _ => src.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
