use super::*;
use crate::RevealConfig;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

#[test]
fn bottom_margin_delays_reveal() {
    let options = RevealConfig::default().options;

    // Top 60px visible in the raw viewport, but below the -100px margin.
    let entering = Rect::new(0.0, 740.0, 400.0, 300.0);
    assert!(!options.intersects(entering, VIEWPORT));

    // 50px of 300px inside the shrunk root: ratio 1/6 passes 0.1.
    let further = Rect::new(0.0, 650.0, 400.0, 300.0);
    assert!(options.intersects(further, VIEWPORT));
}

#[test]
fn threshold_requires_a_tenth_of_the_element() {
    let options = RevealConfig::default().options;
    // 20px of 400px inside the shrunk root (bottom edge at 700).
    let sliver = Rect::new(0.0, 680.0, 100.0, 400.0);
    let ratio = options.intersection_ratio(sliver, VIEWPORT);
    assert!((ratio - 0.05).abs() < 1e-6);
    assert!(!options.intersects(sliver, VIEWPORT));
}

#[test]
fn default_options_accept_touching_elements() {
    let options = ObserverOptions::default();
    let touching = Rect::new(0.0, 800.0, 100.0, 100.0);
    assert!(options.intersects(touching, VIEWPORT));
    let below = Rect::new(0.0, 801.0, 100.0, 100.0);
    assert!(!options.intersects(below, VIEWPORT));
}

#[test]
fn animations_reveal_once_and_stay_observed() {
    let mut tracker = RevealTracker::for_animations();
    assert!(tracker.observe(1));
    assert!(!tracker.observe(1));

    assert_eq!(tracker.on_intersection(&1, false), RevealAction::None);
    assert_eq!(tracker.on_intersection(&1, true), RevealAction::Reveal);
    assert_eq!(tracker.on_intersection(&1, true), RevealAction::None);
    assert!(tracker.is_revealed(&1));
    assert!(!tracker.observe(1));
}

#[test]
fn lazy_images_are_unobserved_after_loading() {
    let mut tracker = RevealTracker::for_lazy_images();
    tracker.observe("hero.png");
    tracker.observe("card.png");

    assert_eq!(
        tracker.on_intersection(&"card.png", true),
        RevealAction::RevealAndUnobserve
    );
    assert_eq!(tracker.pending_count(), 1);
    assert_eq!(tracker.on_intersection(&"unknown.png", true), RevealAction::None);
}

#[test]
fn scan_reveals_only_visible_pending_elements() {
    let mut tracker = RevealTracker::for_animations();
    for key in 0..3 {
        tracker.observe(key);
    }
    let bounds = |key: &i32| match key {
        0 => Some(Rect::new(0.0, 100.0, 200.0, 200.0)),
        1 => Some(Rect::new(0.0, 2000.0, 200.0, 200.0)),
        _ => None,
    };
    let options = RevealConfig::default().options;

    let revealed = tracker.scan(VIEWPORT, &options, bounds);
    assert_eq!(revealed, vec![(0, RevealAction::Reveal)]);
    assert!(tracker.scan(VIEWPORT, &options, bounds).is_empty());
    assert_eq!(tracker.pending_count(), 2);
}

#[test]
fn image_source_prefers_non_empty_data_src() {
    assert_eq!(resolve_image_source("low.jpg", Some("high.jpg")), "high.jpg");
    assert_eq!(resolve_image_source("low.jpg", Some("")), "low.jpg");
    assert_eq!(resolve_image_source("low.jpg", None), "low.jpg");
}
