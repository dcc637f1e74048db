use super::*;

#[test]
fn lerp_moves_fraction_of_the_distance() {
    let from = Point::ZERO;
    let to = Point::new(100.0, -50.0);
    assert_eq!(from.lerp(to, 0.1), Point::new(10.0, -5.0));
    assert_eq!(from.lerp(to, 1.0), to);
    assert_eq!(Point::new(3.0, 0.0).distance_to(Point::new(0.0, 4.0)), 5.0);
}

#[test]
fn intersect_returns_overlap_or_none() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 80.0, 100.0, 100.0);
    assert_eq!(a.intersect(&b), Some(Rect::new(50.0, 80.0, 50.0, 20.0)));

    let far = Rect::new(200.0, 200.0, 10.0, 10.0);
    assert_eq!(a.intersect(&far), None);
}

#[test]
fn negative_outset_shrinks_the_bottom_edge() {
    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let shrunk = viewport.outset(EdgeInsets::from_components(0.0, 0.0, 0.0, -100.0));
    assert_eq!(shrunk, Rect::new(0.0, 0.0, 1280.0, 700.0));
    assert!(!shrunk.contains(10.0, 750.0));
}

#[test]
fn css_margin_uses_top_right_bottom_left_order() {
    let insets = EdgeInsets::from_components(0.0, 0.0, 0.0, -100.0);
    assert_eq!(insets.to_css_margin(), "0px 0px -100px 0px");
    assert!(EdgeInsets::default().is_zero());
}
