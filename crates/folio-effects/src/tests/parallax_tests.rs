use super::*;

#[test]
fn hero_moves_at_half_speed_and_fades() {
    let parallax = HeroParallax::default();

    let top = parallax.style_at(0.0, 900.0).expect("in view");
    assert_eq!(top, HeroStyle { translate_y: 0.0, opacity: 1.0 });

    let middle = parallax.style_at(300.0, 900.0).expect("in view");
    assert_eq!(middle.translate_y, 150.0);
    assert!((middle.opacity - 0.5).abs() < 1e-6);
    assert_eq!(middle.transform_css(), "translateY(150px)");
}

#[test]
fn opacity_is_clamped_past_the_fade_distance() {
    let parallax = HeroParallax::default();
    let style = parallax.style_at(800.0, 1000.0).expect("in view");
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.translate_y, 400.0);
}

#[test]
fn overscroll_does_not_exceed_full_opacity() {
    let parallax = HeroParallax::default();
    let style = parallax.style_at(-60.0, 900.0).expect("in view");
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.translate_y, -30.0);
}

#[test]
fn no_update_once_hero_is_out_of_view() {
    let parallax = HeroParallax::default();
    assert_eq!(parallax.style_at(900.0, 900.0), None);
    assert_eq!(parallax.style_at(1500.0, 900.0), None);
}

#[test]
fn zero_fade_distance_hides_immediately() {
    let parallax = HeroParallax::new(ParallaxConfig {
        factor: 0.25,
        fade_distance: 0.0,
    });
    let style = parallax.style_at(40.0, 900.0).expect("in view");
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.translate_y, 10.0);
}
