use super::*;

#[test]
fn opaque_colors_serialize_as_hex() {
    assert_eq!(Color::ACCENT.to_css(), "#64ffda");
    assert_eq!(Color::NAVY.to_css(), "#0a192f");
    assert_eq!(Color::from_rgb_u8(1, 2, 3).to_css(), "#010203");
}

#[test]
fn translucent_colors_serialize_as_rgba() {
    let shadow = Color::from_rgb_u8(2, 12, 27).with_alpha(0.7);
    assert_eq!(shadow.to_css(), "rgba(2, 12, 27, 0.7)");
    assert_eq!(Color::TRANSPARENT.a(), 0.0);
}
