use super::*;

#[test]
fn toast_sits_in_the_bottom_right_corner() {
    let css = toast_css(&ToastConfig::default());
    assert!(css.contains("position: fixed;"));
    assert!(css.contains("bottom: 30px; right: 30px;"));
    assert!(css.contains("background-color: #64ffda;"));
    assert!(css.contains("color: #0a192f;"));
    assert!(css.contains("z-index: 10000;"));
}

#[test]
fn keyframes_cover_both_toast_animations() {
    let entering = Toast::default().animation_for(ToastPhase::Entering).unwrap_or_default();
    let exiting = Toast::default().animation_for(ToastPhase::Exiting).unwrap_or_default();
    assert!(entering.starts_with("slideIn "));
    assert!(exiting.starts_with("slideOut "));
    assert!(SLIDE_KEYFRAMES.contains("@keyframes slideIn"));
    assert!(SLIDE_KEYFRAMES.contains("@keyframes slideOut"));
    assert!(SLIDE_KEYFRAMES.contains("translateX(400px)"));
}
