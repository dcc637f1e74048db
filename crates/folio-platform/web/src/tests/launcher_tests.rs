use super::*;

#[test]
fn builder_overrides_only_the_requested_fields() {
    let launcher = PortfolioLauncher::new()
        .with_cursor_ease(0.25)
        .with_parallax(ParallaxConfig {
            factor: 0.3,
            fade_distance: 400.0,
        });

    let settings = launcher.settings();
    assert_eq!(settings.cursor.ease_factor, 0.25);
    assert_eq!(settings.cursor.mobile_breakpoint, 768.0);
    assert_eq!(settings.parallax.factor, 0.3);
    assert_eq!(settings.parallax.fade_distance, 400.0);
    assert_eq!(settings.navigation.scroll_offset, 80.0);
}

#[test]
fn banner_greets_and_credits_the_author() {
    assert_eq!(CONSOLE_BANNER.len(), 3);
    assert!(CONSOLE_BANNER[0].contains("Welcome to my portfolio"));
    assert_eq!(CONSOLE_BANNER[2], "GitHub: @unseen2004");
}
