//! Property-based tests for the theme toggle.
//!
//! Any even number of toggles returns to the starting mode; any odd number
//! lands on the other one. Both the controller and the document agree.

use portfolio::app::App;
use portfolio::types::theme::ThemeMode;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn toggle_parity_determines_mode(toggles in 0usize..50) {
        let mut app = App::default();
        for _ in 0..toggles {
            app.toggle_theme();
        }
        let expected = if toggles % 2 == 0 { ThemeMode::Dark } else { ThemeMode::Light };
        prop_assert_eq!(app.theme(), expected);
        let body = format!("<body class=\"{}\">", expected.body_class());
        prop_assert!(app.render_document().contains(&body));
    }

    #[test]
    fn double_toggle_is_identity(start_light in any::<bool>()) {
        let mut app = App::default();
        if start_light {
            app.toggle_theme();
        }
        let before = app.theme();
        app.toggle_theme();
        app.toggle_theme();
        prop_assert_eq!(app.theme(), before);
    }
}
