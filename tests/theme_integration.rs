//! Theme Integration Tests
//!
//! End-to-end tests for the theme store, subscriptions, style re-derivation
//! and configuration loading.

use std::io::Write;

use app_ui::screens::{render_once, Mounted};
use app_ui::{
    dark_tokens, light_tokens, ColorRole, DiagnosticCenterScreen, DoctorDetailScreen,
    ExplorerScreen, LabTestsScreen, ProfileScreen, Screen, ThemeConfig, ThemeMode, ThemeStore,
};
use carepoint::{load_theme_config, ConfigError};
use tempfile::NamedTempFile;

// =============================================================================
// Store and Subscription
// =============================================================================

/// Every mounted screen follows the store through several toggles
#[test]
fn test_mounted_screens_follow_store_across_toggles() {
    let store = ThemeStore::new(ThemeMode::Light);
    let mut explorer = Mounted::mount(ExplorerScreen, &store);
    let mut lab_tests = Mounted::mount(LabTestsScreen, &store);
    let mut detail = Mounted::mount(DoctorDetailScreen::new("1"), &store);
    assert_eq!(store.subscriber_count(), 3);

    for round in 1..=3 {
        store.toggle_mode();
        let mode = store.mode();
        let tokens = store.tokens();

        assert_eq!(explorer.render(), render_once(&ExplorerScreen, &tokens));
        assert_eq!(lab_tests.render(), render_once(&LabTestsScreen, &tokens));
        assert_eq!(
            detail.render(),
            render_once(&DoctorDetailScreen::new("1"), &tokens)
        );

        for mounted_mode in [explorer.tokens().mode, lab_tests.tokens().mode] {
            assert_eq!(mounted_mode, mode);
        }
        assert_eq!(explorer.derivations(), round + 1);
    }
}

/// Rendering without a toggle never re-derives styles
#[test]
fn test_render_without_change_reuses_styles() {
    let store = ThemeStore::new(ThemeMode::Dark);
    let mut profile = Mounted::mount(ProfileScreen, &store);

    let first = profile.render();
    for _ in 0..5 {
        assert_eq!(profile.render(), first);
    }
    assert_eq!(profile.derivations(), 1);
}

/// Setting the mode that is already active publishes nothing
#[test]
fn test_set_same_mode_is_silent() {
    let store = ThemeStore::new(ThemeMode::Light);
    let mut sub = store.subscribe();

    store.set_mode(ThemeMode::Light);
    assert!(!sub.has_changed());

    store.set_mode(ThemeMode::Dark);
    assert!(sub.has_changed());
    assert_eq!(sub.take().mode, ThemeMode::Dark);
}

/// Style derivation depends only on the token set
#[test]
fn test_style_tables_match_between_fresh_and_store_tokens() {
    let store = ThemeStore::default();
    assert_eq!(
        ExplorerScreen::derive_styles(&store.tokens()),
        ExplorerScreen::derive_styles(&light_tokens())
    );

    store.toggle_mode();
    assert_eq!(
        DiagnosticCenterScreen::derive_styles(&store.tokens()),
        DiagnosticCenterScreen::derive_styles(&dark_tokens())
    );
}

/// Both token sets define every role
#[test]
fn test_every_role_defined_in_both_modes() {
    for tokens in [light_tokens(), dark_tokens()] {
        for role in ColorRole::all() {
            let color = tokens.color(role);
            assert!(color.starts_with('#') && color.len() == 7, "{:?}", role);
            assert_eq!(tokens.tint(role), format!("{}20", color));
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// A config file sets the starting mode and font scale
#[test]
fn test_config_file_drives_store() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"initialMode": "dark", "fontScale": 1.2}}"#).unwrap();

    let config = load_theme_config(Some(file.path())).unwrap();
    let store = ThemeStore::from_config(&config);
    assert_eq!(store.mode(), ThemeMode::Dark);

    let tokens = store.tokens();
    let styles = render_once(&ExplorerScreen, &tokens);
    let greeting = styles.find_text("Good Morning!").unwrap();
    assert_eq!(greeting.style().unwrap().font_size, Some(14.0 * 1.2));
}

/// Out-of-range font scales are clamped
#[test]
fn test_config_font_scale_clamped() {
    let config = ThemeConfig {
        initial_mode: ThemeMode::Light,
        font_scale: 3.0,
    };
    let store = ThemeStore::from_config(&config);
    assert_eq!(store.tokens().fonts.scale, 1.4);
}

/// Malformed config files are reported, not defaulted
#[test]
fn test_config_file_errors() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"initialMode": "sepia"}}"#).unwrap();

    let err = load_theme_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
