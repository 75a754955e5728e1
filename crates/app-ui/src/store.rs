//! Theme store
//!
//! The store owns the current [`TokenSet`] and both precomputed sets. A toggle
//! swaps the current `Arc` for the other mode's set in one step, so readers
//! see either the old set or the new one and never a mix of the two.
//!
//! Subscribers hold a [`ThemeSubscription`] (a `watch` receiver). The version
//! bump happens inside [`ThemeStore::toggle_mode`], so once that call returns
//! every subscription reports a change and reads the new set.
//!
//! # Example
//!
//! ```rust
//! use app_ui::store::ThemeStore;
//! use app_ui::theme::ThemeMode;
//!
//! let store = ThemeStore::default();
//! let mut sub = store.subscribe();
//!
//! store.toggle_mode();
//! assert!(sub.has_changed());
//! assert_eq!(sub.take().mode, ThemeMode::Dark);
//! ```

use std::sync::Arc;

use tokio::sync::watch;

use crate::theme::{dark_tokens, light_tokens, ThemeConfig, ThemeMode, TokenSet};

/// Holder of the active theme token set
#[derive(Debug)]
pub struct ThemeStore {
    light: Arc<TokenSet>,
    dark: Arc<TokenSet>,
    current: watch::Sender<Arc<TokenSet>>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}

impl ThemeStore {
    /// Create a store starting in `mode` with default fonts
    pub fn new(mode: ThemeMode) -> Self {
        Self::from_config(&ThemeConfig {
            initial_mode: mode,
            ..ThemeConfig::default()
        })
    }

    /// Create a store from startup settings
    pub fn from_config(config: &ThemeConfig) -> Self {
        let scale = config.clamped_font_scale();
        let light = Arc::new(light_tokens().with_font_scale(scale));
        let dark = Arc::new(dark_tokens().with_font_scale(scale));

        let initial = match config.initial_mode {
            ThemeMode::Light => Arc::clone(&light),
            ThemeMode::Dark => Arc::clone(&dark),
        };
        let (current, _) = watch::channel(initial);

        tracing::debug!(
            mode = %config.initial_mode,
            font_scale = scale,
            "theme store initialized"
        );

        Self { light, dark, current }
    }

    /// Get the current token set
    pub fn tokens(&self) -> Arc<TokenSet> {
        Arc::clone(&self.current.borrow())
    }

    /// Get the current mode
    pub fn mode(&self) -> ThemeMode {
        self.current.borrow().mode
    }

    /// Flip between light and dark
    ///
    /// Subscribers are marked changed before this returns.
    pub fn toggle_mode(&self) {
        let light = &self.light;
        let dark = &self.dark;
        let mut to = ThemeMode::Light;

        self.current.send_modify(|tokens| {
            to = tokens.mode.toggled();
            *tokens = match to {
                ThemeMode::Light => Arc::clone(light),
                ThemeMode::Dark => Arc::clone(dark),
            };
        });

        tracing::debug!(from = %to.toggled(), to = %to, "theme mode toggled");
    }

    /// Switch to `mode`, toggling only if it differs from the current one
    pub fn set_mode(&self, mode: ThemeMode) {
        if self.mode() != mode {
            self.toggle_mode();
        }
    }

    /// Subscribe to token set changes
    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            rx: self.current.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.current.receiver_count()
    }
}

/// A subscriber's view of the store
#[derive(Debug, Clone)]
pub struct ThemeSubscription {
    rx: watch::Receiver<Arc<TokenSet>>,
}

impl ThemeSubscription {
    /// Current token set, without marking it seen
    pub fn tokens(&self) -> Arc<TokenSet> {
        Arc::clone(&self.rx.borrow())
    }

    /// Whether the token set changed since it was last taken
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Current token set, marking it seen
    pub fn take(&mut self) -> Arc<TokenSet> {
        Arc::clone(&self.rx.borrow_and_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorRole;

    #[test]
    fn test_default_store_is_light() {
        let store = ThemeStore::default();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.tokens().color(ColorRole::Primary), "#3B82F6");
    }

    #[test]
    fn test_toggle_flips_mode() {
        let store = ThemeStore::default();
        store.toggle_mode();
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(*store.tokens(), dark_tokens());
    }

    #[test]
    fn test_even_toggles_restore_mode() {
        for initial in [ThemeMode::Light, ThemeMode::Dark] {
            let store = ThemeStore::new(initial);
            for n in 1..=6 {
                store.toggle_mode();
                let expected = if n % 2 == 0 { initial } else { initial.toggled() };
                assert_eq!(store.mode(), expected);
            }
        }
    }

    #[test]
    fn test_primary_color_scenario() {
        let store = ThemeStore::default();
        assert_eq!(store.tokens().colors.primary, "#3B82F6");

        store.toggle_mode();
        let dark = store.tokens();
        assert!(dark.is_dark());
        assert_ne!(dark.colors.primary, "#3B82F6");

        store.toggle_mode();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.tokens().colors.primary, "#3B82F6");
    }

    #[test]
    fn test_toggle_swaps_whole_set() {
        let store = ThemeStore::default();
        let before = store.tokens();
        store.toggle_mode();
        let after = store.tokens();

        // The held handle still reads the complete old set
        assert_eq!(*before, light_tokens());
        for role in ColorRole::all() {
            assert_eq!(after.color(role), dark_tokens().color(role));
        }
    }

    #[test]
    fn test_precomputed_sets_are_reused() {
        let store = ThemeStore::default();
        let first = store.tokens();
        store.toggle_mode();
        store.toggle_mode();
        assert!(Arc::ptr_eq(&first, &store.tokens()));
    }

    #[test]
    fn test_set_mode() {
        let store = ThemeStore::default();
        store.set_mode(ThemeMode::Light);
        assert_eq!(store.mode(), ThemeMode::Light);
        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_config_applies_font_scale() {
        let store = ThemeStore::from_config(&ThemeConfig {
            initial_mode: ThemeMode::Dark,
            font_scale: 1.2,
        });
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.tokens().fonts.scale, 1.2);

        store.toggle_mode();
        assert_eq!(store.tokens().fonts.scale, 1.2);
    }

    // ==========================================================================
    // Subscription Tests
    // ==========================================================================

    #[test]
    fn test_subscription_sees_toggle() {
        let store = ThemeStore::default();
        let mut sub = store.subscribe();
        assert!(!sub.has_changed());
        assert_eq!(sub.tokens().mode, ThemeMode::Light);

        store.toggle_mode();
        assert!(sub.has_changed());
        assert_eq!(sub.take().mode, ThemeMode::Dark);
        assert!(!sub.has_changed());
    }

    #[test]
    fn test_all_subscribers_notified() {
        let store = ThemeStore::default();
        let mut subs: Vec<ThemeSubscription> = (0..4).map(|_| store.subscribe()).collect();
        assert_eq!(store.subscriber_count(), 4);

        store.toggle_mode();
        for sub in &mut subs {
            assert!(sub.has_changed());
            let tokens = sub.take();
            assert_eq!(tokens.mode, ThemeMode::Dark);
            assert_eq!(tokens.colors, dark_tokens().colors);
        }
    }

    #[test]
    fn test_double_toggle_still_reports_change() {
        let store = ThemeStore::default();
        let mut sub = store.subscribe();
        store.toggle_mode();
        store.toggle_mode();
        assert!(sub.has_changed());
        assert_eq!(sub.take().mode, ThemeMode::Light);
    }

    #[test]
    fn test_subscription_after_store_dropped() {
        let store = ThemeStore::default();
        let sub = store.subscribe();
        drop(store);
        assert!(!sub.has_changed());
        assert_eq!(sub.tokens().mode, ThemeMode::Light);
    }
}
