//! User interface for CarePoint
//!
//! This crate provides the presentation layer: theme tokens and the theme
//! store, design tokens and typography, layout components, icons,
//! navigation, and the screens.
//!
//! # Theming
//!
//! A [`ThemeStore`] holds the active [`TokenSet`] (light or dark). Screens
//! subscribe to it and derive their style tables from the current tokens;
//! toggling the mode publishes the other token set to every subscriber.
//!
//! # Modules
//!
//! - [`theme`] - Color and font tokens, modes, configuration
//! - [`store`] - Theme store and subscriptions
//! - [`tokens`] - Spacing, radius, border and sizing scales
//! - [`typography`] - Font sizes and weights
//! - [`components`] - Layout tree, actions and shared components
//! - [`icons`] - Icon names and data-driven icon selection
//! - [`navigation`] - Routes, stacks and the router
//! - [`screens`] - Screens, mounting and the application shell
//!
//! # Example
//!
//! ```rust
//! use app_ui::screens::{render_once, ExplorerScreen, Mounted};
//! use app_ui::{ThemeMode, ThemeStore};
//!
//! let store = ThemeStore::new(ThemeMode::Light);
//! let mut explorer = Mounted::mount(ExplorerScreen, &store);
//! assert!(explorer.render().contains_text("Good Morning!"));
//!
//! // Toggling re-derives styles on the next render
//! store.toggle_mode();
//! let dark = explorer.render();
//! assert_eq!(dark, render_once(&ExplorerScreen, &store.tokens()));
//! assert_eq!(explorer.derivations(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod icons;
pub mod navigation;
pub mod screens;
pub mod store;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    dark_tokens, light_tokens, tokens_for, with_alpha, Color, ColorRole, ColorTokens, FontTokens,
    ThemeConfig, ThemeError, ThemeMode, TokenSet,
};

pub use store::{ThemeStore, ThemeSubscription};

pub use tokens::{border, radius, sizing, spacing};

pub use typography::{font_size, FontWeight, TextAlign, TextDecoration};

pub use components::{
    Action, HealthScoreMeter, Node, ScoreBand, SectionHeader, Style, TabBar, ThemeToggle,
};

pub use icons::IconName;

pub use navigation::{
    NavigationError, NavigationStack, NavigationState, NavigationTab, Navigator, Route,
    RouteParams, Router, StackEntry,
};

pub use screens::{
    dispatch, render_route, ConsultScreen, DiagnosticCenterScreen, DoctorDetailScreen,
    ExplorerScreen, LabTestsScreen, Mounted, ProfileScreen, Screen, Shell,
};
