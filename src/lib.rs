//! CarePoint preview harness
//!
//! Loads the startup theme configuration and renders every screen against a
//! live [`app_ui::ThemeStore`], before and after a theme toggle. The
//! `carepoint-preview` binary prints the result as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod preview;

pub use config::{load_theme_config, parse_theme_config, ConfigError};
pub use preview::{run_preview, PreviewReport, ScreenSummary};
