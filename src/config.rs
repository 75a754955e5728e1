//! Startup configuration

use std::fs;
use std::io;
use std::path::Path;

use app_ui::ThemeConfig;
use thiserror::Error;

/// Errors reading the preview configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The file is not a valid theme configuration
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON theme configuration; missing fields take their defaults
pub fn parse_theme_config(text: &str) -> Result<ThemeConfig, ConfigError> {
    Ok(serde_json::from_str(text)?)
}

/// Load the theme configuration from `path`, or the defaults when `None`
pub fn load_theme_config(path: Option<&Path>) -> Result<ThemeConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ThemeConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let config = parse_theme_config(&text)?;
    tracing::info!(
        path = %path.display(),
        mode = %config.initial_mode,
        font_scale = config.clamped_font_scale(),
        "loaded theme config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::ThemeMode;

    #[test]
    fn test_defaults_without_path() {
        let config = load_theme_config(None).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_theme_config(r#"{"initialMode":"dark"}"#).unwrap();
        assert_eq!(config.initial_mode, ThemeMode::Dark);
        assert_eq!(config.font_scale, 1.0);
    }

    #[test]
    fn test_parse_mode_ignores_case() {
        let config = parse_theme_config(r#"{"initialMode":"Dark"}"#).unwrap();
        assert_eq!(config.initial_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = parse_theme_config(r#"{"initialMode":"sepia"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Unknown theme mode: sepia"));
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        let err = parse_theme_config("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_theme_config(Some(Path::new("/nonexistent/carepoint.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("Failed to read config"));
    }
}
