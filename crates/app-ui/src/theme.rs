//! Theme tokens for CarePoint
//!
//! A [`TokenSet`] is the complete set of values every screen styles itself
//! from: one color per semantic [`ColorRole`] plus the font tokens, tagged
//! with the [`ThemeMode`] it belongs to. Exactly two sets exist, one per mode,
//! and both define every role; there is no fallback lookup.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{tokens_for, ColorRole, ThemeMode};
//!
//! let tokens = tokens_for(ThemeMode::Light);
//! assert_eq!(tokens.color(ColorRole::Primary), "#3B82F6");
//! let tint = tokens.tint(ColorRole::Success);
//! assert_eq!(tint, "#10B98120");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Style;
use crate::typography::FontWeight;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while reading theme settings from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Mode name other than `light` or `dark`
    #[error("Unknown theme mode: {0}")]
    UnknownMode(String),
}

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Alpha suffix used for tinted icon tiles and badges (`#RRGGBB` + `20`)
pub const TINT_ALPHA: u8 = 0x20;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Translucent variant of a `#RRGGBB` color, made by appending an alpha byte
///
/// An existing alpha byte on a `#RRGGBBAA` color is replaced.
pub fn with_alpha(color: &str, alpha: u8) -> Color {
    let base = match color.get(..7) {
        Some(rgb) if color.len() == 9 => rgb,
        _ => color,
    };
    format!("{}{:02X}", base, alpha)
}

// =============================================================================
// Theme Mode
// =============================================================================

/// Light or dark appearance
///
/// Deserializes case-insensitively through [`FromStr`](std::str::FromStr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ThemeMode {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Check if this is the dark mode
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Lowercase name as used in config
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "Light"),
            ThemeMode::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ThemeMode {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Color Roles
// =============================================================================

/// Semantic color roles referenced by screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    /// Brand color for primary actions
    Primary,
    /// Screen background
    Background,
    /// Raised surfaces (cards, bars)
    Surface,
    /// Primary text
    Text,
    /// Muted text and inactive icons
    TextSecondary,
    /// Prices, availability, verified marks
    Success,
    /// Ratings and awards
    Warning,
    /// Discounts and alerts
    Error,
    /// Informational accents
    Info,
    /// Secondary brand accent
    Accent,
    /// Hairlines and card outlines
    Border,
    /// Inset surfaces inside cards
    Card,
}

impl ColorRole {
    /// All roles
    pub fn all() -> [ColorRole; 12] {
        [
            ColorRole::Primary,
            ColorRole::Background,
            ColorRole::Surface,
            ColorRole::Text,
            ColorRole::TextSecondary,
            ColorRole::Success,
            ColorRole::Warning,
            ColorRole::Error,
            ColorRole::Info,
            ColorRole::Accent,
            ColorRole::Border,
            ColorRole::Card,
        ]
    }
}

/// One color per semantic role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    /// Brand color for primary actions
    pub primary: Color,
    /// Screen background
    pub background: Color,
    /// Raised surfaces
    pub surface: Color,
    /// Primary text
    pub text: Color,
    /// Muted text
    pub text_secondary: Color,
    /// Success
    pub success: Color,
    /// Warning
    pub warning: Color,
    /// Error
    pub error: Color,
    /// Info
    pub info: Color,
    /// Accent
    pub accent: Color,
    /// Border
    pub border: Color,
    /// Inset card surface
    pub card: Color,
}

impl ColorTokens {
    /// Resolve a role to its color
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Background => &self.background,
            ColorRole::Surface => &self.surface,
            ColorRole::Text => &self.text,
            ColorRole::TextSecondary => &self.text_secondary,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
            ColorRole::Info => &self.info,
            ColorRole::Accent => &self.accent,
            ColorRole::Border => &self.border,
            ColorRole::Card => &self.card,
        }
    }
}

// =============================================================================
// Font Tokens
// =============================================================================

/// Font family and scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontTokens {
    /// Family name; faces are `<family>-<Weight>`
    pub family: String,
    /// Multiplier applied to every font size
    pub scale: f32,
}

impl Default for FontTokens {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            scale: 1.0,
        }
    }
}

impl FontTokens {
    /// Font face for a weight, e.g. `Inter-SemiBold`
    pub fn face(&self, weight: FontWeight) -> String {
        format!("{}-{}", self.family, weight.suffix())
    }

    /// Scaled font size
    pub fn size(&self, base: f32) -> f32 {
        base * self.scale
    }
}

// =============================================================================
// Token Set
// =============================================================================

/// Complete theme token set for one mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Mode these tokens belong to
    pub mode: ThemeMode,
    /// Semantic colors
    pub colors: ColorTokens,
    /// Font tokens
    pub fonts: FontTokens,
}

impl TokenSet {
    /// Check if this is a dark token set
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Resolve a color role
    pub fn color(&self, role: ColorRole) -> &str {
        self.colors.get(role)
    }

    /// Translucent tint of a role color, used behind icons and badges
    pub fn tint(&self, role: ColorRole) -> Color {
        with_alpha(self.color(role), TINT_ALPHA)
    }

    /// Text style with a scaled size, a weight face and a color
    pub fn text(&self, size: f32, weight: FontWeight, color: &str) -> Style {
        Style::new()
            .font_size(self.fonts.size(size))
            .font_family(self.fonts.face(weight))
            .color(color)
    }

    /// Same token set with a different font scale
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.fonts.scale = scale;
        self
    }
}

/// Create the light token set
pub fn light_tokens() -> TokenSet {
    TokenSet {
        mode: ThemeMode::Light,
        colors: ColorTokens {
            primary: "#3B82F6".to_string(),
            background: "#F8FAFC".to_string(),
            surface: "#FFFFFF".to_string(),
            text: "#0F172A".to_string(),
            text_secondary: "#64748B".to_string(),
            success: "#10B981".to_string(),
            warning: "#F59E0B".to_string(),
            error: "#EF4444".to_string(),
            info: "#06B6D4".to_string(),
            accent: "#8B5CF6".to_string(),
            border: "#E2E8F0".to_string(),
            card: "#F1F5F9".to_string(),
        },
        fonts: FontTokens::default(),
    }
}

/// Create the dark token set
pub fn dark_tokens() -> TokenSet {
    TokenSet {
        mode: ThemeMode::Dark,
        colors: ColorTokens {
            primary: "#60A5FA".to_string(),
            background: "#0F172A".to_string(),
            surface: "#1E293B".to_string(),
            text: "#F8FAFC".to_string(),
            text_secondary: "#94A3B8".to_string(),
            success: "#34D399".to_string(),
            warning: "#FBBF24".to_string(),
            error: "#F87171".to_string(),
            info: "#22D3EE".to_string(),
            accent: "#A78BFA".to_string(),
            border: "#334155".to_string(),
            card: "#273549".to_string(),
        },
        fonts: FontTokens::default(),
    }
}

/// Get the token set for a mode
pub fn tokens_for(mode: ThemeMode) -> TokenSet {
    match mode {
        ThemeMode::Light => light_tokens(),
        ThemeMode::Dark => dark_tokens(),
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Minimum accepted font scale
pub const MIN_FONT_SCALE: f32 = 0.8;
/// Maximum accepted font scale
pub const MAX_FONT_SCALE: f32 = 1.4;

/// Startup theme settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Mode the store starts in
    pub initial_mode: ThemeMode,
    /// Font scale multiplier (0.8 - 1.4)
    pub font_scale: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial_mode: ThemeMode::Light,
            font_scale: 1.0,
        }
    }
}

impl ThemeConfig {
    /// Font scale clamped to the accepted range
    pub fn clamped_font_scale(&self) -> f32 {
        if self.font_scale.is_nan() {
            return 1.0;
        }
        self.font_scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
    }
}
