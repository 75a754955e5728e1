//! Typography for CarePoint
//!
//! Screens use a single family (Inter) in four weights. Each weight maps to a
//! separate font face, `Inter-Regular` through `Inter-Bold`; the family comes
//! from the active [`FontTokens`](crate::theme::FontTokens).

use serde::{Deserialize, Serialize};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Badge text (8px)
    pub const BADGE: f32 = 8.0;
    /// Micro text (9px)
    pub const MICRO: f32 = 9.0;
    /// Tiny text (10px)
    pub const TINY: f32 = 10.0;
    /// Extra small (11px)
    pub const XS: f32 = 11.0;
    /// Small (12px)
    pub const SM: f32 = 12.0;
    /// Medium (14px)
    pub const MD: f32 = 14.0;
    /// Large (16px)
    pub const LG: f32 = 16.0;
    /// Extra large (18px)
    pub const XL: f32 = 18.0;

    /// Title sizes
    pub mod title {
        /// Screen header title (20px)
        pub const BASE: f32 = 20.0;
        /// Large title (24px)
        pub const LG: f32 = 24.0;
        /// Score readout (32px)
        pub const DISPLAY: f32 = 32.0;
    }
}

/// Font weights with a dedicated face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// 400
    #[default]
    Regular,
    /// 500
    Medium,
    /// 600
    SemiBold,
    /// 700
    Bold,
}

impl FontWeight {
    /// Face name suffix
    pub fn suffix(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "SemiBold",
            FontWeight::Bold => "Bold",
        }
    }

    /// Numeric CSS weight
    pub fn numeric(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Text decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    /// None
    #[default]
    None,
    /// Underline
    Underline,
    /// Strikethrough, used for pre-discount prices
    LineThrough,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Start of line
    #[default]
    Left,
    /// Centered
    Center,
    /// End of line
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::FontTokens;

    #[test]
    fn test_font_faces() {
        let fonts = FontTokens::default();
        assert_eq!(fonts.face(FontWeight::Regular), "Inter-Regular");
        assert_eq!(fonts.face(FontWeight::Medium), "Inter-Medium");
        assert_eq!(fonts.face(FontWeight::SemiBold), "Inter-SemiBold");
        assert_eq!(fonts.face(FontWeight::Bold), "Inter-Bold");
    }

    #[test]
    fn test_numeric_weights_ascend() {
        let weights = [
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::SemiBold,
            FontWeight::Bold,
        ];
        for pair in weights.windows(2) {
            assert!(pair[0].numeric() < pair[1].numeric());
        }
    }

    #[test]
    fn test_decoration_serialization() {
        let json = serde_json::to_string(&TextDecoration::LineThrough).unwrap();
        assert_eq!(json, "\"line-through\"");
    }
}
