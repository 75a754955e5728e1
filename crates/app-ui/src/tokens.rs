//! Design tokens for CarePoint
//!
//! Mode-independent layout values: spacing, radii, border widths and
//! component sizes. Colors and fonts live in [`crate::theme`].

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 2px - Extra extra small
    pub const SPACE_2XS: f32 = 2.0;
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 6px - Compact
    pub const SPACE_COMPACT: f32 = 6.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 20px - Extra large, the screen gutter
    pub const SPACE_XL: f32 = 20.0;
    /// 24px - 2x large, between sections
    pub const SPACE_2XL: f32 = 24.0;

    /// Horizontal screen padding
    pub const GUTTER: f32 = SPACE_XL;
    /// Gap below each section
    pub const SECTION_GAP: f32 = SPACE_2XL;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "2xs" => Some(SPACE_2XS),
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            _ => None,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius values in pixels
pub mod radius {
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Badge radius (6px)
    pub const BADGE: f32 = 6.0;
    /// Medium radius (8px) - buttons
    pub const MD: f32 = 8.0;
    /// Large radius (12px) - inputs, icon tiles
    pub const LG: f32 = 12.0;
    /// Extra large radius (16px) - cards
    pub const XL: f32 = 16.0;
    /// Pill radius (20px)
    pub const PILL: f32 = 20.0;
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border widths in pixels
pub mod border {
    /// No border
    pub const NONE: f32 = 0.0;
    /// Card outline (1px)
    pub const THIN: f32 = 1.0;
    /// Emphasis (2px)
    pub const MEDIUM: f32 = 2.0;
    /// Score ring (10px)
    pub const RING: f32 = 10.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Inline meta icon (12px)
        pub const XS: f32 = 12.0;
        /// Small icon (14px)
        pub const SM: f32 = 14.0;
        /// Detail row icon (16px)
        pub const MD: f32 = 16.0;
        /// Search and filter icon (20px)
        pub const LG: f32 = 20.0;
        /// Header and tile icon (24px)
        pub const XL: f32 = 24.0;
    }

    /// Avatar and thumbnail sizes
    pub mod avatar {
        /// Doctor list portrait (80px)
        pub const MD: f32 = 80.0;
        /// Detail portrait and center thumbnail (100px)
        pub const LG: f32 = 100.0;
    }

    /// Tab bar metrics
    pub mod tab_bar {
        /// Bar height (70px)
        pub const HEIGHT: f32 = 70.0;
        /// Vertical padding (8px)
        pub const PADDING: f32 = 8.0;
        /// Icon size (24px)
        pub const ICON: f32 = 24.0;
    }

    /// Round header button (40px)
    pub const HEADER_BUTTON: f32 = 40.0;
    /// Featured test card width (280px)
    pub const TEST_CARD_WIDTH: f32 = 280.0;
    /// Featured test card image height (120px)
    pub const TEST_CARD_IMAGE: f32 = 120.0;
    /// Diagnostic center hero image height (200px)
    pub const HERO_IMAGE: f32 = 200.0;
}
