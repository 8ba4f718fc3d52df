// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the toast and the demo window.
//!
//! - **Palette**: base and semantic colors
//! - **Opacity**: overlay levels
//! - **Spacing**: 4px-based spacing scale
//! - **Sizing / Typography / Border / Radius / Shadow**: component metrics
//!
//! ```
//! use iced_toast::ui::design_tokens::{palette, opacity};
//! use iced::Color;
//!
//! let hover = Color { a: opacity::OVERLAY_SUBTLE, ..palette::GRAY_400 };
//! assert!(hover.a < 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors, one per notification kind
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Kind glyph shown at the left of a toast.
    pub const GLYPH: f32 = 18.0;
    /// Close button glyph.
    pub const CLOSE_GLYPH: f32 = 14.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const FORM_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Window heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Toast message and form labels.
    pub const BODY: f32 = 14.0;
    /// Status line under the form.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border / Radius
// ============================================================================

pub mod border {
    /// Toast accent border.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::GLYPH > sizing::CLOSE_GLYPH);
};
