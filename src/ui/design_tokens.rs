// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design
Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Sage canvas behind the card stack (hex F3F9E7 in the mockups).
    pub const CANVAS_SAGE: Color = Color::from_rgb(0.953, 0.976, 0.906);

    // Semantic colors
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
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Translucent white of the amount strip and badge on each card.
    pub const CARD_CHROME: f32 = 0.8;

    /// Alpha of the stacked-card drop shadow.
    pub const CARD_SHADOW: f32 = 0.24;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Cards
    pub const CARD_MAX_WIDTH: f32 = 360.0;
    pub const AMOUNT_STRIP_HEIGHT: f32 = 4.0;
    pub const AMOUNT_BADGE_WIDTH: f32 = 96.0;
    pub const AMOUNT_BADGE_HEIGHT: f32 = 28.0;
    pub const CLOSE_BUTTON: f32 = 24.0;

    // Header above the grouped stack
    pub const BILL_HEADER_TOP: f32 = 60.0;
    pub const BILL_HEADER_BOTTOM: f32 = 40.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Toasts
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Animated total in the grouped view.
    pub const TOTAL_DISPLAY: f32 = 43.0;

    /// "Your total bill" label above the animated total.
    pub const TOTAL_LABEL: f32 = 15.0;

    /// Amount badge on each card.
    pub const AMOUNT: f32 = 17.0;

    /// Large title - prominent headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - app name, card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - most UI text, labels
    pub const BODY: f32 = 14.0;

    /// Caption - badges, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;

    /// Bottom corners of the amount badge.
    pub const BADGE: f32 = 9.0;

    /// Card corner radius.
    pub const CARD: f32 = 13.0;

    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Soft upward shadow separating stacked cards; disabled in the grouped
    /// view.
    pub const CARD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: opacity::CARD_SHADOW,
        },
        offset: Vector { x: 0.0, y: -28.0 },
        blur_radius: 104.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CARD_CHROME > 0.0 && opacity::CARD_CHROME < 1.0);
    assert!(opacity::CARD_SHADOW > 0.0 && opacity::CARD_SHADOW < 1.0);

    // Typography validation
    assert!(typography::TOTAL_DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::AMOUNT > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::SM < radius::MD);
    assert!(radius::BADGE < radius::CARD);
};
