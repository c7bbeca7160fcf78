// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every SolarShare view.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use solarshare::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (sun orange scale)
    pub const SUN_300: Color = Color::from_rgb(1.0, 0.843, 0.0); // #FFD700
    pub const SUN_500: Color = Color::from_rgb(1.0, 0.647, 0.0); // #FFA500
    pub const SUN_700: Color = Color::from_rgb(0.92, 0.45, 0.05);

    // Sky and ground, used by the generated illustration
    pub const SKY_500: Color = Color::from_rgb(0.38, 0.62, 0.93);
    pub const PANEL_700: Color = Color::from_rgb(0.12, 0.22, 0.45);
    pub const LEAF_500: Color = Color::from_rgb(0.28, 0.73, 0.47);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.961, 0.396, 0.396); // #F56565
    pub const ERROR_600: Color = Color::from_rgb(0.898, 0.243, 0.243); // #E53E3E
    pub const SUCCESS_500: Color = Color::from_rgb(0.282, 0.733, 0.471); // #48BB78
    pub const SUCCESS_600: Color = Color::from_rgb(0.220, 0.698, 0.675); // #38B2AC
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const TOAST: f32 = 0.9;
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
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element height
    pub const BUTTON_HEIGHT: f32 = 40.0;

    // Component widths
    pub const FORM_WIDTH: f32 = 360.0;
    pub const HERO_WIDTH: f32 = 420.0;
    pub const ILLUSTRATION_HEIGHT: f32 = 240.0;
    pub const TOAST_MAX_WIDTH: f32 = 400.0;
    pub const TOAST_CLOSE: f32 = 20.0;
    pub const SOLAR_OBJECT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Brand name
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, toast messages
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, footers
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toast shadow (`0 8px 32px rgba(0,0,0,0.15)`).
    pub const TOAST: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 32.0,
    };

    /// Soft golden glow around a hovered solar object.
    pub const GLOW: Shadow = Shadow {
        color: Color::from_rgba(1.0, 0.843, 0.0, 0.5),
        offset: Vector::ZERO,
        blur_radius: 20.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_STRONG > 0.0 && opacity::OVERLAY_STRONG < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
