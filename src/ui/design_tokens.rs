// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (brand blue, wellness green, neutrals)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale (before accessibility scaling)
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Lens**: Magnifier lens decoration

## Examples

```
use pics_lens::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
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
    pub const GRAY_900: Color = Color::from_rgb(0.102, 0.102, 0.102);
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const GRAY_600: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.902, 0.902, 0.902);
    pub const GRAY_50: Color = Color::from_rgb(0.961, 0.961, 0.961);

    // Brand colors (blue scale)
    pub const PRIMARY_50: Color = Color::from_rgb(0.918, 0.941, 0.992);
    pub const PRIMARY_400: Color = Color::from_rgb(0.396, 0.573, 0.937);
    pub const PRIMARY_500: Color = Color::from_rgb(0.286, 0.482, 0.918); // Main brand blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.227, 0.388, 0.733);
    pub const PRIMARY_800: Color = Color::from_rgb(0.110, 0.196, 0.365);

    // High contrast accent
    pub const YELLOW_400: Color = Color::from_rgb(1.0, 0.9, 0.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.922, 0.165, 0.216);
    pub const WARNING_500: Color = Color::from_rgb(0.980, 0.725, 0.020);
    pub const SUCCESS_500: Color = Color::from_rgb(0.137, 0.686, 0.294);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Lens background behind the magnified content
    pub const LENS_BACKGROUND: f32 = 0.95;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Minimum touch target (WCAG 2.5.5)
    pub const TOUCH_TARGET: f32 = 44.0;

    /// Maximum width of readable content columns
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Base font sizes. Screens scale them with the user's font-size preset.

    /// Large title - Screen headings
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Tags, labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// High contrast outlines
    pub const WIDTH_LG: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
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

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.12,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.12,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    /// Drop shadow under the magnifier lens
    pub const LENS: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Lens Decoration
// ============================================================================

pub mod lens {
    /// Width of the ring drawn around the lens
    pub const BORDER_WIDTH: f32 = 3.0;

    /// Diameter of the crosshair circle marking the lens center
    pub const CROSSHAIR_SIZE: f32 = 20.0;

    /// Width of the crosshair circle outline
    pub const CROSSHAIR_WIDTH: f32 = 2.0;
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
    assert!(opacity::LENS_BACKGROUND > 0.0 && opacity::LENS_BACKGROUND <= 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);

    // Lens validation
    assert!(lens::CROSSHAIR_SIZE > lens::CROSSHAIR_WIDTH * 2.0);
    assert!(lens::BORDER_WIDTH > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_blue_is_blue() {
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.g);
    }
}
