// SPDX-License-Identifier: MPL-2.0
//! Theming: light, dark and high-contrast color schemes.
//!
//! High contrast is an accessibility preference layered over the light/dark
//! mode: when it is on, the mode is ignored and the high-contrast scheme is used.

use crate::ui::design_tokens::{opacity, palette};
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_subtle: Color,

    // Outlines
    pub border: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,

    // Magnifier lens
    pub lens_background: Color,
    pub lens_border: Color,
    pub lens_crosshair: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,

            text_primary: palette::GRAY_800,
            text_secondary: palette::GRAY_600,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,
            brand_subtle: palette::PRIMARY_50,

            border: palette::GRAY_100,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,

            lens_background: Color {
                a: opacity::LENS_BACKGROUND,
                ..palette::WHITE
            },
            lens_border: palette::PRIMARY_500,
            lens_crosshair: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::PRIMARY_500
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,
            brand_subtle: palette::PRIMARY_800,

            border: palette::GRAY_800,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,

            lens_background: Color {
                a: opacity::LENS_BACKGROUND,
                ..palette::GRAY_900
            },
            lens_border: palette::PRIMARY_400,
            lens_crosshair: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::PRIMARY_400
            },
        }
    }

    /// High contrast theme: pure black surfaces, white text, yellow accents.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            surface_primary: palette::BLACK,
            surface_secondary: palette::BLACK,

            text_primary: palette::WHITE,
            text_secondary: palette::WHITE,

            brand_primary: palette::YELLOW_400,
            brand_secondary: palette::YELLOW_400,
            brand_subtle: palette::BLACK,

            border: palette::WHITE,

            error: palette::ERROR_500,
            warning: palette::YELLOW_400,
            success: palette::SUCCESS_500,

            lens_background: palette::BLACK,
            lens_border: palette::YELLOW_400,
            lens_crosshair: palette::YELLOW_400,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Resolved theme for one frame of the application.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    pub high_contrast: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode, high_contrast: bool) -> Self {
        let colors = if high_contrast {
            ColorScheme::high_contrast()
        } else {
            match mode {
                ThemeMode::Light => ColorScheme::light(),
                ThemeMode::Dark => ColorScheme::dark(),
                ThemeMode::System => ColorScheme::from_system(),
            }
        };

        Self {
            colors,
            mode,
            high_contrast,
        }
    }

    /// Builds the Iced theme used by built-in widgets.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let name = if self.high_contrast {
            "PicsLens High Contrast"
        } else if self.colors.surface_primary == palette::WHITE {
            "PicsLens Light"
        } else {
            "PicsLens Dark"
        };

        let base = if self.colors.surface_primary == palette::WHITE {
            Theme::Light
        } else {
            Theme::Dark
        };
        let mut iced_palette: Palette = base.palette();
        iced_palette.background = self.colors.surface_primary;
        iced_palette.text = self.colors.text_primary;
        iced_palette.primary = self.colors.brand_primary;
        iced_palette.success = self.colors.success;
        iced_palette.danger = self.colors.error;

        Theme::custom(name.to_string(), iced_palette)
    }
}
