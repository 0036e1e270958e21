// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (Save).
pub fn primary(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => colors.brand_secondary,
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..colors.brand_primary
            },
            button::Status::Active | button::Status::Pressed => colors.brand_primary,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.surface_primary,
            border: Border {
                color: colors.brand_secondary,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Secondary action (Cancel): outlined, no fill.
pub fn secondary(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => colors.brand_subtle,
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.brand_primary,
            border: Border {
                color: colors.brand_primary,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// One option of a toggle group (font size presets, languages).
pub fn option(
    colors: ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if selected {
            (colors.brand_primary, colors.surface_primary)
        } else if matches!(status, button::Status::Hovered) {
            (colors.brand_subtle, colors.text_primary)
        } else {
            (colors.surface_secondary, colors.text_primary)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: if selected {
                    colors.brand_secondary
                } else {
                    colors.border
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navigation bar tab.
pub fn nav(colors: ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            colors.brand_primary
        } else {
            colors.text_secondary
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    colors.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: if active { border::WIDTH_MD } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flat, borderless button wrapping a whole card.
pub fn card(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color: colors.text_primary,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_color() {
        let colors = ColorScheme::light();
        let style = primary(colors)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(colors.brand_primary))
        );
    }

    #[test]
    fn selected_option_is_filled() {
        let colors = ColorScheme::high_contrast();
        let selected = option(colors, true)(&Theme::Dark, button::Status::Active);
        let unselected = option(colors, false)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            selected.background,
            Some(Background::Color(colors.brand_primary))
        );
        assert_ne!(selected.background, unselected.background);
    }

    #[test]
    fn active_nav_tab_is_underlined() {
        let colors = ColorScheme::light();
        let style = nav(colors, true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.width, border::WIDTH_MD);
        assert_eq!(style.text_color, colors.brand_primary);
    }
}
