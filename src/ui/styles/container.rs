// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Screen background.
pub fn screen(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Brand header strip at the top of a screen.
pub fn header(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        text_color: Some(colors.surface_primary),
        ..Default::default()
    }
}

/// Raised card surface. High contrast swaps the shadow for a thick outline.
pub fn card(colors: ColorScheme, high_contrast: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: if high_contrast {
                border::WIDTH_LG
            } else {
                border::WIDTH_SM
            },
            radius: radius::LG.into(),
        },
        shadow: if high_contrast {
            shadow::NONE
        } else {
            shadow::LG
        },
        ..Default::default()
    }
}

/// Small pill label.
pub fn tag(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.brand_subtle)),
        text_color: Some(colors.brand_primary),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Navigation bar.
pub fn navbar(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_contrast_card_has_thick_outline_and_no_shadow() {
        let colors = ColorScheme::high_contrast();
        let style = card(colors, true)(&Theme::Dark);
        assert_eq!(style.border.width, border::WIDTH_LG);
        assert_eq!(style.shadow, shadow::NONE);
    }

    #[test]
    fn regular_card_is_raised() {
        let style = card(ColorScheme::light(), false)(&Theme::Light);
        assert_eq!(style.shadow, shadow::LG);
    }
}
