// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the active screen, the screen is wrapped in the
//! magnifier lens, and toasts float over everything.

use super::{Message, Screen};
use crate::accessibility::AccessibilityPreferences;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::practices::{self, ViewContext as PracticesViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::{magnifier, LensStyle};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub config: &'a Config,
    pub preferences: &'a AccessibilityPreferences,
    /// Forces the lens on regardless of the saved preference.
    pub force_magnifier: bool,
    pub colors: ColorScheme,
    pub practices: &'a practices::State,
    pub settings: &'a settings::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Practices => practices::view(PracticesViewContext {
            i18n: ctx.i18n,
            state: ctx.practices,
            preferences: ctx.preferences,
            colors: ctx.colors,
        })
        .map(Message::Practices),
        Screen::Accessibility => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            state: ctx.settings,
            colors: ctx.colors,
        })
        .map(Message::Settings),
    };

    let lens = magnifier(current_view)
        .enabled(ctx.preferences.magnifier_enabled || ctx.force_magnifier)
        .magnification(ctx.preferences.magnification)
        .lens(ctx.config.magnifier.lens_geometry())
        .gestures(ctx.config.magnifier.gesture_config())
        .style(LensStyle::from_scheme(&ctx.colors));

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        colors: ctx.colors,
        preferences: ctx.preferences,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar).push(
        Container::new(lens)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = notifications::view(ctx.notifications, ctx.i18n, ctx.colors, ctx.preferences)
        .map(Message::Notification);

    Stack::new()
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
