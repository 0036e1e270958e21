// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler runs the component's own `update`, then turns the returned
//! event into app-level effects (navigation, persistence, theme changes).

use super::{persistence, Message, Screen};
use crate::accessibility::AccessibilityPreferences;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::practices::{self, Event as PracticesEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::AppTheme;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub config_dir: Option<PathBuf>,
    pub preferences: &'a mut AccessibilityPreferences,
    pub theme: &'a mut AppTheme,
    pub practices: &'a mut practices::State,
    pub settings: &'a mut settings::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => {}
        NavbarEvent::Navigate(target) => {
            log::debug!("Switching screen {:?} -> {target:?}", ctx.screen);
            *ctx.screen = target;
        }
    }
    Task::none()
}

pub fn handle_practices_message(
    ctx: &mut UpdateContext<'_>,
    message: practices::Message,
) -> Task<Message> {
    match practices::update(ctx.practices, message) {
        PracticesEvent::None => Task::none(),
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(ctx.settings, message) {
        SettingsEvent::None => {}
        SettingsEvent::Saved(preferences) => {
            *ctx.preferences = preferences;
            *ctx.theme = AppTheme::new(ctx.config.general.theme_mode, preferences.high_contrast);
            persistence::persist_preferences(
                ctx.config,
                &preferences,
                ctx.config_dir.clone(),
                ctx.notifications,
            );
            *ctx.screen = Screen::Practices;
        }
        SettingsEvent::Cancelled => {
            *ctx.screen = Screen::Practices;
        }
        SettingsEvent::LanguageChanged(locale) => {
            persistence::apply_language_change(
                ctx.i18n,
                ctx.config,
                &locale,
                ctx.config_dir.clone(),
                ctx.notifications,
            );
        }
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::Message,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}
