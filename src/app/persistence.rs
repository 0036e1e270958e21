// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saved accessibility preferences and the selected language are written to
//! `settings.toml`. Failures surface as toasts and never interrupt the UI.

use crate::accessibility::AccessibilityPreferences;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Writes `config` to disk, reporting failures through a toast.
fn write(
    config: &Config,
    config_dir: Option<PathBuf>,
    notifications: &mut notifications::Manager,
) -> bool {
    match config::save_with_override(config, config_dir) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("Failed to save settings: {error}");
            notifications.push(Notification::error(error.i18n_key()));
            false
        }
    }
}

/// Records the saved accessibility preferences and persists them.
pub fn persist_preferences(
    config: &mut Config,
    preferences: &AccessibilityPreferences,
    config_dir: Option<PathBuf>,
    notifications: &mut notifications::Manager,
) {
    config.set_accessibility_preferences(preferences);
    if write(config, config_dir, notifications) {
        notifications.push(Notification::success("notification-settings-saved"));
    }
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: &LanguageIdentifier,
    config_dir: Option<PathBuf>,
    notifications: &mut notifications::Manager,
) {
    if i18n.current_locale() == locale {
        return;
    }
    i18n.set_locale(locale.clone());
    if i18n.current_locale() != locale {
        log::warn!("Locale {locale} is not bundled");
        return;
    }
    log::debug!("UI locale switched to {locale}");
    config.general.language = Some(locale.to_string());
    write(config, config_dir, notifications);
}
