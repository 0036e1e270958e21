// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the practices and
//! accessibility screens.
//!
//! The `App` struct wires together the catalogue, localization and saved
//! preferences, and translates messages into side effects like config
//! persistence. The magnifier lens wraps whichever screen is active.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::accessibility::AccessibilityPreferences;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::practices;
use crate::ui::settings;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Explicit settings directory. `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    /// Last saved accessibility preferences.
    preferences: AccessibilityPreferences,
    /// Lens forced on from the command line.
    force_magnifier: bool,
    theme: AppTheme,
    practices: practices::State,
    settings: settings::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("preferences", &self.preferences)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings. Phone-like proportions by default.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires Fn for boot; flags are consumed on the first call only
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, None)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let preferences = AccessibilityPreferences::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            config: Config::default(),
            config_dir: None,
            preferences,
            force_magnifier: false,
            theme: AppTheme::new(ThemeMode::default(), preferences.high_contrast),
            practices: practices::State::new(),
            settings: settings::State::new(preferences),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the saved configuration and the
    /// launcher flags.
    fn new(flags: Flags, config_dir: Option<PathBuf>) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);
        let preferences = config.accessibility_preferences();

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode, preferences.high_contrast),
            settings: settings::State::new(preferences),
            preferences,
            force_magnifier: flags.magnifier,
            config,
            config_dir,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if app.force_magnifier {
            log::info!("Magnifier forced on for this session");
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen = match self.screen {
            Screen::Practices => self.i18n.tr("navbar-practices"),
            Screen::Accessibility => self.i18n.tr("navbar-accessibility"),
        };
        format!("{screen} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            config_dir: self.config_dir.clone(),
            preferences: &mut self.preferences,
            theme: &mut self.theme,
            practices: &mut self.practices,
            settings: &mut self.settings,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Practices(message) => update::handle_practices_message(&mut ctx, message),
            Message::Settings(message) => update::handle_settings_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, &message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            config: &self.config,
            preferences: &self.preferences,
            force_magnifier: self.force_magnifier,
            colors: self.theme.colors,
            practices: &self.practices,
            settings: &self.settings,
            notifications: &self.notifications,
        })
    }

    /// Saved accessibility preferences.
    pub fn preferences(&self) -> &AccessibilityPreferences {
        &self.preferences
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::FontSize;
    use crate::ui::{navbar, settings as settings_ui};
    use tempfile::{tempdir, TempDir};

    fn app_in_temp_dir() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(
            Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            },
            Some(dir.path().to_path_buf()),
        );
        (app, dir)
    }

    #[test]
    fn new_app_starts_on_practices_with_defaults() {
        let (app, _dir) = app_in_temp_dir();
        assert_eq!(app.screen(), Screen::Practices);
        assert_eq!(*app.preferences(), AccessibilityPreferences::default());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn title_names_active_screen() {
        let (mut app, _dir) = app_in_temp_dir();
        assert!(app.title().starts_with("Practices"));

        let _ = app.update(Message::Navbar(navbar::Message::OpenAccessibility));
        assert!(app.title().starts_with("Accessibility"));
    }

    #[test]
    fn saving_settings_applies_and_persists_preferences() {
        let (mut app, dir) = app_in_temp_dir();
        let _ = app.update(Message::Navbar(navbar::Message::OpenAccessibility));
        let _ = app.update(Message::Settings(settings_ui::Message::FontSizeSelected(
            FontSize::ExtraLarge,
        )));
        let _ = app.update(Message::Settings(settings_ui::Message::HighContrastToggled(
            true,
        )));
        let _ = app.update(Message::Settings(settings_ui::Message::MagnifierToggled(true)));
        let _ = app.update(Message::Settings(settings_ui::Message::Save));

        assert_eq!(app.screen(), Screen::Practices);
        assert_eq!(app.preferences().font_size, FontSize::ExtraLarge);
        assert!(app.preferences().magnifier_enabled);
        assert!(app.theme.high_contrast);

        let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.accessibility_preferences(), *app.preferences());
    }

    #[test]
    fn cancelling_settings_keeps_saved_preferences() {
        let (mut app, _dir) = app_in_temp_dir();
        let _ = app.update(Message::Navbar(navbar::Message::OpenAccessibility));
        let _ = app.update(Message::Settings(settings_ui::Message::MagnifierToggled(true)));
        let _ = app.update(Message::Settings(settings_ui::Message::Cancel));

        assert_eq!(app.screen(), Screen::Practices);
        assert!(!app.preferences().magnifier_enabled);
    }

    #[test]
    fn unreadable_config_raises_warning_toast() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "this is [not toml").expect("write");

        let (app, _task) = App::new(Flags::default(), Some(dir.path().to_path_buf()));

        let keys: Vec<&str> = app
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(keys, vec![config::CONFIG_LOAD_WARNING_KEY]);
        assert_eq!(*app.preferences(), AccessibilityPreferences::default());
    }

    #[test]
    fn saved_preferences_are_restored_on_start() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.accessibility.magnifier_enabled = Some(true);
        config.magnifier.magnification = Some(3.0);
        config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");

        let (app, _task) = App::new(Flags::default(), Some(dir.path().to_path_buf()));

        assert!(app.preferences().magnifier_enabled);
        assert_eq!(app.preferences().magnification.value(), 3.0);
        assert!(app.settings.draft().magnifier_enabled);
    }

    #[test]
    fn language_selection_switches_locale() {
        let (mut app, _dir) = app_in_temp_dir();
        let _ = app.update(Message::Settings(settings_ui::Message::LanguageSelected(
            "pt-BR".parse().unwrap(),
        )));
        assert_eq!(app.i18n.current_locale().to_string(), "pt-BR");
        assert_eq!(app.config.general.language.as_deref(), Some("pt-BR"));
    }

    #[test]
    fn view_renders_every_screen() {
        let (mut app, _dir) = app_in_temp_dir();
        let _ = app.view();
        let _ = app.update(Message::Navbar(navbar::Message::OpenAccessibility));
        let _ = app.view();
    }

    #[test]
    fn forced_magnifier_does_not_touch_saved_preference() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(
            Flags {
                magnifier: true,
                ..Flags::default()
            },
            Some(dir.path().to_path_buf()),
        );
        assert!(app.force_magnifier);
        assert!(!app.preferences().magnifier_enabled);
    }
}
