// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{navbar, notifications, practices, settings};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Practices(practices::Message),
    Settings(settings::Message),
    Notification(notifications::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PICS_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Enables the magnifier for this run without touching the saved setting.
    pub magnifier: bool,
}
