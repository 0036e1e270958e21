// SPDX-License-Identifier: MPL-2.0
//! Accessibility preferences shared across screens.
//!
//! Preferences are plain values handed down the view tree; nothing here is
//! global. The app owns the saved copy and the settings screen edits a draft.

use crate::config::BASE_FONT_SIZE;
use crate::magnifier::MagnificationFactor;
use serde::{Deserialize, Serialize};

/// Text size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    /// Reference text size in points.
    #[must_use]
    pub fn points(self) -> f32 {
        match self {
            FontSize::Small => 14.0,
            FontSize::Medium => 16.0,
            FontSize::Large => 18.0,
            FontSize::ExtraLarge => 22.0,
        }
    }

    /// Multiplier relative to the medium preset.
    #[must_use]
    pub fn scale(self) -> f32 {
        self.points() / BASE_FONT_SIZE
    }

    /// Scales a base size, rounded to whole points.
    #[must_use]
    pub fn scaled(self, base: f32) -> f32 {
        (base * self.scale()).round()
    }

    /// i18n key of the preset label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FontSize::Small => "font-size-small",
            FontSize::Medium => "font-size-medium",
            FontSize::Large => "font-size-large",
            FontSize::ExtraLarge => "font-size-extra-large",
        }
    }
}

/// User-facing accessibility choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessibilityPreferences {
    pub font_size: FontSize,
    pub high_contrast: bool,
    pub magnifier_enabled: bool,
    pub magnification: MagnificationFactor,
}

impl Default for AccessibilityPreferences {
    fn default() -> Self {
        Self {
            font_size: FontSize::default(),
            high_contrast: false,
            magnifier_enabled: false,
            magnification: MagnificationFactor::default(),
        }
    }
}

impl AccessibilityPreferences {
    /// Shorthand for `self.font_size.scaled(base)`.
    #[must_use]
    pub fn text(&self, base: f32) -> f32 {
        self.font_size.scaled(base)
    }
}
