// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message`, an `Event` for the parent and the
//! `update`/`view` pair.
//!
//! # Screens
//!
//! - [`practices`] - Integrative practices catalogue
//! - [`settings`] - Accessibility preferences
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Tab bar switching between screens
//! - [`notifications`] - Toasts for configuration feedback
//! - [`widgets`] - Custom Iced widgets (magnifier lens)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System and high-contrast color schemes

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod practices;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;
