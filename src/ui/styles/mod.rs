// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for UI components.
//!
//! Styles take the active [`ColorScheme`](crate::ui::theming::ColorScheme)
//! so the high-contrast preference reaches every widget.

pub mod button;
pub mod container;
