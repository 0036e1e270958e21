// SPDX-License-Identifier: MPL-2.0
//! `pics_lens` is an integrative-practices catalogue built with the Iced GUI
//! framework, carrying accessibility preferences and a double-tap magnifier
//! lens.
//!
//! The lens logic lives in [`magnifier`] as plain state machines and
//! geometry, independent of rendering. The [`ui::widgets::Magnifier`] widget
//! feeds it pointer events and draws the magnified duplicate of its content.

pub mod accessibility;
pub mod app;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod i18n;
pub mod magnifier;
pub mod ui;
