// SPDX-License-Identifier: MPL-2.0
//! Headless core of the magnifier lens.
//!
//! Everything here is independent of the GUI toolkit event loop and can be
//! driven from tests with synthetic instants. The Iced widget lives in
//! [`crate::ui::widgets::magnifier`].

pub mod geometry;
pub mod gesture;
pub mod spring;
pub mod state;

pub use geometry::{
    circle_strips, clamp_lens_to_viewport, lens_position, scale_about_center, ContentTransform,
    LensGeometry, MagnificationFactor,
};
pub use gesture::{Gesture, GestureArbiter, GestureConfig};
pub use spring::{Spring, SpringConfig, SpringPoint};
pub use state::{LensPhase, LensVisibility, MagnifierState};
