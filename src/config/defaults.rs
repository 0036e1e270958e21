// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Magnification**: Lens zoom factor bounds
//! - **Lens**: Lens diameter and screen-edge margin
//! - **Gestures**: Tap/double-tap/drag recognition thresholds
//! - **Animation**: Spring parameters for the lens show/hide and follow motion
//! - **Typography**: Base font size used for accessibility scaling

// ==========================================================================
// Magnification Defaults
// ==========================================================================

/// Default zoom factor applied to content inside the lens.
pub const DEFAULT_MAGNIFICATION: f32 = 2.0;

/// Smallest accepted zoom factor. Anything at or below 1.0 would not magnify.
pub const MIN_MAGNIFICATION: f32 = 1.01;

/// Largest accepted zoom factor.
pub const MAX_MAGNIFICATION: f32 = 8.0;

// ==========================================================================
// Lens Defaults
// ==========================================================================

/// Default lens diameter in logical pixels.
pub const DEFAULT_LENS_DIAMETER: f32 = 120.0;

/// Minimum lens diameter.
pub const MIN_LENS_DIAMETER: f32 = 60.0;

/// Maximum lens diameter.
pub const MAX_LENS_DIAMETER: f32 = 400.0;

/// Default inset kept between the lens and the viewport edges, and between
/// the lens and the finger.
pub const DEFAULT_LENS_MARGIN: f32 = 10.0;

/// Maximum lens margin.
pub const MAX_LENS_MARGIN: f32 = 64.0;

/// Number of horizontal strips used to approximate the circular lens clip.
pub const LENS_CLIP_STRIPS: usize = 16;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default time allowed between two taps for them to count as a double-tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum double-tap window.
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Maximum double-tap window.
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1000;

/// Maximum distance between the two taps of a double-tap.
pub const DEFAULT_DOUBLE_TAP_SLOP: f32 = 40.0;

/// Pointer travel after which a press becomes a drag and stops being a tap.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 8.0;

/// Presses held longer than this are not taps.
pub const DEFAULT_TAP_MAX_DURATION_MS: u64 = 500;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Spring stiffness for the lens scale (show/hide) animation.
pub const SHOW_SPRING_STIFFNESS: f32 = 200.0;

/// Spring damping for the lens scale (show/hide) animation.
pub const SHOW_SPRING_DAMPING: f32 = 15.0;

/// Spring stiffness for the lens follow animation during a drag.
pub const FOLLOW_SPRING_STIFFNESS: f32 = 300.0;

/// Spring damping for the lens follow animation during a drag.
pub const FOLLOW_SPRING_DAMPING: f32 = 20.0;

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Font size (points) that corresponds to a scale factor of 1.0.
pub const BASE_FONT_SIZE: f32 = 16.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Magnification validation
    assert!(MIN_MAGNIFICATION > 1.0);
    assert!(DEFAULT_MAGNIFICATION >= MIN_MAGNIFICATION);
    assert!(DEFAULT_MAGNIFICATION <= MAX_MAGNIFICATION);

    // Lens validation
    assert!(MIN_LENS_DIAMETER > 0.0);
    assert!(DEFAULT_LENS_DIAMETER >= MIN_LENS_DIAMETER);
    assert!(DEFAULT_LENS_DIAMETER <= MAX_LENS_DIAMETER);
    assert!(DEFAULT_LENS_MARGIN >= 0.0);
    assert!(DEFAULT_LENS_MARGIN <= MAX_LENS_MARGIN);
    assert!(LENS_CLIP_STRIPS > 0);

    // Gesture validation
    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DRAG_THRESHOLD > 0.0);
    assert!(DEFAULT_DOUBLE_TAP_SLOP > DEFAULT_DRAG_THRESHOLD);

    // Animation validation
    assert!(SHOW_SPRING_STIFFNESS > 0.0);
    assert!(FOLLOW_SPRING_STIFFNESS > 0.0);
    assert!(SHOW_SPRING_DAMPING > 0.0);
    assert!(FOLLOW_SPRING_DAMPING > 0.0);
};
