// SPDX-License-Identifier: MPL-2.0
//! Lens placement and magnified-content transform.
//!
//! All coordinates are in the wrapped content's local space: `(0, 0)` is the
//! top-left corner of the content and the viewport is the content size.

use crate::config::{
    DEFAULT_LENS_DIAMETER, DEFAULT_LENS_MARGIN, DEFAULT_MAGNIFICATION, MAX_LENS_DIAMETER,
    MAX_LENS_MARGIN, MAX_MAGNIFICATION, MIN_LENS_DIAMETER, MIN_MAGNIFICATION,
};
use iced::{Point, Rectangle, Size, Vector};

/// Magnification factor, guaranteed to be within valid range (1.01×–8×).
///
/// A factor at or below 1.0 would not magnify, so it is clamped to the
/// minimum instead of being rejected. NaN degrades to the minimum as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnificationFactor(f32);

impl MagnificationFactor {
    /// Creates a new factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self(MIN_MAGNIFICATION);
        }
        Self(factor.clamp(MIN_MAGNIFICATION, MAX_MAGNIFICATION))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the factor is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_MAGNIFICATION
    }

    /// Returns whether the factor is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_MAGNIFICATION
    }
}

impl Default for MagnificationFactor {
    fn default() -> Self {
        Self(DEFAULT_MAGNIFICATION)
    }
}

/// Size of the lens and the inset it keeps from the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGeometry {
    diameter: f32,
    margin: f32,
}

impl LensGeometry {
    /// Creates a lens geometry, clamping both values to their valid ranges.
    #[must_use]
    pub fn new(diameter: f32, margin: f32) -> Self {
        let diameter = if diameter.is_nan() {
            DEFAULT_LENS_DIAMETER
        } else {
            diameter.clamp(MIN_LENS_DIAMETER, MAX_LENS_DIAMETER)
        };
        let margin = if margin.is_nan() {
            DEFAULT_LENS_MARGIN
        } else {
            margin.clamp(0.0, MAX_LENS_MARGIN)
        };
        Self { diameter, margin }
    }

    #[must_use]
    pub fn diameter(self) -> f32 {
        self.diameter
    }

    #[must_use]
    pub fn margin(self) -> f32 {
        self.margin
    }

    #[must_use]
    pub fn radius(self) -> f32 {
        self.diameter / 2.0
    }
}

impl Default for LensGeometry {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_LENS_DIAMETER,
            margin: DEFAULT_LENS_MARGIN,
        }
    }
}

/// Computes the top-left corner of the lens for a touch point.
///
/// The lens prefers to sit above the finger, horizontally centered on it.
/// It is pushed back inside the horizontal margins and flips below the
/// finger when there is no room above. The flipped position is then kept
/// inside the bottom margin so the lens never leaves the viewport.
#[must_use]
pub fn lens_position(touch: Point, viewport: Size, lens: LensGeometry) -> Point {
    let d = lens.diameter();
    let m = lens.margin();

    let mut x = touch.x - d / 2.0;
    let mut y = touch.y - d - m;

    if x < m {
        x = m;
    }
    if x > viewport.width - d - m {
        x = viewport.width - d - m;
    }
    if y < m {
        y = touch.y + m;
    }

    clamp_lens_to_viewport(Point::new(x, y), viewport, lens)
}

/// Clamps a lens top-left position into the viewport, honoring the margin.
///
/// When the viewport is too small to hold the lens plus both margins on an
/// axis, the lens is centered on that axis.
#[must_use]
pub fn clamp_lens_to_viewport(position: Point, viewport: Size, lens: LensGeometry) -> Point {
    Point::new(
        clamp_axis(position.x, viewport.width, lens),
        clamp_axis(position.y, viewport.height, lens),
    )
}

fn clamp_axis(value: f32, extent: f32, lens: LensGeometry) -> f32 {
    let d = lens.diameter();
    let m = lens.margin();
    let max = extent - d - m;

    if max < m {
        return (extent - d) / 2.0;
    }
    if value.is_nan() {
        return m;
    }
    value.clamp(m, max)
}

/// Scale and translation mapping content coordinates into lens-local space.
///
/// Under this transform the touch point lands on the lens center, so the
/// lens shows the content around the finger regardless of where the lens
/// itself is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    pub translation: Vector,
    pub scale: f32,
}

impl ContentTransform {
    #[must_use]
    pub fn for_touch(touch: Point, factor: MagnificationFactor, diameter: f32) -> Self {
        let scale = factor.value();
        let half = diameter / 2.0;
        Self {
            translation: Vector::new(-touch.x * scale + half, -touch.y * scale + half),
            scale,
        }
    }

    /// Maps a content point into lens-local coordinates.
    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.translation.x,
            point.y * self.scale + self.translation.y,
        )
    }

    /// Maps a lens-local point back into content coordinates.
    #[must_use]
    pub fn invert(self, point: Point) -> Point {
        Point::new(
            (point.x - self.translation.x) / self.scale,
            (point.y - self.translation.y) / self.scale,
        )
    }
}

/// Splits the disc inscribed in `bounds` into `count` horizontal strips.
///
/// Each strip spans the chord of the circle at the strip's middle row, so
/// clipping to every strip in turn approximates a circular clip with plain
/// rectangles. Strips with an empty chord are omitted.
#[must_use]
pub fn circle_strips(bounds: Rectangle, count: usize) -> Vec<Rectangle> {
    if count == 0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Vec::new();
    }

    let center = bounds.center();
    let radius = bounds.width.min(bounds.height) / 2.0;
    let top = center.y - radius;
    let strip_height = (radius * 2.0) / count as f32;

    (0..count)
        .filter_map(|index| {
            let y = top + strip_height * index as f32;
            let dy = y + strip_height / 2.0 - center.y;
            let half_chord = (radius * radius - dy * dy).max(0.0).sqrt();
            (half_chord > 0.0).then(|| Rectangle {
                x: center.x - half_chord,
                y,
                width: half_chord * 2.0,
                height: strip_height,
            })
        })
        .collect()
}

/// Scales `bounds` about its own center.
#[must_use]
pub fn scale_about_center(bounds: Rectangle, scale: f32) -> Rectangle {
    let center = bounds.center();
    let width = bounds.width * scale;
    let height = bounds.height * scale;
    Rectangle {
        x: center.x - width / 2.0,
        y: center.y - height / 2.0,
        width,
        height,
    }
}
