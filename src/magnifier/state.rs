// SPDX-License-Identifier: MPL-2.0
//! Lens state machine.
//!
//! Gestures recognized by the [`GestureArbiter`](super::GestureArbiter) drive
//! the transitions; [`MagnifierState::tick`] advances the scale and follow
//! springs once per frame.
//!
//! | Phase   | Gesture      | Effect                                      |
//! |---------|--------------|---------------------------------------------|
//! | Idle    | double tap   | place lens at the touch, scale 0 → 1        |
//! | Visible | double tap   | relocate the lens                           |
//! | Visible | single tap   | scale 1 → 0, Hiding                         |
//! | Visible | drag update  | move pointer, lens springs to new placement |
//! | Visible | drag end     | scale 1 → 0, Hiding                         |
//! | Hiding  | double tap   | relocate and show again                     |
//! | any     | reset        | scale 0, Idle, no animation                 |

use super::geometry::{
    clamp_lens_to_viewport, lens_position, ContentTransform, LensGeometry, MagnificationFactor,
};
use super::gesture::Gesture;
use super::spring::{Spring, SpringConfig, SpringPoint};
use iced::{Point, Size};
use std::time::Instant;

/// Lifecycle phase of the lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LensPhase {
    #[default]
    Idle,
    Visible,
    /// Scale animating to 0 on the way back to `Idle`.
    Hiding,
}

/// Animated visibility of the lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensVisibility {
    /// Current scale in `[0, 1]`.
    pub scale: f32,
    /// True only while the lens is showing or shown.
    pub visible: bool,
}

impl LensVisibility {
    /// Returns true when anything of the lens would be drawn.
    #[must_use]
    pub fn is_drawn(self) -> bool {
        self.scale > 0.0
    }
}

/// Transient interaction state of one magnifier.
#[derive(Debug, Clone)]
pub struct MagnifierState {
    phase: LensPhase,
    pointer: Option<Point>,
    lens: SpringPoint,
    scale: Spring,
    generation: u64,
    hide_generation: Option<u64>,
    last_tick: Option<Instant>,
}

impl Default for MagnifierState {
    fn default() -> Self {
        Self {
            phase: LensPhase::Idle,
            pointer: None,
            lens: SpringPoint::new(Point::ORIGIN, SpringConfig::FOLLOW),
            scale: Spring::new(0.0, SpringConfig::SHOW),
            generation: 0,
            hide_generation: None,
            last_tick: None,
        }
    }
}

impl MagnifierState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a recognized gesture. Returns true if the state changed.
    pub fn handle(&mut self, gesture: Gesture, viewport: Size, lens: LensGeometry) -> bool {
        match (self.phase, gesture) {
            (_, Gesture::DoubleTap(position)) => {
                self.show_at(position, viewport, lens);
                true
            }
            (LensPhase::Visible, Gesture::DragUpdate(position)) => {
                self.pointer = Some(position);
                self.lens.set_target(lens_position(position, viewport, lens));
                true
            }
            (LensPhase::Visible, Gesture::SingleTap(_) | Gesture::DragEnd(_)) => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    fn show_at(&mut self, position: Point, viewport: Size, lens: LensGeometry) {
        if self.phase == LensPhase::Idle {
            self.scale.snap_to(0.0);
        }
        self.pointer = Some(position);
        self.lens.snap_to(lens_position(position, viewport, lens));
        self.scale.set_target(1.0);
        self.phase = LensPhase::Visible;
        self.generation += 1;
        self.hide_generation = None;
        log::debug!(
            "magnifier lens shown at ({:.1}, {:.1}), generation {}",
            position.x,
            position.y,
            self.generation
        );
    }

    fn hide(&mut self) {
        self.generation += 1;
        self.hide_generation = Some(self.generation);
        self.phase = LensPhase::Hiding;
        self.scale.set_target(0.0);
        log::debug!("magnifier lens hiding, generation {}", self.generation);
    }

    /// Advances animations to `now`. Returns true while another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        // A hide issued before the show animation moved has nothing to animate
        self.finish_hide();
        if !self.is_animating() {
            self.last_tick = None;
            return false;
        }

        let Some(previous) = self.last_tick.replace(now) else {
            // First frame of an animation only records the clock
            return true;
        };
        let dt = now.saturating_duration_since(previous);
        self.scale.step(dt);
        self.lens.step(dt);
        self.finish_hide();

        let animating = self.is_animating();
        if !animating {
            self.last_tick = None;
        }
        animating
    }

    /// Moves a settled hide of the current generation to `Idle`.
    fn finish_hide(&mut self) {
        if self.phase == LensPhase::Hiding
            && self.scale.is_settled()
            && self.hide_generation == Some(self.generation)
        {
            self.phase = LensPhase::Idle;
            self.pointer = None;
            self.hide_generation = None;
            self.lens.snap_to(self.lens.value());
            log::debug!("magnifier lens idle");
        }
    }

    /// Re-places a shown lens after the viewport changed size.
    pub fn relayout(&mut self, viewport: Size, lens: LensGeometry) {
        if self.phase == LensPhase::Idle {
            return;
        }
        if let Some(pointer) = self.pointer {
            self.lens.snap_to(lens_position(pointer, viewport, lens));
        }
    }

    /// Forces the initial state immediately, cancelling every animation.
    pub fn reset(&mut self) {
        if self.phase != LensPhase::Idle {
            log::debug!("magnifier reset from {:?}", self.phase);
        }
        self.phase = LensPhase::Idle;
        self.pointer = None;
        self.scale.snap_to(0.0);
        self.lens.snap_to(self.lens.value());
        self.generation += 1;
        self.hide_generation = None;
        self.last_tick = None;
    }

    #[must_use]
    pub fn phase(&self) -> LensPhase {
        self.phase
    }

    #[must_use]
    pub fn visibility(&self) -> LensVisibility {
        LensVisibility {
            scale: self.scale.value().clamp(0.0, 1.0),
            visible: self.phase == LensPhase::Visible,
        }
    }

    /// Last pointer position, in content coordinates, while the lens is up.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Placement the lens is heading for.
    #[must_use]
    pub fn lens_target(&self) -> Point {
        self.lens.target()
    }

    /// Current (animated) lens placement, kept inside the viewport.
    #[must_use]
    pub fn lens_position(&self, viewport: Size, lens: LensGeometry) -> Point {
        clamp_lens_to_viewport(self.lens.value(), viewport, lens)
    }

    /// Transform for the magnified content, if a pointer is known.
    #[must_use]
    pub fn content_transform(
        &self,
        factor: MagnificationFactor,
        lens: LensGeometry,
    ) -> Option<ContentTransform> {
        self.pointer
            .map(|pointer| ContentTransform::for_touch(pointer, factor, lens.diameter()))
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scale.is_settled() || !self.lens.is_settled()
    }
}
