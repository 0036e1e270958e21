// SPDX-License-Identifier: MPL-2.0
//! Damped spring interpolation for the lens animations.
//!
//! Springs integrate with semi-implicit Euler over fixed sub-steps so the
//! motion does not depend on the frame rate. A spring can be retargeted at
//! any time; it keeps its current velocity and heads for the new target.

use crate::config::{
    FOLLOW_SPRING_DAMPING, FOLLOW_SPRING_STIFFNESS, SHOW_SPRING_DAMPING, SHOW_SPRING_STIFFNESS,
};
use iced::Point;
use std::time::Duration;

/// Integration sub-step, in seconds.
const SUBSTEP: f32 = 1.0 / 240.0;

/// Longest frame gap integrated in one call. Longer hitches are truncated.
const MAX_FRAME_DT: f32 = 0.1;

/// A spring closer than this to its target is considered at rest...
const REST_DISPLACEMENT: f32 = 0.01;

/// ...provided it is also slower than this (units per second).
const REST_SPEED: f32 = 2.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Lens scale (show/hide).
    pub const SHOW: Self = Self {
        stiffness: SHOW_SPRING_STIFFNESS,
        damping: SHOW_SPRING_DAMPING,
        mass: 1.0,
    };

    /// Lens position while following a drag.
    pub const FOLLOW: Self = Self {
        stiffness: FOLLOW_SPRING_STIFFNESS,
        damping: FOLLOW_SPRING_DAMPING,
        mass: 1.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SHOW
    }
}

/// Scalar damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    target: f32,
    velocity: f32,
    config: SpringConfig,
}

impl Spring {
    /// Creates a spring at rest on `value`.
    #[must_use]
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            target: value,
            velocity: 0.0,
            config: SpringConfig {
                stiffness: config.stiffness.max(0.0001),
                damping: config.damping.max(0.0),
                mass: config.mass.max(0.0001),
            },
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Retargets the spring, keeping its current value and velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps to `value` and stops.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the simulation by `dt`. Returns whether the spring is still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let SpringConfig {
                stiffness,
                damping,
                mass,
            } = self.config;
            let acceleration =
                (stiffness * (self.target - self.value) - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.value).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED
        {
            self.snap_to(self.target);
            return false;
        }
        true
    }
}

/// Two springs driving a 2D position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringPoint {
    x: Spring,
    y: Spring,
}

impl SpringPoint {
    #[must_use]
    pub fn new(position: Point, config: SpringConfig) -> Self {
        Self {
            x: Spring::new(position.x, config),
            y: Spring::new(position.y, config),
        }
    }

    #[must_use]
    pub fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to(&mut self, position: Point) {
        self.x.snap_to(position.x);
        self.y.snap_to(position.y);
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn step(&mut self, dt: Duration) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }
}
