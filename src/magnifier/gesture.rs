// SPDX-License-Identifier: MPL-2.0
//! Exclusive tap / double-tap / pan recognition over a single pointer stream.
//!
//! The arbiter decides which one gesture an interaction resolves to. A
//! single tap is only committed once the double-tap window has elapsed
//! without a second tap, so the first tap of a double-tap never leaks out as
//! a single tap. Movement beyond the drag threshold turns the interaction
//! into a pan and cancels any tap recognition in flight.
//!
//! The arbiter owns no clock: callers pass the event instant and call
//! [`GestureArbiter::poll`] at (or after) [`GestureArbiter::deadline`].

use crate::config::{
    DEFAULT_DOUBLE_TAP_SLOP, DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_DRAG_THRESHOLD,
    DEFAULT_TAP_MAX_DURATION_MS,
};
use iced::Point;
use std::time::{Duration, Instant};

/// Recognition thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Maximum delay between the release of the first tap and the press of the second.
    pub double_tap_window: Duration,
    /// Maximum distance between the two taps of a double-tap.
    pub double_tap_slop: f32,
    /// Pointer travel after which a press becomes a pan.
    pub drag_threshold: f32,
    /// Presses held longer than this are not taps.
    pub tap_max_duration: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_window: Duration::from_millis(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            double_tap_slop: DEFAULT_DOUBLE_TAP_SLOP,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            tap_max_duration: Duration::from_millis(DEFAULT_TAP_MAX_DURATION_MS),
        }
    }
}

/// A resolved gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    SingleTap(Point),
    DoubleTap(Point),
    DragUpdate(Point),
    DragEnd(Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pressed {
        origin: Point,
        at: Instant,
        /// First tap of a possible double-tap.
        first_tap: Option<Point>,
    },
    AwaitingSecondTap {
        first_tap: Point,
        released_at: Instant,
    },
    Dragging {
        last: Point,
    },
}

/// Explicit state machine arbitrating between single tap, double tap and pan.
#[derive(Debug, Clone)]
pub struct GestureArbiter {
    config: GestureConfig,
    phase: Phase,
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureArbiter {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Replaces the thresholds. In-flight recognition keeps going with the new values.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Returns true while a pointer is down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressed { .. } | Phase::Dragging { .. })
    }

    /// Returns true while the pointer is down for the second tap of a double-tap.
    #[must_use]
    pub fn is_completing_double_tap(&self) -> bool {
        matches!(
            self.phase,
            Phase::Pressed {
                first_tap: Some(_),
                ..
            }
        )
    }

    /// Returns true while a first tap waits for a possible second tap.
    #[must_use]
    pub fn is_awaiting_second_tap(&self) -> bool {
        matches!(self.phase, Phase::AwaitingSecondTap { .. })
    }

    /// Pointer went down.
    ///
    /// Returns a committed single tap when this press arrives too late or too
    /// far away to complete a pending double-tap.
    pub fn press(&mut self, position: Point, now: Instant) -> Option<Gesture> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Pressed {
                    origin: position,
                    at: now,
                    first_tap: None,
                };
                None
            }
            Phase::AwaitingSecondTap {
                first_tap,
                released_at,
            } => {
                let in_time = now.saturating_duration_since(released_at)
                    <= self.config.double_tap_window;
                let in_reach = first_tap.distance(position) <= self.config.double_tap_slop;

                if in_time && in_reach {
                    self.phase = Phase::Pressed {
                        origin: position,
                        at: now,
                        first_tap: Some(first_tap),
                    };
                    None
                } else {
                    log::trace!("second press outside double-tap window, committing single tap");
                    self.phase = Phase::Pressed {
                        origin: position,
                        at: now,
                        first_tap: None,
                    };
                    Some(Gesture::SingleTap(first_tap))
                }
            }
            // Already tracking a pointer
            Phase::Pressed { .. } | Phase::Dragging { .. } => None,
        }
    }

    /// Pointer moved.
    pub fn move_to(&mut self, position: Point, _now: Instant) -> Option<Gesture> {
        match self.phase {
            Phase::Pressed { origin, .. } => {
                if origin.distance(position) > self.config.drag_threshold {
                    log::trace!("pointer travelled past drag threshold, pan wins");
                    self.phase = Phase::Dragging { last: position };
                    Some(Gesture::DragUpdate(position))
                } else {
                    None
                }
            }
            Phase::Dragging { .. } => {
                self.phase = Phase::Dragging { last: position };
                Some(Gesture::DragUpdate(position))
            }
            Phase::Idle | Phase::AwaitingSecondTap { .. } => None,
        }
    }

    /// Pointer went up.
    pub fn release(&mut self, position: Point, now: Instant) -> Option<Gesture> {
        match self.phase {
            Phase::Pressed {
                origin,
                at,
                first_tap,
            } => {
                if now.saturating_duration_since(at) > self.config.tap_max_duration {
                    log::trace!("press held too long for a tap, ignoring");
                    self.phase = Phase::Idle;
                    return None;
                }

                match first_tap {
                    Some(_) => {
                        self.phase = Phase::Idle;
                        Some(Gesture::DoubleTap(origin))
                    }
                    None => {
                        self.phase = Phase::AwaitingSecondTap {
                            first_tap: origin,
                            released_at: now,
                        };
                        None
                    }
                }
            }
            Phase::Dragging { .. } => {
                self.phase = Phase::Idle;
                Some(Gesture::DragEnd(position))
            }
            Phase::Idle | Phase::AwaitingSecondTap { .. } => None,
        }
    }

    /// Commits a pending single tap once the double-tap window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Gesture> {
        if let Phase::AwaitingSecondTap {
            first_tap,
            released_at,
        } = self.phase
        {
            if now.saturating_duration_since(released_at) > self.config.double_tap_window {
                self.phase = Phase::Idle;
                return Some(Gesture::SingleTap(first_tap));
            }
        }
        None
    }

    /// Instant after which [`poll`](Self::poll) commits the pending single tap.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::AwaitingSecondTap { released_at, .. } => {
                Some(released_at + self.config.double_tap_window + Duration::from_millis(1))
            }
            _ => None,
        }
    }

    /// Aborts the interaction. A pan in progress ends at its last position.
    pub fn cancel(&mut self) -> Option<Gesture> {
        let ended = match self.phase {
            Phase::Dragging { last } => Some(Gesture::DragEnd(last)),
            _ => None,
        };
        self.phase = Phase::Idle;
        ended
    }

    /// Drops every in-flight recognition without reporting anything.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn tap(arbiter: &mut GestureArbiter, at: Point, now: Instant) -> Option<Gesture> {
        let pressed = arbiter.press(at, now);
        let released = arbiter.release(at, now + ms(60));
        pressed.or(released)
    }

    #[test]
    fn two_quick_taps_resolve_to_double_tap_only() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();
        let p = Point::new(100.0, 100.0);

        assert_eq!(tap(&mut arbiter, p, start), None);
        assert!(arbiter.is_awaiting_second_tap());
        assert!(!arbiter.is_completing_double_tap());

        assert_eq!(arbiter.press(Point::new(104.0, 98.0), start + ms(200)), None);
        assert!(arbiter.is_completing_double_tap());
        assert_eq!(
            arbiter.release(Point::new(104.0, 98.0), start + ms(260)),
            Some(Gesture::DoubleTap(Point::new(104.0, 98.0)))
        );
        assert!(!arbiter.is_completing_double_tap());
        // Nothing left over once the window elapses
        assert_eq!(arbiter.poll(start + ms(2_000)), None);
    }

    #[test]
    fn single_tap_commits_only_after_window() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();
        let p = Point::new(30.0, 40.0);

        assert_eq!(tap(&mut arbiter, p, start), None);
        assert_eq!(arbiter.poll(start + ms(200)), None);

        let deadline = arbiter.deadline().expect("pending tap should have a deadline");
        assert!(deadline > start + ms(60) + ms(300));
        assert_eq!(arbiter.poll(deadline), Some(Gesture::SingleTap(p)));
        assert_eq!(arbiter.deadline(), None);
    }

    #[test]
    fn late_second_press_commits_first_tap_and_starts_new_one() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();
        let first = Point::new(10.0, 10.0);

        tap(&mut arbiter, first, start);
        let late = arbiter.press(first, start + ms(60) + ms(400));
        assert_eq!(late, Some(Gesture::SingleTap(first)));
        assert!(arbiter.is_pressed());
    }

    #[test]
    fn distant_second_tap_is_not_a_double_tap() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();

        tap(&mut arbiter, Point::new(10.0, 10.0), start);
        assert_eq!(
            arbiter.press(Point::new(200.0, 200.0), start + ms(150)),
            Some(Gesture::SingleTap(Point::new(10.0, 10.0)))
        );
    }

    #[test]
    fn movement_past_threshold_becomes_pan() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();

        arbiter.press(Point::new(50.0, 50.0), start);
        assert_eq!(arbiter.move_to(Point::new(53.0, 52.0), start + ms(10)), None);
        assert_eq!(
            arbiter.move_to(Point::new(70.0, 50.0), start + ms(20)),
            Some(Gesture::DragUpdate(Point::new(70.0, 50.0)))
        );
        assert!(arbiter.is_pressed());
        assert!(!arbiter.is_completing_double_tap());
        assert_eq!(
            arbiter.move_to(Point::new(90.0, 60.0), start + ms(30)),
            Some(Gesture::DragUpdate(Point::new(90.0, 60.0)))
        );
        assert_eq!(
            arbiter.release(Point::new(95.0, 61.0), start + ms(40)),
            Some(Gesture::DragEnd(Point::new(95.0, 61.0)))
        );
        assert_eq!(arbiter.poll(start + ms(5_000)), None);
    }

    #[test]
    fn pan_after_first_tap_drops_pending_tap() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();

        tap(&mut arbiter, Point::new(50.0, 50.0), start);
        arbiter.press(Point::new(52.0, 50.0), start + ms(100));
        assert!(matches!(
            arbiter.move_to(Point::new(120.0, 50.0), start + ms(120)),
            Some(Gesture::DragUpdate(_))
        ));
        assert!(matches!(
            arbiter.release(Point::new(120.0, 50.0), start + ms(150)),
            Some(Gesture::DragEnd(_))
        ));
        assert_eq!(arbiter.poll(start + ms(5_000)), None);
    }

    #[test]
    fn long_press_is_not_a_tap() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();

        arbiter.press(Point::new(5.0, 5.0), start);
        assert_eq!(arbiter.release(Point::new(5.0, 5.0), start + ms(900)), None);
        assert_eq!(arbiter.poll(start + ms(5_000)), None);
    }

    #[test]
    fn cancel_ends_drag_at_last_position() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();

        arbiter.press(Point::new(0.0, 0.0), start);
        arbiter.move_to(Point::new(30.0, 0.0), start + ms(10));
        assert_eq!(
            arbiter.cancel(),
            Some(Gesture::DragEnd(Point::new(30.0, 0.0)))
        );
        assert!(!arbiter.is_pressed());
    }

    #[test]
    fn reset_drops_pending_tap_silently() {
        let mut arbiter = GestureArbiter::default();
        let start = Instant::now();

        tap(&mut arbiter, Point::new(1.0, 1.0), start);
        arbiter.reset();
        assert_eq!(arbiter.poll(start + ms(5_000)), None);
        assert_eq!(arbiter.deadline(), None);
    }

    #[test]
    fn custom_window_is_respected() {
        let mut arbiter = GestureArbiter::new(GestureConfig {
            double_tap_window: ms(100),
            ..GestureConfig::default()
        });
        let start = Instant::now();

        tap(&mut arbiter, Point::new(1.0, 1.0), start);
        assert!(matches!(
            arbiter.press(Point::new(1.0, 1.0), start + ms(60) + ms(150)),
            Some(Gesture::SingleTap(_))
        ));
    }
}
