// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that shows a circular magnifying lens over its content.
//!
//! Double-tap (or double-click) anywhere on the content to open the lens. The
//! lens shows an enlarged copy of the content around the finger, sits above
//! the finger when there is room and follows a drag. A single tap or the end
//! of a drag closes it.
//!
//! When disabled the widget is a plain passthrough: layout, events, drawing
//! and overlays all go straight to the content. When enabled, pointer events
//! stop at the widget while the lens is up, and so does the second tap of the
//! double-tap that opens it.
//!
//! The lens draws the content a second time under a scale and translate
//! transformation. That duplicate never receives events and is drawn with an
//! unavailable cursor, so hover and press state only ever come from the real
//! content.

use crate::config::LENS_CLIP_STRIPS;
use crate::magnifier::{
    circle_strips, scale_about_center, ContentTransform, Gesture, GestureArbiter, GestureConfig,
    LensGeometry, LensPhase, MagnificationFactor, MagnifierState,
};
use crate::ui::design_tokens::{lens as lens_tokens, shadow};
use crate::ui::theming::ColorScheme;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{
    touch, window, Border, Color, Element, Event, Length, Point, Rectangle, Shadow, Size,
    Transformation, Vector,
};
use std::time::Instant;

/// Colors of the lens decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensStyle {
    pub background: Color,
    pub border: Color,
    pub crosshair: Color,
    pub shadow: Shadow,
}

impl LensStyle {
    #[must_use]
    pub fn from_scheme(colors: &ColorScheme) -> Self {
        Self {
            background: colors.lens_background,
            border: colors.lens_border,
            crosshair: colors.lens_crosshair,
            shadow: shadow::LENS,
        }
    }
}

impl Default for LensStyle {
    fn default() -> Self {
        Self::from_scheme(&ColorScheme::light())
    }
}

/// A widget that wraps content and magnifies it under a movable lens.
pub struct Magnifier<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    enabled: bool,
    magnification: MagnificationFactor,
    lens: LensGeometry,
    gestures: GestureConfig,
    style: LensStyle,
}

impl<'a, Message, Theme, Renderer> Magnifier<'a, Message, Theme, Renderer> {
    /// Creates a new enabled `Magnifier` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            enabled: true,
            magnification: MagnificationFactor::default(),
            lens: LensGeometry::default(),
            gestures: GestureConfig::default(),
            style: LensStyle::default(),
        }
    }

    /// Turns gesture recognition on or off. Turning it off hides the lens at once.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn magnification(mut self, magnification: MagnificationFactor) -> Self {
        self.magnification = magnification;
        self
    }

    #[must_use]
    pub fn lens(mut self, lens: LensGeometry) -> Self {
        self.lens = lens;
        self
    }

    #[must_use]
    pub fn gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    #[must_use]
    pub fn style(mut self, style: LensStyle) -> Self {
        self.style = style;
        self
    }
}

// =============================================================================
// Widget State
// =============================================================================

/// Pointer input normalized to content-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerInput {
    Press(Point),
    Move(Point),
    Release(Point),
    Cancel,
}

/// Follows a single pointer: the first finger down, or the left mouse button
/// when no finger is tracked. Other fingers are ignored.
#[derive(Debug, Default)]
struct PointerTracker {
    finger: Option<touch::Finger>,
    mouse_down: bool,
    last: Option<Point>,
}

impl PointerTracker {
    fn track(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PointerInput> {
        let input = match event {
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if self.finger.is_some() || self.mouse_down || !bounds.contains(*position) {
                    return None;
                }
                self.finger = Some(*id);
                PointerInput::Press(to_local(*position, bounds))
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if self.finger != Some(*id) {
                    return None;
                }
                PointerInput::Move(to_local(*position, bounds))
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => {
                if self.finger != Some(*id) {
                    return None;
                }
                self.finger = None;
                PointerInput::Release(to_local(*position, bounds))
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if self.finger != Some(*id) {
                    return None;
                }
                self.finger = None;
                PointerInput::Cancel
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if self.finger.is_some() {
                    return None;
                }
                let position = cursor.position_over(bounds)?;
                self.mouse_down = true;
                PointerInput::Press(to_local(position, bounds))
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if !self.mouse_down {
                    return None;
                }
                PointerInput::Move(to_local(*position, bounds))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !self.mouse_down {
                    return None;
                }
                self.mouse_down = false;
                let position = cursor
                    .position()
                    .map(|position| to_local(position, bounds))
                    .or(self.last)
                    .unwrap_or(Point::ORIGIN);
                PointerInput::Release(position)
            }
            Event::Mouse(mouse::Event::CursorLeft) if self.mouse_down => {
                self.mouse_down = false;
                PointerInput::Cancel
            }
            _ => return None,
        };

        if let PointerInput::Press(p) | PointerInput::Move(p) | PointerInput::Release(p) = input {
            self.last = Some(p);
        }
        Some(input)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Converts a window position into content-local coordinates, clamped to the content.
fn to_local(position: Point, bounds: Rectangle) -> Point {
    Point::new(
        (position.x - bounds.x).clamp(0.0, bounds.width.max(0.0)),
        (position.y - bounds.y).clamp(0.0, bounds.height.max(0.0)),
    )
}

struct State {
    pointer: PointerTracker,
    arbiter: GestureArbiter,
    magnifier: MagnifierState,
    size: Option<Size>,
}

impl State {
    fn new(gestures: GestureConfig) -> Self {
        Self {
            pointer: PointerTracker::default(),
            arbiter: GestureArbiter::new(gestures),
            magnifier: MagnifierState::new(),
            size: None,
        }
    }

    fn is_dormant(&self) -> bool {
        self.magnifier.phase() == LensPhase::Idle
            && !self.magnifier.is_animating()
            && !self.arbiter.is_pressed()
            && !self.arbiter.is_awaiting_second_tap()
    }

    fn reset(&mut self) {
        self.pointer.reset();
        self.arbiter.reset();
        self.magnifier.reset();
    }

    /// Runs pointer input through the arbiter into the lens state machine.
    /// Returns true if the lens changed.
    fn feed(&mut self, input: PointerInput, now: Instant, size: Size, lens: LensGeometry) -> bool {
        let gesture = match input {
            PointerInput::Press(p) => self.arbiter.press(p, now),
            PointerInput::Move(p) => self.arbiter.move_to(p, now),
            PointerInput::Release(p) => self.arbiter.release(p, now),
            PointerInput::Cancel => self.arbiter.cancel(),
        };
        gesture.is_some_and(|gesture| self.apply(gesture, size, lens))
    }

    fn apply(&mut self, gesture: Gesture, size: Size, lens: LensGeometry) -> bool {
        log::trace!("magnifier gesture {gesture:?}");
        self.magnifier.handle(gesture, size, lens)
    }
}

// =============================================================================
// Lens Geometry On Screen
// =============================================================================

/// Where the lens lands on screen and how the content maps into it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LensFrame {
    /// Disc bounds in window coordinates, after the visibility scale.
    bounds: Rectangle,
    /// Uniform scale applied to the duplicated content.
    zoom: f32,
    /// Translation applied after `zoom`.
    offset: Vector,
}

impl LensFrame {
    /// `content` is the content's window bounds, `lens_origin` the lens
    /// top-left in content coordinates and `scale` the visibility scale.
    fn new(
        content: Rectangle,
        lens_origin: Point,
        diameter: f32,
        scale: f32,
        transform: ContentTransform,
    ) -> Self {
        let full = Rectangle {
            x: content.x + lens_origin.x,
            y: content.y + lens_origin.y,
            width: diameter,
            height: diameter,
        };
        let center = full.center();
        let m = transform.scale;

        // Unscaled map: m * (p - content) + translation + lens top-left
        let k = Vector::new(
            transform.translation.x + full.x - m * content.x,
            transform.translation.y + full.y - m * content.y,
        );

        // Visibility scale about the lens center
        Self {
            bounds: scale_about_center(full, scale),
            zoom: scale * m,
            offset: Vector::new(
                scale * (k.x - center.x) + center.x,
                scale * (k.y - center.y) + center.y,
            ),
        }
    }

    fn transformation(&self) -> Transformation {
        Transformation::translate(self.offset.x, self.offset.y) * Transformation::scale(self.zoom)
    }

    fn to_screen(&self, point: Point) -> Point {
        Point::new(
            point.x * self.zoom + self.offset.x,
            point.y * self.zoom + self.offset.y,
        )
    }

    /// Region of the content (window coordinates) that ends up inside `area`.
    fn content_viewport(&self, area: Rectangle) -> Rectangle {
        Rectangle {
            x: (area.x - self.offset.x) / self.zoom,
            y: (area.y - self.offset.y) / self.zoom,
            width: area.width / self.zoom,
            height: area.height / self.zoom,
        }
    }
}

/// Lens smaller than this is not drawn.
const MIN_DRAWN_SCALE: f32 = 0.01;

// =============================================================================
// Widget Implementation
// =============================================================================

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Magnifier<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(self.gestures))
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);

        let state = tree.state.downcast_mut::<State>();
        if !self.enabled && !state.is_dormant() {
            state.reset();
        }
        if state.arbiter.config() != self.gestures {
            state.arbiter.set_config(self.gestures);
        }
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );

        if !self.enabled {
            return;
        }

        let state = tree.state.downcast_ref::<State>();
        let visibility = state.magnifier.visibility();
        if visibility.scale < MIN_DRAWN_SCALE {
            return;
        }
        let Some(transform) = state
            .magnifier
            .content_transform(self.magnification, self.lens)
        else {
            return;
        };

        let bounds = layout.bounds();
        let lens_origin = state.magnifier.lens_position(bounds.size(), self.lens);
        let frame = LensFrame::new(
            bounds,
            lens_origin,
            self.lens.diameter(),
            visibility.scale,
            transform,
        );
        let radius = frame.bounds.width / 2.0;
        let fade = |color: Color| Color {
            a: color.a * visibility.scale,
            ..color
        };

        let layer_bounds = frame.bounds.expand(self.style.shadow.blur_radius * 2.0);
        renderer.with_layer(layer_bounds, |renderer| {
            // Disc with drop shadow
            renderer.fill_quad(
                renderer::Quad {
                    bounds: frame.bounds,
                    border: Border {
                        radius: radius.into(),
                        ..Border::default()
                    },
                    shadow: Shadow {
                        color: fade(self.style.shadow.color),
                        ..self.style.shadow
                    },
                    ..renderer::Quad::default()
                },
                fade(self.style.background),
            );

            // Magnified duplicate, clipped to the disc strip by strip
            for strip in circle_strips(frame.bounds, LENS_CLIP_STRIPS) {
                renderer.with_layer(strip, |renderer| {
                    renderer.with_transformation(frame.transformation(), |renderer| {
                        self.content.as_widget().draw(
                            &tree.children[0],
                            renderer,
                            theme,
                            style,
                            layout,
                            mouse::Cursor::Unavailable,
                            &frame.content_viewport(strip),
                        );
                    });
                });
            }

            // Ring
            renderer.fill_quad(
                renderer::Quad {
                    bounds: frame.bounds,
                    border: Border {
                        color: fade(self.style.border),
                        width: lens_tokens::BORDER_WIDTH,
                        radius: radius.into(),
                    },
                    ..renderer::Quad::default()
                },
                Color::TRANSPARENT,
            );

            // Crosshair circle on the magnified touch point
            let crosshair_size = lens_tokens::CROSSHAIR_SIZE * visibility.scale;
            let center = frame.bounds.center();
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: center.x - crosshair_size / 2.0,
                        y: center.y - crosshair_size / 2.0,
                        width: crosshair_size,
                        height: crosshair_size,
                    },
                    border: Border {
                        color: fade(self.style.crosshair),
                        width: lens_tokens::CROSSHAIR_WIDTH,
                        radius: (crosshair_size / 2.0).into(),
                    },
                    ..renderer::Quad::default()
                },
                Color::TRANSPARENT,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.enabled {
            let bounds = layout.bounds();
            let size = bounds.size();
            let state = tree.state.downcast_mut::<State>();

            if state.size != Some(size) {
                state.magnifier.relayout(size, self.lens);
                state.size = Some(size);
            }

            if let Event::Window(window::Event::RedrawRequested(now)) = event {
                if let Some(gesture) = state.arbiter.poll(*now) {
                    state.apply(gesture, size, self.lens);
                }
                if state.magnifier.tick(*now) {
                    shell.request_redraw();
                } else if let Some(deadline) = state.arbiter.deadline() {
                    shell.request_redraw_at(window::RedrawRequest::At(deadline));
                }
            } else {
                let lens_was_visible = state.magnifier.phase() == LensPhase::Visible;

                if let Some(input) = state.pointer.track(event, bounds, cursor) {
                    if state.feed(input, Instant::now(), size, self.lens) {
                        shell.request_redraw();
                    }
                    if let Some(deadline) = state.arbiter.deadline() {
                        shell.request_redraw_at(window::RedrawRequest::At(deadline));
                    }

                    // The second tap of a double-tap belongs to the lens
                    let lens_opened = state.magnifier.phase() == LensPhase::Visible;
                    if lens_was_visible || lens_opened || state.arbiter.is_completing_double_tap()
                    {
                        shell.capture_event();
                        return;
                    }
                }
            }
        } else {
            let state = tree.state.downcast_mut::<State>();
            if !state.is_dormant() {
                state.reset();
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.enabled {
            let state = tree.state.downcast_ref::<State>();
            if state.magnifier.phase() == LensPhase::Visible && cursor.is_over(layout.bounds()) {
                return mouse::Interaction::Crosshair;
            }
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Magnifier<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(magnifier: Magnifier<'a, Message, Theme, Renderer>) -> Self {
        Self::new(magnifier)
    }
}

/// Helper function to wrap content in a magnifier.
pub fn magnifier<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Magnifier<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Magnifier::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::clipboard;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    const EPSILON: f32 = 1e-3;

    fn content_bounds() -> Rectangle {
        Rectangle::new(Point::new(20.0, 56.0), Size::new(400.0, 800.0))
    }

    fn press_at(position: Point) -> Event {
        Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position,
        })
    }

    fn lift_at(position: Point) -> Event {
        Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(1),
            position,
        })
    }

    #[test]
    fn lens_frame_maps_touch_point_to_lens_center() {
        let bounds = content_bounds();
        let touch = Point::new(100.0, 100.0);
        let transform =
            ContentTransform::for_touch(touch, MagnificationFactor::new(2.0), 120.0);

        for scale in [1.0, 0.5, 0.1] {
            let frame = LensFrame::new(bounds, Point::new(40.0, 110.0), 120.0, scale, transform);
            let on_screen = frame.to_screen(Point::new(bounds.x + touch.x, bounds.y + touch.y));
            let center = frame.bounds.center();
            assert!((on_screen.x - center.x).abs() < EPSILON);
            assert!((on_screen.y - center.y).abs() < EPSILON);
        }
    }

    #[test]
    fn lens_frame_scale_shrinks_disc_about_center() {
        let transform = ContentTransform::for_touch(
            Point::new(50.0, 50.0),
            MagnificationFactor::new(2.0),
            120.0,
        );
        let full = LensFrame::new(content_bounds(), Point::new(10.0, 60.0), 120.0, 1.0, transform);
        let half = LensFrame::new(content_bounds(), Point::new(10.0, 60.0), 120.0, 0.5, transform);

        assert_eq!(full.bounds.width, 120.0);
        assert_eq!(half.bounds.width, 60.0);
        assert_eq!(full.bounds.center(), half.bounds.center());
        assert_eq!(full.zoom, 2.0);
        assert_eq!(half.zoom, 1.0);
    }

    #[test]
    fn content_viewport_inverts_frame_mapping() {
        let transform = ContentTransform::for_touch(
            Point::new(200.0, 300.0),
            MagnificationFactor::new(3.0),
            120.0,
        );
        let frame = LensFrame::new(content_bounds(), Point::new(140.0, 170.0), 120.0, 1.0, transform);
        let source = frame.content_viewport(frame.bounds);
        let corner = frame.to_screen(source.position());

        assert!((corner.x - frame.bounds.x).abs() < EPSILON);
        assert!((corner.y - frame.bounds.y).abs() < EPSILON);
        assert!((source.width - 40.0).abs() < EPSILON);
    }

    #[test]
    fn to_local_clamps_into_content() {
        let bounds = content_bounds();
        assert_eq!(to_local(Point::new(30.0, 66.0), bounds), Point::new(10.0, 10.0));
        assert_eq!(to_local(Point::new(0.0, 0.0), bounds), Point::ORIGIN);
        assert_eq!(
            to_local(Point::new(1_000.0, 1_000.0), bounds),
            Point::new(400.0, 800.0)
        );
    }

    #[test]
    fn tracker_follows_first_finger_only() {
        let mut tracker = PointerTracker::default();
        let bounds = content_bounds();

        assert_eq!(
            tracker.track(&press_at(Point::new(120.0, 156.0)), bounds, mouse::Cursor::Unavailable),
            Some(PointerInput::Press(Point::new(100.0, 100.0)))
        );
        let second = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(2),
            position: Point::new(200.0, 200.0),
        });
        assert_eq!(tracker.track(&second, bounds, mouse::Cursor::Unavailable), None);

        let lost_other = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(2),
            position: Point::new(200.0, 200.0),
        });
        assert_eq!(tracker.track(&lost_other, bounds, mouse::Cursor::Unavailable), None);

        assert_eq!(
            tracker.track(&lift_at(Point::new(120.0, 156.0)), bounds, mouse::Cursor::Unavailable),
            Some(PointerInput::Release(Point::new(100.0, 100.0)))
        );
    }

    #[test]
    fn tracker_ignores_presses_outside_content() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.track(
                &press_at(Point::new(5.0, 5.0)),
                content_bounds(),
                mouse::Cursor::Unavailable
            ),
            None
        );

        let click = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            tracker.track(
                &click,
                content_bounds(),
                mouse::Cursor::Available(Point::new(5.0, 5.0))
            ),
            None
        );
    }

    #[test]
    fn tracker_reports_mouse_drag() {
        let mut tracker = PointerTracker::default();
        let bounds = content_bounds();
        let cursor = mouse::Cursor::Available(Point::new(120.0, 156.0));

        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            tracker.track(&press, bounds, cursor),
            Some(PointerInput::Press(Point::new(100.0, 100.0)))
        );

        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(140.0, 156.0),
        });
        assert_eq!(
            tracker.track(&moved, bounds, cursor),
            Some(PointerInput::Move(Point::new(120.0, 100.0)))
        );

        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            tracker.track(
                &release,
                bounds,
                mouse::Cursor::Available(Point::new(140.0, 156.0))
            ),
            Some(PointerInput::Release(Point::new(120.0, 100.0)))
        );

        // Hover without a button is not tracked
        assert_eq!(tracker.track(&moved, bounds, cursor), None);
    }

    #[test]
    fn double_tap_through_state_shows_lens_at_touch() {
        let mut state = State::new(GestureConfig::default());
        let size = Size::new(400.0, 800.0);
        let lens = LensGeometry::default();
        let start = Instant::now();
        let p = Point::new(50.0, 50.0);

        assert!(!state.feed(PointerInput::Press(p), start, size, lens));
        assert!(!state.feed(
            PointerInput::Release(p),
            start + Duration::from_millis(50),
            size,
            lens
        ));
        assert!(!state.feed(
            PointerInput::Press(p),
            start + Duration::from_millis(150),
            size,
            lens
        ));
        assert!(state.feed(
            PointerInput::Release(p),
            start + Duration::from_millis(200),
            size,
            lens
        ));

        assert_eq!(state.magnifier.phase(), LensPhase::Visible);
        assert_eq!(state.magnifier.pointer(), Some(p));
        assert_eq!(state.magnifier.lens_target(), Point::new(10.0, 60.0));
    }

    #[test]
    fn reset_clears_tracker_and_lens() {
        let mut state = State::new(GestureConfig::default());
        let size = Size::new(400.0, 800.0);
        let lens = LensGeometry::default();
        let start = Instant::now();
        let p = Point::new(200.0, 400.0);

        for (input, ms) in [
            (PointerInput::Press(p), 0),
            (PointerInput::Release(p), 40),
            (PointerInput::Press(p), 120),
            (PointerInput::Release(p), 160),
        ] {
            state.feed(input, start + Duration::from_millis(ms), size, lens);
        }
        state.pointer.finger = Some(touch::Finger(9));
        assert!(!state.is_dormant());

        state.reset();

        assert!(state.is_dormant());
        assert_eq!(state.pointer.finger, None);
        assert_eq!(state.magnifier.visibility().scale, 0.0);
    }

    #[test]
    fn lens_style_follows_scheme() {
        let scheme = ColorScheme::high_contrast();
        let style = LensStyle::from_scheme(&scheme);
        assert_eq!(style.border, scheme.lens_border);
        assert_eq!(style.background, scheme.lens_background);
    }

    // -------------------------------------------------------------------------
    // Widget event handling
    // -------------------------------------------------------------------------

    /// Content that counts the finger presses reaching it.
    struct PressCounter {
        presses: Rc<Cell<usize>>,
    }

    impl Widget<(), iced::Theme, ()> for PressCounter {
        fn size(&self) -> Size<Length> {
            Size::new(Length::Fill, Length::Fill)
        }

        fn layout(
            &mut self,
            _tree: &mut widget::Tree,
            _renderer: &(),
            limits: &layout::Limits,
        ) -> layout::Node {
            layout::Node::new(limits.max())
        }

        fn draw(
            &self,
            _tree: &widget::Tree,
            _renderer: &mut (),
            _theme: &iced::Theme,
            _style: &renderer::Style,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _viewport: &Rectangle,
        ) {
        }

        fn update(
            &mut self,
            _tree: &mut widget::Tree,
            event: &Event,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _renderer: &(),
            _clipboard: &mut dyn Clipboard,
            _shell: &mut Shell<'_, ()>,
            _viewport: &Rectangle,
        ) {
            if matches!(event, Event::Touch(touch::Event::FingerPressed { .. })) {
                self.presses.set(self.presses.get() + 1);
            }
        }
    }

    /// What the shell reported after one event.
    struct Outcome {
        captured: bool,
        redraw: window::RedrawRequest,
    }

    struct Harness {
        element: Element<'static, (), iced::Theme, ()>,
        tree: widget::Tree,
        node: layout::Node,
        presses: Rc<Cell<usize>>,
    }

    impl Harness {
        fn new(enabled: bool) -> Self {
            let presses = Rc::new(Cell::new(0));
            let mut element = Self::build(enabled, &presses);
            let mut tree = widget::Tree::new(&element);
            let limits = layout::Limits::new(Size::ZERO, Size::new(400.0, 800.0));
            let node = element.as_widget_mut().layout(&mut tree, &(), &limits);
            Self {
                element,
                tree,
                node,
                presses,
            }
        }

        fn build(
            enabled: bool,
            presses: &Rc<Cell<usize>>,
        ) -> Element<'static, (), iced::Theme, ()> {
            magnifier(Element::new(PressCounter {
                presses: Rc::clone(presses),
            }))
            .enabled(enabled)
            .into()
        }

        /// Swaps in a freshly built widget, as a new `view` would.
        fn rebuild(&mut self, enabled: bool) {
            self.element = Self::build(enabled, &self.presses);
            self.tree.diff(&self.element);
        }

        fn send(&mut self, event: &Event) -> Outcome {
            let mut messages: Vec<()> = Vec::new();
            let mut shell = Shell::new(&mut messages);
            self.element.as_widget_mut().update(
                &mut self.tree,
                event,
                Layout::new(&self.node),
                mouse::Cursor::Unavailable,
                &(),
                &mut clipboard::Null,
                &mut shell,
                &Rectangle::with_size(Size::new(400.0, 800.0)),
            );
            Outcome {
                captured: shell.is_event_captured(),
                redraw: shell.redraw_request(),
            }
        }

        /// Sends a press and a lift at `position`.
        fn tap(&mut self, position: Point) -> (Outcome, Outcome) {
            let pressed = self.send(&press_at(position));
            let lifted = self.send(&lift_at(position));
            (pressed, lifted)
        }

        /// Feeds frames from `start` until no further frame is requested.
        fn run_frames(&mut self, start: Instant) -> Instant {
            let mut now = start;
            for _ in 0..1_000 {
                let outcome = self.send(&Event::Window(window::Event::RedrawRequested(now)));
                if outcome.redraw != window::RedrawRequest::NextFrame {
                    return now;
                }
                now += Duration::from_millis(16);
            }
            panic!("lens animation did not settle");
        }

        fn state(&self) -> &State {
            self.tree.state.downcast_ref::<State>()
        }

        fn phase(&self) -> LensPhase {
            self.state().magnifier.phase()
        }
    }

    #[test]
    fn disabled_magnifier_forwards_every_press() {
        let mut harness = Harness::new(false);
        let p = Point::new(200.0, 400.0);

        let (first_press, first_lift) = harness.tap(p);
        let (second_press, second_lift) = harness.tap(p);

        for outcome in [first_press, first_lift, second_press, second_lift] {
            assert!(!outcome.captured);
            assert_eq!(outcome.redraw, window::RedrawRequest::Wait);
        }
        assert_eq!(harness.presses.get(), 2);
        assert_eq!(harness.phase(), LensPhase::Idle);
        assert!(harness.state().is_dormant());
    }

    #[test]
    fn opening_double_tap_keeps_second_tap_from_content() {
        let mut harness = Harness::new(true);
        let p = Point::new(200.0, 400.0);

        let (press, lift) = harness.tap(p);
        assert!(!press.captured);
        assert!(!lift.captured);
        assert!(matches!(lift.redraw, window::RedrawRequest::At(_)));
        assert_eq!(harness.presses.get(), 1);

        let (press, lift) = harness.tap(p);
        assert!(press.captured);
        assert!(lift.captured);
        assert_eq!(lift.redraw, window::RedrawRequest::NextFrame);
        assert_eq!(harness.presses.get(), 1);
        assert_eq!(harness.phase(), LensPhase::Visible);
        assert_eq!(harness.state().magnifier.pointer(), Some(p));
    }

    #[test]
    fn visible_lens_captures_pointer_events() {
        let mut harness = Harness::new(true);
        let p = Point::new(200.0, 400.0);
        harness.tap(p);
        harness.tap(p);
        harness.run_frames(Instant::now());

        let pressed = harness.send(&press_at(Point::new(100.0, 100.0)));
        let moved = harness.send(&Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(150.0, 300.0),
        }));

        assert!(pressed.captured);
        assert!(moved.captured);
        assert_eq!(harness.presses.get(), 1);
        assert_eq!(
            harness.state().magnifier.pointer(),
            Some(Point::new(150.0, 300.0))
        );
    }

    #[test]
    fn pending_single_tap_commits_on_redraw_after_deadline() {
        let mut harness = Harness::new(true);
        let p = Point::new(200.0, 400.0);
        harness.tap(p);
        harness.tap(p);
        harness.run_frames(Instant::now());
        assert_eq!(harness.state().magnifier.visibility().scale, 1.0);

        let (_, lift) = harness.tap(Point::new(50.0, 50.0));
        assert!(matches!(lift.redraw, window::RedrawRequest::At(_)));
        assert_eq!(harness.phase(), LensPhase::Visible);

        let after_window = Instant::now() + Duration::from_secs(1);
        let frame = harness.send(&Event::Window(window::Event::RedrawRequested(after_window)));
        assert_eq!(frame.redraw, window::RedrawRequest::NextFrame);
        assert_eq!(harness.phase(), LensPhase::Hiding);

        harness.run_frames(after_window + Duration::from_millis(16));
        assert_eq!(harness.phase(), LensPhase::Idle);
        assert!(harness.state().is_dormant());
    }

    #[test]
    fn tap_before_first_frame_closes_lens_completely() {
        let mut harness = Harness::new(true);
        let p = Point::new(200.0, 400.0);
        harness.tap(p);
        harness.tap(p);
        harness.tap(p);

        let after_window = Instant::now() + Duration::from_secs(1);
        harness.run_frames(after_window);

        assert_eq!(harness.phase(), LensPhase::Idle);
        assert_eq!(harness.state().magnifier.pointer(), None);
        assert!(harness.state().is_dormant());
    }

    #[test]
    fn disabling_through_diff_forces_idle() {
        let mut harness = Harness::new(true);
        let p = Point::new(200.0, 400.0);
        harness.tap(p);
        harness.tap(p);
        let start = Instant::now();
        harness.send(&Event::Window(window::Event::RedrawRequested(start)));
        harness.send(&Event::Window(window::Event::RedrawRequested(
            start + Duration::from_millis(16),
        )));
        assert!(harness.state().magnifier.visibility().scale > 0.0);

        harness.rebuild(false);

        assert_eq!(harness.phase(), LensPhase::Idle);
        assert_eq!(harness.state().magnifier.visibility().scale, 0.0);
        assert!(harness.state().is_dormant());

        let (press, _) = harness.tap(p);
        assert!(!press.captured);
        assert_eq!(harness.presses.get(), 2);
    }
}
