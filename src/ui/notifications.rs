// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for configuration feedback.
//!
//! Toasts carry an i18n key resolved at render time. Success and warning
//! toasts expire on their own; errors stay until dismissed.

use crate::accessibility::AccessibilityPreferences;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts shown at once.
const MAX_VISIBLE: usize = 2;

/// Width of a toast card.
const TOAST_WIDTH: f32 = 320.0;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Accent color within the active scheme.
    #[must_use]
    pub fn color(self, colors: &ColorScheme) -> Color {
        match self {
            Severity::Success => colors.success,
            Severity::Warning => colors.warning,
            Severity::Error => colors.error,
        }
    }

    /// `None` means the toast waits for a manual dismiss.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.created_at) >= lifetime)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

/// Visible toasts plus a FIFO of the ones waiting for room.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        // Repeated saves would otherwise stack identical toasts
        if self
            .visible
            .iter()
            .chain(self.queue.iter())
            .any(|n| n.message_key == notification.message_key)
        {
            return;
        }
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(next) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(next);
        }
    }
}

/// Renders the visible toasts stacked in the bottom-right corner.
pub fn view<'a>(
    manager: &'a Manager,
    i18n: &'a I18n,
    colors: ColorScheme,
    preferences: &'a AccessibilityPreferences,
) -> Element<'a, Message> {
    if !manager.has_notifications() {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let toasts = manager
        .visible()
        .map(|notification| toast(notification, i18n, colors, preferences));

    Container::new(
        Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn toast<'a>(
    notification: &'a Notification,
    i18n: &'a I18n,
    colors: ColorScheme,
    preferences: &'a AccessibilityPreferences,
) -> Element<'a, Message> {
    let accent = notification.severity().color(&colors);

    let dismiss = button(Text::new("✕").size(preferences.text(typography::BODY)))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, _status| button::Style {
            background: None,
            text_color: colors.text_primary,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        });

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(notification.message_key()))
                .size(preferences.text(typography::BODY))
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| toast_style(colors, accent))
        .into()
}

fn toast_style(colors: ColorScheme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let first = Notification::success("a");
        let second = Notification::success("b");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn errors_never_expire() {
        let notification = Notification::error("notification-config-save-error");
        let later = Instant::now() + Duration::from_secs(3600);
        assert!(!notification.is_expired(later));
    }

    #[test]
    fn warnings_outlive_successes() {
        let success = Severity::Success.lifetime().unwrap();
        let warning = Severity::Warning.lifetime().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn overflow_is_queued_then_promoted() {
        let mut manager = Manager::new();
        manager.push(Notification::success("one"));
        manager.push(Notification::success("two"));
        manager.push(Notification::success("three"));
        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 1);

        let first = manager.visible().next().map(Notification::id).unwrap();
        assert!(manager.dismiss(first));
        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn duplicate_keys_are_collapsed() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-settings-saved"));
        manager.push(Notification::success("notification-settings-saved"));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn tick_drops_expired_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));
        manager.push(Notification::error("failed"));

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(10)));

        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["failed"]);
    }

    #[test]
    fn severities_use_their_scheme_color() {
        let colors = ColorScheme::light();
        assert_eq!(Severity::Success.color(&colors), colors.success);
        assert_eq!(Severity::Warning.color(&colors), colors.warning);
        assert_eq!(Severity::Error.color(&colors), colors.error);
        assert_ne!(colors.warning, colors.brand_secondary);
    }

    #[test]
    fn toast_style_uses_accent_border() {
        let colors = ColorScheme::light();
        let style = toast_style(colors, colors.error);
        assert_eq!(style.border.color, colors.error);
    }

    #[test]
    fn view_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let preferences = AccessibilityPreferences::default();
        let mut manager = Manager::new();
        {
            let _empty = view(&manager, &i18n, ColorScheme::light(), &preferences);
        }

        manager.push(Notification::warning("notification-config-load-error"));
        let _element = view(&manager, &i18n, ColorScheme::light(), &preferences);
    }
}
