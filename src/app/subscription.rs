// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.
//!
//! Lens animation frames are driven by the magnifier widget itself through
//! redraw requests, so the app only needs a tick while toasts are showing.

use super::Message;
use crate::ui::notifications;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which toast lifetimes are checked.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Ticks only while notifications are visible or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|now| Message::Notification(notifications::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
