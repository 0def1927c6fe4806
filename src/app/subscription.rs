// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Screen};
use crate::ui::gallery;
use crate::ui::notifications::NotificationMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// Lightbox keys are only routed while the gallery is on screen.
pub fn create_gallery_subscription(screen: Screen, gallery: &gallery::State) -> Subscription<Message> {
    if screen == Screen::Gallery {
        gallery.subscription().map(Message::Gallery)
    } else {
        Subscription::none()
    }
}

/// Periodic tick driving toast auto-dismissal.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250))
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
