// SPDX-License-Identifier: MPL-2.0
use super::notification::{Notification, NotificationId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

/// Queue of notifications, newest first.
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
        tracing::debug!(key = notification.message_key(), "notification shown");
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

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

    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }

    /// Toasts stacked in the bottom-right corner.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts = self.visible().map(|notification| -> Element<'a, Message> {
            let message = Text::new(i18n.tr(notification.message_key())).size(typography::BODY);
            let dismiss = button(Text::new("×"))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS);

            let content = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(Container::new(message).width(Length::Fill))
                .push(dismiss);

            Container::new(content)
                .width(Length::Fixed(sizing::TOAST_WIDTH))
                .padding(spacing::SM)
                .style(styles::container::toast(notification.severity().color()))
                .into()
        });

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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn overflow_is_queued_and_promoted() {
        let mut manager = Manager::new();
        let ids: Vec<NotificationId> = (0..4)
            .map(|i| {
                let n = Notification::error(format!("key-{i}"));
                let id = n.id();
                manager.push(n);
                id
            })
            .collect();
        assert_eq!(manager.visible().count(), MAX_VISIBLE);

        assert!(manager.dismiss(ids[0]));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.visible().any(|n| n.id() == ids[3]));
    }

    #[test]
    fn tick_removes_expired_warnings() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("w"));
        manager.push(Notification::error("e"));
        manager.tick(Instant::now() + Duration::from_secs(60));
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["e"]);
        assert!(manager.has_notifications());
    }
}
