// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for events that are not tied to a form, such as a
//! settings file that could not be read.
//!
//! Messages are i18n keys resolved at render time. Warnings dismiss
//! themselves after a few seconds, errors stay until dismissed.

mod manager;
mod notification;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
