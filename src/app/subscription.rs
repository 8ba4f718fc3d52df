// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::Notification;
use iced::{event, Subscription};

/// Routes window close requests so the toast can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}

/// Animation frames for the toast while it fades.
pub fn create_notification_subscription(notification: &Notification) -> Subscription<Message> {
    notification.subscription().map(Message::Notification)
}
