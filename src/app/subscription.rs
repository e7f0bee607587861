// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window events feed the layout mode and the Escape shortcut; a
//! periodic tick runs only while something is waiting to expire.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick interval for copy acknowledgment and toast expiry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for window resizes and unhandled Escape presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates a periodic tick while a copy marker or a toast is pending.
pub fn create_tick_subscription(copy_pending: bool, has_notifications: bool) -> Subscription<Message> {
    if copy_pending || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
