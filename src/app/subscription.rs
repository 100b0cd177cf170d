// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, mouse wheel, window resize) to the
//! appropriate screen and provides the periodic tick that drives scheduled
//! animation work.

use super::{Message, Screen};
use crate::ui::content;
use crate::ui::switcher;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Granularity of the animation tick. Reveal steps land on 100 ms
/// boundaries and count-up emissions on 40 ms ones, so 50 ms keeps the
/// perceived cadence without a per-frame subscription.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates the appropriate event subscription based on the current screen.
///
/// - Switcher: routes keyboard events and wheel scroll (pinch synthesis)
///   to the switcher component
/// - TabContent: only handles Escape as back navigation
///
/// Window resizes are handled on all screens to keep the viewport height
/// current.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Switcher => event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            // Wheel scroll is routed regardless of capture status: the
            // scrollable consumes plain scrolling, while the component only
            // reacts to Ctrl-modified notches.
            if matches!(
                event,
                event::Event::Mouse(mouse::Event::WheelScrolled { .. })
            ) {
                return Some(Message::Switcher(switcher::Message::RawEvent(
                    event.clone(),
                )));
            }

            if let event::Event::Keyboard(..) = &event {
                return match status {
                    event::Status::Ignored => {
                        Some(Message::Switcher(switcher::Message::RawEvent(event.clone())))
                    }
                    event::Status::Captured => None,
                };
            }

            None
        }),
        Screen::TabContent => event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) = &event
            {
                return match status {
                    event::Status::Ignored => {
                        Some(Message::Content(content::Message::BackToTabs))
                    }
                    event::Status::Captured => None,
                };
            }

            None
        }),
    }
}

/// Creates the periodic animation tick while deferred work is pending.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
