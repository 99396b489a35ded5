// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, mouse) to the
//! lightbox and drives the periodic timers for the carousel, notification
//! expiry, and the donation debounce.

use super::Message;
use crate::config::AUTO_ADVANCE_INTERVAL_MS;
use crate::ui::gallery::{carousel, lightbox};
use crate::ui::sections;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription for the lightbox overlay.
///
/// While the lightbox is open it owns keyboard navigation and pan, so raw
/// events are forwarded to it:
/// - Wheel scroll is routed unconditionally so zoom wins over any scrollable
///   underneath the overlay.
/// - Keyboard and mouse events are forwarded only when no widget captured
///   them, so text inputs elsewhere keep their keystrokes.
///
/// With the lightbox closed no native events are needed and the subscription
/// is empty.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if matches!(
            event,
            event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
        ) {
            return Some(Message::Lightbox(lightbox::Message::RawEvent(event)));
        }

        match status {
            event::Status::Ignored => Some(Message::Lightbox(lightbox::Message::RawEvent(event))),
            event::Status::Captured => None,
        }
    })
}

/// Creates the periodic tick subscription.
///
/// Ticks drive notification auto-dismiss and the donation debounce window,
/// so the timer only runs while either is pending.
pub fn create_tick_subscription(
    debounce_pending: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if debounce_pending || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the carousel auto-advance timer.
///
/// The interval is fixed and does not reset on manual navigation; it simply
/// stops when the carousel has nothing to rotate through.
pub fn create_carousel_subscription(should_advance: bool) -> Subscription<Message> {
    if should_advance {
        time::every(Duration::from_millis(AUTO_ADVANCE_INTERVAL_MS))
            .map(|_| Message::Sections(sections::Message::Carousel(carousel::Message::AutoAdvance)))
    } else {
        Subscription::none()
    }
}
