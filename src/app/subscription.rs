// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The feedback subsystem is tick-driven: auto-dismiss deadlines, exit
//! fades, the busy spinner, and the diagnostics drain all advance on a
//! periodic tick. The tick only runs while there is live feedback, so an
//! idle window schedules no timers at all.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval of the feedback tick. Small enough that the 300ms exit fade
/// advances visibly and auto-dismiss deadlines land close to their
/// configured times.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the periodic tick subscription, active only while a toast or
/// banner is alive or the busy overlay is up.
pub fn create_tick_subscription(
    has_feedback: bool,
    busy_active: bool,
) -> Subscription<Message> {
    if has_feedback || busy_active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
