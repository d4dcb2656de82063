// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Simulated operations follow the original demo's shape: a timed delay
//! stands in for the backend and the outcome is fabricated, so every flow
//! ends in the feedback subsystem rather than in real work.

use super::message::{Message, SimulatedOp};
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::notifications::flash::FlashKind;
use crate::ui::notifications::{
    BusyIndicator, FlashCenter, FlashMessage, Kind, Notification, ToastCenter,
};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::Path;
use std::time::{Duration, Instant};

const SAVE_DELAY: Duration = Duration::from_millis(1200);
const UPLOAD_FIRST_STAGE: Duration = Duration::from_millis(800);
const UPLOAD_SECOND_STAGE: Duration = Duration::from_millis(900);
const ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// Mutable slices of `App` state handed to the handlers.
pub struct UpdateContext<'a> {
    pub theme_mode: &'a mut ThemeMode,
    pub toast_duration_ms: Option<i64>,
    pub flash_duration_ms: Option<i64>,
    pub config_path: Option<&'a Path>,
    pub toasts: &'a mut ToastCenter,
    pub flash: &'a mut FlashCenter,
    pub busy: &'a mut BusyIndicator,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

impl UpdateContext<'_> {
    /// Pushes a toast, applying the configured duration override.
    fn push_toast(&mut self, notification: Notification) {
        let notification = match self.toast_duration_ms {
            Some(ms) => notification.with_duration_ms(ms),
            None => notification,
        };
        self.toasts.push(notification);
    }

    /// Shows a banner, applying the configured duration override.
    fn show_flash(&mut self, message: FlashMessage) {
        let message = match self.flash_duration_ms {
            Some(ms) => message.with_duration_ms(ms),
            None => message,
        };
        self.flash.show(message);
    }
}

/// Advances all tick-driven state: notification lifecycles, the busy
/// spinner, and the diagnostics drain.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.toasts.tick_at(now);
    ctx.flash.tick_at(now);
    if ctx.busy.is_active() {
        ctx.busy.advance();
    }
    ctx.diagnostics.drain();
    Task::none()
}

/// Starts a simulated operation: the busy overlay goes up and a timer
/// stands in for the backend.
pub fn handle_start_operation(ctx: &mut UpdateContext<'_>, op: SimulatedOp) -> Task<Message> {
    match op {
        SimulatedOp::SaveDesign => {
            ctx.busy.show("Saving design...");
            after(SAVE_DELAY, Message::OperationFinished(op))
        }
        SimulatedOp::UploadPhoto => {
            ctx.busy.show("Uploading room photo...");
            after(UPLOAD_FIRST_STAGE, Message::OperationAdvanced(op))
        }
        SimulatedOp::StyleAnalysis => {
            ctx.busy.show("Analyzing your space...");
            after(ANALYSIS_DELAY, Message::OperationFinished(op))
        }
    }
}

/// Second stage of a multi-stage operation: the busy label is replaced in
/// place, no second overlay appears.
pub fn handle_operation_advanced(ctx: &mut UpdateContext<'_>, op: SimulatedOp) -> Task<Message> {
    match op {
        SimulatedOp::UploadPhoto => {
            ctx.busy.show("Optimizing preview...");
            after(UPLOAD_SECOND_STAGE, Message::OperationFinished(op))
        }
        SimulatedOp::SaveDesign | SimulatedOp::StyleAnalysis => Task::none(),
    }
}

/// Completes a simulated operation and reports its fabricated outcome.
pub fn handle_operation_finished(ctx: &mut UpdateContext<'_>, op: SimulatedOp) -> Task<Message> {
    ctx.busy.hide();

    match op {
        SimulatedOp::SaveDesign => {
            ctx.push_toast(
                Notification::success("Design saved")
                    .with_message("Your changes are safe in the studio library."),
            );
        }
        SimulatedOp::UploadPhoto => {
            ctx.show_flash(FlashMessage::success("Room photo added to the gallery."));
        }
        SimulatedOp::StyleAnalysis => {
            ctx.push_toast(
                Notification::info("Analysis complete")
                    .with_message("We found 3 palettes that suit this room."),
            );
        }
    }

    Task::none()
}

/// Shows a sample toast of the requested kind.
pub fn handle_show_toast(ctx: &mut UpdateContext<'_>, kind: Kind) -> Task<Message> {
    let notification = match kind {
        Kind::Success => {
            Notification::success("Design saved").with_message("Your changes were saved.")
        }
        Kind::Info => {
            Notification::info("Tip").with_message("Drag furniture to rearrange the mockup.")
        }
        Kind::Warning => Notification::warning("Large photo")
            .with_message("Uploads over 10 MB may take a while."),
        Kind::Error => Notification::error("Upload failed")
            .with_message("The studio library is not reachable."),
    };
    ctx.push_toast(notification);
    Task::none()
}

/// Shows a sample flash banner of the requested kind.
pub fn handle_show_flash(ctx: &mut UpdateContext<'_>, kind: FlashKind) -> Task<Message> {
    let message = match kind {
        FlashKind::Success => FlashMessage::success("Your booking request was sent."),
        FlashKind::Error => FlashMessage::error("Please check the highlighted fields."),
        FlashKind::Info => {
            FlashMessage::info("A consultant will confirm your appointment by email.")
        }
    };
    ctx.show_flash(message);
    Task::none()
}

/// Shows a banner that never times out; only its close button removes it.
pub fn handle_show_persistent_flash(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.flash.show(
        FlashMessage::info("Autumn promo: 20% off consultations this week.").with_duration_ms(0),
    );
    Task::none()
}

/// Cycles the theme mode and persists the preference. Persistence failure
/// degrades to a warning toast; the in-memory theme still changes.
pub fn handle_cycle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.next();

    let config = Config {
        theme_mode: *ctx.theme_mode,
        toast_duration_ms: ctx.toast_duration_ms,
        flash_duration_ms: ctx.flash_duration_ms,
        diagnostics_capacity: Some(ctx.diagnostics.capacity()),
    };
    let saved = match ctx.config_path {
        Some(path) => config::save_to_path(&config, path),
        None => config::save(&config),
    };

    if let Err(error) = saved {
        ctx.push_toast(
            Notification::warning("Preferences not saved").with_message(error.to_string()),
        );
    }

    Task::none()
}

/// Schedules `message` after a fabricated backend delay.
fn after(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(delay), move |()| message.clone())
}
