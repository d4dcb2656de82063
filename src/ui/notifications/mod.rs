// SPDX-License-Identifier: MPL-2.0
//! Notification and asynchronous-UI-feedback subsystem.
//!
//! Three cooperating, mutually independent components give every studio
//! flow a way to report progress and outcomes without blocking or failing:
//!
//! - [`ToastCenter`] - transient, auto-dismissing, stacked pop-up
//!   notifications with severity levels
//! - [`FlashCenter`] - page-level banner messages with an explicit close
//!   control, shown in one shared region
//! - [`BusyIndicator`] - a single modal overlay signaling an in-progress
//!   operation, with a replaceable label
//!
//! All three are fire-and-forget from the caller's point of view: an
//! operation requests a notification or busy state and gets back at most an
//! opaque handle for later dismissal. Presentation lifecycle (timers, exit
//! fade, removal) is owned here. None of the operations can fail - stale
//! handles and duplicate dismissals are silent no-ops, because feedback
//! rendering must never become the caller's problem.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, ToastCenter};
//!
//! let mut toasts = ToastCenter::new();
//! toasts.push(Notification::success("Design saved"));
//!
//! // In the view function, layer the overlay over the page content
//! let overlay = toasts.view().map(Message::Toast);
//! ```

pub mod busy;
pub mod flash;
mod notification;
pub mod toasts;

pub use busy::{BusyIndicator, DEFAULT_BUSY_LABEL};
pub use flash::{FlashCenter, FlashKind, FlashMessage};
pub use notification::{Kind, Notification, NotificationId, Phase, EXIT_ANIMATION};
pub use toasts::ToastCenter;
