// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::flash::FlashKind;
use crate::ui::notifications::{flash, toasts, Kind};
use std::path::PathBuf;
use std::time::Instant;

/// The studio flows the demo screen can simulate. Each runs as a timed
/// delay that fabricates its outcome, mirroring a backend that does not
/// exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedOp {
    /// Persist the current design to the (imaginary) studio library.
    SaveDesign,
    /// Upload a room photo; swaps the busy label mid-flight.
    UploadPhoto,
    /// Run the style "analysis" over the current room.
    StyleAnalysis,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toast interactions (click-to-dismiss).
    Toast(toasts::Message),
    /// Flash banner interactions (close button).
    Flash(flash::Message),
    /// Periodic tick driving auto-dismiss, exit fades, the spinner, and
    /// the diagnostics drain.
    Tick(Instant),
    /// Kick off a simulated studio operation.
    StartOperation(SimulatedOp),
    /// A multi-stage operation reached its second stage (label swap).
    OperationAdvanced(SimulatedOp),
    /// A simulated operation finished.
    OperationFinished(SimulatedOp),
    /// Show a sample toast of the given kind.
    ShowToast(Kind),
    /// Show a sample flash banner of the given kind.
    ShowFlash(FlashKind),
    /// Show a flash banner that persists until closed.
    ShowPersistentFlash,
    /// Cycle Light → Dark → System and persist the preference.
    CycleTheme,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
    /// Optional path to a settings file, mainly for development.
    pub config_path: Option<PathBuf>,
}
