// SPDX-License-Identifier: MPL-2.0
//! `alankara` is a small interior-design studio demo built with the Iced GUI
//! framework.
//!
//! The heart of the crate is the [`ui::notifications`] module: a reusable
//! presentation-layer feedback system made of stacked toast notifications, a
//! page-level flash banner region, and a single modal busy overlay. The demo
//! application in [`app`] simulates the studio's asynchronous flows (saving a
//! design, uploading a room photo, running a style analysis) with timed delays
//! and reports every outcome through that subsystem.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
