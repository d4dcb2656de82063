// SPDX-License-Identifier: MPL-2.0
//! User interface components and shared visual infrastructure.
//!
//! The crate follows the Elm-style "state down, messages up" pattern. The
//! interesting part lives in [`notifications`]: the toast, flash, and busy
//! feedback components that every studio flow reports through.
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph icons for severities and controls
//! - [`styles`] - Centralized styling (buttons, overlays)
//! - [`widgets`] - Custom Iced widgets (animated spinner)

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
