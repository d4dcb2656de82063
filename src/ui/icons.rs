// SPDX-License-Identifier: MPL-2.0
//! Glyph icons for severities and controls.
//!
//! The feedback components only need a handful of small symbols, so icons
//! are rendered as text glyphs instead of image assets. Color is applied by
//! the caller so the same glyph can follow any severity accent.

use iced::widget::{text, Text};
use iced::{Color, Theme};

/// Severity glyph for successful operations.
#[must_use]
pub fn checkmark() -> Text<'static> {
    text("✓")
}

/// Severity glyph for errors; also used as the close/dismiss control.
#[must_use]
pub fn cross() -> Text<'static> {
    text("✕")
}

/// Severity glyph for informational messages.
#[must_use]
pub fn info() -> Text<'static> {
    text("ℹ")
}

/// Severity glyph for warnings.
#[must_use]
pub fn warning() -> Text<'static> {
    text("⚠")
}

/// Applies a fixed size to an icon glyph.
#[must_use]
pub fn sized(icon: Text<'static>, size: f32) -> Text<'static> {
    icon.size(size)
}

/// Applies a fixed color to an icon glyph.
#[must_use]
pub fn colored(icon: Text<'static>, color: Color) -> Text<'static> {
    icon.style(move |_theme: &Theme| text::Style { color: Some(color) })
}
