// SPDX-License-Identifier: MPL-2.0
//! Busy indicator: a single modal overlay for in-flight operations.
//!
//! The indicator is a two-state flip (inactive ⇄ active) with no exit
//! animation. Exactly one overlay ever exists; repeated `show` calls while
//! active only replace the label. There is no reference counting of
//! concurrent reasons — callers share one global flag and can stomp each
//! other's busy state (see DESIGN.md).

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::overlay;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length, Theme};
use std::f32::consts::TAU;

/// Label shown when a caller does not provide one.
pub const DEFAULT_BUSY_LABEL: &str = "Processing...";

/// Rotation advance per tick, tuned for the 100ms application tick.
const ROTATION_STEP: f32 = 0.55;

/// Process-wide busy state. Held as a single owned instance by the
/// application root; the one overlay it renders is the page's only busy
/// surface.
#[derive(Debug)]
pub struct BusyIndicator {
    active: bool,
    label: String,
    /// Spinner angle in radians, advanced by the application tick.
    rotation: f32,
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self {
            active: false,
            label: String::from(DEFAULT_BUSY_LABEL),
            rotation: 0.0,
        }
    }
}

impl BusyIndicator {
    /// Creates an inactive indicator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the overlay with the given label. When already active,
    /// only the label changes — no second overlay is ever created.
    pub fn show(&mut self, label: impl Into<String>) {
        self.active = true;
        self.label = label.into();
    }

    /// Activates the overlay with [`DEFAULT_BUSY_LABEL`].
    pub fn show_default(&mut self) {
        self.show(DEFAULT_BUSY_LABEL);
    }

    /// Deactivates the overlay. Safe to call when not active.
    pub fn hide(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Advances the spinner animation; called from the application tick
    /// while the overlay is active.
    pub fn advance(&mut self) {
        self.rotation = (self.rotation + ROTATION_STEP) % TAU;
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Renders the modal overlay: a dimmed backdrop with a centered card
    /// holding the spinner and label. Returns an empty element when
    /// inactive, so callers can unconditionally stack it.
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        if !self.active {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let spinner = AnimatedSpinner::new(palette::PRIMARY_400, self.rotation)
            .with_size(sizing::ICON_XL)
            .into_element();

        let label = text(self.label.as_str())
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.palette().text),
            });

        let card = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(spinner)
                .push(label),
        )
        .width(Length::Fixed(sizing::BUSY_CARD_WIDTH))
        .padding(spacing::LG)
        .style(overlay::busy_card);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(overlay::backdrop)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_indicator_is_inactive() {
        let busy = BusyIndicator::new();
        assert!(!busy.is_active());
        assert_eq!(busy.label(), DEFAULT_BUSY_LABEL);
    }

    #[test]
    fn show_activates_and_sets_label() {
        let mut busy = BusyIndicator::new();
        busy.show("Uploading photo...");
        assert!(busy.is_active());
        assert_eq!(busy.label(), "Uploading photo...");
    }

    #[test]
    fn second_show_only_replaces_the_label() {
        let mut busy = BusyIndicator::new();
        busy.show("A");
        busy.show("B");
        assert!(busy.is_active());
        assert_eq!(busy.label(), "B");
    }

    #[test]
    fn hide_is_idempotent() {
        let mut busy = BusyIndicator::new();
        busy.show("Working...");
        busy.hide();
        assert!(!busy.is_active());
        busy.hide();
        assert!(!busy.is_active());
    }

    #[test]
    fn show_default_uses_the_default_label() {
        let mut busy = BusyIndicator::new();
        busy.show_default();
        assert_eq!(busy.label(), DEFAULT_BUSY_LABEL);
    }

    #[test]
    fn advance_wraps_rotation() {
        let mut busy = BusyIndicator::new();
        for _ in 0..1000 {
            busy.advance();
        }
        assert!(busy.rotation() >= 0.0 && busy.rotation() < TAU);
    }

    #[test]
    fn show_after_hide_reactivates() {
        let mut busy = BusyIndicator::new();
        busy.show("first");
        busy.hide();
        busy.show("second");
        assert!(busy.is_active());
        assert_eq!(busy.label(), "second");
    }
}
