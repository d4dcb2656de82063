// SPDX-License-Identifier: MPL-2.0
//! Toast center: lifecycle management and rendering of stacked toasts.
//!
//! Toasts are appended in insertion order (newest last, matching the visual
//! stacking order) and each carries its own auto-dismiss deadline. The
//! center is driven by the application tick: expired toasts enter the exit
//! fade, faded toasts are dropped. There is no cap and no priority
//! reordering.

use super::notification::{Kind, Notification, NotificationId, EXIT_ANIMATION};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID (emitted when a toast is clicked).
    Dismiss(NotificationId),
}

/// Owns every live toast and its lifecycle.
#[derive(Debug, Default)]
pub struct ToastCenter {
    /// Live toasts in insertion order (oldest first, newest last).
    toasts: Vec<Notification>,
    /// Optional diagnostics handle; warnings and errors are mirrored there.
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastCenter {
    /// Creates an empty toast center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the diagnostics handle used to mirror warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a new toast and returns its handle.
    ///
    /// The toast is appended after existing ones; its auto-dismiss timer
    /// (if any) started when the notification was created.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        if let Some(handle) = &self.diagnostics {
            let summary = notification
                .message()
                .map_or_else(|| notification.title().to_owned(), str::to_owned);
            match notification.kind() {
                Kind::Warning => {
                    handle.log_warning(WarningEvent::new(WarningType::Operation, summary));
                }
                Kind::Error => {
                    handle.log_error(ErrorEvent::new(ErrorType::Operation, summary));
                }
                Kind::Success | Kind::Info => {}
            }
        }

        let id = notification.id();
        self.toasts.push(notification);
        id
    }

    /// Begins dismissal of a toast: exit fade now, removal once
    /// [`EXIT_ANIMATION`] has elapsed.
    ///
    /// Idempotent. Returns true only when this call started the removal;
    /// unknown or already-dismissed handles are silent no-ops.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// [`ToastCenter::dismiss`] with an explicit clock, for deterministic
    /// tests and the tick path.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        self.toasts
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.begin_removal(now))
    }

    /// Advances every toast's lifecycle to `now`: expired toasts start
    /// their exit fade, fully faded toasts are dropped.
    pub fn tick_at(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if toast.expired_at(now) {
                toast.begin_removal(now);
            }
        }
        self.toasts.retain(|t| !t.removal_elapsed(now));
    }

    /// Processes a tick against the real clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the live toasts in stacking order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Drops every toast immediately, skipping the exit fade.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Renders the toast overlay: a bottom-right stack of cards in
    /// insertion order. Returns an empty, zero-sized element when there is
    /// nothing to show.
    pub fn view(&self) -> Element<'_, Message> {
        if self.toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let cards: Vec<Element<'_, Message>> = self.toasts.iter().map(toast_card).collect();

        let stack = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Renders a single toast card. Clicking anywhere on the card dismisses it.
fn toast_card(notification: &Notification) -> Element<'_, Message> {
    let kind = notification.kind();
    let accent_color = kind.color();
    let removing = notification.is_removing();

    let icon = icons::colored(
        icons::sized(kind_icon(kind), sizing::ICON_MD),
        faded(accent_color, removing),
    );

    let title = Text::new(notification.title())
        .size(typography::TITLE_SM)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, removing)),
        });

    let mut body = Column::new().spacing(spacing::XXS).push(title);
    if let Some(message) = notification.message() {
        body = body.push(Text::new(message).size(typography::BODY).style(
            move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, removing)),
            },
        ));
    }

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color, removing));

    mouse_area(card)
        .on_press(Message::Dismiss(notification.id()))
        .into()
}

/// Returns the glyph for a severity. Unrecognized kind names have already
/// collapsed to `Info` at parse time.
fn kind_icon(kind: Kind) -> Text<'static> {
    match kind {
        Kind::Success => icons::checkmark(),
        Kind::Info => icons::info(),
        Kind::Warning => icons::warning(),
        Kind::Error => icons::cross(),
    }
}

/// Applies the exit-fade alpha while a toast is removing.
fn faded(color: Color, removing: bool) -> Color {
    if removing {
        Color {
            a: color.a * opacity::EXITING,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, removing: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, removing))),
        border: iced::Border {
            color: faded(accent_color, removing),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if removing { shadow::NONE } else { shadow::MD },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use std::time::Duration;

    #[test]
    fn new_center_is_empty() {
        let center = ToastCenter::new();
        assert!(center.is_empty());
        assert!(!center.has_toasts());
    }

    #[test]
    fn push_appends_in_insertion_order() {
        let mut center = ToastCenter::new();
        let first = center.push(Notification::success("a"));
        let second = center.push(Notification::error("b"));

        let order: Vec<NotificationId> = center.iter().map(Notification::id).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn dismiss_twice_produces_one_removal() {
        let mut center = ToastCenter::new();
        let notification = Notification::success("saved");
        let t0 = notification.created_at();
        let id = center.push(notification);

        assert!(center.dismiss_at(id, t0));
        assert!(!center.dismiss_at(id, t0 + Duration::from_millis(50)));
        assert_eq!(center.len(), 1);

        center.tick_at(t0 + EXIT_ANIMATION);
        assert!(center.is_empty());

        // A third dismissal of the now-gone handle is a silent no-op.
        assert!(!center.dismiss_at(id, t0 + Duration::from_secs(1)));
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut center = ToastCenter::new();
        let stray = Notification::info("never pushed").id();
        assert!(!center.dismiss(stray));
    }

    #[test]
    fn toast_auto_dismisses_after_default_duration() {
        let mut center = ToastCenter::new();
        let notification = Notification::success("saved");
        let t0 = notification.created_at();
        center.push(notification);

        center.tick_at(t0 + Duration::from_millis(3999));
        assert!(!center.iter().next().expect("present").is_removing());

        center.tick_at(t0 + Duration::from_millis(4000));
        assert!(center.iter().next().expect("present").is_removing());

        center.tick_at(t0 + Duration::from_millis(4000) + EXIT_ANIMATION);
        assert!(center.is_empty());
    }

    #[test]
    fn error_toast_defaults_to_longer_duration() {
        let mut center = ToastCenter::new();
        let notification = Notification::error("bad input");
        let t0 = notification.created_at();
        center.push(notification);

        center.tick_at(t0 + Duration::from_millis(4500));
        assert!(!center.iter().next().expect("present").is_removing());

        center.tick_at(t0 + Duration::from_millis(5000));
        assert!(center.iter().next().expect("present").is_removing());
    }

    #[test]
    fn timer_firing_after_manual_dismiss_does_not_restart_removal() {
        let mut center = ToastCenter::new();
        let notification = Notification::success("saved");
        let t0 = notification.created_at();
        let id = center.push(notification);

        center.dismiss_at(id, t0 + Duration::from_millis(100));
        // The auto-dismiss deadline passes while the exit fade runs; the
        // toast must be gone by fade end, not re-dismissed.
        center.tick_at(t0 + Duration::from_millis(100) + EXIT_ANIMATION);
        assert!(center.is_empty());
    }

    #[test]
    fn independent_timers_per_toast() {
        let mut center = ToastCenter::new();
        let short = Notification::info("quick").with_duration_ms(500);
        let long = Notification::info("slow").with_duration_ms(2000);
        let t0 = short.created_at().max(long.created_at());
        let long_id = center.push(long);
        center.push(short);

        // The later-created, shorter toast disappears first.
        center.tick_at(t0 + Duration::from_millis(500));
        center.tick_at(t0 + Duration::from_millis(500) + EXIT_ANIMATION);
        let remaining: Vec<NotificationId> = center.iter().map(Notification::id).collect();
        assert_eq!(remaining, vec![long_id]);
    }

    #[test]
    fn clear_removes_all() {
        let mut center = ToastCenter::new();
        for i in 0..5 {
            center.push(Notification::success(format!("test-{i}")));
        }
        center.clear();
        assert!(center.is_empty());
    }

    #[test]
    fn handle_message_dismisses() {
        let mut center = ToastCenter::new();
        let id = center.push(Notification::success("test"));

        center.handle_message(&Message::Dismiss(id));
        assert!(center.iter().next().expect("present").is_removing());
    }

    #[test]
    fn severity_icons_are_defined() {
        // Verify glyph construction doesn't panic for any kind, including
        // the Info fallback that unrecognized names collapse into.
        let _ = kind_icon(Kind::Success);
        let _ = kind_icon(Kind::Info);
        let _ = kind_icon(Kind::Warning);
        let _ = kind_icon(Kind::Error);
        let _ = kind_icon(Kind::parse("definitely-not-a-kind"));
    }

    #[test]
    fn warnings_and_errors_are_mirrored_to_diagnostics() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        let mut center = ToastCenter::new();
        center.set_diagnostics(handle);

        center.push(Notification::success("fine"));
        center.push(Notification::warning("slow connection"));
        center.push(Notification::error("upload failed").with_message("Server said no"));

        collector.drain();
        assert_eq!(collector.len(), 2);
        let errors = collector.events().filter(|e| e.is_error()).count();
        assert_eq!(errors, 1);
    }
}
