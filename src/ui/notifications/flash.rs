// SPDX-License-Identifier: MPL-2.0
//! Flash center: page-level banner messages in one shared region.
//!
//! Flash messages are message-only (no title) and always carry a close
//! control; an optional timer can remove them as well. Banners coexist in
//! the shared region, stacked in insertion order, with no cap on count —
//! unbounded growth is an accepted limitation for page-level, short-lived
//! usage.

use super::notification::{duration_from_millis, NotificationId, Phase, EXIT_ANIMATION};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Default auto-dismiss duration for flash messages.
pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_millis(5000);

/// Messages for flash state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific banner by ID (emitted by its close button).
    Dismiss(NotificationId),
}

/// Severity of a flash banner. Flash messages have no warning level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashKind {
    Success,
    Error,
    #[default]
    Info,
}

impl FlashKind {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            FlashKind::Success => palette::SUCCESS_500,
            FlashKind::Error => palette::ERROR_500,
            FlashKind::Info => palette::INFO_500,
        }
    }

    fn icon(self) -> Text<'static> {
        match self {
            FlashKind::Success => icons::checkmark(),
            FlashKind::Error => icons::cross(),
            FlashKind::Info => icons::info(),
        }
    }
}

/// A single banner in the shared flash region.
#[derive(Debug, Clone)]
pub struct FlashMessage {
    id: NotificationId,
    kind: FlashKind,
    message: String,
    /// `None` means the banner persists until the user closes it.
    duration: Option<Duration>,
    created_at: Instant,
    phase: Phase,
}

impl FlashMessage {
    /// Creates a banner with the default 5s duration.
    pub fn new(kind: FlashKind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            duration: Some(DEFAULT_FLASH_DURATION),
            created_at: Instant::now(),
            phase: Phase::Visible,
        }
    }

    /// Creates a success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashKind::Success, message)
    }

    /// Creates an error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashKind::Error, message)
    }

    /// Creates an info banner.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashKind::Info, message)
    }

    /// Overrides the auto-dismiss duration. Zero or negative disables the
    /// timer; the banner then persists until closed.
    #[must_use]
    pub fn with_duration_ms(mut self, ms: i64) -> Self {
        self.duration = duration_from_millis(ms);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> FlashKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        matches!(self.phase, Phase::Removing { .. })
    }

    fn expired_at(&self, now: Instant) -> bool {
        self.phase == Phase::Visible
            && self
                .duration
                .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }

    fn begin_removal(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => {
                self.phase = Phase::Removing { since: now };
                true
            }
            Phase::Removing { .. } => false,
        }
    }

    fn removal_elapsed(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => false,
            Phase::Removing { since } => now.saturating_duration_since(since) >= EXIT_ANIMATION,
        }
    }
}

/// Owns the shared flash region.
#[derive(Debug, Default)]
pub struct FlashCenter {
    /// Live banners in insertion order.
    messages: Vec<FlashMessage>,
}

impl FlashCenter {
    /// Creates an empty flash center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a banner in the shared region and returns its handle.
    pub fn show(&mut self, message: FlashMessage) -> NotificationId {
        let id = message.id();
        self.messages.push(message);
        id
    }

    /// Begins dismissal: fade-out now, removal once [`EXIT_ANIMATION`] has
    /// elapsed. Idempotent; unknown handles are silent no-ops.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// [`FlashCenter::dismiss`] with an explicit clock.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        self.messages
            .iter_mut()
            .find(|m| m.id() == id)
            .is_some_and(|m| m.begin_removal(now))
    }

    /// Advances every banner's lifecycle to `now`.
    pub fn tick_at(&mut self, now: Instant) {
        for message in &mut self.messages {
            if message.expired_at(now) {
                message.begin_removal(now);
            }
        }
        self.messages.retain(|m| !m.removal_elapsed(now));
    }

    /// Processes a tick against the real clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Handles a flash message event.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the live banners in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = &FlashMessage> {
        self.messages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Drops every banner immediately, skipping the fade.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Renders the shared flash region: full-width banners stacked at the
    /// top of the page.
    pub fn view(&self) -> Element<'_, Message> {
        if self.messages.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let banners: Vec<Element<'_, Message>> = self.messages.iter().map(banner).collect();

        let region = Column::with_children(banners).spacing(spacing::XS);

        Container::new(region)
            .width(Length::Fill)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::SM)
            .into()
    }
}

/// Renders a single banner: [icon] [message] [close].
fn banner(message: &FlashMessage) -> Element<'_, Message> {
    let kind = message.kind();
    let accent_color = kind.color();
    let removing = message.is_removing();

    let icon = icons::colored(
        icons::sized(kind.icon(), sizing::ICON_SM),
        faded(accent_color, removing),
    );

    let body = Text::new(message.message().to_string())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, removing)),
        });

    let close = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::Dismiss(message.id()))
        .padding(spacing::XXS)
        .style(button_styles::quiet);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(close);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| banner_style(theme, accent_color, removing))
        .into()
}

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

/// Style function for a banner: severity-tinted background with an accent
/// border.
fn banner_style(theme: &Theme, accent_color: Color, removing: bool) -> container::Style {
    let tint = Color {
        a: opacity::SEVERITY_TINT,
        ..accent_color
    };

    container::Style {
        background: Some(iced::Background::Color(faded(tint, removing))),
        border: iced::Border {
            color: faded(accent_color, removing),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_center_is_empty() {
        let center = FlashCenter::new();
        assert!(center.is_empty());
        assert!(!center.has_messages());
    }

    #[test]
    fn default_duration_is_five_seconds() {
        let message = FlashMessage::error("Bad input");
        assert_eq!(message.duration(), Some(DEFAULT_FLASH_DURATION));
    }

    #[test]
    fn banners_stack_in_insertion_order() {
        let mut center = FlashCenter::new();
        let first = center.show(FlashMessage::info("first"));
        let second = center.show(FlashMessage::success("second"));
        let third = center.show(FlashMessage::error("third"));

        let order: Vec<NotificationId> = center.iter().map(FlashMessage::id).collect();
        assert_eq!(order, vec![first, second, third]);
    }

    #[test]
    fn zero_duration_banner_never_auto_dismisses() {
        let mut center = FlashCenter::new();
        let message = FlashMessage::success("Saved").with_duration_ms(0);
        let t0 = message.created_at();
        let id = center.show(message);

        center.tick_at(t0 + Duration::from_secs(3600));
        assert_eq!(center.len(), 1);

        // Only explicit user dismissal removes it.
        assert!(center.dismiss_at(id, t0 + Duration::from_secs(3600)));
        center.tick_at(t0 + Duration::from_secs(3600) + EXIT_ANIMATION);
        assert!(center.is_empty());
    }

    #[test]
    fn banner_auto_dismisses_at_default_duration() {
        let mut center = FlashCenter::new();
        let message = FlashMessage::error("Bad input");
        let t0 = message.created_at();
        center.show(message);

        center.tick_at(t0 + Duration::from_millis(4999));
        assert!(!center.iter().next().expect("present").is_removing());

        center.tick_at(t0 + DEFAULT_FLASH_DURATION);
        assert!(center.iter().next().expect("present").is_removing());

        center.tick_at(t0 + DEFAULT_FLASH_DURATION + EXIT_ANIMATION);
        assert!(center.is_empty());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut center = FlashCenter::new();
        let message = FlashMessage::info("note");
        let t0 = message.created_at();
        let id = center.show(message);

        assert!(center.dismiss_at(id, t0));
        assert!(!center.dismiss_at(id, t0));
        center.tick_at(t0 + EXIT_ANIMATION);
        assert!(center.is_empty());
        assert!(!center.dismiss_at(id, t0 + Duration::from_secs(1)));
    }

    #[test]
    fn negative_duration_behaves_like_zero() {
        let message = FlashMessage::info("sticky").with_duration_ms(-250);
        assert_eq!(message.duration(), None);
    }

    #[test]
    fn handle_message_dismisses() {
        let mut center = FlashCenter::new();
        let id = center.show(FlashMessage::info("note"));

        center.handle_message(&Message::Dismiss(id));
        assert!(center.iter().next().expect("present").is_removing());
    }

    #[test]
    fn clear_removes_all() {
        let mut center = FlashCenter::new();
        center.show(FlashMessage::info("a"));
        center.show(FlashMessage::error("b"));
        center.clear();
        assert!(center.is_empty());
    }
}
