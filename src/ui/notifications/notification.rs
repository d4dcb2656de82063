// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! Defines the `Notification` struct, its severity [`Kind`], and the
//! forward-only [`Phase`] lifecycle shared with the flash banners.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Time a dismissed element stays in the tree while its exit fade plays.
///
/// This single constant owns both the fade window and the removal delay so
/// the two cannot drift apart.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Default auto-dismiss duration for most toast kinds.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Errors stay a little longer on screen.
pub const ERROR_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification or flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level; determines icon, accent color, and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    /// The fallback for anything unrecognized.
    #[default]
    Info,
    Warning,
    Error,
}

impl Kind {
    /// Parses a severity name. Unrecognized names fall back to `Info`
    /// rather than failing, so a sloppy caller still gets feedback on
    /// screen.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            _ => Kind::Info,
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Default toast auto-dismiss duration: 4s, except errors at 5s.
    #[must_use]
    pub fn default_toast_duration(&self) -> Duration {
        match self {
            Kind::Error => ERROR_TOAST_DURATION,
            Kind::Success | Kind::Info | Kind::Warning => DEFAULT_TOAST_DURATION,
        }
    }
}

/// Visible lifecycle of a toast or flash element.
///
/// The lifecycle only moves forward: `Visible` → `Removing` → gone, where
/// "gone" is the element no longer being held by its center. A removing
/// element never returns to `Visible`, which is what makes dismissal
/// idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Removing {
        /// When removal began; the element is dropped once
        /// [`EXIT_ANIMATION`] has elapsed.
        since: Instant,
    },
}

/// Converts a caller-facing millisecond count into an optional duration.
/// Zero or negative means "never auto-dismiss".
#[must_use]
pub fn duration_from_millis(ms: i64) -> Option<Duration> {
    u64::try_from(ms)
        .ok()
        .filter(|&ms| ms > 0)
        .map(Duration::from_millis)
}

/// A transient toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: String,
    message: Option<String>,
    /// `None` means the toast persists until explicitly dismissed.
    duration: Option<Duration>,
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    /// Creates a notification with the kind's default duration.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            message: None,
            duration: Some(kind.default_toast_duration()),
            created_at: Instant::now(),
            phase: Phase::Visible,
        }
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Attaches a longer body under the title.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the auto-dismiss duration. Zero or negative disables
    /// auto-dismiss entirely.
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
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
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
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        matches!(self.phase, Phase::Removing { .. })
    }

    /// Whether the auto-dismiss deadline has passed at `now`.
    /// Always false once removal has begun or when auto-dismiss is off.
    #[must_use]
    pub fn expired_at(&self, now: Instant) -> bool {
        self.phase == Phase::Visible
            && self
                .duration
                .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }

    /// Moves `Visible` → `Removing`. Returns false (and changes nothing)
    /// if removal already began, making duplicate dismissals no-ops.
    pub fn begin_removal(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => {
                self.phase = Phase::Removing { since: now };
                true
            }
            Phase::Removing { .. } => false,
        }
    }

    /// Whether the exit fade has finished at `now` and the element can be
    /// dropped from its center.
    #[must_use]
    pub fn removal_elapsed(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => false,
            Phase::Removing { since } => now.saturating_duration_since(since) >= EXIT_ANIMATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn parse_maps_known_kinds() {
        assert_eq!(Kind::parse("success"), Kind::Success);
        assert_eq!(Kind::parse("error"), Kind::Error);
        assert_eq!(Kind::parse("warning"), Kind::Warning);
        assert_eq!(Kind::parse("info"), Kind::Info);
    }

    #[test]
    fn parse_falls_back_to_info() {
        assert_eq!(Kind::parse("catastrophe"), Kind::Info);
        assert_eq!(Kind::parse(""), Kind::Info);
        assert_eq!(Kind::parse("SUCCESS"), Kind::Success);
    }

    #[test]
    fn kind_colors_are_distinct() {
        assert_ne!(Kind::Success.color(), Kind::Info.color());
        assert_ne!(Kind::Info.color(), Kind::Warning.color());
        assert_ne!(Kind::Warning.color(), Kind::Error.color());
    }

    #[test]
    fn error_kind_defaults_to_five_seconds() {
        assert_eq!(
            Kind::Error.default_toast_duration(),
            Duration::from_millis(5000)
        );
        assert_eq!(
            Kind::Success.default_toast_duration(),
            Duration::from_millis(4000)
        );
        assert_eq!(
            Kind::Warning.default_toast_duration(),
            Duration::from_millis(4000)
        );
    }

    #[test]
    fn non_positive_duration_disables_auto_dismiss() {
        assert_eq!(duration_from_millis(0), None);
        assert_eq!(duration_from_millis(-100), None);
        assert_eq!(duration_from_millis(250), Some(Duration::from_millis(250)));

        let n = Notification::info("sticky").with_duration_ms(0);
        assert_eq!(n.duration(), None);
        assert!(!n.expired_at(n.created_at() + Duration::from_secs(3600)));
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::info("").kind(), Kind::Info);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::error("").kind(), Kind::Error);
    }

    #[test]
    fn expiry_uses_the_configured_duration() {
        let n = Notification::error("x");
        let t0 = n.created_at();
        assert!(!n.expired_at(t0 + Duration::from_millis(4999)));
        assert!(n.expired_at(t0 + Duration::from_millis(5000)));
    }

    #[test]
    fn begin_removal_is_idempotent() {
        let mut n = Notification::success("done");
        let t0 = n.created_at();

        assert!(n.begin_removal(t0));
        assert!(n.is_removing());
        // A second request (e.g. the auto-dismiss timer firing after a
        // manual dismissal) changes nothing.
        assert!(!n.begin_removal(t0 + Duration::from_millis(100)));
        assert_eq!(n.phase(), Phase::Removing { since: t0 });
    }

    #[test]
    fn removal_elapsed_after_exit_animation() {
        let mut n = Notification::success("done");
        let t0 = n.created_at();
        n.begin_removal(t0);

        assert!(!n.removal_elapsed(t0 + EXIT_ANIMATION - Duration::from_millis(1)));
        assert!(n.removal_elapsed(t0 + EXIT_ANIMATION));
    }

    #[test]
    fn removing_notification_never_expires() {
        let mut n = Notification::success("done");
        let t0 = n.created_at();
        n.begin_removal(t0);
        assert!(!n.expired_at(t0 + Duration::from_secs(60)));
    }
}
