// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for warning and error tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a captured warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A configuration file could not be read or written.
    Config,
    /// A simulated studio operation reported a degraded result.
    Operation,
    /// Anything without a more specific category.
    Other,
}

/// Category of a captured error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Config,
    Operation,
    Other,
}

/// A warning surfaced through the feedback system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error surfaced through the feedback system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// The payload of a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A timestamped diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was recorded.
    pub occurred_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            occurred_at: Utc::now(),
            kind,
        }
    }

    /// Returns true for error events.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_event_carries_category_and_message() {
        let warning = WarningEvent::new(WarningType::Config, "settings unreadable");
        assert_eq!(warning.warning_type, WarningType::Config);
        assert_eq!(warning.message, "settings unreadable");
    }

    #[test]
    fn error_events_are_flagged_as_errors() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::Operation, "upload rejected"),
        });
        assert!(event.is_error());

        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::Other, "slow frame"),
        });
        assert!(!event.is_error());
    }

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::Operation, "x"),
        });
        let value = toml::Value::try_from(&event).expect("serialize");
        assert_eq!(value.get("kind").and_then(toml::Value::as_str), Some("warning"));
        assert_eq!(
            value
                .get("event")
                .and_then(|e| e.get("warning_type"))
                .and_then(toml::Value::as_str),
            Some("operation")
        );
    }
}
