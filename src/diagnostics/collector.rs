// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns the circular buffer; producers hold a cheap-clone
//! [`DiagnosticsHandle`] and send events over a bounded channel. Sends are
//! non-blocking: when the channel is full the event is dropped rather than
//! stalling the UI thread.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType,
    WarningEvent, WarningType,
};

/// Maximum number of in-flight events between a handle and the collector.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a warning event. Non-blocking; dropped if the channel is full.
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: warning_event,
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a simple warning message with `WarningType::Other`.
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(WarningType::Other, message));
    }

    /// Logs an error event. Non-blocking; dropped if the channel is full.
    pub fn log_error(&self, error_event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error_event });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a simple error message with `ErrorType::Other`.
    pub fn log_error_simple(&self, message: impl Into<String>) {
        self.log_error(ErrorEvent::new(ErrorType::Other, message));
    }
}

/// Owns the event buffer and the receiving side of the event channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector and the handle producers use to reach it.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        let collector = Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
        };
        (collector, DiagnosticsHandle { event_tx })
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Called from the application tick so draining happens on the UI
    /// thread, keeping the buffer single-owner.
    pub fn drain(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the buffered events in chronological order.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
