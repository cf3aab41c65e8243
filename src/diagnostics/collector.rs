// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns the ring buffer. Other parts of the application hold a
//! [`DiagnosticsHandle`] and send events through a bounded channel that the
//! collector drains on each UI tick.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use crate::error::{Error, Result};

use super::{
    AppOperation, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    ErrorEvent, UserAction, WarningEvent,
};

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks: when the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    /// Logs a warning and prints it to stderr.
    pub fn log_warning(&self, event: WarningEvent) {
        eprintln!("[WARN] {:?}: {}", event.warning_type, event.message);
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error and prints it to stderr.
    pub fn log_error(&self, event: ErrorEvent) {
        eprintln!("[ERROR] {:?}: {}", event.error_type, event.message);
        self.send(DiagnosticEventKind::Error { event });
    }

    pub fn log_operation(&self, operation: AppOperation) {
        self.send(DiagnosticEventKind::Operation { operation });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central store of diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

/// Event as written to a JSON report, with a time offset instead of an
/// `Instant`.
#[derive(Debug, Serialize)]
struct SerializableEvent<'a> {
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    app_version: &'static str,
    started_at: DateTime<Utc>,
    duration_ms: u64,
    event_count: usize,
    /// Older events evicted from the buffer before this report.
    dropped_event_count: u64,
    events: Vec<SerializableEvent<'a>>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction { action }));
    }

    /// Logs an operation directly, bypassing the channel.
    pub fn log_operation(&mut self, operation: AppOperation) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::Operation { operation }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Serializes the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent<'_>> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: &event.kind,
            })
            .collect();

        let report = Report {
            app_version: env!("CARGO_PKG_VERSION"),
            started_at: self.started_at_utc,
            duration_ms: self.started_at.elapsed().as_millis() as u64,
            event_count: events.len(),
            dropped_event_count: self.buffer.dropped(),
            events,
        };
        serde_json::to_string_pretty(&report)
    }

    /// Writes the JSON report to `path`, creating its parent directory.
    ///
    /// The report goes to a temporary sibling first and is renamed into
    /// place, so an interrupted write never leaves a truncated file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if serialization or any file operation fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self
            .export_json()
            .map_err(|err| Error::Io(format!("failed to serialize diagnostics: {err}")))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        if let Err(err) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(path.to_path_buf())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::NextSlide);
        handle.log_warning(WarningEvent::new(WarningType::MissingImage, "no rose"));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn direct_logging_skips_the_channel() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::RetryFetch);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 25) {
            handle.log_action(UserAction::PreviousSlide);
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn export_json_contains_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_error(ErrorEvent::new(ErrorType::NetworkError, "refused"));
        collector.process_pending();
        collector.log_operation(AppOperation::FetchCatalog {
            duration_ms: 12,
            product_count: 0,
            success: false,
        });

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["event_count"], 2);
        assert_eq!(value["dropped_event_count"], 0);
        assert_eq!(value["events"][0]["type"], "error");
        assert_eq!(value["events"][1]["operation"]["operation"], "fetch_catalog");
    }

    #[test]
    fn export_to_file_writes_report_in_new_directory() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("reports").join("diagnostics.json");
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::RetryFetch);

        let written = collector.export_to_file(&path).expect("export should succeed");

        assert_eq!(written, path);
        let json = std::fs::read_to_string(&path).expect("report should exist");
        assert!(json.contains("\"retry_fetch\""));
        assert!(!path.with_extension("json.tmp").exists());
    }
}
