// crates/ad-selection-core/src/runtime/audit.rs
// ============================================================================
// Module: Selection Audit Sinks
// Description: JSON-line sinks for selection audit events.
// Purpose: Emit structured selection logs without a logging framework.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! Sinks serialize [`SelectionAuditEvent`] values as single JSON lines so
//! deployments can route them to their preferred pipeline. Write failures are
//! dropped; auditing never fails a selection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::interfaces::SelectionAuditEvent;
use crate::interfaces::SelectionAuditSink;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl SelectionAuditSink for StderrAuditSink {
    fn record(&self, event: &SelectionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl SelectionAuditSink for FileAuditSink {
    fn record(&self, event: &SelectionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl SelectionAuditSink for NoopAuditSink {
    fn record(&self, _event: &SelectionAuditEvent) {}
}

/// Audit sink that keeps events in memory for inspection.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<SelectionAuditEvent>>,
}

impl RecordingAuditSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded events.
    ///
    /// A poisoned lock still yields every event recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<SelectionAuditEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl SelectionAuditSink for RecordingAuditSink {
    fn record(&self, event: &SelectionAuditEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
