// crates/netmgr-cli/src/audit.rs
// ============================================================================
// Module: Invocation Audit Logging
// Description: Structured audit events for command invocations.
// Purpose: Record one JSON line per invocation without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every dispatched invocation produces one [`InvocationAuditEvent`]. Sinks
//! write the event as a JSON line; parameter values are never recorded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Invocation audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Operation name.
    pub command: String,
    /// Outcome label.
    pub outcome: &'static str,
    /// Error kind when the invocation failed.
    pub error_kind: Option<&'static str>,
    /// Number of service calls issued.
    pub network_calls: u32,
    /// Whether confirmation was skipped with `--force`.
    pub forced: bool,
    /// Active selector expression, when resolution got that far.
    pub selector: Option<String>,
    /// Service request identifier, when known.
    pub request_id: Option<String>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Inputs for building an [`InvocationAuditEvent`].
#[derive(Debug, Clone)]
pub struct InvocationAuditEventParams {
    /// Operation name.
    pub command: String,
    /// Outcome label.
    pub outcome: &'static str,
    /// Error kind when the invocation failed.
    pub error_kind: Option<&'static str>,
    /// Number of service calls issued.
    pub network_calls: u32,
    /// Whether confirmation was skipped.
    pub forced: bool,
    /// Active selector expression.
    pub selector: Option<String>,
    /// Service request identifier.
    pub request_id: Option<String>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl InvocationAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: InvocationAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "invocation",
            timestamp_ms,
            command: params.command,
            outcome: params.outcome,
            error_kind: params.error_kind,
            network_calls: params.network_calls,
            forced: params.forced,
            selector: params.selector,
            request_id: params.request_id,
            duration_ms: params.duration_ms,
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for invocation events.
pub trait InvocationAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &InvocationAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl InvocationAuditSink for StderrAuditSink {
    fn record(&self, event: &InvocationAuditEvent) {
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

impl InvocationAuditSink for FileAuditSink {
    fn record(&self, event: &InvocationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl InvocationAuditSink for NoopAuditSink {
    fn record(&self, _event: &InvocationAuditEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
