//! Port for structured audit logging.
//!
//! Defines the [`AuditSink`] trait for recording prediction events
//! (anchor replies, inference outcomes, default fills) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the run
//! transcript in a machine-readable format (JSONL).

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A structured audit event for logging.
///
/// Each event has a type string, a UTC timestamp taken at construction,
/// and a JSON payload containing event-specific fields.
pub struct AuditEvent {
    /// Event type identifier (e.g., "anchor_resolved", "defaults_filled").
    pub event_type: &'static str,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    /// Create a new audit event stamped with the current UTC time.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            payload,
        }
    }
}

/// Port for recording audit events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). `record` is synchronous and infallible; a failed write never
/// interrupts a prediction run.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditSink;

impl AuditSink for NoAuditSink {
    fn record(&self, _event: AuditEvent) {}
}
