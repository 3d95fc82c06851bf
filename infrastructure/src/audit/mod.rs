//! Audit trail adapters
//!
//! File-backed implementations of the application's [`AuditSink`] port.
//!
//! [`AuditSink`]: assess_application::AuditSink

mod jsonl_sink;

pub use jsonl_sink::JsonlAuditSink;
