//! Activity log
//!
//! One record per processed command. The interpreter only ever writes to the
//! log; sinks decide where records end up.

pub mod logging;

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use logging::init_logging;

/// Target used for activity events so they can be filtered separately
pub const ACTIVITY_TARGET: &str = "sqlterp::activity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Classified command keyword, `-` for diagnostics
    pub command: String,
    pub message: String,
    pub severity: Severity,
    pub at: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(command: &str, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            command: command.to_string(),
            message: message.into(),
            severity,
            at: Utc::now(),
        }
    }
}

/// Write-only sink for activity records
pub trait ActivityLog: Send + Sync {
    fn record(&self, record: &ActivityRecord);
}

/// Forwards records to the installed `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn record(&self, record: &ActivityRecord) {
        match record.severity {
            Severity::Info => {
                tracing::info!(target: ACTIVITY_TARGET, command = %record.command, "{}", record.message)
            }
            Severity::Error => {
                tracing::error!(target: ACTIVITY_TARGET, command = %record.command, "{}", record.message)
            }
        }
    }
}

/// Keeps records in memory, for embedders that want to inspect activity
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    records: Mutex<Vec<ActivityRecord>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ActivityRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ActivityLog for MemoryActivityLog {
    fn record(&self, record: &ActivityRecord) {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records.push(record.clone());
    }
}

impl<T: ActivityLog + ?Sized> ActivityLog for std::sync::Arc<T> {
    fn record(&self, record: &ActivityRecord) {
        (**self).record(record)
    }
}
