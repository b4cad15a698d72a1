//! Run-scoped diagnostics
//!
//! One [`Diagnostics`] context is created per synchronization run, threaded
//! through the pipeline, and returned with the outcome. There is no
//! process-wide diagnostic state: the context dies with its run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a diagnostic event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warn,
}

/// A single recorded event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub level: DiagnosticLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Diagnostics for one synchronization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Unique id of this run
    pub run_id: Uuid,
    /// When the run started
    pub started_at: DateTime<Utc>,
    events: Vec<DiagnosticEvent>,
}

impl Diagnostics {
    /// Create a fresh context with a new run id
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            events: Vec::new(),
        }
    }

    /// Record an event at the given level
    pub fn record(&mut self, level: DiagnosticLevel, message: impl Into<String>) {
        self.events.push(DiagnosticEvent {
            level,
            message: message.into(),
            at: Utc::now(),
        });
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.record(DiagnosticLevel::Debug, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(DiagnosticLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(DiagnosticLevel::Warn, message);
    }

    /// All recorded events in order
    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}
