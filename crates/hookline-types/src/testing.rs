//! Test doubles shared by the Hookline crates.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::logger::Logger;

/// One captured logger call.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    pub level: &'static str,
    pub message: String,
    pub context: Value,
}

/// A [`Logger`] that records every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    /// A new recorder behind an `Arc`, ready to attach as a logger.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn record(&self, level: &'static str, message: &str, context: &Value) {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
            context: context.clone(),
        });
    }

    /// Every captured call, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages captured at `level`.
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn trace(&self, message: &str, context: &Value) {
        self.record("trace", message, context);
    }

    fn debug(&self, message: &str, context: &Value) {
        self.record("debug", message, context);
    }

    fn info(&self, message: &str, context: &Value) {
        self.record("info", message, context);
    }

    fn warn(&self, message: &str, context: &Value) {
        self.record("warn", message, context);
    }

    fn error(&self, message: &str, context: &Value) {
        self.record("error", message, context);
    }

    fn fatal(&self, message: &str, context: &Value) {
        self.record("fatal", message, context);
    }
}
