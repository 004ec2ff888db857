//! The logging capability consumed by the registry and the hook engine.
//!
//! The core never requires a logger. When one is attached it receives
//! handler failures (`error`), deprecation notices and listener-count
//! advisories (`warn`). [`TracingLogger`] forwards everything to the
//! `tracing` ecosystem.

use std::sync::Arc;

use serde_json::Value;

/// A structured logger with the six conventional levels.
///
/// `context` carries structured fields; it is `Value::Null` when the caller
/// has nothing to add.
pub trait Logger: Send + Sync {
    fn trace(&self, message: &str, context: &Value);
    fn debug(&self, message: &str, context: &Value);
    fn info(&self, message: &str, context: &Value);
    fn warn(&self, message: &str, context: &Value);
    fn error(&self, message: &str, context: &Value);
    fn fatal(&self, message: &str, context: &Value);
}

/// Logger handle shared between an emitter and the engine built on it.
pub type SharedLogger = Arc<dyn Logger>;

/// A [`Logger`] that forwards to `tracing` macros.
///
/// `fatal` has no `tracing` level of its own and is emitted at `ERROR`
/// with a `fatal = true` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// A shareable handle.
    pub fn shared() -> SharedLogger {
        Arc::new(Self)
    }
}

impl Logger for TracingLogger {
    fn trace(&self, message: &str, context: &Value) {
        tracing::trace!(%context, "{message}");
    }

    fn debug(&self, message: &str, context: &Value) {
        tracing::debug!(%context, "{message}");
    }

    fn info(&self, message: &str, context: &Value) {
        tracing::info!(%context, "{message}");
    }

    fn warn(&self, message: &str, context: &Value) {
        tracing::warn!(%context, "{message}");
    }

    fn error(&self, message: &str, context: &Value) {
        tracing::error!(%context, "{message}");
    }

    fn fatal(&self, message: &str, context: &Value) {
        tracing::error!(fatal = true, %context, "{message}");
    }
}
