use std::fmt;

use serde::{Deserialize, Serialize};

use hookline_types::SharedLogger;

use crate::error::Result;

/// Default advisory threshold of listeners per event key.
pub const DEFAULT_MAX_LISTENERS: usize = 100;

/// Configuration for an [`EventEmitter`](crate::EventEmitter).
///
/// Every field stays live after construction: the emitter exposes setters
/// and reads the current value on each operation.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterOptions {
    /// Return the fault from `emit("error", ..)` when no listener ran.
    pub throw_on_emit_error: bool,
    /// Return the fault from `emit("error", ..)` when the `"error"` key has
    /// no listeners left once dispatch finishes. Checked independently of
    /// `throw_on_emit_error`.
    pub throw_on_empty_listeners: bool,
    /// Advisory listeners-per-key threshold.
    pub max_listeners: usize,
    /// Optional logger; attached programmatically, never deserialized.
    #[serde(skip)]
    pub logger: Option<SharedLogger>,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            throw_on_emit_error: false,
            throw_on_empty_listeners: false,
            max_listeners: DEFAULT_MAX_LISTENERS,
            logger: None,
        }
    }
}

impl EmitterOptions {
    /// Parse options from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Attach a logger.
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Set `throw_on_emit_error`.
    pub fn with_throw_on_emit_error(mut self, value: bool) -> Self {
        self.throw_on_emit_error = value;
        self
    }

    /// Set `throw_on_empty_listeners`.
    pub fn with_throw_on_empty_listeners(mut self, value: bool) -> Self {
        self.throw_on_empty_listeners = value;
        self
    }

    /// Set the advisory listeners-per-key threshold.
    pub fn with_max_listeners(mut self, n: usize) -> Self {
        self.max_listeners = n;
        self
    }
}

impl fmt::Debug for EmitterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterOptions")
            .field("throw_on_emit_error", &self.throw_on_emit_error)
            .field("throw_on_empty_listeners", &self.throw_on_empty_listeners)
            .field("max_listeners", &self.max_listeners)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
