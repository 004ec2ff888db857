use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use hookline_events::EmitterOptions;
use hookline_types::SharedLogger;

use crate::error::Result;

/// Configuration for a [`Hookable`](crate::Hookable).
///
/// ```
/// use hookline_hooks::HookableOptions;
///
/// let options = HookableOptions::from_toml_str(r#"
///     throw_on_hook_error = true
///     allow_deprecated = false
///
///     [deprecated_hooks]
///     legacy = "use v2"
/// "#).unwrap();
/// assert!(options.resolved_throw_on_hook_error());
/// assert_eq!(options.deprecated_hooks["legacy"], "use v2");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HookableOptions {
    /// Options for the underlying listener registry.
    #[serde(flatten)]
    pub emitter: EmitterOptions,
    /// Return a handler failure from `hook` instead of only reporting it.
    pub throw_on_hook_error: Option<bool>,
    /// Deprecated spelling of `throw_on_hook_error`, consulted only when
    /// that field is unset.
    pub throw_hook_errors: Option<bool>,
    /// Require hook names to start with `before` or `after`.
    pub enforce_before_after: bool,
    /// Deprecated hook names mapped to a reason (may be empty).
    pub deprecated_hooks: HashMap<String, String>,
    /// Whether deprecated hooks may still be registered and run.
    pub allow_deprecated: bool,
}

impl Default for HookableOptions {
    fn default() -> Self {
        Self {
            emitter: EmitterOptions::default(),
            throw_on_hook_error: None,
            throw_hook_errors: None,
            enforce_before_after: false,
            deprecated_hooks: HashMap::new(),
            allow_deprecated: true,
        }
    }
}

impl HookableOptions {
    /// Parse options from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The effective throw-on-hook-error flag.
    pub fn resolved_throw_on_hook_error(&self) -> bool {
        self.throw_on_hook_error
            .or(self.throw_hook_errors)
            .unwrap_or(false)
    }

    /// Attach a logger.
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.emitter.logger = Some(logger);
        self
    }

    /// Set the emitter's `throw_on_emit_error`.
    pub fn with_throw_on_emit_error(mut self, value: bool) -> Self {
        self.emitter.throw_on_emit_error = value;
        self
    }

    /// Set `throw_on_hook_error`.
    pub fn with_throw_on_hook_error(mut self, value: bool) -> Self {
        self.throw_on_hook_error = Some(value);
        self
    }

    /// Set `enforce_before_after`.
    pub fn with_enforce_before_after(mut self, value: bool) -> Self {
        self.enforce_before_after = value;
        self
    }

    /// Set `allow_deprecated`.
    pub fn with_allow_deprecated(mut self, value: bool) -> Self {
        self.allow_deprecated = value;
        self
    }

    /// Mark `name` as deprecated with the given reason.
    pub fn with_deprecated_hook(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        self.deprecated_hooks.insert(name.into(), reason.into());
        self
    }
}
