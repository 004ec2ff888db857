use hookline_events::EventError;

/// Errors produced by the hook engine.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// The hook name violates the before/after naming policy.
    #[error("Hook event \"{name}\" must start with \"before\" or \"after\" when enforceBeforeAfter is enabled")]
    InvalidName { name: String },

    /// A handler failed while `throw_on_hook_error` was set.
    #[error("{name}: {message}")]
    Handler { name: String, message: String },

    /// Reporting a handler failure on the `"error"` channel escalated.
    #[error(transparent)]
    Emit(#[from] EventError),

    /// Options could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for HookError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Convenience alias used throughout the hook crate.
pub type Result<T> = std::result::Result<T, HookError>;
