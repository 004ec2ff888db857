use hookline_types::Fault;

/// Errors produced by the listener registry.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// An `"error"` emission escalated to the caller.
    ///
    /// Displays as the bare fault message.
    #[error(transparent)]
    Unhandled(Fault),

    /// Options could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl EventError {
    /// The escalated fault, if this is an unhandled `"error"` emission.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Unhandled(fault) => Some(fault),
            Self::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for EventError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Convenience alias used throughout the registry crate.
pub type Result<T> = std::result::Result<T, EventError>;
