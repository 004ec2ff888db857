use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error-like value carried as an event argument.
///
/// Listeners on the `"error"` channel receive a `Fault` as their first
/// argument, and the registry escalates a `Fault` back to the emitting
/// caller when strict emission is enabled. The display form is exactly the
/// message, with no prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Create a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Capture the display form of any error.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self::new(error.to_string())
    }

    /// The fault message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_message() {
        let fault = Fault::new("boom");
        assert_eq!(fault.to_string(), "boom");
        assert_eq!(fault.message(), "boom");
    }

    #[test]
    fn from_error_uses_display() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(Fault::from_error(&io).message(), "disk on fire");
    }

    #[test]
    fn serde_roundtrip() {
        let fault = Fault::from("bad input");
        let json = serde_json::to_string(&fault).unwrap();
        assert_eq!(json, r#"{"message":"bad input"}"#);
        let back: Fault = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fault);
    }
}
