use std::fmt;

use serde::{Deserialize, Serialize};

/// The channel on which handler failures are reported.
pub const ERROR_EVENT: &str = "error";

/// The channel on which deprecation notices are reported.
pub const WARN_EVENT: &str = "warn";

/// An opaque, unique event identifier that never equals any string key.
///
/// Two symbols are equal only if one is a clone of the other, even when
/// they share a description.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol {
    id: uuid::Uuid,
    description: Option<String>,
}

impl Symbol {
    /// Create a fresh symbol with a human-readable description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            description: Some(description.into()),
        }
    }

    /// Create a fresh symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            description: None,
        }
    }

    /// The description given at creation, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.id
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}, {})", self.description().unwrap_or(""), self.id)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Identifier of an event channel: a plain name or a [`Symbol`].
///
/// Names are compared byte-for-byte. There is no trimming or case folding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKey {
    /// A string event name.
    Name(String),
    /// A unique symbol.
    Symbol(Symbol),
}

impl EventKey {
    /// The string name, or `None` for symbol keys.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Symbol(_) => None,
        }
    }

    /// Returns `true` for symbol keys.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// Returns `true` if this key is the `"error"` channel.
    pub fn is_error_channel(&self) -> bool {
        self.as_name() == Some(ERROR_EVENT)
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

impl From<&str> for EventKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for EventKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for EventKey {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<Symbol> for EventKey {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<&Symbol> for EventKey {
    fn from(symbol: &Symbol) -> Self {
        Self::Symbol(symbol.clone())
    }
}

impl From<&EventKey> for EventKey {
    fn from(key: &EventKey) -> Self {
        key.clone()
    }
}

impl PartialEq<str> for EventKey {
    fn eq(&self, other: &str) -> bool {
        self.as_name() == Some(other)
    }
}

impl PartialEq<&str> for EventKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_name() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_compare_exactly() {
        assert_eq!(EventKey::from("data"), EventKey::from(String::from("data")));
        assert_ne!(EventKey::from("data"), EventKey::from("Data"));
        assert_ne!(EventKey::from("data"), EventKey::from(" data"));
        assert_eq!(EventKey::from("data"), "data");
    }

    #[test]
    fn symbols_are_unique() {
        let a = Symbol::new("tick");
        let b = Symbol::new("tick");
        assert_ne!(a, b);
        assert_eq!(EventKey::from(&a), EventKey::from(a.clone()));
        assert_ne!(EventKey::from(&a), EventKey::from(&b));
    }

    #[test]
    fn symbol_never_equals_name() {
        let sym = Symbol::new("error");
        let key = EventKey::from(sym);
        assert!(key.is_symbol());
        assert!(!key.is_error_channel());
        assert_ne!(key, "error");
        assert_ne!(key, EventKey::from("Symbol(error)"));
    }

    #[test]
    fn display_forms() {
        assert_eq!(EventKey::from("ready").to_string(), "ready");
        assert_eq!(EventKey::from(Symbol::new("ready")).to_string(), "Symbol(ready)");
        assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
    }

    #[test]
    fn error_channel_detection() {
        assert!(EventKey::from(ERROR_EVENT).is_error_channel());
        assert!(!EventKey::from(WARN_EVENT).is_error_channel());
        assert!(!EventKey::from("Error").is_error_channel());
    }
}
