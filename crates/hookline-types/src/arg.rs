use std::fmt;

use serde_json::Value;

use crate::error::Fault;

/// One untyped argument passed to listeners and hook handlers.
///
/// Listeners accept a variable-length `&[Arg]`. Most arguments are plain
/// JSON-shaped data; faults travel separately so the `"error"` channel can
/// tell an error value apart from a value that merely describes one.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// Plain data.
    Value(Value),
    /// An error-like value.
    Fault(Fault),
}

impl Arg {
    /// Wrap any JSON-convertible value.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Wrap a fault with the given message.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault(Fault::new(message))
    }

    /// The plain value, if this is not a fault.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Fault(_) => None,
        }
    }

    /// The fault, if this is one.
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Self::Fault(fault) => Some(fault),
            Self::Value(_) => None,
        }
    }

    /// The string payload, if this is a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    /// Error-like view of this argument.
    ///
    /// A fault is returned as-is; any other value is wrapped using its
    /// string representation.
    pub fn to_fault(&self) -> Fault {
        match self {
            Self::Fault(fault) => fault.clone(),
            other => Fault::new(other.to_string()),
        }
    }
}

/// Derive the fault for an `"error"` emission from its first argument.
///
/// A missing argument becomes the fault `"undefined"`.
pub fn fault_from_args(args: &[Arg]) -> Fault {
    args.first()
        .map(Arg::to_fault)
        .unwrap_or_else(|| Fault::new("undefined"))
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(Value::String(s)) => f.write_str(s),
            Self::Value(Value::Null) => f.write_str("null"),
            Self::Value(value) => write!(f, "{value}"),
            Self::Fault(fault) => write!(f, "{fault}"),
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Fault> for Arg {
    fn from(fault: Fault) -> Self {
        Self::Fault(fault)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Value(Value::from(s))
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Value(Value::from(s))
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Value(Value::from(b))
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Self::Value(Value::from(n))
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Value(Value::from(n))
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Self::Value(Value::from(n))
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Self::Value(Value::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fault_passes_through() {
        let arg = Arg::fault("boom");
        assert_eq!(arg.to_fault(), Fault::new("boom"));
        assert!(arg.as_value().is_none());
    }

    #[test]
    fn values_are_stringified() {
        assert_eq!(Arg::from("plain").to_fault().message(), "plain");
        assert_eq!(Arg::from(42).to_fault().message(), "42");
        assert_eq!(Arg::from(true).to_fault().message(), "true");
        assert_eq!(
            Arg::value(json!({"a": 1})).to_fault().message(),
            r#"{"a":1}"#
        );
    }

    #[test]
    fn first_argument_decides() {
        let args = vec![Arg::from("first"), Arg::fault("second")];
        assert_eq!(fault_from_args(&args).message(), "first");
        assert_eq!(fault_from_args(&[]).message(), "undefined");
    }

    #[test]
    fn accessors() {
        let arg = Arg::from("hello");
        assert_eq!(arg.as_str(), Some("hello"));
        assert_eq!(Arg::from(1).as_str(), None);
        assert!(Arg::fault("x").as_fault().is_some());
    }
}
