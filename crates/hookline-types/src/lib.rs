//! Foundation types for Hookline.
//!
//! This crate provides the vocabulary shared by the listener registry
//! (`hookline-events`) and the hook engine (`hookline-hooks`). Every other
//! Hookline crate depends on `hookline-types`.
//!
//! # Key Types
//!
//! - [`EventKey`]: String or [`Symbol`] identifier for an event channel
//! - [`Arg`]: One untyped argument passed to listeners and hook handlers
//! - [`Fault`]: Error-like value delivered on the `"error"` channel
//! - [`Logger`]: Optional logging capability consumed by the core
//! - [`KeyedList`]: Insertion-ordered `key -> sequence` table
//! - [`Registration`]: A stored callback, with its [`OnceToken`] if any

pub mod arg;
pub mod error;
pub mod key;
pub mod logger;
pub mod once;
pub mod table;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use arg::{fault_from_args, Arg};
pub use error::Fault;
pub use key::{EventKey, Symbol, ERROR_EVENT, WARN_EVENT};
pub use logger::{Logger, SharedLogger, TracingLogger};
pub use once::{OnceToken, Registration, SameAs};
pub use table::{EmptyPolicy, KeyedList};
