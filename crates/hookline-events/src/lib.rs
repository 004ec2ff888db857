//! Listener registry for Hookline.
//!
//! [`EventEmitter`] stores an ordered list of [`Listener`]s per
//! [`EventKey`](hookline_types::EventKey) and invokes them synchronously on
//! [`EventEmitter::emit`], following the conventional on/off/once/emit
//! contract:
//!
//! - listeners run in registration order; `prepend_*` inserts at the front
//! - `once` listeners run at most once, even under re-entrant emission
//! - a key whose last listener is removed disappears from `event_names`
//! - the max-listeners threshold is advisory and only produces a warning
//! - emitting `"error"` can escalate to the caller when strict options are on
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use hookline_events::{EventEmitter, Listener};
//! use hookline_types::Arg;
//!
//! let emitter = EventEmitter::new();
//! let hits = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&hits);
//! emitter.on("data", Listener::new(move |_args| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! }));
//!
//! assert!(emitter.emit("data", &[Arg::from("payload")]).unwrap());
//! assert!(!emitter.emit("other", &[]).unwrap());
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! ```

pub mod emitter;
pub mod error;
pub mod listener;
pub mod options;

pub use emitter::EventEmitter;
pub use error::{EventError, Result};
pub use listener::Listener;
pub use options::{EmitterOptions, DEFAULT_MAX_LISTENERS};
