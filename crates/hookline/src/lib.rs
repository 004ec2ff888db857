//! Hookline: an in-process event emitter and an async hook engine.
//!
//! This crate bundles the Hookline subsystems behind one dependency:
//!
//! - [`EventEmitter`]: synchronous on/off/once/emit registry
//! - [`Hookable`]: sequential sync/async hook chains with error reporting,
//!   a before/after naming policy, and deprecation gating
//!
//! # Example
//!
//! ```rust
//! use hookline::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let hookable = Hookable::with_options(
//!     HookableOptions::default().with_logger(TracingLogger::shared()),
//! );
//! hookable.on("error", Listener::new(|args| {
//!     eprintln!("hook failed: {}", args[0]);
//! }));
//! hookable.on_hook("before:render", Hook::sync(|_| Ok(()))).unwrap();
//! hookable.before_hook("render", &[Arg::from("page")]).await.unwrap();
//! # });
//! ```

pub use anyhow;

pub use hookline_events::{EmitterOptions, EventEmitter, EventError, Listener, DEFAULT_MAX_LISTENERS};
pub use hookline_hooks::{AsyncHook, Hook, HookEntry, HookError, Hookable, HookableOptions};
pub use hookline_types::{
    Arg, EmptyPolicy, EventKey, Fault, KeyedList, Logger, SharedLogger, Symbol, TracingLogger,
    ERROR_EVENT, WARN_EVENT,
};

/// Subsystem crates, for items not re-exported at the top level.
pub mod events {
    pub use hookline_events::*;
}

pub mod hooks {
    pub use hookline_hooks::*;
}

pub mod types {
    pub use hookline_types::*;
}

/// The types most callers need.
pub mod prelude {
    pub use crate::{
        Arg, AsyncHook, EventEmitter, EventKey, Fault, Hook, HookEntry, HookError, Hookable,
        HookableOptions, Listener, Logger, Symbol, TracingLogger,
    };
}
