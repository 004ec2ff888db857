//! Hook engine for Hookline.
//!
//! A [`Hookable`] keeps an ordered list of [`Hook`] handlers per hook name
//! and runs them one after another with [`Hookable::hook`], awaiting each
//! asynchronous handler before starting the next. It composes an
//! [`EventEmitter`](hookline_events::EventEmitter) that carries two
//! meta-events:
//!
//! - `"error"` receives a [`Fault`](hookline_types::Fault) reading
//!   `"<hook>: <message>"` for every failing handler
//! - `"warn"` receives `{ "hook", "message" }` whenever a deprecated hook
//!   name is used
//!
//! # Quick Start
//!
//! ```rust
//! use hookline_hooks::{Hook, Hookable};
//! use hookline_types::Arg;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let hookable = Hookable::new();
//! hookable.on_hook("before:save", Hook::sync(|args| {
//!     anyhow::ensure!(!args.is_empty(), "nothing to save");
//!     Ok(())
//! })).unwrap();
//! hookable.on_hook("before:save", Hook::from_async(|_args| async {
//!     anyhow::Ok(())
//! })).unwrap();
//!
//! hookable.before_hook("save", &[Arg::from("doc")]).await.unwrap();
//! # });
//! ```

pub mod engine;
pub mod error;
pub mod hook;
pub mod naming;
pub mod options;

pub use engine::Hookable;
pub use error::{HookError, Result};
pub use hook::{AsyncHook, Hook, HookEntry, SyncHookFn};
pub use options::HookableOptions;
