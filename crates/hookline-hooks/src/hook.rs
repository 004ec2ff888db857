use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use hookline_types::{Arg, SameAs};

/// Signature of a synchronous hook handler.
pub type SyncHookFn = dyn Fn(&[Arg]) -> anyhow::Result<()> + Send + Sync;

/// An asynchronous hook handler.
///
/// Implement this for stateful handlers; closures returning futures are
/// wrapped with [`Hook::from_async`].
#[async_trait]
pub trait AsyncHook: Send + Sync {
    /// Run the handler with its own copy of the hook arguments.
    async fn run(&self, args: Vec<Arg>) -> anyhow::Result<()>;
}

struct AsyncFn<F>(F);

#[async_trait]
impl<F, Fut> AsyncHook for AsyncFn<F>
where
    F: Fn(Vec<Arg>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn run(&self, args: Vec<Arg>) -> anyhow::Result<()> {
        (self.0)(args).await
    }
}

/// A hook handler, tagged by how it completes.
///
/// The tag is fixed at construction, which is how `hook_sync` tells the
/// two apart without calling the handler. A `Sync` handler that merely
/// kicks off background work is still treated as synchronous.
///
/// Clones share identity: `remove_hook` with any clone removes one
/// registration of the handler.
#[derive(Clone)]
pub enum Hook {
    /// Runs to completion on the calling task.
    Sync(Arc<SyncHookFn>),
    /// Returns a future that `hook` awaits before moving on.
    Async(Arc<dyn AsyncHook>),
}

impl Hook {
    /// Wrap a synchronous handler.
    pub fn sync<F>(handler: F) -> Self
    where
        F: Fn(&[Arg]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(handler))
    }

    /// Wrap a closure that returns a future.
    pub fn from_async<F, Fut>(handler: F) -> Self
    where
        F: Fn(Vec<Arg>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self::Async(Arc::new(AsyncFn(handler)))
    }

    /// Wrap a stateful [`AsyncHook`] implementation.
    pub fn from_handler(handler: Arc<dyn AsyncHook>) -> Self {
        Self::Async(handler)
    }

    /// Returns `true` for handlers that complete through a future.
    pub fn is_async(&self) -> bool {
        matches!(self, Self::Async(_))
    }

    /// Returns `true` if both handles point at the same handler.
    pub fn same_as(&self, other: &Hook) -> bool {
        match (self, other) {
            (Self::Sync(a), Self::Sync(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            (Self::Async(a), Self::Async(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }

    /// Run the handler, awaiting it if it is asynchronous.
    pub async fn invoke(&self, args: &[Arg]) -> anyhow::Result<()> {
        match self {
            Self::Sync(handler) => handler(args),
            Self::Async(handler) => handler.run(args.to_vec()).await,
        }
    }
}

impl SameAs for Hook {
    fn same_as(&self, other: &Self) -> bool {
        Hook::same_as(self, other)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(h) => write!(f, "Hook::Sync({:p})", Arc::as_ptr(h)),
            Self::Async(h) => write!(f, "Hook::Async({:p})", Arc::as_ptr(h)),
        }
    }
}

/// A `(hook name, handler)` pair for batch registration and removal.
#[derive(Clone, Debug)]
pub struct HookEntry {
    pub event: String,
    pub handler: Hook,
}

impl HookEntry {
    /// Pair a hook name with a handler.
    pub fn new(event: impl Into<String>, handler: Hook) -> Self {
        Self {
            event: event.into(),
            handler,
        }
    }
}
