use std::fmt;
use std::sync::Arc;

use hookline_types::{Arg, Registration, SameAs};

/// Signature of a listener callback.
pub type ListenerFn = dyn Fn(&[Arg]) + Send + Sync;

/// A shareable listener callback with reference identity.
///
/// Clones are the same listener: registering a clone twice registers the
/// listener twice, and `off` with any clone removes one registration.
/// Two listeners built from identical closures are different listeners.
#[derive(Clone)]
pub struct Listener(Arc<ListenerFn>);

impl Listener {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&[Arg]) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invoke the callback.
    pub fn call(&self, args: &[Arg]) {
        (self.0)(args)
    }

    /// Returns `true` if both handles point at the same callback.
    pub fn same_as(&self, other: &Listener) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Arc::as_ptr(&self.0))
    }
}

impl SameAs for Listener {
    fn same_as(&self, other: &Self) -> bool {
        Listener::same_as(self, other)
    }
}

/// One registration in the listener table.
pub(crate) type Slot = Registration<Listener>;
