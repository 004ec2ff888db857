//! Registration entries shared by the listener registry and the hook engine.
//!
//! A [`Registration`] pairs the callback that dispatch invokes with the
//! callback the caller registered. For once-registrations the two differ:
//! `call` is a self-removing wrapper guarded by a [`OnceToken`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Reference identity for callback handles.
pub trait SameAs {
    /// Returns `true` if both handles point at the same callback.
    fn same_as(&self, other: &Self) -> bool;
}

/// Fired flag of a once-registration.
///
/// Clones share the flag. Only the first [`OnceToken::claim`] across all
/// clones succeeds.
#[derive(Clone, Debug, Default)]
pub struct OnceToken(Arc<AtomicBool>);

impl OnceToken {
    /// An unfired token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token fired. Returns `true` only for the first caller.
    pub fn claim(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    /// Returns `true` once the token has been claimed.
    pub fn is_fired(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns `true` if both tokens share the same flag.
    pub fn same_as(&self, other: &OnceToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// One stored callback.
#[derive(Clone, Debug)]
pub struct Registration<H> {
    /// What dispatch invokes.
    pub call: H,
    /// What the caller registered.
    pub origin: H,
    /// Set for once-registrations.
    pub once: Option<OnceToken>,
}

impl<H: Clone + SameAs> Registration<H> {
    /// A registration that stays until removed.
    pub fn persistent(handler: H) -> Self {
        Self {
            call: handler.clone(),
            origin: handler,
            once: None,
        }
    }

    /// A once-registration invoking `call` on behalf of `origin`.
    pub fn once(call: H, origin: H, token: OnceToken) -> Self {
        Self {
            call,
            origin,
            once: Some(token),
        }
    }

    /// Returns `true` if `handler` is either the stored call or the origin.
    pub fn matches(&self, handler: &H) -> bool {
        self.call.same_as(handler) || self.origin.same_as(handler)
    }

    /// Returns `true` if this registration is guarded by `token`.
    pub fn has_token(&self, token: &OnceToken) -> bool {
        self.once.as_ref().is_some_and(|t| t.same_as(token))
    }
}
