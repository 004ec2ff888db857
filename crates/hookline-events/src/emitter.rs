use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use serde_json::json;
use tracing::{debug, trace, warn};

use hookline_types::{
    fault_from_args, Arg, EmptyPolicy, EventKey, KeyedList, OnceToken, SharedLogger, ERROR_EVENT,
};

use crate::error::{EventError, Result};
use crate::listener::{Listener, Slot};
use crate::options::EmitterOptions;

/// State shared by every handle to one registry.
struct Registry {
    table: Mutex<KeyedList<EventKey, Slot>>,
    options: RwLock<EmitterOptions>,
}

impl Registry {
    fn remove_once(&self, key: &EventKey, token: &OnceToken) {
        self.table.lock().remove_first(key, |slot| slot.has_token(token));
    }
}

/// Ordered, multi-subscriber event registry with synchronous dispatch.
///
/// Cloning an `EventEmitter` yields another handle to the same registry.
/// No lock is held while user callbacks run, so listeners may freely
/// register, remove, or emit on the emitter that is calling them.
///
/// # Dispatch order
///
/// `emit` invokes the key's listeners as they were when dispatch began.
/// Listeners added or removed by a running listener take effect from the
/// next `emit` onwards.
#[derive(Clone)]
pub struct EventEmitter {
    registry: Arc<Registry>,
}

impl EventEmitter {
    /// Create an empty registry with default options.
    pub fn new() -> Self {
        Self::with_options(EmitterOptions::default())
    }

    /// Create an empty registry with the given options.
    pub fn with_options(options: EmitterOptions) -> Self {
        Self {
            registry: Arc::new(Registry {
                table: Mutex::new(KeyedList::new(EmptyPolicy::Prune)),
                options: RwLock::new(options),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Options
    // -----------------------------------------------------------------------

    /// The attached logger, if any.
    pub fn logger(&self) -> Option<SharedLogger> {
        self.registry.options.read().logger.clone()
    }

    /// Attach or detach the logger.
    pub fn set_logger(&self, logger: Option<SharedLogger>) {
        self.registry.options.write().logger = logger;
    }

    /// Whether an unheard `"error"` emission is returned as an error.
    pub fn throw_on_emit_error(&self) -> bool {
        self.registry.options.read().throw_on_emit_error
    }

    /// Set [`Self::throw_on_emit_error`].
    pub fn set_throw_on_emit_error(&self, value: bool) {
        self.registry.options.write().throw_on_emit_error = value;
    }

    /// Whether `"error"` emissions fail while the error channel has no
    /// listeners left after dispatch.
    pub fn throw_on_empty_listeners(&self) -> bool {
        self.registry.options.read().throw_on_empty_listeners
    }

    /// Set [`Self::throw_on_empty_listeners`].
    pub fn set_throw_on_empty_listeners(&self, value: bool) {
        self.registry.options.write().throw_on_empty_listeners = value;
    }

    /// The advisory listeners-per-key threshold.
    pub fn max_listeners(&self) -> usize {
        self.registry.options.read().max_listeners
    }

    /// Set the threshold and cut every existing sequence to its first `n`
    /// listeners. Dropped listeners are discarded without notice.
    pub fn set_max_listeners(&self, n: usize) {
        self.registry.options.write().max_listeners = n;
        let dropped = self.registry.table.lock().truncate_all(n);
        if dropped > 0 {
            debug!(max = n, dropped, "truncated listener sequences");
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Append `listener` to `key`'s sequence.
    pub fn on(&self, key: impl Into<EventKey>, listener: Listener) -> &Self {
        self.insert(key.into(), Slot::persistent(listener), false);
        self
    }

    /// Alias for [`Self::on`].
    pub fn add_listener(&self, key: impl Into<EventKey>, listener: Listener) -> &Self {
        self.on(key, listener)
    }

    /// Insert `listener` at the front of `key`'s sequence.
    pub fn prepend_listener(&self, key: impl Into<EventKey>, listener: Listener) -> &Self {
        self.insert(key.into(), Slot::persistent(listener), true);
        self
    }

    /// Append a listener that removes itself before its first invocation.
    pub fn once(&self, key: impl Into<EventKey>, listener: Listener) -> &Self {
        let key: EventKey = key.into();
        let slot = self.once_slot(&key, listener);
        self.insert(key, slot, false);
        self
    }

    /// Like [`Self::once`], inserted at the front of the sequence.
    pub fn prepend_once_listener(&self, key: impl Into<EventKey>, listener: Listener) -> &Self {
        let key: EventKey = key.into();
        let slot = self.once_slot(&key, listener);
        self.insert(key, slot, true);
        self
    }

    /// Remove the first registration of `listener` under `key`.
    ///
    /// A once-registration matches either the listener that was passed to
    /// `once` or its wrapper from [`Self::raw_listeners`]. Removing an
    /// unknown listener is a no-op.
    pub fn off(&self, key: impl Into<EventKey>, listener: &Listener) -> &Self {
        let key: EventKey = key.into();
        self.registry
            .table
            .lock()
            .remove_first(&key, |slot| slot.matches(listener));
        self
    }

    /// Alias for [`Self::off`].
    pub fn remove_listener(&self, key: impl Into<EventKey>, listener: &Listener) -> &Self {
        self.off(key, listener)
    }

    /// Remove every listener registered under `key`.
    pub fn remove_all_listeners_for(&self, key: impl Into<EventKey>) -> &Self {
        let key: EventKey = key.into();
        self.registry.table.lock().remove_key(&key);
        self
    }

    /// Remove every listener for every key.
    pub fn remove_all_listeners(&self) -> &Self {
        self.registry.table.lock().clear();
        self
    }

    fn insert(&self, key: EventKey, slot: Slot, front: bool) {
        let len = {
            let mut table = self.registry.table.lock();
            if front {
                table.prepend(key.clone(), slot)
            } else {
                table.push(key.clone(), slot)
            }
        };
        let max = self.max_listeners();
        if len > max {
            self.warn_max_listeners(&key, len, max);
        }
    }

    fn warn_max_listeners(&self, key: &EventKey, count: usize, max: usize) {
        let message = format!(
            "MaxListenersExceededWarning: Possible event memory leak detected. \
             {count} {key} listeners added. Use set_max_listeners() to increase limit."
        );
        match self.logger() {
            Some(logger) => logger.warn(
                &message,
                &json!({ "event": key.to_string(), "count": count, "max": max }),
            ),
            None => warn!(event = %key, count, max, "{message}"),
        }
    }

    fn once_slot(&self, key: &EventKey, listener: Listener) -> Slot {
        let token = OnceToken::new();
        let registry: Weak<Registry> = Arc::downgrade(&self.registry);
        let wrapper_key = key.clone();
        let wrapper_token = token.clone();
        let target = listener.clone();
        let call = Listener::new(move |args| {
            if !wrapper_token.claim() {
                return;
            }
            if let Some(registry) = registry.upgrade() {
                registry.remove_once(&wrapper_key, &wrapper_token);
            }
            target.call(args);
        });
        Slot::once(call, listener, token)
    }

    // -----------------------------------------------------------------------
    // Emission
    // -----------------------------------------------------------------------

    /// Invoke every listener registered under `key`, in order.
    ///
    /// Returns `Ok(true)` if at least one listener ran. Emitting on the
    /// `"error"` key derives a [`Fault`](hookline_types::Fault) from the
    /// first argument and returns it as [`EventError::Unhandled`] when
    /// either check fails:
    ///
    /// - `throw_on_emit_error` is set and no listener ran
    /// - `throw_on_empty_listeners` is set and the `"error"` key has no
    ///   listeners after dispatch (a lone `once` listener counts as gone)
    pub fn emit(&self, key: impl Into<EventKey>, args: &[Arg]) -> Result<bool> {
        let key: EventKey = key.into();
        let slots = self.registry.table.lock().snapshot(&key);
        trace!(event = %key, listeners = slots.len(), "emit");

        for slot in &slots {
            slot.call.call(args);
        }
        let handled = !slots.is_empty();

        if key.is_error_channel() {
            let (on_emit, on_empty) = {
                let options = self.registry.options.read();
                (options.throw_on_emit_error, options.throw_on_empty_listeners)
            };
            let unheard = on_emit && !handled;
            if unheard || (on_empty && self.listener_count(ERROR_EVENT) == 0) {
                return Err(EventError::Unhandled(fault_from_args(args)));
            }
        }

        Ok(handled)
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Number of listeners registered under `key`.
    pub fn listener_count(&self, key: impl Into<EventKey>) -> usize {
        let key: EventKey = key.into();
        self.registry.table.lock().len_of(&key)
    }

    /// Number of listeners across all keys.
    pub fn total_listener_count(&self) -> usize {
        self.registry.table.lock().total_len()
    }

    /// Keys with at least one listener, in first-registration order.
    pub fn event_names(&self) -> Vec<EventKey> {
        self.registry.table.lock().keys().cloned().collect()
    }

    /// Snapshot of the listeners registered under `key`, as they were
    /// passed in (once-wrappers unwrapped).
    pub fn listeners(&self, key: impl Into<EventKey>) -> Vec<Listener> {
        let key: EventKey = key.into();
        let table = self.registry.table.lock();
        table
            .get(&key)
            .map(|slots| slots.iter().map(|s| s.origin.clone()).collect())
            .unwrap_or_default()
    }

    /// Snapshot of the stored entries under `key`, including once-wrappers.
    pub fn raw_listeners(&self, key: impl Into<EventKey>) -> Vec<Listener> {
        let key: EventKey = key.into();
        let table = self.registry.table.lock();
        table
            .get(&key)
            .map(|slots| slots.iter().map(|s| s.call.clone()).collect())
            .unwrap_or_default()
    }

    /// Every stored entry across all keys, concatenated in key order.
    pub fn all_listeners(&self) -> Vec<Listener> {
        self.registry
            .table
            .lock()
            .flatten()
            .into_iter()
            .map(|s| s.call)
            .collect()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.registry.table.lock();
        f.debug_struct("EventEmitter")
            .field("events", &table.key_count())
            .field("listeners", &table.total_len())
            .field("options", &*self.registry.options.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_types::testing::RecordingLogger;
    use hookline_types::{Fault, Symbol};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&'static str) -> Listener) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let make = move |tag: &'static str| {
            let sink = Arc::clone(&sink);
            Listener::new(move |_| sink.lock().push(tag.to_string()))
        };
        (log, make)
    }

    fn counter() -> (Arc<AtomicUsize>, Listener) {
        let hits = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&hits);
        let l = Listener::new(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (hits, l)
    }

    #[test]
    fn emit_runs_in_registration_order() {
        let emitter = EventEmitter::new();
        let (log, make) = recorder();
        emitter.on("e", make("a")).on("e", make("b")).add_listener("e", make("c"));
        assert!(emitter.emit("e", &[]).unwrap());
        assert_eq!(*log.lock(), vec!["a", "b", "c"]);
    }

    #[test]
    fn emit_passes_arguments() {
        let emitter = EventEmitter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        emitter.on("data", Listener::new(move |args| sink.lock().extend_from_slice(args)));
        emitter.emit("data", &[Arg::from(1), Arg::from("two")]).unwrap();
        assert_eq!(*seen.lock(), vec![Arg::from(1), Arg::from("two")]);
    }

    #[test]
    fn emit_without_listeners_returns_false() {
        let emitter = EventEmitter::new();
        assert!(!emitter.emit("nothing", &[]).unwrap());
    }

    #[test]
    fn prepend_places_first() {
        let emitter = EventEmitter::new();
        let (log, make) = recorder();
        emitter.on("e", make("a"));
        emitter.prepend_listener("e", make("b"));
        emitter.prepend_listener("e", make("c"));
        emitter.emit("e", &[]).unwrap();
        assert_eq!(*log.lock(), vec!["c", "b", "a"]);
    }

    #[test]
    fn same_listener_registered_twice_runs_twice() {
        let emitter = EventEmitter::new();
        let (hits, l) = counter();
        emitter.on("e", l.clone()).on("e", l.clone());
        emitter.emit("e", &[]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        emitter.off("e", &l);
        assert_eq!(emitter.listener_count("e"), 1);
    }

    #[test]
    fn off_last_listener_removes_key() {
        let emitter = EventEmitter::new();
        let (_, l) = counter();
        emitter.on("e", l.clone());
        emitter.off("e", &l);
        assert!(emitter.event_names().is_empty());
        assert_eq!(emitter.listener_count("e"), 0);
    }

    #[test]
    fn off_unknown_is_noop() {
        let emitter = EventEmitter::new();
        let (_, l) = counter();
        let (_, other) = counter();
        emitter.off("missing", &l);
        emitter.on("e", l);
        emitter.remove_listener("e", &other);
        assert_eq!(emitter.listener_count("e"), 1);
    }

    #[test]
    fn once_runs_exactly_once() {
        let emitter = EventEmitter::new();
        let (hits, l) = counter();
        emitter.once("e", l);
        assert!(emitter.emit("e", &[]).unwrap());
        assert!(!emitter.emit("e", &[]).unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(emitter.event_names().is_empty());
    }

    #[test]
    fn once_survives_reentrant_emit() {
        let emitter = EventEmitter::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let inner = emitter.clone();
        let c = Arc::clone(&hits);
        emitter.once(
            "e",
            Listener::new(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
                inner.emit("e", &[]).unwrap();
            }),
        );
        emitter.emit("e", &[]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn once_fired_by_nested_emit_not_rerun_by_outer() {
        let emitter = EventEmitter::new();
        let (hits, l) = counter();
        let inner = emitter.clone();
        emitter.on(
            "e",
            Listener::new(move |args| {
                if args.is_empty() {
                    inner.emit("e", &[Arg::from("nested")]).unwrap();
                }
            }),
        );
        emitter.once("e", l);
        emitter.emit("e", &[]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn once_listener_does_not_skip_its_neighbour() {
        let emitter = EventEmitter::new();
        let (log, make) = recorder();
        emitter.once("e", make("once"));
        emitter.on("e", make("next"));
        emitter.emit("e", &[]).unwrap();
        assert_eq!(*log.lock(), vec!["once", "next"]);
    }

    #[test]
    fn prepend_once_runs_first_then_disappears() {
        let emitter = EventEmitter::new();
        let (log, make) = recorder();
        emitter.on("e", make("a"));
        emitter.prepend_once_listener("e", make("first"));
        emitter.emit("e", &[]).unwrap();
        emitter.emit("e", &[]).unwrap();
        assert_eq!(*log.lock(), vec!["first", "a", "a"]);
    }

    #[test]
    fn off_removes_once_by_original_or_wrapper() {
        let emitter = EventEmitter::new();
        let (hits, l) = counter();
        emitter.once("e", l.clone());
        emitter.off("e", &l);
        assert_eq!(emitter.listener_count("e"), 0);

        emitter.once("e", l.clone());
        let wrapper = emitter.raw_listeners("e").remove(0);
        assert!(!wrapper.same_as(&l));
        assert!(emitter.listeners("e")[0].same_as(&l));
        emitter.off("e", &wrapper);
        assert_eq!(emitter.listener_count("e"), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dispatch_uses_snapshot() {
        let emitter = EventEmitter::new();
        let (log, make) = recorder();
        let late = make("late");
        let victim = make("victim");
        let inner = emitter.clone();
        let victim_handle = victim.clone();
        emitter.on(
            "e",
            Listener::new(move |_| {
                inner.off("e", &victim_handle);
                inner.on("e", late.clone());
            }),
        );
        emitter.on("e", victim);
        emitter.emit("e", &[]).unwrap();
        assert_eq!(*log.lock(), vec!["victim"]);

        log.lock().clear();
        emitter.emit("e", &[]).unwrap();
        assert_eq!(*log.lock(), vec!["late"]);
    }

    #[test]
    fn error_event_escalates_when_unhandled() {
        let emitter = EventEmitter::with_options(EmitterOptions::default().with_throw_on_emit_error(true));
        let err = emitter.emit("error", &[Arg::fault("boom")]).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.fault(), Some(&Fault::new("boom")));
    }

    #[test]
    fn error_event_wraps_non_fault_values() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_emit_error(true);
        let err = emitter.emit("error", &[Arg::from("plain text")]).unwrap_err();
        assert_eq!(err.to_string(), "plain text");
    }

    #[test]
    fn error_event_handled_does_not_escalate() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_emit_error(true);
        emitter.set_throw_on_empty_listeners(true);
        let (hits, l) = counter();
        emitter.on("error", l);
        assert!(emitter.emit("error", &[Arg::fault("boom")]).unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_listener_check_runs_after_dispatch() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_empty_listeners(true);
        let (hits, l) = counter();
        emitter.once("error", l);
        let err = emitter.emit("error", &[Arg::fault("boom")]).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(emitter.listener_count("error"), 0);
    }

    #[test]
    fn once_error_listener_counts_as_heard_for_emit_flag() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_emit_error(true);
        let (_, l) = counter();
        emitter.once("error", l);
        assert!(emitter.emit("error", &[Arg::fault("x")]).unwrap());
        assert!(emitter.emit("error", &[Arg::fault("x")]).is_err());
    }

    #[test]
    fn empty_listener_check_passes_with_remaining_listener() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_empty_listeners(true);
        let (once_hits, once) = counter();
        let (hits, l) = counter();
        emitter.once("error", once).on("error", l);
        assert!(emitter.emit("error", &[Arg::fault("x")]).unwrap());
        assert!(emitter.emit("error", &[Arg::fault("x")]).unwrap());
        assert_eq!(once_hits.load(Ordering::SeqCst), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listener_removing_itself_trips_empty_check() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_empty_listeners(true);
        let inner = emitter.clone();
        let slot: Arc<Mutex<Option<Listener>>> = Arc::new(Mutex::new(None));
        let handle = Arc::clone(&slot);
        let l = Listener::new(move |_| {
            if let Some(me) = handle.lock().take() {
                inner.off("error", &me);
            }
        });
        *slot.lock() = Some(l.clone());
        emitter.on("error", l);
        assert!(emitter.emit("error", &[Arg::fault("gone")]).is_err());
    }

    #[test]
    fn error_event_silent_by_default() {
        let emitter = EventEmitter::new();
        assert!(!emitter.emit("error", &[Arg::fault("boom")]).unwrap());
    }

    #[test]
    fn empty_listener_flag_is_independent() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_empty_listeners(true);
        assert!(!emitter.throw_on_emit_error());
        let err = emitter.emit("error", &[Arg::fault("lonely")]).unwrap_err();
        assert_eq!(err.to_string(), "lonely");
    }

    #[test]
    fn non_error_keys_never_escalate() {
        let emitter = EventEmitter::new();
        emitter.set_throw_on_emit_error(true);
        emitter.set_throw_on_empty_listeners(true);
        assert!(!emitter.emit("Error", &[Arg::fault("x")]).unwrap());
        assert!(!emitter.emit(Symbol::new("error"), &[Arg::fault("x")]).unwrap());
    }

    #[test]
    fn counts_and_names() {
        let emitter = EventEmitter::new();
        let sym = Symbol::new("tick");
        let (_, l) = counter();
        emitter.on("b", l.clone()).on("a", l.clone()).on("b", l.clone()).on(&sym, l);
        assert_eq!(emitter.listener_count("b"), 2);
        assert_eq!(emitter.listener_count(&sym), 1);
        assert_eq!(emitter.total_listener_count(), 4);
        assert_eq!(
            emitter.event_names(),
            vec![EventKey::from("b"), EventKey::from("a"), EventKey::from(sym)]
        );
    }

    #[test]
    fn listeners_are_snapshots() {
        let emitter = EventEmitter::new();
        let (_, l) = counter();
        emitter.on("e", l.clone());
        let mut snap = emitter.listeners("e");
        snap.clear();
        assert_eq!(emitter.listener_count("e"), 1);
        assert!(emitter.listeners("missing").is_empty());
        assert!(emitter.raw_listeners("missing").is_empty());
    }

    #[test]
    fn all_listeners_concatenates_in_key_order() {
        let emitter = EventEmitter::new();
        let (_, a) = counter();
        let (_, b) = counter();
        let (_, c) = counter();
        emitter.on("x", a.clone()).on("y", b.clone()).on("x", c.clone());
        let all = emitter.all_listeners();
        assert_eq!(all.len(), 3);
        assert!(all[0].same_as(&a));
        assert!(all[1].same_as(&c));
        assert!(all[2].same_as(&b));
    }

    #[test]
    fn remove_all_listeners_variants() {
        let emitter = EventEmitter::new();
        let (_, l) = counter();
        emitter.on("a", l.clone()).on("b", l);
        emitter.remove_all_listeners_for("a");
        assert_eq!(emitter.event_names(), vec![EventKey::from("b")]);
        emitter.remove_all_listeners();
        emitter.remove_all_listeners();
        assert!(emitter.event_names().is_empty());
        assert_eq!(emitter.total_listener_count(), 0);
    }

    #[test]
    fn set_max_listeners_truncates() {
        let emitter = EventEmitter::new();
        let (log, make) = recorder();
        for tag in ["a", "b", "c", "d"] {
            emitter.on("e", make(tag));
        }
        emitter.set_max_listeners(2);
        assert_eq!(emitter.max_listeners(), 2);
        assert_eq!(emitter.listener_count("e"), 2);
        emitter.emit("e", &[]).unwrap();
        assert_eq!(*log.lock(), vec!["a", "b"]);
    }

    #[test]
    fn max_listeners_warning_goes_to_logger() {
        let logger = RecordingLogger::shared();
        let emitter = EventEmitter::with_options(
            EmitterOptions::default()
                .with_max_listeners(1)
                .with_logger(logger.clone()),
        );
        let (_, l) = counter();
        emitter.on("e", l.clone());
        assert!(logger.records().is_empty());
        emitter.on("e", l);
        let warnings = logger.messages("warn");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("MaxListenersExceededWarning"));
        assert!(warnings[0].contains("2 e listeners added"));
        assert_eq!(emitter.listener_count("e"), 2);
    }

    #[test]
    fn max_listeners_warning_without_logger_does_not_block() {
        let emitter = EventEmitter::new();
        emitter.set_max_listeners(0);
        let (hits, l) = counter();
        emitter.on("e", l);
        emitter.emit("e", &[]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn logger_can_be_swapped() {
        let emitter = EventEmitter::new();
        assert!(emitter.logger().is_none());
        emitter.set_logger(Some(RecordingLogger::shared()));
        assert!(emitter.logger().is_some());
        emitter.set_logger(None);
        assert!(emitter.logger().is_none());
    }
}
