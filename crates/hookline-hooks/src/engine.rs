use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use serde_json::json;
use tracing::{debug, trace};

use hookline_events::{EventEmitter, Listener};
use hookline_types::{
    Arg, EmptyPolicy, EventKey, KeyedList, OnceToken, Registration, SharedLogger, ERROR_EVENT,
    WARN_EVENT,
};

use crate::error::{HookError, Result};
use crate::hook::{Hook, HookEntry};
use crate::naming::{after_name, before_name, validate_hook_name};
use crate::options::HookableOptions;

/// One registration in the hook table.
type HookSlot = Registration<Hook>;

/// Live policy, read on every operation.
#[derive(Clone, Debug)]
struct HookPolicy {
    throw_on_hook_error: bool,
    enforce_before_after: bool,
    deprecated_hooks: HashMap<String, String>,
    allow_deprecated: bool,
}

struct HookState {
    table: Mutex<KeyedList<String, HookSlot>>,
    policy: RwLock<HookPolicy>,
}

impl HookState {
    fn remove_once(&self, name: &str, token: &OnceToken) {
        self.table.lock().remove_first(name, |slot| slot.has_token(token));
    }
}

/// Sequential hook engine layered over an [`EventEmitter`].
///
/// Handlers registered under a hook name run one at a time, in order, each
/// awaited before the next starts. A failing handler is reported on the
/// emitter's `"error"` channel and the attached logger; with
/// `throw_on_hook_error` set, the failure also aborts the call.
///
/// Hook names and event keys are separate namespaces: `on_hook("x", ..)`
/// never receives `emit("x", ..)` and vice versa.
///
/// Every registration, removal, lookup, and execution passes through the
/// same gate: the optional before/after naming policy (a hard error) and
/// then the deprecation check (a `"warn"` event, and a silent no-op when
/// deprecated hooks are disallowed).
///
/// Cloning yields another handle to the same engine.
#[derive(Clone)]
pub struct Hookable {
    events: EventEmitter,
    state: Arc<HookState>,
}

impl Hookable {
    /// Create an engine with default options.
    pub fn new() -> Self {
        Self::with_options(HookableOptions::default())
    }

    /// Create an engine with the given options.
    pub fn with_options(options: HookableOptions) -> Self {
        let policy = HookPolicy {
            throw_on_hook_error: options.resolved_throw_on_hook_error(),
            enforce_before_after: options.enforce_before_after,
            deprecated_hooks: options.deprecated_hooks,
            allow_deprecated: options.allow_deprecated,
        };
        Self {
            events: EventEmitter::with_options(options.emitter),
            state: Arc::new(HookState {
                table: Mutex::new(KeyedList::new(EmptyPolicy::Retain)),
                policy: RwLock::new(policy),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Policy
    // -----------------------------------------------------------------------

    /// Whether a failing handler aborts the call with [`HookError::Handler`].
    pub fn throw_on_hook_error(&self) -> bool {
        self.state.policy.read().throw_on_hook_error
    }

    /// Set [`Self::throw_on_hook_error`].
    pub fn set_throw_on_hook_error(&self, value: bool) {
        self.state.policy.write().throw_on_hook_error = value;
    }

    /// Old name for [`Self::throw_on_hook_error`]; both read the same flag.
    #[deprecated(note = "use `throw_on_hook_error`")]
    pub fn throw_hook_errors(&self) -> bool {
        self.throw_on_hook_error()
    }

    /// Old name for [`Self::set_throw_on_hook_error`]; both set the same flag.
    #[deprecated(note = "use `set_throw_on_hook_error`")]
    pub fn set_throw_hook_errors(&self, value: bool) {
        self.set_throw_on_hook_error(value);
    }

    /// Whether hook names must start with `before` or `after`.
    pub fn enforce_before_after(&self) -> bool {
        self.state.policy.read().enforce_before_after
    }

    /// Set [`Self::enforce_before_after`].
    pub fn set_enforce_before_after(&self, value: bool) {
        self.state.policy.write().enforce_before_after = value;
    }

    /// Deprecated hook names mapped to their reasons.
    pub fn deprecated_hooks(&self) -> HashMap<String, String> {
        self.state.policy.read().deprecated_hooks.clone()
    }

    /// Replace the deprecated-name table.
    pub fn set_deprecated_hooks(&self, hooks: HashMap<String, String>) {
        self.state.policy.write().deprecated_hooks = hooks;
    }

    /// Whether deprecated hooks may still be registered and run.
    pub fn allow_deprecated(&self) -> bool {
        self.state.policy.read().allow_deprecated
    }

    /// Set [`Self::allow_deprecated`].
    pub fn set_allow_deprecated(&self, value: bool) {
        self.state.policy.write().allow_deprecated = value;
    }

    /// The logger shared with the underlying emitter.
    pub fn logger(&self) -> Option<SharedLogger> {
        self.events.logger()
    }

    /// Attach or detach the logger.
    pub fn set_logger(&self, logger: Option<SharedLogger>) {
        self.events.set_logger(logger);
    }

    // -----------------------------------------------------------------------
    // Gate
    // -----------------------------------------------------------------------

    fn validate(&self, name: &str) -> Result<()> {
        if self.enforce_before_after() {
            validate_hook_name(name)?;
        }
        Ok(())
    }

    /// Deprecation check. Returns `false` when the operation must not proceed.
    fn admit(&self, name: &str) -> Result<bool> {
        let (reason, allowed) = {
            let policy = self.state.policy.read();
            match policy.deprecated_hooks.get(name) {
                Some(reason) => (reason.clone(), policy.allow_deprecated),
                None => return Ok(true),
            }
        };

        let message = if reason.is_empty() {
            format!("Hook \"{name}\" is deprecated")
        } else {
            format!("Hook \"{name}\" is deprecated: {reason}")
        };
        self.events.emit(
            WARN_EVENT,
            &[Arg::value(json!({ "hook": name, "message": message }))],
        )?;
        if let Some(logger) = self.logger() {
            logger.warn(&message, &json!({ "hook": name, "reason": reason }));
        }

        if !allowed {
            debug!(hook = name, "deprecated hook blocked");
        }
        Ok(allowed)
    }

    fn gate(&self, name: &str) -> Result<bool> {
        self.validate(name)?;
        self.admit(name)
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Append `handler` to `name`'s sequence.
    pub fn on_hook(&self, name: &str, handler: Hook) -> Result<()> {
        if self.gate(name)? {
            self.state
                .table
                .lock()
                .push(name.to_string(), HookSlot::persistent(handler));
        }
        Ok(())
    }

    /// Alias for [`Self::on_hook`].
    pub fn add_hook(&self, name: &str, handler: Hook) -> Result<()> {
        self.on_hook(name, handler)
    }

    /// Insert `handler` at the front of `name`'s sequence.
    pub fn prepend_hook(&self, name: &str, handler: Hook) -> Result<()> {
        if self.gate(name)? {
            self.state
                .table
                .lock()
                .prepend(name.to_string(), HookSlot::persistent(handler));
        }
        Ok(())
    }

    /// Append a handler that removes itself before its first run.
    pub fn once_hook(&self, name: &str, handler: Hook) -> Result<()> {
        if self.gate(name)? {
            let slot = self.once_slot(name, handler);
            self.state.table.lock().push(name.to_string(), slot);
        }
        Ok(())
    }

    /// Like [`Self::once_hook`], inserted at the front of the sequence.
    pub fn prepend_once_hook(&self, name: &str, handler: Hook) -> Result<()> {
        if self.gate(name)? {
            let slot = self.once_slot(name, handler);
            self.state.table.lock().prepend(name.to_string(), slot);
        }
        Ok(())
    }

    /// Register a single `(name, handler)` pair.
    pub fn on_hook_entry(&self, entry: &HookEntry) -> Result<()> {
        self.on_hook(&entry.event, entry.handler.clone())
    }

    /// Register a batch of pairs. Every name is checked against the naming
    /// policy before anything is registered.
    pub fn on_hooks(&self, entries: &[HookEntry]) -> Result<()> {
        for entry in entries {
            self.validate(&entry.event)?;
        }
        for entry in entries {
            self.on_hook_entry(entry)?;
        }
        Ok(())
    }

    /// Remove the first registration of `handler` under `name`.
    ///
    /// A once-registration matches the handler passed to `once_hook`.
    /// Unknown handlers are ignored.
    pub fn remove_hook(&self, name: &str, handler: &Hook) -> Result<()> {
        if self.gate(name)? {
            self.state
                .table
                .lock()
                .remove_first(name, |slot| slot.matches(handler));
        }
        Ok(())
    }

    /// Remove a batch of pairs, validating every name first.
    pub fn remove_hooks(&self, entries: &[HookEntry]) -> Result<()> {
        for entry in entries {
            self.validate(&entry.event)?;
        }
        for entry in entries {
            self.remove_hook(&entry.event, &entry.handler)?;
        }
        Ok(())
    }

    /// Drop every hook name and handler.
    pub fn clear_hooks(&self) {
        self.state.table.lock().clear();
    }

    fn once_slot(&self, name: &str, handler: Hook) -> HookSlot {
        let token = OnceToken::new();
        let state: Weak<HookState> = Arc::downgrade(&self.state);
        let hook_name = name.to_string();
        let fire = {
            let token = token.clone();
            move || {
                if !token.claim() {
                    return false;
                }
                if let Some(state) = state.upgrade() {
                    state.remove_once(&hook_name, &token);
                }
                true
            }
        };

        let call = match &handler {
            Hook::Sync(target) => {
                let target = Arc::clone(target);
                Hook::sync(move |args| if fire() { target(args) } else { Ok(()) })
            }
            Hook::Async(target) => {
                let target = Arc::clone(target);
                Hook::from_async(move |args| {
                    let fired = fire();
                    let target = Arc::clone(&target);
                    async move {
                        if fired {
                            target.run(args).await
                        } else {
                            Ok(())
                        }
                    }
                })
            }
        };

        HookSlot::once(call, handler, token)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The handlers registered under `name`, as they were passed in.
    ///
    /// Returns `Ok(None)` for unknown names and for deprecated names while
    /// deprecated hooks are disallowed.
    pub fn get_hooks(&self, name: &str) -> Result<Option<Vec<Hook>>> {
        if !self.gate(name)? {
            return Ok(None);
        }
        let table = self.state.table.lock();
        Ok(table
            .get(name)
            .map(|slots| slots.iter().map(|s| s.origin.clone()).collect()))
    }

    /// Snapshot of the whole hook table.
    ///
    /// Names whose handlers were all removed stay listed with an empty
    /// sequence until [`Self::clear_hooks`].
    pub fn hooks(&self) -> KeyedList<String, Hook> {
        self.state.table.lock().map(|slot| slot.origin.clone())
    }

    /// Number of handlers registered under `name`.
    pub fn hook_count(&self, name: &str) -> usize {
        self.state.table.lock().len_of(name)
    }

    /// Number of handlers across all hook names.
    pub fn total_hook_count(&self) -> usize {
        self.state.table.lock().total_len()
    }

    // -----------------------------------------------------------------------
    // Execution
    // -----------------------------------------------------------------------

    /// Run every handler registered under `name`, one at a time.
    ///
    /// The sequence is captured when the call starts; handlers added or
    /// removed while it runs affect later calls only.
    pub async fn hook(&self, name: &str, args: &[Arg]) -> Result<()> {
        if !self.gate(name)? {
            return Ok(());
        }
        let slots = self.state.table.lock().snapshot(name);
        trace!(hook = name, handlers = slots.len(), "hook");

        for slot in &slots {
            if let Err(err) = slot.call.invoke(args).await {
                self.report(name, &err)?;
            }
        }
        Ok(())
    }

    /// Alias for [`Self::hook`].
    pub async fn call_hook(&self, name: &str, args: &[Arg]) -> Result<()> {
        self.hook(name, args).await
    }

    /// Run the `before:<name>` hook.
    pub async fn before_hook(&self, name: &str, args: &[Arg]) -> Result<()> {
        self.hook(&before_name(name), args).await
    }

    /// Run the `after:<name>` hook.
    pub async fn after_hook(&self, name: &str, args: &[Arg]) -> Result<()> {
        self.hook(&after_name(name), args).await
    }

    /// Run only the synchronous handlers registered under `name`.
    ///
    /// Asynchronous handlers are skipped without being called.
    pub fn hook_sync(&self, name: &str, args: &[Arg]) -> Result<()> {
        if !self.gate(name)? {
            return Ok(());
        }
        let slots = self.state.table.lock().snapshot(name);

        for slot in &slots {
            match &slot.call {
                Hook::Sync(handler) => {
                    if let Err(err) = handler(args) {
                        self.report(name, &err)?;
                    }
                }
                Hook::Async(_) => trace!(hook = name, "skipping async handler"),
            }
        }
        Ok(())
    }

    fn report(&self, name: &str, err: &anyhow::Error) -> Result<()> {
        let message = format!("{name}: {err}");
        self.events.emit(ERROR_EVENT, &[Arg::fault(message.as_str())])?;
        if let Some(logger) = self.logger() {
            logger.error(&message, &json!({ "hook": name }));
        }
        if self.throw_on_hook_error() {
            return Err(HookError::Handler {
                name: name.to_string(),
                message: err.to_string(),
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Event pass-throughs
    // -----------------------------------------------------------------------

    /// The underlying listener registry, which carries the `"error"` and
    /// `"warn"` meta-events.
    pub fn events(&self) -> &EventEmitter {
        &self.events
    }

    /// Add a listener to the underlying emitter.
    pub fn on(&self, key: impl Into<EventKey>, listener: Listener) -> &Self {
        self.events.on(key, listener);
        self
    }

    /// Add a once-listener to the underlying emitter.
    pub fn once(&self, key: impl Into<EventKey>, listener: Listener) -> &Self {
        self.events.once(key, listener);
        self
    }

    /// Remove a listener from the underlying emitter.
    pub fn off(&self, key: impl Into<EventKey>, listener: &Listener) -> &Self {
        self.events.off(key, listener);
        self
    }

    /// Emit on the underlying emitter.
    pub fn emit(&self, key: impl Into<EventKey>, args: &[Arg]) -> hookline_events::Result<bool> {
        self.events.emit(key, args)
    }
}

impl Default for Hookable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hookable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.state.table.lock();
        f.debug_struct("Hookable")
            .field("hooks", &table.key_count())
            .field("handlers", &table.total_len())
            .field("policy", &*self.state.policy.read())
            .field("events", &self.events)
            .finish()
    }
}
