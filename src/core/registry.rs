//! # Event registry - priority-ordered, context-scoped pub/sub core.
//!
//! [`Registry`] owns the listener table and implements the six operations:
//! add, remove, remove-all-for-event, remove-all-for-context, dispatch, and
//! set-verbosity. Every operation is a synchronous, atomic state transition;
//! dispatch additionally invokes handlers before it returns.
//!
//! ## Architecture
//! ```text
//! Registry
//!   ├─ events: event ─► context ─► handler-id ─► Listener
//!   ├─ verbosity: gate for diagnostics
//!   └─ reporter: Report sink (console by default)
//!
//! add(event, ctx, handler, prio) ──► events[event][ctx][id] = Listener
//!                                    (duplicate triple → warn, keep first)
//! remove(...)                    ──► delete + cascade empty maps upward
//! dispatch(event, payload, prio) ──► collect listeners with priority >= prio
//!                                    sort descending, invoke handlers in order
//! ```
//!
//! ## Rules
//! - At most one listener per `(event, context, handler)` triple; a
//!   duplicate add is rejected and the first-registered priority kept.
//! - Every stored event key maps to a non-empty context map and every
//!   context key to a non-empty handler map; removal cascades so no empty
//!   container survives an operation.
//! - Dispatch never mutates the registry. It borrows `&self` for its whole
//!   duration, so handlers cannot re-enter the same registry mutably.
//! - Anomalies (duplicate adds, removals of unknown listeners, dispatches
//!   nobody hears) are warnings through the [`Report`] sink, never errors.
//! - The registry does no locking; serialize access externally for
//!   multi-threaded use (see [`SharedRegistry`](crate::SharedRegistry)).
//!
//! ## Example
//! ```rust
//! use eventry::{ContextId, HandlerFn, HandlerRef, Payload, Registry};
//!
//! let mut registry = Registry::new();
//!
//! let audit: HandlerRef = HandlerFn::arc("audit", |delivery| {
//!     println!("[{}] via {}", delivery.event, delivery.context);
//!     Ok(())
//! });
//!
//! assert!(registry.add("user/login", ContextId::named("security"), audit, 10));
//!
//! let delivered = registry.dispatch("user/login", Payload::new("alice"), 0)?;
//! assert_eq!(delivered, 1);
//! # Ok::<(), eventry::DispatchError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{DispatchError, RegistryError};
use crate::events::{Delivery, Event, Payload};
use crate::handlers::{ContextId, HandlerId, HandlerRef};
use crate::core::listener::{Listener, ListenerInfo};
use crate::core::ops::Op;
use crate::report::{ConsoleReporter, Level, Report, Verbosity};

/// Listeners for one event, grouped by owning context.
type ContextMap = HashMap<ContextId, HashMap<HandlerId, Listener>>;

/// Priority-ordered, context-scoped event registry.
///
/// Created empty with verbosity `0` (errors only) and a
/// [`ConsoleReporter`] sink; both are adjustable:
///
/// ```rust
/// use eventry::{Registry, Verbosity};
///
/// let registry = Registry::new().with_verbosity(Verbosity::WARNINGS);
/// assert_eq!(registry.verbosity(), Verbosity::WARNINGS);
/// ```
pub struct Registry {
    events: HashMap<Arc<str>, ContextMap>,
    verbosity: Verbosity,
    reporter: Arc<dyn Report>,
}

impl Registry {
    /// Creates an empty registry with default verbosity and console reporting.
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
            verbosity: Verbosity::default(),
            reporter: Arc::new(ConsoleReporter::new()),
        }
    }

    /// Sets the initial verbosity.
    #[inline]
    pub fn with_verbosity(mut self, verbosity: impl Into<Verbosity>) -> Self {
        self.verbosity = verbosity.into();
        self
    }

    /// Replaces the diagnostic sink.
    #[inline]
    pub fn with_reporter(mut self, reporter: Arc<dyn Report>) -> Self {
        self.reporter = reporter;
        self
    }

    // ---------------------------
    // Operations
    // ---------------------------

    /// Registers a listener for `event`, owned by `context`, at `priority`.
    ///
    /// Returns `true` when the listener was added. A duplicate
    /// `(event, context, handler)` triple is rejected: the registry is left
    /// unchanged, the first-registered priority stays in effect, and a
    /// warning naming that priority is reported.
    pub fn add(
        &mut self,
        event: impl Into<Arc<str>>,
        context: ContextId,
        handler: HandlerRef,
        priority: i64,
    ) -> bool {
        let event = event.into();
        let id = HandlerId::of(&handler);

        if let Some(existing) = self
            .events
            .get(&event)
            .and_then(|contexts| contexts.get(&context))
            .and_then(|handlers| handlers.get(&id))
        {
            self.report(
                Level::Warn,
                format_args!(
                    "listener [{}] already registered for [{event}] in context [{context}] at priority [{}]",
                    handler.name(),
                    existing.priority()
                ),
            );
            return false;
        }

        self.report(
            Level::Trace,
            format_args!(
                "registered [{}] for [{event}] in context [{context}] at priority [{priority}]",
                handler.name()
            ),
        );

        self.events
            .entry(event)
            .or_default()
            .entry(context.clone())
            .or_default()
            .insert(id, Listener::new(context, handler, priority));
        true
    }

    /// Removes the listener registered under `(event, context, handler)`.
    ///
    /// Returns `true` when a listener was removed. Emptied containers are
    /// cascaded away: a context with no handlers left disappears, and an
    /// event with no contexts left disappears with it. A miss at any level
    /// is a no-op reported as a warning naming the level that missed.
    pub fn remove(&mut self, event: &str, context: &ContextId, handler: &HandlerRef) -> bool {
        let Some(contexts) = self.events.get_mut(event) else {
            self.report(
                Level::Warn,
                format_args!(
                    "tried to remove a listener from [{event}], but no listeners exist for this event"
                ),
            );
            return false;
        };

        let Some(handlers) = contexts.get_mut(context) else {
            self.report(
                Level::Warn,
                format_args!(
                    "tried to remove a listener from [{event}], but context [{context}] has none registered"
                ),
            );
            return false;
        };

        let Some(removed) = handlers.remove(&HandlerId::of(handler)) else {
            self.report(
                Level::Warn,
                format_args!(
                    "tried to remove handler [{}] from [{event}] in context [{context}], but it is not registered",
                    handler.name()
                ),
            );
            return false;
        };

        if handlers.is_empty() {
            contexts.remove(context);
            if contexts.is_empty() {
                self.events.remove(event);
            }
        }

        self.report(
            Level::Trace,
            format_args!(
                "removed [{}] from [{event}] in context [{context}]",
                removed.handler_name()
            ),
        );
        true
    }

    /// Removes every listener for `event`, across all contexts.
    ///
    /// Returns `true` when the event had listeners; otherwise a no-op
    /// reported as a warning.
    pub fn remove_all_for_event(&mut self, event: &str) -> bool {
        if self.events.remove(event).is_none() {
            self.report(
                Level::Warn,
                format_args!("tried to remove all listeners for [{event}], but none are registered"),
            );
            return false;
        }

        self.report(
            Level::Trace,
            format_args!("removed all listeners for [{event}]"),
        );
        true
    }

    /// Removes every listener owned by `context`, across all events.
    ///
    /// One context lookup per registered event; events left without any
    /// context are cascaded away. Returns `true` when the context owned at
    /// least one listener somewhere; otherwise a no-op reported as a warning.
    pub fn remove_all_for_context(&mut self, context: &ContextId) -> bool {
        let mut found = false;
        self.events.retain(|_, contexts| {
            if contexts.remove(context).is_some() {
                found = true;
            }
            !contexts.is_empty()
        });

        if !found {
            self.report(
                Level::Warn,
                format_args!(
                    "tried to remove all listeners for context [{context}], but none are registered"
                ),
            );
            return false;
        }

        self.report(
            Level::Trace,
            format_args!("removed all listeners for context [{context}]"),
        );
        true
    }

    /// Dispatches `event` to every listener whose priority is at or above
    /// `priority`, in strictly descending listener-priority order.
    ///
    /// Each eligible handler is invoked synchronously with a [`Delivery`]
    /// carrying the event name, the listener's own context, the dispatch
    /// threshold, and a clone of the payload. Listeners of equal priority
    /// run in an unspecified but stable order.
    ///
    /// Returns the number of handlers invoked. A dispatch nobody hears
    /// (unknown event, or no listener meets the threshold) returns `Ok(0)`
    /// and reports a warning. The first handler error aborts the remaining
    /// deliveries and is returned as [`DispatchError::HandlerFailed`].
    pub fn dispatch(
        &self,
        event: &str,
        payload: Payload,
        priority: i64,
    ) -> Result<usize, DispatchError> {
        self.report(
            Level::Trace,
            format_args!("dispatching [{event}] at priority [{priority}]"),
        );

        let Some((name, contexts)) = self.events.get_key_value(event) else {
            self.report(
                Level::Warn,
                format_args!("dispatched event [{event}], but no listeners exist"),
            );
            return Ok(0);
        };

        let mut eligible: Vec<&Listener> = contexts
            .values()
            .flat_map(|handlers| handlers.values())
            .filter(|listener| listener.priority() >= priority)
            .collect();

        if eligible.is_empty() {
            self.report(
                Level::Warn,
                format_args!("no handlers for [{event}] at or above priority [{priority}]"),
            );
            return Ok(0);
        }

        // Stable sort keeps equal priorities in collection order.
        eligible.sort_by(|a, b| b.priority().cmp(&a.priority()));

        let mut delivered = 0usize;
        for listener in eligible {
            let delivery = Delivery {
                event: Arc::clone(name),
                context: listener.context().clone(),
                priority,
                payload: payload.clone(),
            };
            listener
                .handler()
                .on_event(&delivery)
                .map_err(|source| DispatchError::HandlerFailed {
                    event: Arc::clone(name),
                    handler: listener.handler_name().to_string(),
                    delivered,
                    source,
                })?;
            delivered += 1;
        }

        Ok(delivered)
    }

    /// Dispatches a prepared [`Event`] value.
    pub fn dispatch_event(&self, event: &Event) -> Result<usize, DispatchError> {
        self.dispatch(&event.name, event.payload.clone(), event.priority)
    }

    /// Sets the verbosity knob.
    ///
    /// Accepts any integer. The change itself is traced under the *outgoing*
    /// verbosity, so lowering the level is silent and raising it announces
    /// nothing retroactively.
    pub fn set_verbosity(&mut self, verbosity: impl Into<Verbosity>) {
        let verbosity = verbosity.into();
        self.report(
            Level::Trace,
            format_args!("verbosity set to [{verbosity}]"),
        );
        self.verbosity = verbosity;
    }

    /// Sets the verbosity from raw text (env vars, config files).
    ///
    /// Non-integer input is rejected with [`RegistryError::InvalidConfig`],
    /// reported at error level, and the prior verbosity is kept.
    pub fn set_verbosity_str(&mut self, raw: &str) -> Result<Verbosity, RegistryError> {
        match raw.parse::<Verbosity>() {
            Ok(verbosity) => {
                self.set_verbosity(verbosity);
                Ok(verbosity)
            }
            Err(err) => {
                self.report(
                    Level::Error,
                    format_args!("tried to set verbosity, but [{raw}] is not an integer"),
                );
                Err(err)
            }
        }
    }

    /// Applies one [`Op`] value, routing to the matching operation.
    ///
    /// Only a handler failure during a dispatched op surfaces as an error;
    /// the no-op outcomes of the other operations are reported through the
    /// sink exactly as with the direct methods.
    pub fn apply(&mut self, op: Op) -> Result<(), DispatchError> {
        match op {
            Op::Add {
                event,
                context,
                handler,
                priority,
            } => {
                self.add(event, context, handler, priority);
            }
            Op::Remove {
                event,
                context,
                handler,
            } => {
                self.remove(&event, &context, &handler);
            }
            Op::RemoveAllForEvent { event } => {
                self.remove_all_for_event(&event);
            }
            Op::RemoveAllForContext { context } => {
                self.remove_all_for_context(&context);
            }
            Op::Dispatch(event) => {
                self.dispatch_event(&event)?;
            }
            Op::SetVerbosity(verbosity) => self.set_verbosity(verbosity),
        }
        Ok(())
    }

    // ---------------------------
    // Inspection
    // ---------------------------

    /// Returns true when no listeners are registered.
    ///
    /// Because emptied containers are cascaded away, this is equivalent to
    /// having no event keys at all.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the total number of registered listeners.
    pub fn len(&self) -> usize {
        self.events
            .values()
            .flat_map(|contexts| contexts.values())
            .map(HashMap::len)
            .sum()
    }

    /// Returns the number of event names with at least one listener.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Returns the sorted list of event names with at least one listener.
    pub fn events(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self.events.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns true when `event` has at least one listener.
    pub fn contains_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Returns true when `context` owns at least one listener under any event.
    pub fn contains_context(&self, context: &ContextId) -> bool {
        self.events
            .values()
            .any(|contexts| contexts.contains_key(context))
    }

    /// Returns true when the exact `(event, context, handler)` triple is registered.
    pub fn contains(&self, event: &str, context: &ContextId, handler: &HandlerRef) -> bool {
        self.get(event, context, handler).is_some()
    }

    /// Looks up the listener registered under `(event, context, handler)`.
    pub fn get(
        &self,
        event: &str,
        context: &ContextId,
        handler: &HandlerRef,
    ) -> Option<&Listener> {
        self.events
            .get(event)?
            .get(context)?
            .get(&HandlerId::of(handler))
    }

    /// Returns the number of listeners for `event`, across all contexts.
    pub fn listener_count(&self, event: &str) -> usize {
        self.events
            .get(event)
            .map_or(0, |contexts| contexts.values().map(HashMap::len).sum())
    }

    /// Returns the current verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Returns a sorted, value-comparable snapshot of every registered listener.
    ///
    /// Two snapshots of the same registry taken around a no-op compare equal,
    /// which is how the no-op identities are checked in tests.
    pub fn snapshot(&self) -> Vec<ListenerInfo> {
        let mut rows: Vec<ListenerInfo> = self
            .events
            .iter()
            .flat_map(|(event, contexts)| {
                contexts.values().flat_map(move |handlers| {
                    handlers.values().map(move |listener| ListenerInfo {
                        event: Arc::clone(event),
                        context: listener.context().clone(),
                        handler: listener.handler_id(),
                        handler_name: listener.handler_name().to_string(),
                        priority: listener.priority(),
                    })
                })
            })
            .collect();
        rows.sort();
        rows
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    /// Emits one diagnostic if the current verbosity allows its level.
    ///
    /// The message is only materialized after the gate passes.
    fn report(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.verbosity.allows(level) {
            self.reporter.report(level, &args.to_string());
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.event_count())
            .field("listeners", &self.len())
            .field("verbosity", &self.verbosity)
            .finish()
    }
}
