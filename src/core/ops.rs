//! # Operation vocabulary.
//!
//! [`Op`] reifies the six registry operations as plain values, so callers can
//! queue them, log them, or feed them through one entry point
//! ([`Registry::apply`](crate::Registry::apply)) instead of calling the six
//! methods directly. Useful when operations arrive from elsewhere: a command
//! channel, a script, a recorded session.

use std::fmt;
use std::sync::Arc;

use crate::events::Event;
use crate::handlers::{ContextId, HandlerId, HandlerRef};
use crate::report::Verbosity;

/// One registry operation as a value.
///
/// Each variant corresponds 1:1 to a [`Registry`](crate::Registry) method.
#[derive(Clone)]
pub enum Op {
    /// Register a listener; see [`Registry::add`](crate::Registry::add).
    Add {
        /// Event name to listen for.
        event: Arc<str>,
        /// Owning context.
        context: ContextId,
        /// Handler to invoke.
        handler: HandlerRef,
        /// Listener priority.
        priority: i64,
    },
    /// Remove one listener; see [`Registry::remove`](crate::Registry::remove).
    Remove {
        /// Event name the listener was registered under.
        event: Arc<str>,
        /// Owning context.
        context: ContextId,
        /// The registered handler handle.
        handler: HandlerRef,
    },
    /// Remove every listener for an event;
    /// see [`Registry::remove_all_for_event`](crate::Registry::remove_all_for_event).
    RemoveAllForEvent {
        /// Event name to clear.
        event: Arc<str>,
    },
    /// Remove every listener owned by a context;
    /// see [`Registry::remove_all_for_context`](crate::Registry::remove_all_for_context).
    RemoveAllForContext {
        /// Context to clear.
        context: ContextId,
    },
    /// Dispatch an event; see [`Registry::dispatch_event`](crate::Registry::dispatch_event).
    Dispatch(Event),
    /// Set the verbosity knob; see [`Registry::set_verbosity`](crate::Registry::set_verbosity).
    SetVerbosity(Verbosity),
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add {
                event,
                context,
                handler,
                priority,
            } => f
                .debug_struct("Add")
                .field("event", event)
                .field("context", context)
                .field("handler", &handler.name())
                .field("priority", priority)
                .finish(),
            Op::Remove {
                event,
                context,
                handler,
            } => f
                .debug_struct("Remove")
                .field("event", event)
                .field("context", context)
                .field("handler", &HandlerId::of(handler))
                .finish(),
            Op::RemoveAllForEvent { event } => f
                .debug_struct("RemoveAllForEvent")
                .field("event", event)
                .finish(),
            Op::RemoveAllForContext { context } => f
                .debug_struct("RemoveAllForContext")
                .field("context", context)
                .finish(),
            Op::Dispatch(event) => f.debug_tuple("Dispatch").field(event).finish(),
            Op::SetVerbosity(verbosity) => f.debug_tuple("SetVerbosity").field(verbosity).finish(),
        }
    }
}
