//! # Stored listeners and snapshot rows.
//!
//! [`Listener`] is what the registry stores per `(event, context, handler)`
//! triple. [`ListenerInfo`] is its flattened, value-comparable projection,
//! used by [`Registry::snapshot`](crate::Registry::snapshot) for inspection
//! and deep-equality checks in tests.

use std::fmt;
use std::sync::Arc;

use crate::handlers::{ContextId, HandlerId, HandlerRef};

/// A registered interest: owning context, handler, and precedence.
///
/// Fields are private; the registry alone decides how listeners are created
/// and torn down. Accessors expose everything read-only.
#[derive(Clone)]
pub struct Listener {
    context: ContextId,
    handler: HandlerRef,
    priority: i64,
}

impl Listener {
    pub(crate) fn new(context: ContextId, handler: HandlerRef, priority: i64) -> Self {
        Self {
            context,
            handler,
            priority,
        }
    }

    /// The owning context this listener was registered under.
    pub fn context(&self) -> &ContextId {
        &self.context
    }

    /// The handler invoked when an eligible event is dispatched.
    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    /// The handler's allocation-address identity.
    pub fn handler_id(&self) -> HandlerId {
        HandlerId::of(&self.handler)
    }

    /// The handler's diagnostic name.
    pub fn handler_name(&self) -> &str {
        self.handler.name()
    }

    /// Registered priority: precedence within a dispatch and the value
    /// compared against the dispatch threshold.
    pub fn priority(&self) -> i64 {
        self.priority
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("context", &self.context)
            .field("handler", &self.handler.name())
            .field("priority", &self.priority)
            .finish()
    }
}

/// Flattened snapshot row describing one registered listener.
///
/// Rows compare by value, so two snapshots can be checked for deep equality;
/// handler identity is positional (the [`HandlerId`]), stable within one
/// process run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerInfo {
    /// Event name the listener is registered under.
    pub event: Arc<str>,
    /// Owning context.
    pub context: ContextId,
    /// Handler identity.
    pub handler: HandlerId,
    /// Handler diagnostic name.
    pub handler_name: String,
    /// Registered priority.
    pub priority: i64,
}
