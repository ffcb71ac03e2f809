//! # Event handler trait.
//!
//! Provides [`Handler`], the extension point for receiving dispatched events.
//!
//! Implementing the trait *is* the invocability check: anything the registry
//! accepts is a single-argument callable by construction, validated once at
//! the registration boundary by the type system rather than re-checked at
//! every dispatch.
//!
//! ## Rules
//! - Handlers run synchronously inside the dispatch call, in descending
//!   listener-priority order.
//! - Returning `Err` aborts the dispatch; listeners not yet reached are
//!   skipped and the caller gets [`DispatchError::HandlerFailed`](crate::DispatchError).
//! - Panics are not caught; they unwind out of `dispatch`.
//! - A handler must not call back into the registry it was dispatched from
//!   when that registry sits behind a lock (see [`SharedRegistry`](crate::SharedRegistry)).
//!
//! ## Example
//! ```rust
//! use eventry::{Delivery, Handler, BoxError};
//!
//! struct Metrics;
//!
//! impl Handler for Metrics {
//!     fn on_event(&self, delivery: &Delivery) -> Result<(), BoxError> {
//!         // increment a counter for delivery.event, etc.
//!         let _ = &delivery.event;
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "metrics" }      // prefer short, descriptive names
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;
use crate::events::Delivery;

/// Receives deliveries of dispatched events.
///
/// Registered into a [`Registry`](crate::Registry) as part of a listener;
/// one registered handler may back listeners for any number of events and
/// contexts.
pub trait Handler: Send + Sync + 'static {
    /// Processes a single delivery.
    ///
    /// Called synchronously from inside `dispatch`, in descending
    /// listener-priority order. An `Err` aborts the remaining deliveries.
    fn on_event(&self, delivery: &Delivery) -> Result<(), BoxError>;

    /// Returns the handler name used in diagnostics and error messages.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit", "viewer").
    /// The default uses `type_name::<Self>()`, which can be verbose; override
    /// it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a handler.
///
/// The registry stores and compares these by allocation identity: two clones
/// of one `HandlerRef` are the same handler, two separately constructed refs
/// are distinct even when they wrap identical code.
pub type HandlerRef = Arc<dyn Handler>;

/// Stable identity of a registered handler.
///
/// Derived from the `Arc` allocation address, so it is stable for as long as
/// any clone of the originating [`HandlerRef`] is alive. The registry holds a
/// clone of every registered handler, which keeps the identity valid for the
/// lifetime of the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(usize);

impl HandlerId {
    /// Returns the identity of the given handler handle.
    pub fn of(handler: &HandlerRef) -> Self {
        HandlerId(Arc::as_ptr(handler) as *const () as usize)
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
