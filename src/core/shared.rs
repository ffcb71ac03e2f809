//! # Shared registry handle for multi-threaded deployments.
//!
//! [`Registry`] does no locking of its own; all operations must be
//! serialized externally. [`SharedRegistry`] is that serialization point: a
//! cloneable handle around `Arc<Mutex<Registry>>`, taking the lock once per
//! operation.
//!
//! ## Rules
//! - The lock is held for the *whole* operation, dispatch included: handlers
//!   run under the lock, and concurrent operations wait for them.
//! - The mutex is not reentrant. A handler must not call back into the same
//!   `SharedRegistry` it is being dispatched from; that deadlocks.
//! - Clones share one registry; tearing down a component from one thread is
//!   observed by all.
//!
//! ## Example
//! ```rust
//! use eventry::{ContextId, HandlerFn, Payload, SharedRegistry};
//!
//! let shared = SharedRegistry::new();
//!
//! let writer = shared.clone();
//! let worker = std::thread::spawn(move || {
//!     writer.add("job/done", ContextId::fresh(), HandlerFn::arc("w", |_d| Ok(())), 0)
//! });
//! assert!(worker.join().unwrap());
//!
//! let delivered = shared.dispatch("job/done", Payload::default(), 0)?;
//! assert_eq!(delivered, 1);
//! # Ok::<(), eventry::DispatchError>(())
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{DispatchError, RegistryError};
use crate::events::{Event, Payload};
use crate::handlers::{ContextId, HandlerRef};
use crate::core::ops::Op;
use crate::core::registry::Registry;
use crate::report::Verbosity;

/// Cloneable, lock-per-operation handle to a shared [`Registry`].
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Creates a handle around a fresh, empty registry.
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    /// Wraps an already-configured registry.
    ///
    /// Useful when the reporter or verbosity was set up first:
    ///
    /// ```rust
    /// use eventry::{Registry, SharedRegistry, Verbosity};
    ///
    /// let shared = SharedRegistry::from_registry(
    ///     Registry::new().with_verbosity(Verbosity::WARNINGS),
    /// );
    /// assert_eq!(shared.verbosity(), Verbosity::WARNINGS);
    /// ```
    pub fn from_registry(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`Registry::add`].
    pub fn add(
        &self,
        event: impl Into<Arc<str>>,
        context: ContextId,
        handler: HandlerRef,
        priority: i64,
    ) -> bool {
        self.inner.lock().add(event, context, handler, priority)
    }

    /// See [`Registry::remove`].
    pub fn remove(&self, event: &str, context: &ContextId, handler: &HandlerRef) -> bool {
        self.inner.lock().remove(event, context, handler)
    }

    /// See [`Registry::remove_all_for_event`].
    pub fn remove_all_for_event(&self, event: &str) -> bool {
        self.inner.lock().remove_all_for_event(event)
    }

    /// See [`Registry::remove_all_for_context`].
    pub fn remove_all_for_context(&self, context: &ContextId) -> bool {
        self.inner.lock().remove_all_for_context(context)
    }

    /// See [`Registry::dispatch`]. Handlers run while the lock is held.
    pub fn dispatch(
        &self,
        event: &str,
        payload: Payload,
        priority: i64,
    ) -> Result<usize, DispatchError> {
        self.inner.lock().dispatch(event, payload, priority)
    }

    /// See [`Registry::dispatch_event`].
    pub fn dispatch_event(&self, event: &Event) -> Result<usize, DispatchError> {
        self.inner.lock().dispatch_event(event)
    }

    /// See [`Registry::set_verbosity`].
    pub fn set_verbosity(&self, verbosity: impl Into<Verbosity>) {
        self.inner.lock().set_verbosity(verbosity)
    }

    /// See [`Registry::set_verbosity_str`].
    pub fn set_verbosity_str(&self, raw: &str) -> Result<Verbosity, RegistryError> {
        self.inner.lock().set_verbosity_str(raw)
    }

    /// See [`Registry::apply`].
    pub fn apply(&self, op: Op) -> Result<(), DispatchError> {
        self.inner.lock().apply(op)
    }

    /// Returns the current verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.inner.lock().verbosity()
    }

    /// Runs `f` with the registry borrowed under the lock, for inspection.
    ///
    /// ```rust
    /// use eventry::SharedRegistry;
    ///
    /// let shared = SharedRegistry::new();
    /// let count = shared.read(|registry| registry.len());
    /// assert_eq!(count, 0);
    /// ```
    pub fn read<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::HandlerFn;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[test]
    fn test_clones_share_one_registry() {
        let shared = SharedRegistry::new();
        let other = shared.clone();

        other.add("ping", ContextId::None, HandlerFn::arc("a", |_d| Ok(())), 0);
        assert_eq!(shared.read(|r| r.len()), 1);

        assert!(shared.remove_all_for_event("ping"));
        assert!(other.read(|r| r.is_empty()));
    }

    #[test]
    fn test_concurrent_registration_and_dispatch() {
        let shared = SharedRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let mut workers = Vec::new();
        for i in 0..4 {
            let registry = shared.clone();
            let hits = Arc::clone(&hits);
            workers.push(std::thread::spawn(move || {
                let counter = Arc::clone(&hits);
                let handler = HandlerFn::arc("counter", move |_d| {
                    counter.fetch_add(1, AtomicOrdering::Relaxed);
                    Ok(())
                });
                registry.add("tick", ContextId::Token(i), handler, 0)
            }));
        }
        for worker in workers {
            assert!(worker.join().unwrap());
        }

        let delivered = shared.dispatch("tick", Payload::default(), 0).unwrap();
        assert_eq!(delivered, 4);
        assert_eq!(hits.load(AtomicOrdering::Relaxed), 4);
    }
}
