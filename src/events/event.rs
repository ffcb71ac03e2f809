//! # Dispatch input: a named event with payload and threshold.
//!
//! [`Event`] bundles the three arguments of a dispatch so it can be built
//! once, cloned, queued, or routed through [`Op`](crate::Op) values. The
//! `priority` field is the **dispatch threshold**: only listeners whose own
//! priority is at or above it are eligible to receive the event.
//!
//! ## Example
//! ```rust
//! use eventry::{Event, Payload};
//!
//! let ev = Event::new("button/click")
//!     .with_payload(Payload::new("save"))
//!     .with_priority(5);
//!
//! assert_eq!(&*ev.name, "button/click");
//! assert_eq!(ev.priority, 5);
//! assert_eq!(ev.payload.downcast_ref::<&str>(), Some(&"save"));
//! ```

use std::sync::Arc;

use crate::events::payload::Payload;

/// A dispatchable event: name, opaque payload, and priority threshold.
#[derive(Debug, Clone)]
pub struct Event {
    /// Event name listeners registered under.
    pub name: Arc<str>,
    /// Opaque payload passed through to handlers. Defaults to empty.
    pub payload: Payload,
    /// Dispatch threshold: minimum listener priority to be eligible. Defaults to 0.
    pub priority: i64,
}

impl Event {
    /// Creates an event with an empty payload and threshold 0.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            payload: Payload::default(),
            priority: 0,
        }
    }

    /// Attaches a payload.
    #[inline]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the dispatch threshold.
    #[inline]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}
