//! # What a handler receives.
//!
//! One [`Delivery`] is built per eligible listener per dispatch. The
//! `context` is the *listener's own* context echoed back; `priority` is the
//! *dispatch threshold*, not the listener's registered priority.

use std::sync::Arc;

use crate::events::payload::Payload;
use crate::handlers::ContextId;

/// A single delivery of a dispatched event to one listener.
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Name of the dispatched event.
    pub event: Arc<str>,
    /// The receiving listener's own context.
    pub context: ContextId,
    /// The dispatch threshold this delivery was filtered against.
    pub priority: i64,
    /// Payload attached to the dispatch.
    pub payload: Payload,
}
