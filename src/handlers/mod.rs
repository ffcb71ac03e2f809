//! # Handlers and the identities attached to them.
//!
//! This module provides the receiving side of the registry:
//! - [`Handler`] - trait for implementing event handlers
//! - [`HandlerFn`] - function-based handler implementation
//! - [`HandlerRef`] - shared handle to a handler (`Arc<dyn Handler>`)
//! - [`HandlerId`] - allocation-address identity used for duplicate
//!   detection and removal
//! - [`ContextId`] - owning-context identity scoping listeners for bulk
//!   removal

mod context;
mod handler;
mod handler_fn;

pub use context::ContextId;
pub use handler::{Handler, HandlerId, HandlerRef};
pub use handler_fn::HandlerFn;
