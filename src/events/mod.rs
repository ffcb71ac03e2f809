//! Event data model: dispatch input, deliveries, and payloads.
//!
//! This module groups what flows *through* the registry, as opposed to what
//! is stored in it (see [`Registry`](crate::Registry)).
//!
//! ## Contents
//! - [`Event`] dispatch input: name, payload, priority threshold
//! - [`Delivery`] what each eligible listener's handler receives
//! - [`Payload`] type-erased payload shared across deliveries
//!
//! ## Quick reference
//! One dispatch of an [`Event`] fans out into zero or more [`Delivery`]
//! values, one per eligible listener, all sharing the same [`Payload`].

mod delivery;
mod event;
mod payload;

pub use delivery::Delivery;
pub use event::Event;
pub use payload::Payload;
