//! # eventry
//!
//! **Eventry** is a priority-ordered, context-scoped event registry for Rust.
//!
//! Independent components register interest in named events, optionally
//! scoped to an owning context; a publisher dispatches an event and all
//! (and only) eligible listeners receive it synchronously, in deterministic
//! descending-priority order. The crate is designed as a building block for
//! in-process decoupling: UI intents, domain notifications, plugin hooks.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌────────────┐  ┌────────────┐  ┌────────────┐
//!  │ component A│  │ component B│  │ component C│        (contexts)
//!  └─────┬──────┘  └─────┬──────┘  └─────┬──────┘
//!        │ add / remove / remove_all_*   │
//!        ▼               ▼               ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Registry                                                     │
//! │   events: event ─► context ─► handler-id ─► Listener          │
//! │   verbosity ─► Report sink (console / tracing / custom)       │
//! └───────────────────────────┬───────────────────────────────────┘
//!                             │ dispatch(event, payload, priority)
//!                             ▼
//!               collect listeners with priority >= threshold
//!                             │
//!                   sort by priority, descending
//!                             │
//!          ┌──────────────────┼──────────────────┐
//!          ▼                  ▼                  ▼
//!   handler (prio 10)  handler (prio 5)   handler (prio 0)
//!     on_event(&Delivery) — synchronous, in dispatch order;
//!     the first Err aborts the rest
//! ```
//!
//! ### Dispatch lifecycle
//! ```text
//! dispatch(event, payload, priority)
//!   ├─► trace "dispatching [event]"        (verbosity >= 2)
//!   ├─► unknown event ──► warn, Ok(0)
//!   ├─► collect eligible (listener.priority >= priority)
//!   │     └─ none ──► warn, Ok(0)
//!   ├─► sort descending by listener priority (stable)
//!   └─► for each listener, in order:
//!         handler.on_event(Delivery { event, context, priority, payload })
//!           ├─ Ok  ──► continue
//!           └─ Err ──► DispatchError::HandlerFailed { delivered, .. }
//! ```
//!
//! ## Features
//! | Area            | Description                                                         | Key types / traits                         |
//! |-----------------|---------------------------------------------------------------------|--------------------------------------------|
//! | **Registry**    | Add/remove listeners, bulk teardown, synchronous dispatch.          | [`Registry`], [`Listener`], [`Op`]         |
//! | **Handlers**    | Receive deliveries; closures or trait impls.                        | [`Handler`], [`HandlerFn`], [`HandlerRef`] |
//! | **Contexts**    | Scope listeners to their owner for bulk removal.                    | [`ContextId`]                              |
//! | **Events**      | Dispatch input and what handlers receive.                           | [`Event`], [`Delivery`], [`Payload`]       |
//! | **Diagnostics** | Verbosity-gated warnings/traces through a pluggable sink.           | [`Verbosity`], [`Report`], [`ConsoleReporter`] |
//! | **Errors**      | Typed errors for configuration and dispatch.                        | [`RegistryError`], [`DispatchError`]       |
//! | **Sharing**     | Lock-per-operation handle for multi-threaded use.                   | [`SharedRegistry`]                         |
//!
//! ## Optional features
//! - `tracing`: exports [`TracingReporter`], a sink forwarding diagnostics
//!   to the `tracing` ecosystem.
//!
//! ## Example
//! ```rust
//! use eventry::{ContextId, Event, HandlerFn, HandlerRef, Payload, Registry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = Registry::new();
//!
//!     // A component registers interest, scoped to its own context.
//!     let analytics = ContextId::named("analytics");
//!     let tracker: HandlerRef = HandlerFn::arc("tracker", |delivery| {
//!         if let Some(action) = delivery.payload.downcast_ref::<&str>() {
//!             println!("tracked {} ({action})", delivery.event);
//!         }
//!         Ok(())
//!     });
//!     registry.add("button/click", analytics.clone(), tracker, 10);
//!
//!     // Anyone can dispatch; eligible listeners run highest-priority first.
//!     let delivered = registry.dispatch_event(
//!         &Event::new("button/click").with_payload(Payload::new("save")),
//!     )?;
//!     assert_eq!(delivered, 1);
//!
//!     // Bulk teardown when the component goes away.
//!     registry.remove_all_for_context(&analytics);
//!     assert!(registry.is_empty());
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod events;
mod handlers;
mod report;

// ---- Public re-exports ----

pub use crate::core::{Listener, ListenerInfo, Op, Registry, SharedRegistry};
pub use error::{BoxError, DispatchError, RegistryError};
pub use events::{Delivery, Event, Payload};
pub use handlers::{ContextId, Handler, HandlerFn, HandlerId, HandlerRef};
pub use report::{ConsoleReporter, Level, Report, Verbosity};

// Optional: expose a sink that forwards diagnostics to `tracing`.
// Enable with: `--features tracing`
#[cfg(feature = "tracing")]
pub use report::TracingReporter;
