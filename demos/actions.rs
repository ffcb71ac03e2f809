//! # Example: actions
//!
//! Driving the registry through [`Op`] values instead of method calls.
//!
//! Demonstrates how to:
//! - Describe a whole session as a list of operations.
//! - Feed them through [`Registry::apply`], one entry point for everything.
//! - Let the registry report the no-ops (duplicate add, unknown removal).
//!
//! ## Flow
//! ```text
//! Vec<Op> ──► registry.apply(op) for each
//!               ├─► Add / Remove / RemoveAllFor* ──► per-op method
//!               ├─► Dispatch(Event)              ──► handlers run
//!               └─► SetVerbosity                 ──► diagnostics knob
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example actions
//! ```

use eventry::{ContextId, Event, HandlerFn, HandlerRef, Op, Payload, Registry, Verbosity};

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();

    let bell: HandlerRef = HandlerFn::arc("bell", |delivery| {
        println!("[bell] ding: {}", delivery.event);
        Ok(())
    });

    // A recorded session: turn diagnostics up, register, dispatch, tear down.
    // The duplicate Add and the final Remove are deliberate no-ops; watch the
    // warnings they produce.
    let session = vec![
        Op::SetVerbosity(Verbosity::TRACE),
        Op::Add {
            event: "door/open".into(),
            context: ContextId::named("porch"),
            handler: bell.clone(),
            priority: 1,
        },
        Op::Add {
            event: "door/open".into(),
            context: ContextId::named("porch"),
            handler: bell.clone(),
            priority: 9,
        },
        Op::Dispatch(Event::new("door/open").with_payload(Payload::new("front door"))),
        Op::RemoveAllForEvent { event: "door/open".into() },
        Op::Remove {
            event: "door/open".into(),
            context: ContextId::named("porch"),
            handler: bell.clone(),
        },
    ];

    for op in session {
        registry.apply(op)?;
    }

    println!("listeners left: {}", registry.len());
    Ok(())
}
