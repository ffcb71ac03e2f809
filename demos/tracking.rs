//! # Example: tracking
//!
//! A button, an analytics tracker, and an event viewer wired through one
//! registry.
//!
//! Demonstrates how to:
//! - Implement the [`Handler`] trait on a stateful struct.
//! - Register the same concern under two events with one context.
//! - Attach a typed payload and downcast it inside a handler.
//! - Inspect the registry with [`Registry::snapshot`].
//!
//! ## Flow
//! ```text
//! button ──► dispatch("button/click", Click { .. })
//!               ├─► tracker.on_event()   (context "analytics", prio 10)
//!               └─► viewer.on_event()    (context "viewer",    prio 0)
//! teardown ──► remove_all_for_context("analytics")
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example tracking
//! ```

use std::sync::{Arc, Mutex};

use eventry::{BoxError, ContextId, Delivery, Handler, HandlerFn, Payload, Registry, Verbosity};

/// Payload attached to every button click.
#[derive(Debug, Clone)]
struct Click {
    button: &'static str,
    action: &'static str,
}

/// Accumulates every event it hears, like a tracking pixel would.
#[derive(Default)]
struct Tracker {
    seen: Mutex<Vec<String>>,
}

impl Handler for Tracker {
    fn on_event(&self, delivery: &Delivery) -> Result<(), BoxError> {
        let line = match delivery.payload.downcast_ref::<Click>() {
            Some(click) => format!("{} [{} -> {}]", delivery.event, click.button, click.action),
            None => delivery.event.to_string(),
        };
        self.seen.lock().map_err(|_| "tracker poisoned")?.push(line);
        Ok(())
    }

    fn name(&self) -> &str {
        "tracker"
    }
}

fn main() -> anyhow::Result<()> {
    // 1. A registry loud enough to show what it is doing
    let mut registry = Registry::new().with_verbosity(Verbosity::TRACE);

    // 2. The tracker listens for two events, owned by one context
    let analytics = ContextId::named("analytics");
    let tracker = Arc::new(Tracker::default());
    registry.add("button/click", analytics.clone(), tracker.clone(), 10);
    registry.add("page/view", analytics.clone(), tracker.clone(), 10);

    // 3. A closure-backed viewer at lower priority, in its own context
    let viewer = HandlerFn::arc("viewer", |delivery: &Delivery| {
        println!("[viewer] {} (threshold {})", delivery.event, delivery.priority);
        Ok(())
    });
    registry.add("button/click", ContextId::named("viewer"), viewer, 0);

    // 4. The button fires; tracker (prio 10) runs before viewer (prio 0)
    let click = Click { button: "save", action: "submit-form" };
    let delivered = registry.dispatch("button/click", Payload::new(click), 0)?;
    println!("[button] delivered to {delivered} listeners");

    registry.dispatch("page/view", Payload::default(), 0)?;

    // 5. Inspect what is registered
    println!("--- registry snapshot ---");
    for row in registry.snapshot() {
        println!(
            "  {} ctx={} handler={} prio={}",
            row.event, row.context, row.handler_name, row.priority
        );
    }
    println!("--- tracker log ---");
    for line in tracker.seen.lock().map_err(|_| anyhow::anyhow!("tracker poisoned"))?.iter() {
        println!("  {line}");
    }

    // 6. Analytics shuts down; its listeners go with it
    registry.remove_all_for_context(&analytics);
    println!("listeners left: {}", registry.len());
    Ok(())
}
