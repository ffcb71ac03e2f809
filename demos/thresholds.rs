//! # Example: thresholds
//!
//! Priority filtering and ordering on one event.
//!
//! Demonstrates how to:
//! - Register listeners at several priorities.
//! - Use the dispatch threshold to address only the urgent ones.
//! - Observe strictly descending delivery order.
//!
//! ## Flow
//! ```text
//! listeners: pager=20, oncall=10, dashboard=5, archive=0
//!
//! dispatch priority 15 ──► pager
//! dispatch priority 10 ──► pager, oncall
//! dispatch priority  0 ──► pager, oncall, dashboard, archive
//! dispatch priority 50 ──► nobody (warning)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example thresholds
//! ```

use eventry::{ContextId, Delivery, HandlerFn, Payload, Registry, Verbosity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Warnings on, so the unheard dispatch at the end shows up
    let mut registry = Registry::new().with_verbosity(Verbosity::WARNINGS);

    // 2. Four severities of the same alert
    for (name, priority) in [("pager", 20), ("oncall", 10), ("dashboard", 5), ("archive", 0)] {
        let handler = HandlerFn::arc(name, move |delivery: &Delivery| {
            println!("  [{name}] alert heard (threshold {})", delivery.priority);
            Ok(())
        });
        registry.add("disk/full", ContextId::named(name), handler, priority);
    }

    // 3. Escalate: raise the threshold, fewer listeners qualify
    for threshold in [0, 10, 15, 50] {
        println!("dispatch at priority {threshold}:");
        let delivered = registry.dispatch("disk/full", Payload::default(), threshold)?;
        println!("  -> {delivered} delivered");
    }

    Ok(())
}
