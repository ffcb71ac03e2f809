//! # Example: shared_registry
//!
//! One registry shared by several threads through [`SharedRegistry`].
//!
//! Demonstrates how to:
//! - Clone the handle into worker threads; each registers its own listener.
//! - Dispatch from the main thread once the workers are wired up.
//! - Tear down one worker's listeners by context from outside.
//!
//! ## Flow
//! ```text
//! main ──► SharedRegistry::new()
//!   ├─► worker 0..3: shared.add("work/ready", ContextId::Token(n), handler)
//!   ├─► join workers
//!   ├─► shared.dispatch("work/ready")  ── lock held, handlers run in-call
//!   └─► shared.remove_all_for_context(worker 0)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example shared_registry
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use eventry::{ContextId, HandlerFn, Payload, SharedRegistry, Verbosity};

fn main() -> anyhow::Result<()> {
    let shared = SharedRegistry::new();
    shared.set_verbosity(Verbosity::WARNINGS);

    let started = Arc::new(AtomicUsize::new(0));

    // 1. Each worker registers interest under its own context
    let mut workers = Vec::new();
    for n in 0u64..3 {
        let registry = shared.clone();
        let started = Arc::clone(&started);
        workers.push(thread::spawn(move || {
            let counter = Arc::clone(&started);
            let handler = HandlerFn::arc(format!("worker-{n}"), move |_delivery| {
                counter.fetch_add(1, Ordering::Relaxed);
                Ok(())
            });
            registry.add("work/ready", ContextId::Token(n), handler, 0);
        }));
    }
    for worker in workers {
        worker.join().expect("worker thread panicked");
    }

    // 2. Everybody hears the first dispatch
    let delivered = shared.dispatch("work/ready", Payload::default(), 0)?;
    println!("first dispatch reached {delivered} workers");

    // 3. Worker 0 is retired; the others keep listening
    shared.remove_all_for_context(&ContextId::Token(0));
    let delivered = shared.dispatch("work/ready", Payload::default(), 0)?;
    println!("second dispatch reached {delivered} workers");
    println!("total handler runs: {}", started.load(Ordering::Relaxed));

    Ok(())
}
