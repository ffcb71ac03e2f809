//! Randomized operation sequences checked against a naive model.
//!
//! The model is a flat map from `(event, context, handler)` to priority;
//! the registry must agree with it through every public probe after any
//! interleaving of operations.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use eventry::{ContextId, HandlerFn, HandlerId, HandlerRef, Payload, Registry};

const EVENTS: [&str; 3] = ["alpha", "beta", "gamma"];

fn context_of(idx: usize) -> ContextId {
    match idx {
        0 => ContextId::None,
        1 => ContextId::named("analytics"),
        _ => ContextId::named("viewer"),
    }
}

/// Pool of distinct handlers; model identity is the pool index.
fn handler_pool(size: usize) -> Vec<HandlerRef> {
    (0..size)
        .map(|i| -> HandlerRef { HandlerFn::arc(format!("h{i}"), |_d| Ok(())) })
        .collect()
}

/// Model key: (event index, context index, handler index).
type Key = (usize, usize, usize);

#[derive(Debug, Clone)]
enum ModelOp {
    Add { event: usize, ctx: usize, handler: usize, priority: i64 },
    Remove { event: usize, ctx: usize, handler: usize },
    RemoveAllForEvent { event: usize },
    RemoveAllForContext { ctx: usize },
    Dispatch { event: usize, priority: i64 },
    SetVerbosity { level: i64 },
}

fn op_strategy() -> impl Strategy<Value = ModelOp> {
    prop_oneof![
        (0..3usize, 0..3usize, 0..4usize, -5i64..=5).prop_map(|(event, ctx, handler, priority)| {
            ModelOp::Add { event, ctx, handler, priority }
        }),
        (0..3usize, 0..3usize, 0..4usize).prop_map(|(event, ctx, handler)| {
            ModelOp::Remove { event, ctx, handler }
        }),
        (0..3usize).prop_map(|event| ModelOp::RemoveAllForEvent { event }),
        (0..3usize).prop_map(|ctx| ModelOp::RemoveAllForContext { ctx }),
        (0..3usize, -5i64..=5).prop_map(|(event, priority)| ModelOp::Dispatch { event, priority }),
        (-2i64..=3).prop_map(|level| ModelOp::SetVerbosity { level }),
    ]
}

/// Flattens the model into the same shape `Registry::snapshot` reports.
fn model_rows(model: &BTreeMap<Key, i64>, pool: &[HandlerRef]) -> BTreeSet<(String, ContextId, HandlerId, i64)> {
    model
        .iter()
        .map(|(&(event, ctx, handler), &priority)| {
            (
                EVENTS[event].to_string(),
                context_of(ctx),
                HandlerId::of(&pool[handler]),
                priority,
            )
        })
        .collect()
}

proptest! {
    /// Property: after any operation sequence, every public probe of the
    /// registry agrees with the naive model, and dispatch reaches exactly
    /// the model's eligible listeners.
    #[test]
    fn registry_matches_model_after_any_op_sequence(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let pool = handler_pool(4);
        let mut registry = Registry::new();
        let mut model: BTreeMap<Key, i64> = BTreeMap::new();
        let mut expected_verbosity = 0i64;

        for op in &ops {
            match *op {
                ModelOp::Add { event, ctx, handler, priority } => {
                    let added = registry.add(
                        EVENTS[event],
                        context_of(ctx),
                        Arc::clone(&pool[handler]),
                        priority,
                    );
                    // First registration wins; duplicates change nothing.
                    let fresh = !model.contains_key(&(event, ctx, handler));
                    prop_assert_eq!(added, fresh);
                    model.entry((event, ctx, handler)).or_insert(priority);
                }
                ModelOp::Remove { event, ctx, handler } => {
                    let removed = registry.remove(EVENTS[event], &context_of(ctx), &pool[handler]);
                    prop_assert_eq!(removed, model.remove(&(event, ctx, handler)).is_some());
                }
                ModelOp::RemoveAllForEvent { event } => {
                    let had_any = model.keys().any(|k| k.0 == event);
                    prop_assert_eq!(registry.remove_all_for_event(EVENTS[event]), had_any);
                    model.retain(|k, _| k.0 != event);
                }
                ModelOp::RemoveAllForContext { ctx } => {
                    let had_any = model.keys().any(|k| k.1 == ctx);
                    prop_assert_eq!(registry.remove_all_for_context(&context_of(ctx)), had_any);
                    model.retain(|k, _| k.1 != ctx);
                }
                ModelOp::Dispatch { event, priority } => {
                    let delivered = registry.dispatch(EVENTS[event], Payload::default(), priority);
                    let expected = model
                        .iter()
                        .filter(|(k, p)| k.0 == event && **p >= priority)
                        .count();
                    prop_assert_eq!(delivered.unwrap(), expected);
                }
                ModelOp::SetVerbosity { level } => {
                    registry.set_verbosity(level);
                    expected_verbosity = level;
                }
            }
        }

        // State equivalence through every public probe.
        prop_assert_eq!(registry.len(), model.len());
        prop_assert_eq!(registry.is_empty(), model.is_empty());
        prop_assert_eq!(registry.verbosity().get(), expected_verbosity);

        let snapshot: BTreeSet<(String, ContextId, HandlerId, i64)> = registry
            .snapshot()
            .into_iter()
            .map(|row| (row.event.to_string(), row.context, row.handler, row.priority))
            .collect();
        prop_assert_eq!(snapshot, model_rows(&model, &pool));

        for (event, name) in EVENTS.iter().enumerate() {
            prop_assert_eq!(
                registry.contains_event(name),
                model.keys().any(|k| k.0 == event),
                "contains_event({}) disagrees with model", name
            );
            prop_assert_eq!(
                registry.listener_count(name),
                model.keys().filter(|k| k.0 == event).count()
            );
        }
        // An emptied context map left behind would make this probe lie.
        for ctx in 0..3 {
            prop_assert_eq!(
                registry.contains_context(&context_of(ctx)),
                model.keys().any(|k| k.1 == ctx),
                "contains_context({}) disagrees with model", context_of(ctx)
            );
        }
    }

    /// Property: operations that miss (unknown event, unknown context,
    /// unregistered handler, unheard dispatch) leave the registry deeply
    /// unchanged.
    #[test]
    fn misses_leave_state_identical(
        adds in prop::collection::vec((0..3usize, 0..3usize, 0..4usize, -5i64..=5), 0..12),
    ) {
        let pool = handler_pool(5);
        let mut registry = Registry::new();
        for &(event, ctx, handler, priority) in &adds {
            registry.add(EVENTS[event], context_of(ctx), Arc::clone(&pool[handler]), priority);
        }
        let before = registry.snapshot();

        // Handler 4 is never registered above; the rest are guaranteed misses.
        prop_assert!(!registry.remove(EVENTS[0], &context_of(0), &pool[4]));
        prop_assert!(!registry.remove("ghost", &context_of(0), &pool[0]));
        prop_assert!(!registry.remove_all_for_event("ghost"));
        prop_assert!(!registry.remove_all_for_context(&ContextId::named("nobody")));
        prop_assert_eq!(registry.dispatch("ghost", Payload::default(), 0).unwrap(), 0);
        prop_assert!(registry.set_verbosity_str("not-a-number").is_err());

        prop_assert_eq!(registry.snapshot(), before);
    }

    /// Property: one dispatch invokes exactly the listeners at or above the
    /// threshold, in non-increasing priority order.
    #[test]
    fn dispatch_order_is_descending(
        priorities in prop::collection::vec(-5i64..=5, 1..10),
        threshold in -5i64..=5,
    ) {
        let mut registry = Registry::new();
        let heard = Arc::new(Mutex::new(Vec::new()));

        // One fresh listener per priority, each recording the priority it
        // was registered with.
        for (i, &priority) in priorities.iter().enumerate() {
            let log = Arc::clone(&heard);
            let handler = HandlerFn::arc(format!("h{i}"), move |_d| {
                log.lock().unwrap().push(priority);
                Ok(())
            });
            registry.add("alpha", ContextId::Token(i as u64), handler, priority);
        }

        let delivered = registry.dispatch("alpha", Payload::default(), threshold).unwrap();

        let mut expected: Vec<i64> = priorities.iter().copied().filter(|&p| p >= threshold).collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        prop_assert_eq!(delivered, expected.len());
        prop_assert_eq!(&*heard.lock().unwrap(), &expected);
    }
}
