//! Scenario tests driving the public API end to end, with a recording
//! reporter capturing exactly what the registry says and when.

use std::sync::{Arc, Mutex};

use eventry::{
    ContextId, Delivery, HandlerFn, HandlerRef, Level, Payload, Registry, Report, SharedRegistry,
    Verbosity,
};

/// Reporter that captures every (level, message) pair it receives.
#[derive(Default)]
struct RecordingReporter {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Report for RecordingReporter {
    fn report(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

/// Registry wired to a recording reporter at the given verbosity.
fn wired(verbosity: i64) -> (Registry, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let registry = Registry::new()
        .with_reporter(reporter.clone())
        .with_verbosity(verbosity);
    (registry, reporter)
}

fn tagged(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> HandlerRef {
    let log = Arc::clone(log);
    HandlerFn::arc(tag, move |_delivery: &Delivery| {
        log.lock().unwrap().push(tag.to_string());
        Ok(())
    })
}

#[test]
fn component_lifecycle_scenario() {
    let (mut registry, _) = wired(0);
    let log = Arc::new(Mutex::new(Vec::new()));

    // Two components share one event; a third listens elsewhere.
    let analytics = ContextId::named("analytics");
    let viewer = ContextId::named("viewer");
    registry.add("button/click", analytics.clone(), tagged(&log, "analytics"), 10);
    registry.add("button/click", viewer.clone(), tagged(&log, "viewer"), 0);
    registry.add("page/view", analytics.clone(), tagged(&log, "pageview"), 0);
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.event_count(), 2);

    // Dispatch reaches both click listeners, higher priority first.
    let delivered = registry.dispatch("button/click", Payload::default(), 0).unwrap();
    assert_eq!(delivered, 2);
    assert_eq!(*log.lock().unwrap(), vec!["analytics".to_string(), "viewer".to_string()]);

    // Analytics goes away wholesale; both of its listeners disappear.
    assert!(registry.remove_all_for_context(&analytics));
    assert!(!registry.contains_event("page/view"), "page/view had only analytics listeners");
    assert_eq!(registry.listener_count("button/click"), 1);

    log.lock().unwrap().clear();
    let delivered = registry.dispatch("button/click", Payload::default(), 0).unwrap();
    assert_eq!(delivered, 1);
    assert_eq!(*log.lock().unwrap(), vec!["viewer".to_string()]);

    // The last component leaves; the registry is empty again.
    assert!(registry.remove_all_for_context(&viewer));
    assert!(registry.is_empty());
}

#[test]
fn duplicate_registration_warns_with_existing_priority() {
    let (mut registry, reporter) = wired(1);
    let bell: HandlerRef = HandlerFn::arc("bell", |_d| Ok(()));
    let porch = ContextId::named("porch");

    assert!(registry.add("door/open", porch.clone(), bell.clone(), 7));
    assert!(!registry.add("door/open", porch.clone(), bell.clone(), 99));

    assert_eq!(
        reporter.messages_at(Level::Warn),
        vec![
            "listener [bell] already registered for [door/open] in context [porch] at priority [7]"
                .to_string()
        ]
    );
    assert_eq!(registry.get("door/open", &porch, &bell).unwrap().priority(), 7);
}

#[test]
fn removal_misses_warn_distinctly_per_level() {
    let (mut registry, reporter) = wired(1);
    let bell: HandlerRef = HandlerFn::arc("bell", |_d| Ok(()));
    let stranger: HandlerRef = HandlerFn::arc("stranger", |_d| Ok(()));
    let porch = ContextId::named("porch");

    registry.add("door/open", porch.clone(), bell.clone(), 0);

    assert!(!registry.remove("window/open", &porch, &bell));
    assert!(!registry.remove("door/open", &ContextId::named("garden"), &bell));
    assert!(!registry.remove("door/open", &porch, &stranger));

    assert_eq!(
        reporter.messages_at(Level::Warn),
        vec![
            "tried to remove a listener from [window/open], but no listeners exist for this event"
                .to_string(),
            "tried to remove a listener from [door/open], but context [garden] has none registered"
                .to_string(),
            "tried to remove handler [stranger] from [door/open] in context [porch], but it is not registered"
                .to_string(),
        ]
    );
}

#[test]
fn bulk_removal_misses_warn() {
    let (mut registry, reporter) = wired(1);

    assert!(!registry.remove_all_for_event("ghost"));
    assert!(!registry.remove_all_for_context(&ContextId::named("nobody")));

    assert_eq!(
        reporter.messages_at(Level::Warn),
        vec![
            "tried to remove all listeners for [ghost], but none are registered".to_string(),
            "tried to remove all listeners for context [nobody], but none are registered"
                .to_string(),
        ]
    );
}

#[test]
fn unheard_dispatches_warn_with_cause() {
    let (mut registry, reporter) = wired(1);
    registry.add("door/open", ContextId::None, HandlerFn::arc("bell", |_d| Ok(())), 3);

    assert_eq!(registry.dispatch("ghost", Payload::default(), 0).unwrap(), 0);
    assert_eq!(registry.dispatch("door/open", Payload::default(), 99).unwrap(), 0);

    assert_eq!(
        reporter.messages_at(Level::Warn),
        vec![
            "dispatched event [ghost], but no listeners exist".to_string(),
            "no handlers for [door/open] at or above priority [99]".to_string(),
        ]
    );
}

#[test]
fn trace_precedes_warning_on_unheard_dispatch() {
    let (registry, reporter) = wired(2);

    registry.dispatch("ghost", Payload::default(), 0).unwrap();

    assert_eq!(
        reporter.lines(),
        vec![
            (Level::Trace, "dispatching [ghost] at priority [0]".to_string()),
            (Level::Warn, "dispatched event [ghost], but no listeners exist".to_string()),
        ]
    );
}

#[test]
fn verbosity_gates_each_level() {
    // At 0, warnings are suppressed.
    let (registry, reporter) = wired(0);
    registry.dispatch("ghost", Payload::default(), 0).unwrap();
    assert!(reporter.lines().is_empty());

    // At 1, warnings pass but traces do not.
    let (mut registry, reporter) = wired(1);
    registry.add("ping", ContextId::None, HandlerFn::arc("a", |_d| Ok(())), 0);
    registry.dispatch("ping", Payload::default(), 0).unwrap();
    assert!(reporter.lines().is_empty(), "successful ops only trace, and traces are gated");
    registry.dispatch("ghost", Payload::default(), 0).unwrap();
    assert_eq!(reporter.messages_at(Level::Warn).len(), 1);
    assert!(reporter.messages_at(Level::Trace).is_empty());

    // At 2, traces pass too.
    let (mut registry, reporter) = wired(2);
    registry.add("ping", ContextId::None, HandlerFn::arc("a", |_d| Ok(())), 5);
    assert_eq!(
        reporter.messages_at(Level::Trace),
        vec!["registered [a] for [ping] in context [(none)] at priority [5]".to_string()]
    );

    // Below 0, even errors are silent; the rejection still happens.
    let (mut registry, reporter) = wired(-1);
    assert!(registry.set_verbosity_str("loud").is_err());
    assert!(reporter.lines().is_empty());
}

#[test]
fn config_rejection_reports_at_error_level() {
    let (mut registry, reporter) = wired(0);
    registry.set_verbosity(Verbosity::TRACE);

    let err = registry.set_verbosity_str("loud").unwrap_err();
    assert_eq!(err.as_label(), "registry_invalid_config");
    assert_eq!(registry.verbosity(), Verbosity::TRACE, "prior verbosity kept on rejection");

    assert_eq!(
        reporter.messages_at(Level::Error),
        vec!["tried to set verbosity, but [loud] is not an integer".to_string()]
    );
}

#[test]
fn verbosity_change_traces_under_outgoing_level() {
    // Raising from 0: the change itself is below the old gate, so silent.
    let (mut registry, reporter) = wired(0);
    registry.set_verbosity(Verbosity::TRACE);
    assert!(reporter.lines().is_empty());

    // Lowering from 2: the old gate allows the trace.
    registry.set_verbosity(Verbosity::ERRORS);
    assert_eq!(
        reporter.messages_at(Level::Trace),
        vec!["verbosity set to [0]".to_string()]
    );
}

#[test]
fn handler_failure_propagates_without_reporting() {
    let (mut registry, reporter) = wired(2);
    registry.add(
        "job/run",
        ContextId::None,
        HandlerFn::arc("boom", |_d| Err("kaput".into())),
        0,
    );
    let lines_before_dispatch = reporter.lines().len();

    let err = registry.dispatch("job/run", Payload::default(), 0).unwrap_err();
    assert!(err.to_string().contains("boom"));
    assert!(err.to_string().contains("kaput"));

    // The failure belongs to the caller; only the dispatch trace was added.
    let lines = reporter.lines();
    assert_eq!(lines.len(), lines_before_dispatch + 1);
    assert_eq!(lines.last().unwrap().0, Level::Trace);
}

#[test]
fn shared_registry_survives_mixed_concurrent_operations() {
    let shared = SharedRegistry::new();

    let mut threads = Vec::new();
    for n in 0u64..8 {
        let registry = shared.clone();
        threads.push(std::thread::spawn(move || {
            let ctx = ContextId::Token(n);
            let handler: HandlerRef = HandlerFn::arc("worker", |_d| Ok(()));
            assert!(registry.add("tick", ctx.clone(), handler.clone(), n as i64));
            registry.dispatch("tick", Payload::default(), 0).unwrap();
            assert!(registry.remove("tick", &ctx, &handler));
        }));
    }
    for thread in threads {
        thread.join().unwrap();
    }

    assert!(shared.read(|registry| registry.is_empty()));
}
