//! # Diagnostic sink trait.
//!
//! Provides [`Report`], the extension point for routing registry diagnostics
//! somewhere other than the console.
//!
//! The registry filters by [`Verbosity`](crate::Verbosity) *before* calling
//! the sink: a sink only ever sees messages the current verbosity allows, so
//! implementations do not re-check levels.
//!
//! ## Rules
//! - Called synchronously from inside registry operations; keep it cheap.
//! - Must not call back into the registry that invoked it.
//! - Must not panic; a failing sink should swallow its own errors.

use crate::report::verbosity::Level;

/// Sink for registry diagnostics.
///
/// The default sink is [`ConsoleReporter`](crate::ConsoleReporter); inject a
/// custom one with [`Registry::with_reporter`](crate::Registry::with_reporter).
pub trait Report: Send + Sync {
    /// Receives a single diagnostic that passed the verbosity gate.
    fn report(&self, level: Level, message: &str);
}
