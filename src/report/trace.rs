//! # TracingReporter — forward diagnostics to `tracing`
//!
//! Bridges registry diagnostics into the `tracing` ecosystem so they show up
//! alongside the host application's own spans and events. Enable with the
//! `tracing` cargo feature.

use crate::report::reporter::Report;
use crate::report::verbosity::Level;

/// Diagnostic sink backed by the `tracing` crate.
///
/// Emits under the `eventry` target: [`Level::Error`] as `error!`,
/// [`Level::Warn`] as `warn!`, [`Level::Trace`] as `trace!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    /// Construct a new [`TracingReporter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Report for TracingReporter {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Error => tracing::error!(target: "eventry", "{message}"),
            Level::Warn => tracing::warn!(target: "eventry", "{message}"),
            Level::Trace => tracing::trace!(target: "eventry", "{message}"),
        }
    }
}
