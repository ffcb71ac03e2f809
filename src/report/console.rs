//! # ConsoleReporter — simple diagnostic printer
//!
//! The default [`Report`] sink: errors and warnings go to stderr, traces to
//! stdout. Use it for tests, demos, and small tools.
//!
//! ## Example output
//! ```text
//! [eventry] warning: dispatched event [user/login], but no listeners exist
//! [eventry] registered [audit] for [user/login] in context [security] at priority [10]
//! ```

use crate::report::reporter::Report;
use crate::report::verbosity::Level;

/// Console diagnostic sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Construct a new [`ConsoleReporter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Report for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Error => eprintln!("[eventry] error: {message}"),
            Level::Warn => eprintln!("[eventry] warning: {message}"),
            Level::Trace => println!("[eventry] {message}"),
        }
    }
}
