//! Diagnostics: levels, the verbosity gate, and pluggable sinks.
//!
//! This module groups everything the registry uses to talk about itself:
//!
//! ## Contents
//! - [`Level`], [`Verbosity`] message severity and the integer knob gating it
//! - [`Report`] sink trait for routing diagnostics
//! - [`ConsoleReporter`] default stderr/stdout sink
//! - [`TracingReporter`] `tracing` bridge (feature `tracing`)
//!
//! ## Quick wiring
//! ```text
//! Registry op ──► classify (error/warn/trace)
//!                   │
//!                   ├─ verbosity.allows(level)? ── no ──► dropped
//!                   │
//!                   └─ yes ──► Report::report(level, message)
//! ```

mod console;
mod reporter;
mod verbosity;

pub use console::ConsoleReporter;
pub use reporter::Report;
pub use verbosity::{Level, Verbosity};

#[cfg(feature = "tracing")]
mod trace;
#[cfg(feature = "tracing")]
pub use trace::TracingReporter;
