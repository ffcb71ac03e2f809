//! # Diagnostic levels and the verbosity knob.
//!
//! Every message the registry emits is classified by [`Level`]. Whether it
//! reaches the [`Report`](crate::Report) sink is decided by the registry's
//! [`Verbosity`] setting: a message passes when `verbosity >= level`.
//!
//! ## Level semantics
//! - `0` — errors only (rejected configuration input)
//! - `1` — plus warnings (duplicate listeners, removals of unknown listeners,
//!   dispatches that reach nobody)
//! - `2` — plus informational traces (registrations, removals, dispatches)
//!
//! Any integer is a valid verbosity; values above `2` behave like `2`, and
//! negative values silence everything, errors included.
//!
//! ## Example
//! ```rust
//! use eventry::{Level, Verbosity};
//!
//! let v = Verbosity::WARNINGS;
//! assert!(v.allows(Level::Error));
//! assert!(v.allows(Level::Warn));
//! assert!(!v.allows(Level::Trace));
//!
//! let parsed: Verbosity = "2".parse().unwrap();
//! assert_eq!(parsed, Verbosity::TRACE);
//! assert!("loud".parse::<Verbosity>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Severity of a single registry diagnostic.
///
/// Ordered from most to least severe: `Error < Warn < Trace`. The numeric
/// value of a level is the minimum [`Verbosity`] at which it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Rejected input; the operation did not take effect.
    Error = 0,
    /// Suspicious but recoverable; the operation completed as a no-op.
    Warn = 1,
    /// Informational trace of a successful operation.
    Trace = 2,
}

impl Level {
    /// Returns a short stable label (lowercase) for use in log lines.
    pub fn as_label(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Trace => "trace",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Integer-backed verbosity knob.
///
/// Wraps the raw level so it can only be constructed from an integer; input
/// arriving as text goes through [`FromStr`], which rejects non-integers
/// with [`RegistryError::InvalidConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verbosity(i64);

impl Verbosity {
    /// Errors only. This is the default.
    pub const ERRORS: Verbosity = Verbosity(0);
    /// Errors and warnings.
    pub const WARNINGS: Verbosity = Verbosity(1);
    /// Errors, warnings, and informational traces.
    pub const TRACE: Verbosity = Verbosity(2);

    /// Creates a verbosity from a raw integer level.
    #[inline]
    pub fn new(level: i64) -> Self {
        Verbosity(level)
    }

    /// Returns the raw integer level.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns true when a message of the given level should be emitted.
    #[inline]
    pub fn allows(self, level: Level) -> bool {
        self.0 >= level as i64
    }
}

impl Default for Verbosity {
    /// Errors only.
    fn default() -> Self {
        Verbosity::ERRORS
    }
}

impl From<i64> for Verbosity {
    fn from(level: i64) -> Self {
        Verbosity(level)
    }
}

impl From<Verbosity> for i64 {
    fn from(verbosity: Verbosity) -> Self {
        verbosity.0
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Verbosity {
    type Err = RegistryError;

    /// Parses an integer level from text, tolerating surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Verbosity)
            .map_err(|_| RegistryError::InvalidConfig {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_errors_only() {
        let v = Verbosity::default();
        assert!(v.allows(Level::Error));
        assert!(!v.allows(Level::Warn));
        assert!(!v.allows(Level::Trace));
    }

    #[test]
    fn test_negative_silences_everything() {
        let v = Verbosity::new(-1);
        assert!(!v.allows(Level::Error));
        assert!(!v.allows(Level::Warn));
        assert!(!v.allows(Level::Trace));
    }

    #[test]
    fn test_high_levels_allow_everything() {
        for raw in [2, 3, 100] {
            let v = Verbosity::new(raw);
            assert!(v.allows(Level::Error), "level {} should allow errors", raw);
            assert!(v.allows(Level::Warn), "level {} should allow warnings", raw);
            assert!(v.allows(Level::Trace), "level {} should allow traces", raw);
        }
    }

    #[test]
    fn test_parse_accepts_integers() {
        assert_eq!("0".parse::<Verbosity>().unwrap(), Verbosity::ERRORS);
        assert_eq!(" 1 ".parse::<Verbosity>().unwrap(), Verbosity::WARNINGS);
        assert_eq!("-3".parse::<Verbosity>().unwrap(), Verbosity::new(-3));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for raw in ["", "one", "1.5", "2x"] {
            let err = raw.parse::<Verbosity>().unwrap_err();
            assert_eq!(err.as_label(), "registry_invalid_config", "input: {:?}", raw);
        }
    }
}
