//! # Listener contexts.
//!
//! A [`ContextId`] scopes listeners to their owning component so they can be
//! torn down in bulk with
//! [`Registry::remove_all_for_context`](crate::Registry::remove_all_for_context).
//! The registry only ever compares contexts for equality; it never inspects
//! them.
//!
//! Three shapes cover the usual cases:
//! - [`ContextId::None`] for listeners that belong to nobody in particular;
//! - [`ContextId::Named`] for stable string identities ("analytics", "view:42");
//! - [`ContextId::Token`] for generated identities where no natural name
//!   exists; mint one per component with [`ContextId::fresh`].
//!
//! ## Example
//! ```rust
//! use eventry::ContextId;
//!
//! let a = ContextId::named("analytics");
//! let b: ContextId = "analytics".into();
//! assert_eq!(a, b);
//!
//! let t1 = ContextId::fresh();
//! let t2 = ContextId::fresh();
//! assert_ne!(t1, t2);
//!
//! assert_eq!(ContextId::default(), ContextId::None);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global counter backing [`ContextId::fresh`].
static CONTEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Identity of a listener's owning context.
///
/// Compared by value only. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContextId {
    /// The distinguished "no context" value.
    #[default]
    None,
    /// A caller-chosen string identity.
    Named(Arc<str>),
    /// A generated unique token (see [`ContextId::fresh`]).
    Token(u64),
}

impl ContextId {
    /// Creates a named context.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        ContextId::Named(name.into())
    }

    /// Mints a context guaranteed distinct from every other `fresh()` result
    /// in this process.
    pub fn fresh() -> Self {
        ContextId::Token(CONTEXT_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Returns true for the distinguished "no context" value.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, ContextId::None)
    }
}

impl From<&str> for ContextId {
    fn from(name: &str) -> Self {
        ContextId::named(name)
    }
}

impl From<String> for ContextId {
    fn from(name: String) -> Self {
        ContextId::named(name)
    }
}

impl From<Arc<str>> for ContextId {
    fn from(name: Arc<str>) -> Self {
        ContextId::Named(name)
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextId::None => f.write_str("(none)"),
            ContextId::Named(name) => f.write_str(name),
            ContextId::Token(token) => write!(f, "#{token}"),
        }
    }
}
