//! # Opaque event payload.
//!
//! The registry never inspects payloads; it clones the handle and passes it
//! through to handlers unchanged. [`Payload`] erases the concrete type behind
//! `Arc<dyn Any + Send + Sync>` and keeps the type name around so diagnostics
//! and `Debug` output stay readable.
//!
//! ## Example
//! ```rust
//! use eventry::Payload;
//!
//! #[derive(Debug, PartialEq)]
//! struct Click { x: i32, y: i32 }
//!
//! let payload = Payload::new(Click { x: 4, y: 2 });
//! assert!(payload.is::<Click>());
//! assert_eq!(payload.downcast_ref::<Click>(), Some(&Click { x: 4, y: 2 }));
//! assert_eq!(payload.downcast_ref::<String>(), None);
//!
//! // The default payload is the empty unit value.
//! assert!(Payload::default().is_empty());
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased payload attached to a dispatched event.
///
/// Cloning is cheap: clones share the same underlying value.
#[derive(Clone)]
pub struct Payload {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Payload {
    /// Wraps a value into a shareable payload.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the empty payload (the unit value).
    ///
    /// This is what a dispatch gets when the caller has nothing to attach.
    pub fn empty() -> Self {
        Self::new(())
    }

    /// Borrows the payload as `T`, if that is what it holds.
    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns true if the payload holds a `T`.
    pub fn is<T: Any + Send + Sync>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns true for the empty payload.
    pub fn is_empty(&self) -> bool {
        self.is::<()>()
    }

    /// Returns the type name of the held value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Default for Payload {
    /// The empty payload.
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload({})", self.type_name)
    }
}
