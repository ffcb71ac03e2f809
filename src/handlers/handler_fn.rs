//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(&Delivery) -> Result<(), BoxError>`
//! together with a diagnostic name, so ad-hoc handlers do not need a struct
//! and a trait impl.
//!
//! The closure is `Fn`, not `FnMut`: one registered handler may be invoked
//! for many listeners and must not rely on exclusive access. Share mutable
//! state explicitly (`Arc<Mutex<...>>`, atomics) inside the closure when you
//! need it.
//!
//! ## Example
//! ```rust
//! use eventry::{HandlerFn, HandlerRef};
//!
//! let h: HandlerRef = HandlerFn::arc("greeter", |delivery| {
//!     println!("hello, {}", delivery.event);
//!     Ok(())
//! });
//!
//! assert_eq!(h.name(), "greeter");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::BoxError;
use crate::events::Delivery;
use crate::handlers::handler::Handler;

/// Function-backed handler implementation.
///
/// Wraps a closure invoked once per delivery.
#[derive(Debug)]
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F>
where
    F: Fn(&Delivery) -> Result<(), BoxError> + Send + Sync + 'static,
{
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the handler and returns it as a shared handle (`Arc<Self>`).
    ///
    /// ## Example
    /// ```rust
    /// use eventry::{HandlerFn, HandlerRef};
    ///
    /// let h: HandlerRef = HandlerFn::arc("noop", |_delivery| Ok(()));
    /// assert_eq!(h.name(), "noop");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Delivery) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn on_event(&self, delivery: &Delivery) -> Result<(), BoxError> {
        (self.f)(delivery)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
