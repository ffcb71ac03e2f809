//! Error types used by the event registry.
//!
//! This module defines two main error enums:
//!
//! - [`RegistryError`] — errors raised while configuring the registry itself.
//! - [`DispatchError`] — errors raised while delivering a dispatched event.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! Anomalies that the registry recovers from on its own (duplicate listeners,
//! removals of unknown listeners, dispatches nobody hears) are *not* errors;
//! they are reported through the [`Report`](crate::Report) sink as warnings.

use std::sync::Arc;
use thiserror::Error;

/// Boxed error type carried across the handler boundary.
///
/// Handlers may fail with any error; the registry does not interpret it
/// beyond wrapping it into [`DispatchError::HandlerFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// # Errors produced while configuring the registry.
///
/// These represent rejected configuration input, such as a verbosity value
/// parsed from text that is not an integer. The registry keeps its previous
/// configuration when one of these is raised.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Verbosity input could not be parsed as an integer; the prior level is kept.
    #[error("invalid verbosity value [{value}]: not an integer")]
    InvalidConfig {
        /// The raw input that was rejected.
        value: String,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventry::RegistryError;
    ///
    /// let err = RegistryError::InvalidConfig { value: "loud".into() };
    /// assert_eq!(err.as_label(), "registry_invalid_config");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::InvalidConfig { .. } => "registry_invalid_config",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegistryError::InvalidConfig { value } => {
                format!("invalid config value: [{value}] is not an integer")
            }
        }
    }
}

/// # Errors produced while delivering a dispatched event.
///
/// Dispatch delivers to eligible listeners in descending priority order and
/// stops at the first handler that fails; listeners not yet reached are
/// skipped. The error records how far delivery got.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A handler returned an error; remaining listeners were not invoked.
    #[error("handler [{handler}] failed for event [{event}] after {delivered} deliveries: {source}")]
    HandlerFailed {
        /// Name of the event being dispatched.
        event: Arc<str>,
        /// Name of the handler that failed.
        handler: String,
        /// Number of handlers that completed before the failure.
        delivered: usize,
        /// The handler's own error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventry::DispatchError;
    ///
    /// let err = DispatchError::HandlerFailed {
    ///     event: "user/login".into(),
    ///     handler: "audit".into(),
    ///     delivered: 2,
    ///     source: "boom".into(),
    /// };
    /// assert_eq!(err.as_label(), "dispatch_handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::HandlerFailed { .. } => "dispatch_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::HandlerFailed {
                event,
                handler,
                delivered,
                source,
            } => {
                format!("handler [{handler}] failed for [{event}] (delivered={delivered}): {source}")
            }
        }
    }
}
