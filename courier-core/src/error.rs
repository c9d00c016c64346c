//! Error types for Courier.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CourierError`] - Top-level error type for all Courier operations
//! - [`SendError`] - Errors during request dispatch
//! - [`PublishError`] - Errors during notification delivery
//!
//! The dispatch core is a pure routing layer: it performs no retries and
//! swallows nothing. Handler, behavior and subscriber failures are carried
//! as boxed errors with the original cause intact, so callers can
//! `downcast_ref` to the domain error they expect.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Courier operations.
#[derive(Error, Debug)]
pub enum CourierError {
    /// An error occurred during request dispatch.
    #[error("send error: {0}")]
    Send(#[from] SendError),

    /// An error occurred during notification delivery.
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    /// A chain link failed; the original cause is unchanged.
    #[error(transparent)]
    Chain(BoxError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur during request dispatch.
#[derive(Error, Debug)]
pub enum SendError {
    /// No handler is registered for the request type.
    ///
    /// A configuration error: the composition root never registered a
    /// handler. Fatal to this `send` call; no behavior has executed.
    #[error("no handler registered for request type {request}")]
    HandlerNotFound {
        /// Type name of the unhandled request.
        request: &'static str,
    },

    /// More than one handler is registered for the request type.
    ///
    /// Request/response dispatch is strictly 1:1; a second registration is
    /// a configuration error, not an override.
    #[error("{count} handlers registered for request type {request}, expected exactly one")]
    AmbiguousHandler {
        /// Type name of the over-registered request.
        request: &'static str,
        /// How many handlers were found.
        count: usize,
    },

    /// The handler or a behavior failed.
    ///
    /// Carries the original cause unchanged; `downcast_ref` it to pattern
    /// match the domain error.
    #[error(transparent)]
    Handler(BoxError),
}

impl SendError {
    /// The original handler/behavior error, if that is what this is.
    pub fn handler_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            SendError::Handler(source) => Some(source.as_ref()),
            _ => None,
        }
    }

    /// Unwrap the original handler/behavior error, or give `self` back.
    pub fn into_handler_error(self) -> Result<BoxError, SendError> {
        match self {
            SendError::Handler(source) => Ok(source),
            other => Err(other),
        }
    }
}

/// Errors that can occur during notification delivery.
#[derive(Error, Debug)]
pub enum PublishError {
    /// A subscriber failed and aborted delivery (fail-fast policy).
    ///
    /// Subscribers registered after the failing one were never invoked.
    #[error("subscriber for {notification} failed: {source}")]
    Subscriber {
        /// Type name of the notification being delivered.
        notification: &'static str,
        /// The subscriber's error, unchanged.
        #[source]
        source: BoxError,
    },

    /// One or more subscribers failed after every subscriber ran
    /// (best-effort policy).
    #[error("{} of {} subscribers for {notification} failed", .failures.len(), .attempted)]
    Aggregate {
        /// Type name of the notification being delivered.
        notification: &'static str,
        /// How many subscribers were invoked.
        attempted: usize,
        /// Every subscriber error, in invocation order.
        failures: Vec<BoxError>,
    },
}

impl PublishError {
    /// Every subscriber error carried by this value, in invocation order.
    pub fn failures(&self) -> impl Iterator<Item = &(dyn std::error::Error + Send + Sync + 'static)> {
        let slice: &[BoxError] = match self {
            PublishError::Subscriber { source, .. } => std::slice::from_ref(source),
            PublishError::Aggregate { failures, .. } => failures,
        };
        slice.iter().map(|failure| &**failure)
    }
}

// Convenience conversions
impl From<BoxError> for CourierError {
    fn from(err: BoxError) -> Self {
        CourierError::Custom(err)
    }
}
