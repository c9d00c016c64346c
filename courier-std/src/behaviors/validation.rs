//! Validation behavior: reject bad requests before the handler runs.

use courier_core::{BoxError, Next, PipelineBehavior, Request};
use thiserror::Error;

/// Error returned when a request fails validation.
#[derive(Debug, Clone, Error)]
#[error("validation failed: {reason}")]
pub struct ValidationError {
    reason: String,
}

impl ValidationError {
    /// Create a validation error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the request was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A request that can be checked before its handler runs.
pub trait Validate {
    /// Check the request, returning the reason it is invalid if it is.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A behavior that rejects requests failing their [`Validate`] check.
///
/// On rejection the continuation is dropped without running: inner
/// behaviors and the handler never execute, and the caller sees the
/// [`ValidationError`] as the dispatch failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidationBehavior;

impl<R> PipelineBehavior<R> for ValidationBehavior
where
    R: Request + Validate,
{
    async fn handle(&self, request: R, next: Next<R>) -> Result<R::Response, BoxError> {
        request.validate()?;
        next.run(request).await
    }
}
