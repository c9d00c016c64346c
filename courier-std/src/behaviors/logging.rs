//! Logging behavior for request observation.

use courier_core::{BoxError, Next, PipelineBehavior, Request};
use std::any::type_name;

/// A behavior that logs each request before and after the rest of the
/// pipeline runs.
///
/// Failures are recorded at warn level with the error in the event; the
/// result itself passes through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingBehavior;

impl<R> PipelineBehavior<R> for LoggingBehavior
where
    R: Request + std::fmt::Debug,
{
    async fn handle(&self, request: R, next: Next<R>) -> Result<R::Response, BoxError> {
        tracing::debug!(request = ?request, "dispatching {}", type_name::<R>());
        let result = next.run(request).await;
        match &result {
            Ok(_) => tracing::debug!("{} handled", type_name::<R>()),
            Err(error) => tracing::warn!(%error, "{} failed", type_name::<R>()),
        }
        result
    }
}
