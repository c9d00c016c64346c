//! Timeout behavior for time-limited dispatch.

use courier_core::{BoxError, Next, PipelineBehavior, Request};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Error returned when the inner pipeline exceeds its deadline.
#[derive(Debug, Clone, Error)]
#[error("request timed out after {0:?}")]
pub struct TimeoutElapsed(pub Duration);

/// A behavior that bounds the rest of the pipeline with a deadline.
///
/// If the deadline elapses, the dispatch fails with [`TimeoutElapsed`];
/// the inner future is dropped at the next suspension point.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutBehavior {
    duration: Duration,
}

impl TimeoutBehavior {
    /// Create a timeout behavior with the given deadline.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl<R: Request> PipelineBehavior<R> for TimeoutBehavior {
    async fn handle(&self, request: R, next: Next<R>) -> Result<R::Response, BoxError> {
        match timeout(self.duration, next.run(request)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutElapsed(self.duration))),
        }
    }
}
