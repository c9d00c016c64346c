//! Transaction behavior: wrap the handler call in a unit of work.

use courier_core::{BoxError, Next, PipelineBehavior, Request};
use std::future::Future;

/// A transactional scope opened around a handler call.
///
/// The implementation decides what a transaction means — a database
/// transaction, an in-memory journal, a no-op for tests.
pub trait UnitOfWork: Send + Sync + 'static {
    /// Open the scope before the inner pipeline runs.
    fn begin(&self) -> impl Future<Output = Result<(), BoxError>> + Send;

    /// Make the scope's effects permanent after the inner pipeline
    /// succeeded.
    fn commit(&self) -> impl Future<Output = Result<(), BoxError>> + Send;

    /// Discard the scope's effects after the inner pipeline failed.
    fn rollback(&self) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// A behavior that wraps the rest of the pipeline in a [`UnitOfWork`]:
/// begin before, commit on success, roll back on error.
///
/// The handler's error still propagates after rollback; a rollback
/// failure is logged and does not replace it.
pub struct TransactionBehavior<U> {
    unit: U,
}

impl<U> TransactionBehavior<U> {
    /// Wrap dispatches in the given unit of work.
    pub fn new(unit: U) -> Self {
        Self { unit }
    }
}

impl<R, U> PipelineBehavior<R> for TransactionBehavior<U>
where
    R: Request,
    U: UnitOfWork,
{
    async fn handle(&self, request: R, next: Next<R>) -> Result<R::Response, BoxError> {
        self.unit.begin().await?;
        match next.run(request).await {
            Ok(response) => {
                self.unit.commit().await?;
                Ok(response)
            }
            Err(error) => {
                if let Err(rollback) = self.unit.rollback().await {
                    tracing::warn!(%rollback, "rollback failed after pipeline error");
                }
                Err(error)
            }
        }
    }
}
