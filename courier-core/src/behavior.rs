//! # Pipeline Behavior
//!
//! Cross-cutting logic composed around a handler's execution: logging,
//! validation, transaction wrapping, deadlines.
//!
//! # Onion Composition
//!
//! Behaviors registered for a request type wrap the handler call in
//! registration order, first-registered outermost. Behaviors `[B1, B2, B3]`
//! therefore execute as
//!
//! ```text
//! B1-before, B2-before, B3-before, handler, B3-after, B2-after, B1-after
//! ```
//!
//! # Continuations, Not Reflection
//!
//! A behavior is generic over the same `(R, R::Response)` pair as the
//! handler it wraps, and the rest of the pipeline is handed to it as an
//! explicit [`Next`] continuation value. Composition happens once per
//! dispatch by folding the behavior list in reverse; there is no runtime
//! signature check anywhere on the path.
//!
//! # Short-Circuiting
//!
//! A behavior that drops its [`Next`] without running it ends the dispatch:
//! inner behaviors and the handler never execute, and the behavior's own
//! result is returned to the caller. This is the rejection path used by
//! validation-style behaviors.

use crate::{error::BoxError, request::Request};
use futures::future::BoxFuture;
use std::future::Future;

/// The rest of the pipeline, packaged as a one-shot continuation.
///
/// Running it forwards the request to the remaining behaviors and finally
/// the handler. Dropping it without running short-circuits everything
/// downstream.
pub struct Next<R: Request> {
    inner: Box<dyn FnOnce(R) -> BoxFuture<'static, Result<R::Response, BoxError>> + Send>,
}

impl<R: Request> Next<R> {
    /// Wrap a continuation closure.
    pub fn new<F>(continuation: F) -> Self
    where
        F: FnOnce(R) -> BoxFuture<'static, Result<R::Response, BoxError>> + Send + 'static,
    {
        Self {
            inner: Box::new(continuation),
        }
    }

    /// Forward the request to the rest of the pipeline.
    pub async fn run(self, request: R) -> Result<R::Response, BoxError> {
        (self.inner)(request).await
    }
}

impl<R: Request> std::fmt::Debug for Next<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Next").finish_non_exhaustive()
    }
}

/// Cross-cutting logic wrapped around a handler call.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot wrap requests of type `{R}`",
    label = "missing `PipelineBehavior<{R}>` implementation",
    note = "Behaviors must implement `handle`, forwarding to `next.run(request)` or short-circuiting."
)]
pub trait PipelineBehavior<R: Request>: Send + Sync + 'static {
    /// Executes the behavior, with `next` as the rest of the pipeline.
    fn handle(
        &self,
        request: R,
        next: Next<R>,
    ) -> impl Future<Output = Result<R::Response, BoxError>> + Send;
}

/// Dynamic object-safe version of [`PipelineBehavior`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a registry).
pub trait DynPipelineBehavior<R: Request>: Send + Sync + 'static {
    /// Executes the behavior (dynamic dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        request: R,
        next: Next<R>,
    ) -> BoxFuture<'a, Result<R::Response, BoxError>>;
}

// Blanket implementation: any PipelineBehavior implements DynPipelineBehavior.
impl<R: Request, B: PipelineBehavior<R>> DynPipelineBehavior<R> for B {
    fn handle_dyn<'a>(
        &'a self,
        request: R,
        next: Next<R>,
    ) -> BoxFuture<'a, Result<R::Response, BoxError>> {
        Box::pin(self.handle(request, next))
    }
}
