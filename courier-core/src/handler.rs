//! # Request Handler
//!
//! The terminal endpoint of request dispatch: given exactly one request,
//! produce its response or fail.
//!
//! # Design Philosophy
//!
//! - **1:1**: One handler per concrete request type. The registry enforces
//!   this at resolution time; the type system enforces the signature at
//!   registration time.
//! - **Terminal**: The handler is the innermost layer of the pipeline; any
//!   [`PipelineBehavior`] wraps around it.
//! - **Optional structs**: Users can implement `RequestHandler` directly or
//!   register an async closure.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`RequestHandler`] uses native `async fn` for zero-cost static dispatch.
//! For storage in a registry, use the object-safe [`DynRequestHandler`],
//! which every `RequestHandler` implements automatically.
//!
//! [`PipelineBehavior`]: crate::PipelineBehavior

use crate::{error::BoxError, request::Request};
use futures::future::BoxFuture;
use std::future::Future;

/// The capability that serves a [`Request`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{R}`",
    label = "missing `RequestHandler<{R}>` implementation",
    note = "Handlers must implement `handle` returning `Result<{R}::Response, BoxError>`."
)]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    /// Executes the handler logic, consuming the request.
    fn handle(&self, request: R) -> impl Future<Output = Result<R::Response, BoxError>> + Send;
}

// Blanket impl for async closures
impl<F, R, Fut> RequestHandler<R> for F
where
    R: Request,
    F: Fn(R) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R::Response, BoxError>> + Send,
{
    fn handle(&self, request: R) -> impl Future<Output = Result<R::Response, BoxError>> + Send {
        (self)(request)
    }
}

/// Dynamic object-safe version of [`RequestHandler`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a registry).
pub trait DynRequestHandler<R: Request>: Send + Sync + 'static {
    /// Executes the handler logic (dynamic dispatch version).
    fn handle_dyn<'a>(&'a self, request: R) -> BoxFuture<'a, Result<R::Response, BoxError>>;
}

// Blanket implementation: any RequestHandler implements DynRequestHandler.
impl<R: Request, H: RequestHandler<R>> DynRequestHandler<R> for H {
    fn handle_dyn<'a>(&'a self, request: R) -> BoxFuture<'a, Result<R::Response, BoxError>> {
        Box::pin(self.handle(request))
    }
}
