//! The mediator: request dispatch and notification publishing over a
//! frozen [`Registry`].
//!
//! # Dispatch Algorithm
//!
//! [`Mediator::send`] resolves the request's single handler, collects the
//! behaviors registered for the request type, and folds them in reverse
//! registration order around a terminal continuation that calls the
//! handler. The first-registered behavior therefore executes outermost —
//! first to run before the handler, last to run after. Invoking the
//! outermost continuation drives the whole pipeline.
//!
//! # Failure Semantics
//!
//! `send` performs no retry and no suppression: a handler or behavior
//! error reaches the caller as [`SendError::Handler`] with the original
//! cause intact. A behavior that drops its continuation short-circuits
//! everything downstream and its own result is returned.
//!
//! `publish` defers failure policy to the mediator's
//! [`DeliveryStrategy`]; resolving zero subscribers is a successful no-op.

use crate::{
    delivery::{BestEffortDelivery, DeliveryStrategy},
    registry::Registry,
};
use courier_core::{
    BoxError, Next, Notification, PublishError, Request,
    SendError,
};
use futures::future::BoxFuture;
use std::sync::Arc;

/// Routes requests to their handler through the behavior pipeline, and
/// notifications to their subscribers through the delivery strategy.
///
/// The mediator holds a shared reference to a frozen [`Registry`]; it is
/// cheap to clone and safe to use from many tasks at once.
#[derive(Clone)]
pub struct Mediator<D = BestEffortDelivery> {
    registry: Arc<Registry>,
    delivery: D,
}

impl Mediator<BestEffortDelivery> {
    /// Create a mediator with the default best-effort delivery policy.
    pub fn new(registry: Registry) -> Self {
        Self::with_delivery(registry, BestEffortDelivery)
    }
}

impl<D> Mediator<D> {
    /// Create a mediator with an explicit delivery policy.
    pub fn with_delivery(registry: Registry, delivery: D) -> Self {
        Self {
            registry: Arc::new(registry),
            delivery,
        }
    }

    /// The registry this mediator dispatches against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl<D: DeliveryStrategy> Mediator<D> {
    /// Dispatch a request to its single registered handler, through the
    /// behaviors registered for its type.
    ///
    /// Resolution errors ([`SendError::HandlerNotFound`],
    /// [`SendError::AmbiguousHandler`]) abort before any behavior runs.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, SendError> {
        let handler = self.registry.handler::<R>()?;
        let behaviors = self.registry.behaviors::<R>();

        // Terminal continuation: the handler call itself.
        let mut next = Next::new(
            move |request: R| -> BoxFuture<'static, Result<R::Response, BoxError>> {
                Box::pin(async move { handler.handle_dyn(request).await })
            },
        );

        // Wrap in reverse registration order so the first-registered
        // behavior ends up outermost.
        for behavior in behaviors.into_iter().rev() {
            let inner = next;
            next = Next::new(
                move |request: R| -> BoxFuture<'static, Result<R::Response, BoxError>> {
                    Box::pin(async move { behavior.handle_dyn(request, inner).await })
                },
            );
        }

        next.run(request).await.map_err(SendError::Handler)
    }

    /// Publish a notification to every subscriber registered for its type.
    ///
    /// Zero subscribers is a successful no-op. Failure handling follows
    /// the mediator's delivery strategy.
    pub async fn publish<N: Notification>(&self, notification: &N) -> Result<(), PublishError> {
        let subscribers = self.registry.subscribers::<N>();
        self.delivery.deliver(notification, &subscribers).await
    }
}
