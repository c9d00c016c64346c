//! Delivery strategies for notification publishing.
//!
//! The publisher walks the subscribers registered for a notification type
//! in registration order; what happens when one of them fails is the
//! delivery strategy's decision:
//!
//! - [`BestEffortDelivery`] (the [`Mediator`] default) runs every
//!   subscriber regardless of failures, then reports them all at once as
//!   [`PublishError::Aggregate`]. One broken mailbox doesn't starve the
//!   rest of the broadcast.
//! - [`FailFastDelivery`] aborts on the first failure and reports it as
//!   [`PublishError::Subscriber`]; later subscribers never run.
//!
//! [`Mediator`]: crate::mediator::Mediator

use courier_core::{DynSubscriber, Notification, PublishError};
use std::{any::type_name, future::Future, sync::Arc};

/// Strategy for delivering a notification to its resolved subscribers.
///
/// This abstraction lets failure-handling policy be plugged into the
/// publisher without touching resolution or ordering.
pub trait DeliveryStrategy: Send + Sync + 'static {
    /// Deliver the notification to the subscribers, in order.
    fn deliver<'a, N: Notification>(
        &'a self,
        notification: &'a N,
        subscribers: &'a [Arc<dyn DynSubscriber<N>>],
    ) -> impl Future<Output = Result<(), PublishError>> + Send + 'a;
}

/// Run every subscriber; collect failures; report them after all have run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestEffortDelivery;

impl DeliveryStrategy for BestEffortDelivery {
    async fn deliver<'a, N: Notification>(
        &'a self,
        notification: &'a N,
        subscribers: &'a [Arc<dyn DynSubscriber<N>>],
    ) -> Result<(), PublishError> {
        let mut failures = Vec::new();
        for subscriber in subscribers {
            if let Err(failure) = subscriber.notify_dyn(notification).await {
                failures.push(failure);
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(PublishError::Aggregate {
                notification: type_name::<N>(),
                attempted: subscribers.len(),
                failures,
            })
        }
    }
}

/// Abort on the first subscriber failure; later subscribers never run.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailFastDelivery;

impl DeliveryStrategy for FailFastDelivery {
    async fn deliver<'a, N: Notification>(
        &'a self,
        notification: &'a N,
        subscribers: &'a [Arc<dyn DynSubscriber<N>>],
    ) -> Result<(), PublishError> {
        for subscriber in subscribers {
            subscriber
                .notify_dyn(notification)
                .await
                .map_err(|source| PublishError::Subscriber {
                    notification: type_name::<N>(),
                    source,
                })?;
        }
        Ok(())
    }
}
