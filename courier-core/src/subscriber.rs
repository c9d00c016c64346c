//! # Subscriber
//!
//! The capability invoked once per published [`Notification`] of a matching
//! type. Any number of subscribers may exist for the same notification type,
//! including zero; how their failures combine is the publisher's delivery
//! policy, not the subscriber's concern.
//!
//! Subscribers take the notification by shared reference so every
//! registered subscriber can inspect the same value without cloning.

use crate::{error::BoxError, notification::Notification};
use futures::future::BoxFuture;
use std::future::Future;

/// A capability notified of published events.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot subscribe to notifications of type `{N}`",
    label = "missing `Subscriber<{N}>` implementation",
    note = "Subscribers must implement `notify` for the notification type `{N}`."
)]
pub trait Subscriber<N: Notification>: Send + Sync + 'static {
    /// Called once for each published notification of type `N`.
    fn notify(&self, notification: &N) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`Subscriber`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a registry).
pub trait DynSubscriber<N: Notification>: Send + Sync + 'static {
    /// Called once per published notification (dynamic dispatch version).
    fn notify_dyn<'a>(&'a self, notification: &'a N) -> BoxFuture<'a, Result<(), BoxError>>;
}

// Blanket implementation: any Subscriber implements DynSubscriber.
impl<N: Notification, S: Subscriber<N>> DynSubscriber<N> for S {
    fn notify_dyn<'a>(&'a self, notification: &'a N) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(self.notify(notification))
    }
}

// Allow Box<dyn DynSubscriber> to be used where Subscriber is expected.
impl<N: Notification> Subscriber<N> for Box<dyn DynSubscriber<N>> {
    async fn notify(&self, notification: &N) -> Result<(), BoxError> {
        self.notify_dyn(notification).await
    }
}
