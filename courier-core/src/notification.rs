//! Notification trait for broadcast dispatch.

/// A marker trait for values broadcast to subscribers.
///
/// Unlike a [`Request`](crate::Request), a notification has no expected
/// response; it is delivered by shared reference to every subscriber
/// registered for its type, so it must be `Send + Sync + 'static`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct OrderPlaced { order_id: u64 }
///
/// impl Notification for OrderPlaced {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Notification",
    label = "must be `Send + Sync + 'static`",
    note = "All notifications in Courier must be thread-safe and static."
)]
pub trait Notification: Send + Sync + 'static {}

// Common Notification implementations
impl Notification for () {}
impl Notification for String {}
impl Notification for &'static str {}
impl<N: Notification> Notification for Box<N> {}
impl<N: Notification> Notification for std::sync::Arc<N> {}
impl<N: Notification> Notification for Vec<N> {}
impl<N: Notification> Notification for Option<N> {}
