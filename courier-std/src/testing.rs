//! Testing utilities for Courier.
//!
//! This module provides doubles to make testing handlers, behaviors,
//! subscribers and chains easier.
//!
//! # Features
//!
//! - [`RecordingSubscriber`]: a subscriber that records every notification
//! - [`FailingSubscriber`]: a subscriber that always fails
//! - [`TraceBehavior`]: a behavior that records before/after markers
//! - [`CountingLink`]: a chain link that counts its invocations
//! - [`FailingLink`]: a chain link that always fails

use courier_core::{
    BoxError, ChainLink, Next, Notification, PipelineBehavior, Request, Subscriber,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Subscriber
// ============================================================================

/// A subscriber that records every notification it receives.
///
/// Clones share the underlying buffer, so keep one clone outside the
/// registry to inspect what was delivered.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingSubscriber::<OrderPlaced>::new();
/// let handle = recorder.clone();
///
/// let registry = RegistryBuilder::new().subscribe(recorder).build();
/// Mediator::new(registry).publish(&OrderPlaced { order_id: 7 }).await?;
///
/// assert_eq!(handle.count(), 1);
/// ```
pub struct RecordingSubscriber<N: Clone> {
    received: Arc<Mutex<Vec<N>>>,
}

impl<N: Clone> RecordingSubscriber<N> {
    /// Create a new recording subscriber.
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded notifications.
    pub fn received(&self) -> Vec<N> {
        self.received.lock().unwrap().clone()
    }

    /// Get the number of recorded notifications.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Clear all recorded notifications.
    pub fn clear(&self) {
        self.received.lock().unwrap().clear();
    }
}

impl<N: Clone> Default for RecordingSubscriber<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone> Clone for RecordingSubscriber<N> {
    fn clone(&self) -> Self {
        Self {
            received: self.received.clone(),
        }
    }
}

impl<N: Notification + Clone> Subscriber<N> for RecordingSubscriber<N> {
    async fn notify(&self, notification: &N) -> Result<(), BoxError> {
        self.received.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

// ============================================================================
// Failing Subscriber
// ============================================================================

/// A subscriber that fails every notification with a fixed message.
pub struct FailingSubscriber {
    message: String,
}

impl FailingSubscriber {
    /// Create a subscriber failing with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<N: Notification> Subscriber<N> for FailingSubscriber {
    async fn notify(&self, _notification: &N) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Trace Behavior
// ============================================================================

/// A behavior that records `"<label>:before"` and `"<label>:after"`
/// markers around the inner pipeline.
///
/// Useful for asserting onion ordering across several behaviors sharing
/// one log.
///
/// # Example
///
/// ```rust,ignore
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let registry = RegistryBuilder::new()
///     .register(handler)
///     .register_behavior::<MyRequest, _>(TraceBehavior::new("outer", log.clone()))
///     .register_behavior::<MyRequest, _>(TraceBehavior::new("inner", log.clone()))
///     .build();
/// ```
pub struct TraceBehavior {
    label: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl TraceBehavior {
    /// Create a trace behavior writing to the shared log.
    pub fn new(label: &'static str, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { label, log }
    }
}

impl<R: Request> PipelineBehavior<R> for TraceBehavior {
    async fn handle(&self, request: R, next: Next<R>) -> Result<R::Response, BoxError> {
        self.log.lock().unwrap().push(format!("{}:before", self.label));
        let result = next.run(request).await;
        self.log.lock().unwrap().push(format!("{}:after", self.label));
        result
    }
}

// ============================================================================
// Counting Link
// ============================================================================

/// A chain link that counts its invocations and leaves the context alone.
pub struct CountingLink {
    count: Arc<AtomicUsize>,
}

impl CountingLink {
    /// Create a new counting link.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for CountingLink {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingLink {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<C: Send> ChainLink<C> for CountingLink {
    async fn handle(&self, _context: &mut C) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Link
// ============================================================================

/// A chain link that fails with a fixed message.
pub struct FailingLink {
    message: &'static str,
}

impl FailingLink {
    /// Create a link failing with the given message.
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl<C: Send> ChainLink<C> for FailingLink {
    async fn handle(&self, _context: &mut C) -> Result<(), BoxError> {
        Err(self.message.into())
    }
}
