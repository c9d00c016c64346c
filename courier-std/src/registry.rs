//! Registry for handler, behavior and subscriber registration.
//!
//! This module provides a builder pattern for the configuration phase and a
//! frozen registry for immutable, lock-free dispatch.
//!
//! Registration is append-once: [`RegistryBuilder::build`] consumes the
//! builder, so nothing can be registered after dispatch has begun. The 1:1
//! handler invariant is checked at resolution time — a request type with no
//! handler or more than one fails the `send` that touches it, before any
//! handler or behavior executes.
//!
//! Resolution is a plain `TypeId`-keyed map lookup followed by one downcast
//! of the stored `Arc`; the generic system has already enforced the
//! handler/behavior signature at registration.

use courier_core::{
    DynPipelineBehavior, DynRequestHandler, DynSubscriber, Notification, PipelineBehavior,
    Request, RequestHandler, SendError, Subscriber,
};
use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};

type AnyEntry = Box<dyn Any + Send + Sync>;

// Entries are stored as `Box<dyn Any>` wrapping the concrete
// `Arc<dyn Dyn...<T>>` for the type they were registered under, keyed by
// that type's TypeId. The downcast below can only fail if a map were
// corrupted by a writer other than the builder, and there is none.
fn downcast_entry<T: Clone + 'static>(entry: &AnyEntry) -> T {
    entry
        .downcast_ref::<T>()
        .expect("registry entry stored under its own TypeId")
        .clone()
}

/// Builder for constructing a [`Registry`].
///
/// Use this during the configuration phase, then call `.build()` to create
/// an immutable, thread-safe `Registry`.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register(CreateCustomerHandler)
///     .register_behavior::<CreateCustomer, _>(LoggingBehavior)
///     .subscribe(SendWelcomeEmail)
///     .build();
/// ```
pub struct RegistryBuilder {
    handlers: HashMap<TypeId, Vec<AnyEntry>>,
    behaviors: HashMap<TypeId, Vec<AnyEntry>>,
    subscribers: HashMap<TypeId, Vec<AnyEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            behaviors: HashMap::new(),
            subscribers: HashMap::new(),
        }
    }

    /// Register the handler for request type `R`.
    ///
    /// Registering a second handler for the same request type is not an
    /// override: it makes every `send` of that type fail with
    /// [`SendError::AmbiguousHandler`].
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        let entry: Arc<dyn DynRequestHandler<R>> = Arc::new(handler);
        self.handlers
            .entry(TypeId::of::<R>())
            .or_default()
            .push(Box::new(entry));
        self
    }

    /// Register a pipeline behavior for request type `R`.
    ///
    /// Behaviors compose in registration order, first-registered outermost.
    pub fn register_behavior<R, B>(mut self, behavior: B) -> Self
    where
        R: Request,
        B: PipelineBehavior<R>,
    {
        let entry: Arc<dyn DynPipelineBehavior<R>> = Arc::new(behavior);
        self.behaviors
            .entry(TypeId::of::<R>())
            .or_default()
            .push(Box::new(entry));
        self
    }

    /// Register a subscriber for notification type `N`.
    ///
    /// Any number of subscribers may be registered per notification type.
    pub fn subscribe<N, S>(mut self, subscriber: S) -> Self
    where
        N: Notification,
        S: Subscriber<N>,
    {
        let entry: Arc<dyn DynSubscriber<N>> = Arc::new(subscriber);
        self.subscribers
            .entry(TypeId::of::<N>())
            .or_default()
            .push(Box::new(entry));
        self
    }

    /// Freeze the builder into an immutable [`Registry`].
    pub fn build(self) -> Registry {
        Registry {
            handlers: self.handlers,
            behaviors: self.behaviors,
            subscribers: self.subscribers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable, thread-safe registry of handlers, behaviors and
/// subscribers.
///
/// Created by [`RegistryBuilder::build`]. Reads take `&self` and need no
/// locking; there is no way to write after construction.
pub struct Registry {
    handlers: HashMap<TypeId, Vec<AnyEntry>>,
    behaviors: HashMap<TypeId, Vec<AnyEntry>>,
    subscribers: HashMap<TypeId, Vec<AnyEntry>>,
}

impl Registry {
    /// Resolve the single handler for request type `R`.
    ///
    /// Fails with [`SendError::HandlerNotFound`] when none is registered
    /// and [`SendError::AmbiguousHandler`] when more than one is.
    pub fn handler<R: Request>(&self) -> Result<Arc<dyn DynRequestHandler<R>>, SendError> {
        let entries = self
            .handlers
            .get(&TypeId::of::<R>())
            .map(Vec::as_slice)
            .unwrap_or_default();
        match entries {
            [] => Err(SendError::HandlerNotFound {
                request: type_name::<R>(),
            }),
            [entry] => Ok(downcast_entry::<Arc<dyn DynRequestHandler<R>>>(entry)),
            many => Err(SendError::AmbiguousHandler {
                request: type_name::<R>(),
                count: many.len(),
            }),
        }
    }

    /// The behaviors registered for request type `R`, in registration
    /// order. Possibly empty.
    pub fn behaviors<R: Request>(&self) -> Vec<Arc<dyn DynPipelineBehavior<R>>> {
        self.behaviors
            .get(&TypeId::of::<R>())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(downcast_entry::<Arc<dyn DynPipelineBehavior<R>>>)
            .collect()
    }

    /// The subscribers registered for notification type `N`, in
    /// registration order. Possibly empty.
    pub fn subscribers<N: Notification>(&self) -> Vec<Arc<dyn DynSubscriber<N>>> {
        self.subscribers
            .get(&TypeId::of::<N>())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(downcast_entry::<Arc<dyn DynSubscriber<N>>>)
            .collect()
    }

    /// Whether any handler is registered for request type `R`.
    pub fn has_handler<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }
}
