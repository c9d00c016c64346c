//! # courier - Typed Request & Notification Dispatch
//!
//! `courier` routes messages inside one process, with the wiring checked
//! by the type system instead of runtime reflection:
//!
//! - **Requests** go to exactly one handler, through an onion of
//!   cross-cutting behaviors (logging, validation, transactions,
//!   deadlines). Zero or duplicate handlers is a configuration error
//!   reported when the request is sent.
//! - **Notifications** go to every subscriber of their type, with a
//!   pluggable failure policy: best-effort with aggregated errors by
//!   default, fail-fast on request.
//! - **Chains** run an ordered sequence of links over one mutable context;
//!   the first failing link aborts the rest.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::{Mediator, RegistryBuilder, Request, RequestHandler};
//!
//! struct CreateCustomer { name: String }
//! impl Request for CreateCustomer { type Response = u64; }
//!
//! let registry = RegistryBuilder::new()
//!     .register(CreateCustomerHandler::default())
//!     .build();
//!
//! let mediator = Mediator::new(registry);
//! let id = mediator.send(CreateCustomer { name: "Yash".into() }).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use courier_core::{
    // Errors
    BoxError,
    // Chain of responsibility
    ChainLink,
    CourierError,
    DynChainLink,
    // Pipeline
    DynPipelineBehavior,
    // Handler
    DynRequestHandler,
    // Subscriber
    DynSubscriber,
    Next,
    // Messages
    Notification,
    PipelineBehavior,
    PublishError,
    Request,
    RequestHandler,
    SendError,
    Subscriber,
};

pub use courier_std::{
    chain::{Chain, ChainBuilder},
    mediator::Mediator,
    registry::{Registry, RegistryBuilder},
};

/// Delivery strategies for notification publishing.
pub mod delivery {
    pub use courier_std::delivery::{BestEffortDelivery, DeliveryStrategy, FailFastDelivery};
}

/// Stock pipeline behaviors.
pub mod behaviors {
    #![allow(clippy::wildcard_imports)]
    pub use courier_std::behaviors::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use courier_std::testing::*;
}

/// Prelude module - common imports for Courier.
///
/// # Usage
///
/// ```rust,ignore
/// use courier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        CourierError,
        // Chain
        Chain,
        ChainBuilder,
        ChainLink,
        // Dispatch
        Mediator,
        Next,
        Notification,
        PipelineBehavior,
        PublishError,
        Registry,
        RegistryBuilder,
        Request,
        RequestHandler,
        SendError,
        Subscriber,
    };
}

#[cfg(feature = "macros")]
pub use courier_macros::{Notification, Request};
