//! # courier-std
//!
//! Standard implementations for the Courier dispatch library.
//!
//! This crate provides:
//! - **Registration**: [`RegistryBuilder`] and the frozen [`Registry`]
//! - **Dispatch**: [`Mediator`] with `send` and `publish`
//! - **Delivery policies**: [`BestEffortDelivery`], [`FailFastDelivery`]
//! - **Stock behaviors**: logging, validation, transaction, timeout
//! - **Chain of responsibility**: [`Chain`] and [`ChainBuilder`]
//!
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`Registry`]: registry::Registry
//! [`Mediator`]: mediator::Mediator
//! [`BestEffortDelivery`]: delivery::BestEffortDelivery
//! [`FailFastDelivery`]: delivery::FailFastDelivery
//! [`Chain`]: chain::Chain
//! [`ChainBuilder`]: chain::ChainBuilder

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use courier_core;

// Modules
pub mod behaviors;
pub mod chain;
pub mod delivery;
pub mod mediator;
pub mod registry;
pub mod testing;
