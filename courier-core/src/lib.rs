//! # courier-core
//!
//! Core traits for the Courier dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler crates and extensions that don't need the full `courier-std`
//! implementation.
//!
//! # Two Dispatch Families
//!
//! Courier routes two kinds of messages, each with its own contract:
//!
//! ## Request / Response ([`Request`], [`RequestHandler`])
//!
//! A request is a value tagged at compile time with its expected response
//! type. Exactly one handler serves each concrete request type; zero or
//! more than one registered is a configuration error surfaced when the
//! request is sent.
//!
//! Cross-cutting logic wraps the handler call as an ordered list of
//! [`PipelineBehavior`]s. Behaviors receive the request and a [`Next`]
//! continuation; the first-registered behavior runs outermost, so the
//! before/after side effects nest like an onion around the handler.
//!
//! ## Notification / Broadcast ([`Notification`], [`Subscriber`])
//!
//! A notification is a value with no expected response, delivered to every
//! subscriber registered for its type. Zero subscribers is a valid
//! configuration; no behavior pipeline applies.
//!
//! # Chain of Responsibility ([`ChainLink`])
//!
//! The degenerate cousin of the behavior pipeline: an ordered sequence of
//! links sharing one mutable context value. A link error aborts the
//! remainder of the chain. The sequence itself lives in `courier-std`.
//!
//! # Error Types
//!
//! - [`CourierError`] - Top-level error type
//! - [`SendError`] - Request dispatch errors
//! - [`PublishError`] - Notification delivery errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod behavior;
mod chain;
mod error;
mod handler;
mod notification;
mod request;
mod subscriber;

// Re-exports
pub use behavior::{DynPipelineBehavior, Next, PipelineBehavior};
pub use chain::{ChainLink, DynChainLink};
pub use error::{BoxError, CourierError, PublishError, SendError};
pub use handler::{DynRequestHandler, RequestHandler};
pub use notification::Notification;
pub use request::Request;
pub use subscriber::{DynSubscriber, Subscriber};
