//! Stock pipeline behaviors.
//!
//! Each behavior here is generic over the request type it wraps and
//! composes like any user-written [`PipelineBehavior`]: register it per
//! request type, first-registered outermost.
//!
//! [`PipelineBehavior`]: courier_core::PipelineBehavior

mod logging;
#[cfg(feature = "timeout")]
mod timeout;
mod transaction;
mod validation;

pub use logging::LoggingBehavior;
#[cfg(feature = "timeout")]
pub use timeout::{TimeoutBehavior, TimeoutElapsed};
pub use transaction::{TransactionBehavior, UnitOfWork};
pub use validation::{Validate, ValidationBehavior, ValidationError};
