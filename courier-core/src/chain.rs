//! # Chain Link
//!
//! One step of a chain of responsibility: the degenerate cousin of the
//! behavior pipeline where each step runs unconditionally in sequence and
//! shares one mutable context value instead of threading a continuation.
//!
//! A link may mutate the context and, by returning an error, abort the
//! remainder of the chain; the error propagates to the chain's caller
//! unchanged. The ordered sequence itself (`Chain` in `courier-std`) is
//! built once and immutable afterwards.

use crate::error::BoxError;
use futures::future::BoxFuture;
use std::future::Future;

/// One link in a chain of responsibility over a shared mutable context.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a chain link over `{C}`",
    label = "missing `ChainLink<{C}>` implementation",
    note = "Links must implement `handle`, mutating the shared context or failing."
)]
pub trait ChainLink<C: Send>: Send + Sync + 'static {
    /// Executes this link against the shared context.
    fn handle(&self, context: &mut C) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`ChainLink`].
pub trait DynChainLink<C: Send>: Send + Sync + 'static {
    /// Executes this link (dynamic dispatch version).
    fn handle_dyn<'a>(&'a self, context: &'a mut C) -> BoxFuture<'a, Result<(), BoxError>>;
}

// Blanket implementation: any ChainLink implements DynChainLink.
impl<C: Send, L: ChainLink<C>> DynChainLink<C> for L {
    fn handle_dyn<'a>(&'a self, context: &'a mut C) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(self.handle(context))
    }
}
