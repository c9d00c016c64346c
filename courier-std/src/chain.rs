//! Chain of responsibility over a shared mutable context.
//!
//! This module provides a builder pattern for linking the chain and a
//! frozen [`Chain`] whose topology is immutable after construction.
//!
//! Execution order is construction order. Every link runs unconditionally
//! unless an earlier link failed: a link error aborts the remainder of the
//! chain and propagates to the caller unchanged.

use courier_core::{BoxError, ChainLink, DynChainLink};

/// Builder for constructing a [`Chain`].
///
/// # Example
/// ```ignore
/// let chain = ChainBuilder::new()
///     .link(ValidateOrder)
///     .link(CheckFraud)
///     .link(TakePayment)
///     .build();
///
/// let mut context = OrderContext::new("yash", 250);
/// chain.run(&mut context).await?;
/// ```
pub struct ChainBuilder<C: Send> {
    links: Vec<Box<dyn DynChainLink<C>>>,
}

impl<C: Send> ChainBuilder<C> {
    /// Create a new empty chain builder.
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Append a link; it will run after every link added before it.
    pub fn link<L: ChainLink<C>>(mut self, link: L) -> Self {
        self.links.push(Box::new(link));
        self
    }

    /// Freeze the topology into an immutable [`Chain`].
    pub fn build(self) -> Chain<C> {
        Chain { links: self.links }
    }
}

impl<C: Send> Default for ChainBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered, frozen sequence of links sharing one mutable context.
pub struct Chain<C: Send> {
    links: Vec<Box<dyn DynChainLink<C>>>,
}

impl<C: Send + 'static> Chain<C> {
    /// Run every link in order against the shared context.
    ///
    /// Stops at the first link error and returns it unchanged; links after
    /// the failing one never execute. An empty chain is a successful no-op.
    pub async fn run(&self, context: &mut C) -> Result<(), BoxError> {
        for link in &self.links {
            link.handle_dyn(context).await?;
        }
        Ok(())
    }

    /// The number of links in the chain.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
