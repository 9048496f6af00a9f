//! The variant representation of a deferred computation.
//!
//! A node is one of four shapes. The nested node inside `Transformed` and
//! `Flattened` has a different result type than the node holding it, so it
//! is erased behind [`Deferred`]. Erasure also keeps `IO<IO<A>>` from
//! appearing inside the layout of `IO<A>`, which would otherwise require an
//! unbounded chain of instantiations.

use std::fmt;

use super::IO;
use super::evaluate::evaluate;

/// A type-erased piece of deferred work producing `Result<A, E>` once forced.
pub(super) trait Deferred<A, E> {
    fn force(self: Box<Self>) -> Result<A, E>;
}

pub(super) enum Node<A, E> {
    /// Already known value.
    Pure(A),
    /// Already known failure.
    Failed(E),
    /// Run a nested node, then map its outcome.
    Transformed(Box<dyn Deferred<A, E>>),
    /// Run a nested node whose result is another node, then run that node.
    Flattened(Box<dyn Deferred<IO<A, E>, E>>),
}

/// The payload of `Node::Transformed`.
///
/// `function` sees the whole outcome of `source`, so the same node shape
/// serves `fmap` (touches only `Ok`), `attempt` (wraps both cases in `Ok`)
/// and `map_error` (touches only `Err`).
pub(super) struct Transformed<B, E0, F> {
    pub(super) source: IO<B, E0>,
    pub(super) function: F,
}

impl<A, B, E, E0, F> Deferred<A, E> for Transformed<B, E0, F>
where
    F: FnOnce(Result<B, E0>) -> Result<A, E>,
{
    fn force(self: Box<Self>) -> Result<A, E> {
        let Self { source, function } = *self;
        function(evaluate(source))
    }
}

/// A whole node is itself deferred work; `Node::Flattened` stores its
/// `IO<IO<A, E>, E>` this way.
impl<A, E> Deferred<A, E> for IO<A, E> {
    fn force(self: Box<Self>) -> Result<A, E> {
        evaluate(*self)
    }
}

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for Node<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(value) => formatter.debug_tuple("Pure").field(value).finish(),
            Self::Failed(error) => formatter.debug_tuple("Failed").field(error).finish(),
            Self::Transformed(_) => formatter
                .debug_tuple("Transformed")
                .field(&"<deferred>")
                .finish(),
            Self::Flattened(_) => formatter
                .debug_tuple("Flattened")
                .field(&"<deferred>")
                .finish(),
        }
    }
}
