//! The interpreter that collapses a node into its outcome.
//!
//! [`evaluate`] follows the structure of the node recursively, so ordinary
//! `fmap`/`flat_map` chains use stack proportional to their depth.
//! [`iterate`] is the loop behind `tail_rec_m`: each step is evaluated to
//! completion before the next one starts, so the number of iterations does
//! not affect stack depth.

use super::IO;
use super::node::Node;
use crate::control::Either;

pub(super) fn evaluate<A, E>(io: IO<A, E>) -> Result<A, E> {
    match io.node {
        Node::Pure(value) => Ok(value),
        Node::Failed(error) => Err(error),
        Node::Transformed(deferred) => deferred.force(),
        Node::Flattened(outer) => evaluate(outer.force()?),
    }
}

pub(super) fn iterate<S, A, E, F>(seed: S, mut step: F) -> Result<A, E>
where
    F: FnMut(S) -> IO<Either<S, A>, E>,
{
    let mut state = seed;
    let mut iterations: u64 = 0;

    loop {
        iterations += 1;
        match evaluate(step(state)) {
            Ok(Either::Left(next)) => state = next,
            Ok(Either::Right(result)) => {
                tracing::trace!(iterations, "tail_rec_m loop finished");
                return Ok(result);
            }
            Err(error) => {
                tracing::trace!(iterations, "tail_rec_m loop failed");
                return Err(error);
            }
        }
    }
}
