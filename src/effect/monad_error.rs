//! `MonadError` type class - error handling capability.
//!
//! This module provides the `MonadError` trait which abstracts
//! the ability to raise and recover from errors within a monadic context.
//! `attempt` and `handle_error_with` are the only operations that turn a
//! failure back into a normal value; everything else propagates it.
//!
//! # Laws
//!
//! ## Raise Handle Law
//!
//! ```text
//! handle_error_with(raise_error(e), handler) == handler(e)
//! ```
//!
//! ## Handle Pure Law
//!
//! ```text
//! handle_error_with(pure(a), handler) == pure(a)
//! ```
//!
//! ## Raise Short-Circuit Law
//!
//! ```text
//! raise_error(e).flat_map(f) == raise_error(e)
//! ```
//!
//! ## Attempt Law
//!
//! ```text
//! attempt(raise_error(e)) == pure(Err(e))
//! attempt(pure(a))        == pure(Ok(a))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectum::effect::MonadError;
//!
//! let result: Result<i32, String> = <Result<i32, String>>::raise_error("error".to_string());
//! assert_eq!(result, Err("error".to_string()));
//!
//! let recovered = <Result<i32, String>>::handle_error_with(result, |e| Ok(e.len() as i32));
//! assert_eq!(recovered, Ok(5));
//! ```

use crate::typeclass::Monad;

/// A monad that can raise errors of type `E` and recover from them.
pub trait MonadError<E>: Monad {
    /// Creates a computation that fails with `error`.
    fn raise_error<A>(error: E) -> Self::WithType<A>
    where
        A: 'static;

    /// Recovers from a failure by continuing with the computation returned
    /// by `handler`. A successful computation passes through unchanged and
    /// `handler` is never invoked.
    fn handle_error_with<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A> + 'static,
        A: 'static;

    /// Exposes the outcome of `computation` as a value. The resulting
    /// computation never fails.
    fn attempt<A>(computation: Self::WithType<A>) -> Self::WithType<Result<A, E>>
    where
        A: 'static;

    /// Lifts a `Result` into the monad.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>
    where
        A: 'static,
    {
        match result {
            Ok(value) => Self::pure(value),
            Err(error) => Self::raise_error(error),
        }
    }

    /// Recovers from a failure with a plain value.
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        Self: Sized + 'static,
        F: FnOnce(E) -> A + 'static,
        A: 'static,
        E: 'static,
    {
        Self::handle_error_with(computation, move |error| Self::pure(handler(error)))
    }

    /// Replaces a failed computation with `fallback`.
    fn recover_with<A>(
        computation: Self::WithType<A>,
        fallback: Self::WithType<A>,
    ) -> Self::WithType<A>
    where
        Self: Sized + 'static,
        Self::WithType<A>: 'static,
        A: 'static,
        E: 'static,
    {
        Self::handle_error_with(computation, move |_| fallback)
    }

    /// Rewrites the error of a failed computation.
    fn adapt_error<A, F>(computation: Self::WithType<A>, transform: F) -> Self::WithType<A>
    where
        Self: Sized + 'static,
        F: FnOnce(E) -> E + 'static,
        A: 'static,
        E: 'static,
    {
        Self::handle_error_with(computation, move |error| Self::raise_error(transform(error)))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> MonadError<E> for Result<T, E> {
    fn raise_error<A>(error: E) -> Result<A, E>
    where
        A: 'static,
    {
        Err(error)
    }

    fn handle_error_with<A, F>(computation: Result<A, E>, handler: F) -> Result<A, E>
    where
        F: FnOnce(E) -> Result<A, E> + 'static,
        A: 'static,
    {
        computation.or_else(handler)
    }

    fn attempt<A>(computation: Result<A, E>) -> Result<Result<A, E>, E>
    where
        A: 'static,
    {
        Ok(computation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Outcome = Result<i32, String>;

    #[rstest]
    fn raise_error_is_err() {
        let result: Outcome = Outcome::raise_error("boom".to_string());
        assert_eq!(result, Err("boom".to_string()));
    }

    #[rstest]
    #[case(Ok(1), Ok(1))]
    #[case(Err("abc".to_string()), Ok(3))]
    fn handle_error_recovers_only_failures(#[case] input: Outcome, #[case] expected: Outcome) {
        let result = Outcome::handle_error(input, |error| error.len() as i32);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn attempt_never_fails() {
        let failed: Outcome = Err("e".to_string());
        assert_eq!(Outcome::attempt(failed), Ok(Err("e".to_string())));
    }

    #[rstest]
    fn adapt_error_rewrites_message() {
        let failed: Outcome = Err("e".to_string());
        let adapted = Outcome::adapt_error(failed, |error| format!("wrapped: {error}"));
        assert_eq!(adapted, Err("wrapped: e".to_string()));
    }

    #[rstest]
    fn recover_with_uses_fallback() {
        let failed: Outcome = Err("e".to_string());
        assert_eq!(Outcome::recover_with(failed, Ok(9)), Ok(9));
    }

    #[rstest]
    fn from_result_round_trips() {
        assert_eq!(Outcome::from_result(Ok(2)), Ok(2));
    }
}
