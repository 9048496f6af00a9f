//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, where each step can depend
//! on the result of the previous step, and with `tail_rec_m`, the
//! stack-safe loop that lets an unbounded iteration be written without
//! growing the call stack.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::Either;
//! use effectum::typeclass::Monad;
//!
//! let x = Some(5);
//! let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(y, Some(10));
//!
//! let counted = <Option<()>>::tail_rec_m(0u64, |n| {
//!     Some(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
//! });
//! assert_eq!(counted, Some(100_000));
//! ```

use super::applicative::Applicative;
use crate::control::Either;

/// A type class for contexts that support dependent sequencing.
pub trait Monad: Applicative {
    /// Sequences a computation that depends on the current value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::typeclass::Monad;
    ///
    /// let result = Some(10).flat_map(|x| Some(x + 1));
    /// assert_eq!(result, Some(11));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: 'static,
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs `step` repeatedly, starting from `seed`, until it yields
    /// `Either::Right`.
    ///
    /// Every implementation must use bounded stack space regardless of the
    /// number of iterations.
    fn tail_rec_m<S, B, F>(seed: S, step: F) -> Self::WithType<B>
    where
        F: FnMut(S) -> Self::WithType<Either<S, B>> + 'static,
        S: 'static,
        B: 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B> + 'static,
        B: 'static,
    {
        Self::and_then(self, function)
    }

    fn tail_rec_m<S, B, F>(seed: S, mut step: F) -> Option<B>
    where
        F: FnMut(S) -> Option<Either<S, B>> + 'static,
        S: 'static,
        B: 'static,
    {
        let mut state = seed;
        loop {
            match step(state)? {
                Either::Left(next) => state = next,
                Either::Right(result) => return Some(result),
            }
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E> + 'static,
        B: 'static,
    {
        Self::and_then(self, function)
    }

    fn tail_rec_m<S, B, F>(seed: S, mut step: F) -> Result<B, E>
    where
        F: FnMut(S) -> Result<Either<S, B>, E> + 'static,
        S: 'static,
        B: 'static,
    {
        let mut state = seed;
        loop {
            match step(state)? {
                Either::Left(next) => state = next,
                Either::Right(result) => return Ok(result),
            }
        }
    }
}
