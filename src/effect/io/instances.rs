//! Type class instances for `IO`.
//!
//! Every instance forwards to the inherent method of the same name, so
//! generic code written against `Functor`, `Monad` or `MonadError` builds
//! exactly the same nodes as direct method calls.

use super::IO;
use crate::control::Either;
use crate::effect::MonadError;
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

impl<A, E> TypeConstructor for IO<A, E> {
    type Inner = A;
    type WithType<B> = IO<B, E>;
}

impl<A: 'static, E: 'static> Functor for IO<A, E> {
    fn fmap<B, F>(self, function: F) -> IO<B, E>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<A: 'static, E: 'static> Applicative for IO<A, E> {
    fn pure<B>(value: B) -> IO<B, E>
    where
        B: 'static,
    {
        IO::pure(value)
    }

    fn map2<B, C, F>(self, other: IO<B, E>, function: F) -> IO<C, E>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Self::map2(self, other, function)
    }

    fn apply<B, Output>(self, other: IO<B, E>) -> IO<Output, E>
    where
        A: FnOnce(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
    {
        Self::apply(self, other)
    }
}

impl<A: 'static, E: 'static> Monad for IO<A, E> {
    fn flat_map<B, F>(self, function: F) -> IO<B, E>
    where
        F: FnOnce(A) -> IO<B, E> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }

    fn tail_rec_m<S, B, F>(seed: S, step: F) -> IO<B, E>
    where
        F: FnMut(S) -> IO<Either<S, B>, E> + 'static,
        S: 'static,
        B: 'static,
    {
        IO::<B, E>::tail_rec_m(seed, step)
    }
}

impl<T: 'static, E: 'static> MonadError<E> for IO<T, E> {
    fn raise_error<A>(error: E) -> IO<A, E>
    where
        A: 'static,
    {
        IO::raise_error(error)
    }

    fn handle_error_with<A, F>(computation: IO<A, E>, handler: F) -> IO<A, E>
    where
        F: FnOnce(E) -> IO<A, E> + 'static,
        A: 'static,
    {
        computation.handle_error_with(handler)
    }

    fn attempt<A>(computation: IO<A, E>) -> IO<Result<A, E>, E>
    where
        A: 'static,
    {
        computation.attempt()
    }
}

/// Runs the left action, then the right one, and combines their values.
impl<A: Semigroup + 'static, E: 'static> Semigroup for IO<A, E> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, A::combine)
    }
}

/// The identity action performs no effect and yields `A::empty()`.
impl<A: Monoid + 'static, E: 'static> Monoid for IO<A, E> {
    fn empty() -> Self {
        Self::pure(A::empty())
    }
}
