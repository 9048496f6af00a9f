//! IO - deferred, fallible side effects.
//!
//! The `IO` type describes a computation that may perform side effects and
//! may fail with an error of type `E`. Building or combining `IO` values
//! never runs anything: the description is executed only when it is run
//! with [`IO::run_unsafe`] or [`IO::run_with_callback`], which should happen
//! at the program's "edge" (e.g., in the `main` function).
//!
//! # Evaluation
//!
//! An `IO` is consumed by running it, so each description runs at most
//! once. Embedded side effects happen during that run, in the order the
//! description was composed: the left side of `map2`, `product` and `apply`
//! always runs before the right side.
//!
//! Failures propagate unchanged through `fmap` and `flat_map` until they
//! reach the runner or are intercepted by [`IO::attempt`] or
//! [`IO::handle_error_with`].
//!
//! Ordinary `fmap`/`flat_map` chains are evaluated recursively and use
//! stack proportional to their depth. Loops that may iterate an unbounded
//! number of times should be written with [`IO::tail_rec_m`], which runs in
//! bounded stack space.
//!
//! # Examples
//!
//! ```rust
//! use effectum::effect::IO;
//!
//! let io: IO<i32, String> = IO::pure(2)
//!     .fmap(|x| x * 3)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), Ok(7));
//!
//! let failed: IO<i32, String> = IO::raise_error("boom".to_string()).fmap(|x: i32| x + 1);
//! assert_eq!(failed.run_unsafe(), Err("boom".to_string()));
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use effectum::effect::IO;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = executed.clone();
//!
//! let io: IO<i32> = IO::new(move || {
//!     executed_clone.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! assert_eq!(io.run_unsafe().ok(), Some(42));
//! assert!(executed.load(Ordering::SeqCst));
//! ```

mod equality;
mod evaluate;
mod instances;
mod node;

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use self::evaluate::{evaluate, iterate};
use self::node::{Node, Transformed};
use super::error::Error;
use crate::control::Either;

/// A deferred computation producing an `A` or failing with an `E`.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the IO action.
/// - `E`: The failure type, [`Error`] unless stated otherwise.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A, E = Error> {
    node: Node<A, E>,
}

impl<A: 'static, E: 'static> IO<A, E> {
    const fn from_node(node: Node<A, E>) -> Self {
        Self { node }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value that is already known.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let io: IO<i32> = IO::pure(42);
    /// assert_eq!(io.run_unsafe().ok(), Some(42));
    /// ```
    pub const fn pure(value: A) -> Self {
        Self::from_node(Node::Pure(value))
    }

    /// Wraps a failure that is already known. Running the result always
    /// fails with `error`.
    pub const fn raise_error(error: E) -> Self {
        Self::from_node(Node::Failed(error))
    }

    /// Creates an IO action from a side-effecting closure that cannot fail.
    ///
    /// The closure will not be executed until the action is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let io: IO<i32> = IO::new(|| 10 + 20);
    /// assert_eq!(io.run_unsafe().ok(), Some(30));
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        IO::<(), E>::pure(()).fmap(move |()| action())
    }

    /// Creates an IO action from a side-effecting closure that may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let io: IO<u16, String> = IO::try_new(|| "8080".parse::<u16>().map_err(|e| e.to_string()));
    /// assert_eq!(io.run_unsafe(), Ok(8080));
    /// ```
    pub fn try_new<F>(action: F) -> Self
    where
        F: FnOnce() -> Result<A, E> + 'static,
    {
        IO::<(), E>::pure(()).transform(move |outcome| outcome.and_then(|()| action()))
    }

    /// Defers the construction of an IO action until it is run.
    ///
    /// Useful when building the action is itself effectful or expensive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let io: IO<usize> = IO::suspend(|| IO::pure(std::env::args().count()));
    /// assert!(io.run_unsafe().is_ok());
    /// ```
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        IO::<(), E>::pure(()).flat_map(move |()| thunk())
    }

    /// Lifts a `Result`: `Ok` becomes [`IO::pure`], `Err` becomes
    /// [`IO::raise_error`].
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::pure(value),
            Err(error) => Self::raise_error(error),
        }
    }

    /// Runs `step` from `seed` until it yields `Either::Right`.
    ///
    /// `Either::Left(next)` continues the loop with `next`; the first
    /// failure ends the loop and becomes the failure of the result. The loop
    /// runs in bounded stack space whatever the number of iterations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Either;
    /// use effectum::effect::IO;
    ///
    /// let io: IO<u64> = IO::tail_rec_m(0_u64, |n| {
    ///     IO::pure(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
    /// });
    /// assert_eq!(io.run_unsafe().ok(), Some(100_000));
    /// ```
    pub fn tail_rec_m<S, F>(seed: S, step: F) -> Self
    where
        F: FnMut(S) -> IO<Either<S, A>, E> + 'static,
        S: 'static,
    {
        IO::<S, E>::pure(seed)
            .transform(move |outcome| outcome.and_then(|seed| iterate(seed, step)))
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Builds a `Transformed` node that maps the whole outcome of `self`.
    fn transform<B, E2, F>(self, function: F) -> IO<B, E2>
    where
        F: FnOnce(Result<A, E>) -> Result<B, E2> + 'static,
        B: 'static,
        E2: 'static,
    {
        IO::from_node(Node::Transformed(Box::new(Transformed {
            source: self,
            function,
        })))
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// A failure passes through without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let io: IO<i32> = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe().ok(), Some(42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B, E>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.transform(move |outcome| outcome.map(function))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let io: IO<i32> = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe().ok(), Some(20));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B, E>
    where
        F: FnOnce(A) -> IO<B, E> + 'static,
        B: 'static,
    {
        IO::from_node(Node::Flattened(Box::new(self.fmap(function))))
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> IO<B, E>
    where
        F: FnOnce(A) -> IO<B, E> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    pub fn then<B>(self, next: IO<B, E>) -> IO<B, E>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two IO actions using a function. `self` runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let io: IO<i32> = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe().ok(), Some(30));
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B, E>, function: F) -> IO<C, E>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Combines two IO actions into a tuple. `self` runs first.
    pub fn product<B>(self, other: IO<B, E>) -> IO<(A, B), E>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function produced by `self` to the value produced by
    /// `other`. The function side runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let function: IO<fn(i32) -> i32> = IO::pure(|x| x + 1);
    /// assert_eq!(function.apply(IO::pure(41)).run_unsafe().ok(), Some(42));
    /// ```
    pub fn apply<B, Output>(self, other: IO<B, E>) -> IO<Output, E>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.flat_map(move |function| other.fmap(function))
    }

    // =========================================================================
    // Error Handling
    // =========================================================================

    /// Exposes the outcome of this action as a value.
    ///
    /// The returned action never fails: a success becomes `Ok(value)` and a
    /// failure becomes `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let failed: IO<i32, String> = IO::raise_error("boom".to_string());
    /// assert_eq!(failed.attempt().run_unsafe(), Ok(Err("boom".to_string())));
    /// ```
    pub fn attempt(self) -> IO<Result<A, E>, E> {
        self.transform(Ok)
    }

    /// Recovers from a failure by continuing with the action returned by
    /// `handler`. On success the value passes through and `handler` is never
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let failed: IO<usize, String> = IO::raise_error("boom".to_string());
    /// let recovered = failed.handle_error_with(|error| IO::pure(error.len()));
    /// assert_eq!(recovered.run_unsafe(), Ok(4));
    /// ```
    pub fn handle_error_with<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + 'static,
    {
        self.attempt().flat_map(move |outcome| match outcome {
            Ok(value) => Self::pure(value),
            Err(error) => handler(error),
        })
    }

    /// Recovers from a failure with a plain value.
    pub fn handle_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> A + 'static,
    {
        self.transform(move |outcome| Ok(outcome.unwrap_or_else(handler)))
    }

    /// Transforms the failure of this action, leaving success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let failed: IO<i32, i32> = IO::raise_error(404);
    /// let described = failed.map_error(|code| format!("status {code}"));
    /// assert_eq!(described.run_unsafe(), Err("status 404".to_string()));
    /// ```
    pub fn map_error<E2, F>(self, function: F) -> IO<A, E2>
    where
        F: FnOnce(E) -> E2 + 'static,
        E2: 'static,
    {
        self.transform(move |outcome| outcome.map_err(function))
    }

    /// Converts a panic raised while running this action into the failure
    /// [`Error::Panicked`].
    ///
    /// Without `catch_panic`, a panicking closure unwinds through the runner.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::{Error, IO};
    ///
    /// let panicking: IO<i32> = IO::new(|| panic!("oops"));
    /// let error = panicking.catch_panic().run_unsafe().unwrap_err();
    /// assert!(matches!(error, Error::Panicked(message) if message == "oops"));
    /// ```
    pub fn catch_panic(self) -> Self
    where
        E: From<Error>,
    {
        Self::try_new(move || match catch_unwind(AssertUnwindSafe(|| evaluate(self))) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let message = panic_message(&*payload);
                tracing::warn!(%message, "effect panicked");
                Err(E::from(Error::Panicked(message)))
            }
        })
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Executes the IO action and returns its outcome.
    ///
    /// This is where every deferred side effect happens. A failure is
    /// returned exactly as it was raised, without wrapping.
    ///
    /// # Safety Note
    ///
    /// This method is named `run_unsafe` to indicate that it executes
    /// side effects. While it's memory-safe, calling it breaks referential
    /// transparency.
    pub fn run_unsafe(self) -> Result<A, E> {
        let _span = tracing::trace_span!("io.run").entered();
        let outcome = evaluate(self);
        if outcome.is_err() {
            tracing::debug!("effect evaluation failed");
        }
        outcome
    }

    /// Executes the IO action and hands its outcome to `callback`.
    ///
    /// The callback is invoked exactly once, on the calling thread, before
    /// this method returns. A failure is delivered as `Err` rather than
    /// propagated to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let mut received = None;
    /// IO::<i32, String>::pure(5).run_with_callback(|outcome| received = Some(outcome));
    /// assert_eq!(received, Some(Ok(5)));
    /// ```
    pub fn run_with_callback<C>(self, callback: C)
    where
        C: FnOnce(Result<A, E>),
    {
        callback(self.run_unsafe());
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl<E: 'static> IO<(), E> {
    /// Creates an IO action that prints a line to standard output.
    ///
    /// ```rust,no_run
    /// use effectum::effect::IO;
    ///
    /// let io: IO<()> = IO::print_line("Hello, World!");
    /// io.run_unsafe().ok(); // Prints "Hello, World!"
    /// ```
    pub fn print_line<S: fmt::Display + 'static>(message: S) -> Self {
        Self::new(move || {
            println!("{message}");
        })
    }

    /// Creates an IO action that blocks the calling thread for `duration`.
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || {
            std::thread::sleep(duration);
        })
    }
}

impl<E: From<std::io::Error> + 'static> IO<String, E> {
    /// Creates an IO action that reads a line from standard input.
    pub fn read_line() -> Self {
        Self::try_new(|| {
            let mut buffer = String::new();
            std::io::stdin().read_line(&mut buffer)?;
            Ok(buffer)
        })
    }
}

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for IO<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("IO").field(&self.node).finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown panic".to_string()
    }
}
