//! # effectum
//!
//! Deferred, composable effect values.
//!
//! ## Overview
//!
//! An [`IO`](effect::IO) value is a description of work that may perform a
//! side effect and may fail. Building one never runs anything; combinators
//! such as `fmap`, `flat_map`, `attempt` and `handle_error_with` only produce
//! larger descriptions. The description is executed when it is run, either
//! synchronously with `run_unsafe` or through a callback with
//! `run_with_callback`.
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Semigroup`, `Monoid`
//! - **Control Structures**: `Either`, the step signal of `tail_rec_m`
//! - **Effect System**: `IO`, `MonadError`, the default `Error` type
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: Control structures (Either)
//! - `effect`: The IO effect and `MonadError`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectum::prelude::*;
//!
//! let io: IO<i32> = IO::pure(2)
//!     .fmap(|x| x * 3)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! assert_eq!(io.run_unsafe().ok(), Some(7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effectum::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
