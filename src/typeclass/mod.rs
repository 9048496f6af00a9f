//! Type class traits for functional programming abstractions.
//!
//! These are the capability contracts that effect types implement:
//!
//! - [`Functor`]: Mapping over a value in a context
//! - [`Applicative`]: Embedding pure values and combining independent computations
//! - [`Monad`]: Dependent sequencing and stack-safe looping (`tail_rec_m`)
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) so that traits
//! like `Functor` and `Monad` can be written once for `Option`, `Result`
//! and `IO`.
//!
//! # Examples
//!
//! ```rust
//! use effectum::typeclass::{Applicative, Monad};
//!
//! fn add_in_context<M>(left: M, right: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     left.map2(right, |a, b| a + b)
//! }
//!
//! assert_eq!(add_in_context(Some(1), Some(2)), Some(3));
//! assert_eq!(add_in_context::<Result<i32, &str>>(Ok(1), Err("no")), Err("no"));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
