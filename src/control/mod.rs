//! Control structures for functional programming.
//!
//! - [`Either`]: A value that can be one of two types. It is the step signal
//!   of `tail_rec_m`: `Left` carries the next loop state, `Right` the result.
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::Either;
//!
//! fn step(n: u32) -> Either<u32, String> {
//!     if n < 3 {
//!         Either::Left(n + 1)
//!     } else {
//!         Either::Right(format!("done at {n}"))
//!     }
//! }
//!
//! let mut state = 0;
//! let result = loop {
//!     match step(state) {
//!         Either::Left(next) => state = next,
//!         Either::Right(done) => break done,
//!     }
//! };
//! assert_eq!(result, "done at 3");
//! ```

mod either;

pub use either::Either;
