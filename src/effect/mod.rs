//! Effect system for deferred, fallible side effects.
//!
//! # IO
//!
//! The [`IO`] type represents a computation that may perform side effects
//! and may fail. Side effects are deferred until `run_unsafe` (or
//! `run_with_callback`) is called, so building and composing `IO` values is
//! pure.
//!
//! ```rust
//! use effectum::effect::IO;
//!
//! let io: IO<i32> = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! assert_eq!(io.run_unsafe().ok(), Some(21));
//! ```
//!
//! # Error Handling
//!
//! [`MonadError`] abstracts raising and recovering from failures. It is
//! implemented by `IO` and by `Result`:
//!
//! ```rust
//! use effectum::effect::{IO, MonadError};
//!
//! let failing: Result<i32, String> = Err("error".to_string());
//! let recovered = <Result<i32, String>>::handle_error_with(failing, |e| Ok(e.len() as i32));
//! assert_eq!(recovered, Ok(5));
//!
//! let io: IO<i32, String> = IO::raise_error("error".to_string())
//!     .handle_error_with(|e| IO::pure(e.len() as i32));
//! assert_eq!(io.run_unsafe(), Ok(5));
//! ```

mod error;
mod io;
mod monad_error;

pub use error::{BoxError, Error};
pub use io::IO;
pub use monad_error::MonadError;
