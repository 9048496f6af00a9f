//! Default failure type for [`IO`](super::IO).
//!
//! `IO<A, E>` is generic over its error channel; when no error type is named,
//! it uses [`Error`].

use thiserror::Error;

/// A boxed, thread-safe error, carried by [`Error::Other`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The default failure of an `IO` computation.
///
/// # Examples
///
/// ```rust
/// use effectum::effect::{Error, IO};
///
/// let io: IO<i32> = IO::raise_error(Error::from("boom"));
/// let error = io.run_unsafe().unwrap_err();
/// assert_eq!(error.to_string(), "boom");
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// A user closure panicked while the computation was evaluated under
    /// `catch_panic`.
    #[error("effect panicked: {0}")]
    Panicked(String),

    /// A plain failure message.
    #[error("{0}")]
    Message(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl Error {
    /// Creates a [`Error::Message`].
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Wraps any error as [`Error::Other`].
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// Returns `true` if this failure came from a caught panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::message(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::other(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::from("boom"), "boom")]
    #[case(Error::Panicked("oops".to_string()), "effect panicked: oops")]
    fn display_messages(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn other_is_transparent() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let error = Error::from(io_error);
        assert!(matches!(error, Error::Other(_)));
        assert_eq!(error.to_string(), "missing file");
    }

    #[rstest]
    fn is_panic_only_for_panicked() {
        assert!(Error::Panicked(String::new()).is_panic());
        assert!(!Error::message("x").is_panic());
    }
}
