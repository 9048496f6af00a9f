//! Observational equality of two `IO` actions.
//!
//! Two actions are compared by running both of them, so comparing performs
//! their side effects. This exists for tests and law checks.

use super::IO;

impl<A: 'static, E: 'static> IO<A, E> {
    /// Runs both actions, left first, and compares their outcomes with the
    /// given strategies.
    ///
    /// Two successes are compared with `value_eq`, two failures with
    /// `error_eq`. A success and a failure are never equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::IO;
    ///
    /// let left: IO<f64, String> = IO::pure(0.1 + 0.2);
    /// let right: IO<f64, String> = IO::pure(0.3);
    /// let close = |a: &f64, b: &f64| (a - b).abs() < 1e-9;
    /// assert!(left.eqv_by(right, close, |a, b| a == b));
    /// ```
    pub fn eqv_by<ValueEq, ErrorEq>(
        self,
        other: Self,
        value_eq: ValueEq,
        error_eq: ErrorEq,
    ) -> bool
    where
        ValueEq: FnOnce(&A, &A) -> bool,
        ErrorEq: FnOnce(&E, &E) -> bool,
    {
        let left = self.run_unsafe();
        let right = other.run_unsafe();

        match (&left, &right) {
            (Ok(left_value), Ok(right_value)) => value_eq(left_value, right_value),
            (Err(left_error), Err(right_error)) => error_eq(left_error, right_error),
            _ => false,
        }
    }

    /// [`IO::eqv_by`] using `PartialEq` for both values and errors.
    pub fn eqv(self, other: Self) -> bool
    where
        A: PartialEq,
        E: PartialEq,
    {
        self.eqv_by(other, |left, right| left == right, |left, right| left == right)
    }
}
