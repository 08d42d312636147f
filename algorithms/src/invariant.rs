//! Precondition checks shared by the steppers.

use crate::error::{StepError, StepResult};

/// Invariant trait for stepper inputs
pub trait Invariant<T: ?Sized> {
    fn check(&self, value: &T) -> bool;

    /// Short phrase used when the check fails.
    fn describe(&self) -> &'static str;
}

/// Every element is >= 0
pub struct NonNegative;

impl Invariant<[i64]> for NonNegative {
    fn check(&self, value: &[i64]) -> bool {
        value.iter().all(|&v| v >= 0)
    }

    fn describe(&self) -> &'static str {
        "values must be non-negative"
    }
}

/// Slice is in ascending order
pub struct Sorted;

impl Invariant<[i64]> for Sorted {
    fn check(&self, value: &[i64]) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }

    fn describe(&self) -> &'static str {
        "array must be sorted ascending"
    }
}

/// n x n matrix with n > 0
pub struct SquareMatrix;

impl<T> Invariant<[Vec<T>]> for SquareMatrix {
    fn check(&self, value: &[Vec<T>]) -> bool {
        !value.is_empty() && value.iter().all(|row| row.len() == value.len())
    }

    fn describe(&self) -> &'static str {
        "matrix must be square and non-empty"
    }
}

pub fn require<T: ?Sized, I: Invariant<T>>(
    algorithm: &'static str,
    invariant: I,
    value: &T,
) -> StepResult<()> {
    if invariant.check(value) {
        Ok(())
    } else {
        tracing::warn!(algorithm, reason = invariant.describe(), "rejected input");
        Err(StepError::invalid(algorithm, invariant.describe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_accepts_duplicates() {
        assert!(Sorted.check(&[1, 2, 2, 3][..]));
        assert!(!Sorted.check(&[3, 1][..]));
        assert!(Sorted.check(&[][..]));
    }

    #[test]
    fn square_matrix_rejects_ragged() {
        let ok = vec![vec![0, 1], vec![1, 0]];
        let ragged = vec![vec![0, 1], vec![1]];
        assert!(SquareMatrix.check(&ok[..]));
        assert!(!SquareMatrix.check(&ragged[..]));
        assert!(!SquareMatrix.check(&Vec::<Vec<u8>>::new()[..]));
    }

    #[test]
    fn require_reports_algorithm() {
        let err = require("counting sort", NonNegative, &[1, -2][..]).unwrap_err();
        assert_eq!(
            err,
            StepError::invalid("counting sort", "values must be non-negative")
        );
    }
}
