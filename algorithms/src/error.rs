use thiserror::Error;

/// Failures surfaced by steppers and bounded containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("invalid input for {algorithm}: {reason}")]
    InvalidInput {
        algorithm: &'static str,
        reason: String,
    },
    #[error("capacity of {capacity} elements exceeded")]
    CapacityExceeded { capacity: usize },
    #[error("container is empty")]
    Empty,
}

impl StepError {
    pub fn invalid(algorithm: &'static str, reason: impl Into<String>) -> Self {
        StepError::InvalidInput {
            algorithm,
            reason: reason.into(),
        }
    }
}

pub type StepResult<T> = Result<T, StepError>;

/// Running-total addition for steppers that accumulate weights or profits.
pub(crate) fn add_total(algorithm: &'static str, total: i64, term: i64) -> StepResult<i64> {
    total
        .checked_add(term)
        .ok_or_else(|| StepError::invalid(algorithm, "total overflows i64"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_total_reports_overflow() {
        assert_eq!(add_total("kruskal", 2, 3), Ok(5));
        assert_eq!(add_total("kruskal", i64::MAX, 1), Err(StepError::invalid("kruskal", "total overflows i64")));
        assert!(add_total("prim", i64::MIN, -1).is_err());
    }
}
