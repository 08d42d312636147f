//! Counting sort for non-negative integers.
//!
//! Variables:
//!   count[v] = occurrences of v,  |count| = max + 1
//!
//! Equations:
//!   tally:  count[a[i]] += 1 for every i
//!   output: for v in 0..=max, write v count[v] times
//!   Complexity: O(n + max)

use super::{Recorder, SortAction, SortStep};
use crate::error::{StepError, StepResult};
use crate::invariant::{require, NonNegative};
use crate::trace::Trace;

/// Largest key the count table is allowed to cover. The table is
/// snapshotted on every step.
pub const MAX_KEY: i64 = 4_096;

pub fn counting_sort(array: &[i64]) -> StepResult<Trace<SortStep>> {
    require("counting sort", NonNegative, array)?;
    let max = array.iter().copied().max().unwrap_or(0);
    if max > MAX_KEY {
        return Err(StepError::invalid("counting sort", format!("largest key {max} exceeds {MAX_KEY}")));
    }
    tracing::debug!(len = array.len(), max, "counting sort");

    let mut rec = Recorder::new(array);
    if array.is_empty() {
        return Ok(rec.finish());
    }
    rec.aux = vec![0; max as usize + 1];

    for (index, &value) in array.iter().enumerate() {
        rec.aux[value as usize] += 1;
        let seen = rec.aux[value as usize];
        rec.record(SortAction::Count { index, value }, format!("count[{value}] = {seen}"));
    }

    let mut out = 0;
    for value in 0..=max {
        for _ in 0..rec.aux[value as usize] {
            rec.write(out, value);
            out += 1;
        }
    }
    Ok(rec.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_example() {
        let trace = counting_sort(&[4, 2, 2, 8, 3, 3, 1]).unwrap();
        assert_eq!(trace.last().unwrap().array, vec![1, 2, 2, 3, 3, 4, 8]);
        let counts = trace.iter().filter(|s| matches!(s.action, SortAction::Count { .. })).count();
        assert_eq!(counts, 7);
    }

    #[test]
    fn count_table_is_snapshotted() {
        let trace = counting_sort(&[2, 0, 2]).unwrap();
        let last_count = trace.iter().filter(|s| matches!(s.action, SortAction::Count { .. })).last().unwrap();
        assert_eq!(last_count.aux, vec![1, 0, 2]);
    }

    #[test]
    fn rejects_negative_values() {
        let err = counting_sort(&[3, -1]).unwrap_err();
        assert!(matches!(err, StepError::InvalidInput { algorithm: "counting sort", .. }));
    }

    #[test]
    fn rejects_huge_keys() {
        assert!(counting_sort(&[MAX_KEY + 1]).is_err());
    }
}
