//! LSD radix sort, base 10, non-negative integers.
//!
//! Equations:
//!   for place = 1, 10, 100, ... while max / place > 0:
//!     digit(v)  = (v / place) % BASE
//!     stable bucket pass on digit, written back in bucket order

use super::{Recorder, SortAction, SortStep};
use crate::error::StepResult;
use crate::invariant::{require, NonNegative};
use crate::trace::Trace;

pub const RADIX_BASE: i64 = 10;

pub fn radix_sort(array: &[i64]) -> StepResult<Trace<SortStep>> {
    require("radix sort", NonNegative, array)?;
    let max = array.iter().copied().max().unwrap_or(0);
    tracing::debug!(len = array.len(), max, "radix sort");

    let mut rec = Recorder::new(array);
    let mut place: i64 = 1;
    while max / place > 0 {
        rec.aux = vec![0; RADIX_BASE as usize];
        rec.record(SortAction::Digit { place }, format!("Sort by the {place}s digit"));

        let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); RADIX_BASE as usize];
        for index in 0..rec.len() {
            let value = rec.array[index];
            let digit = (value / place) % RADIX_BASE;
            buckets[digit as usize].push(value);
            rec.aux[digit as usize] += 1;
            rec.record(SortAction::Bucket { index, digit }, format!("{value} goes to bucket {digit}"));
        }

        for (out, value) in buckets.into_iter().flatten().enumerate() {
            rec.write(out, value);
        }

        match place.checked_mul(RADIX_BASE) {
            Some(next) => place = next,
            None => break,
        }
    }
    Ok(rec.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StepError;

    #[test]
    fn sorts_multi_digit() {
        let trace = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66]).unwrap();
        assert_eq!(trace.last().unwrap().array, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        let passes = trace.iter().filter(|s| matches!(s.action, SortAction::Digit { .. })).count();
        assert_eq!(passes, 3);
    }

    #[test]
    fn all_zeros_need_no_pass() {
        let trace = radix_sort(&[0, 0]).unwrap();
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn handles_largest_values() {
        let trace = radix_sort(&[i64::MAX, 0, 1]).unwrap();
        assert_eq!(trace.last().unwrap().array, vec![0, 1, i64::MAX]);
    }

    #[test]
    fn rejects_negative_values() {
        assert!(matches!(radix_sort(&[-5]), Err(StepError::InvalidInput { .. })));
    }
}
