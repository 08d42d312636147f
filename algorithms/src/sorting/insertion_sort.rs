//! Insertion sort.
//!
//! Equations:
//!   for i in 1..n:
//!     key = a[i]
//!     while j > 0 and a[j-1] > key: a[j] = a[j-1], j -= 1
//!     a[j] = key

use super::{Recorder, SortAction, SortStep};
use crate::trace::Trace;

pub fn insertion_sort(array: &[i64]) -> Trace<SortStep> {
    tracing::debug!(len = array.len(), "insertion sort");
    let mut rec = Recorder::new(array);

    for i in 1..rec.len() {
        let key = rec.array[i];
        rec.record(SortAction::Key { index: i, value: key }, format!("Take {key} as the key"));

        let mut j = i;
        while j > 0 {
            let left = rec.array[j - 1];
            rec.record(
                SortAction::CompareKey { index: j - 1, key },
                format!("Compare {left} with key {key}"),
            );
            if left <= key {
                break;
            }
            rec.write(j, left);
            j -= 1;
        }
        if j != i {
            rec.write(j, key);
        }
    }
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_key_step_per_pass() {
        let trace = insertion_sort(&[12, 11, 13, 5, 6]);
        assert_eq!(trace.last().unwrap().array, vec![5, 6, 11, 12, 13]);
        let keys = trace.iter().filter(|s| matches!(s.action, SortAction::Key { .. })).count();
        assert_eq!(keys, 4);
    }

    #[test]
    fn equal_keys_are_not_shifted() {
        let trace = insertion_sort(&[2, 2, 2]);
        assert!(trace.iter().all(|s| !matches!(s.action, SortAction::Write { .. })));
    }

    #[test]
    fn shifts_are_single_writes() {
        let trace = insertion_sort(&[2, 1]);
        let actions: Vec<_> = trace.iter().map(|s| s.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                SortAction::Key { index: 1, value: 1 },
                SortAction::CompareKey { index: 0, key: 1 },
                SortAction::Write { index: 1, value: 2 },
                SortAction::Write { index: 0, value: 1 },
                SortAction::Done,
            ]
        );
    }
}
