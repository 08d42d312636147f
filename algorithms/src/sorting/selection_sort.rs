use std::cmp::Ordering;

use super::{Recorder, SortAction, SortStep};
use crate::trace::Trace;

/// Repeatedly swaps the minimum of the unsorted suffix into place.
pub fn selection_sort(array: &[i64]) -> Trace<SortStep> {
    tracing::debug!(len = array.len(), "selection sort");
    let mut rec = Recorder::new(array);
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if rec.compare(j, min) == Ordering::Less {
                min = j;
                let value = rec.array[j];
                rec.record(SortAction::Minimum { index: j }, format!("New minimum {value}"));
            }
        }
        if min != i {
            rec.swap(i, min);
        }
        rec.placed(i);
    }
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_one_swap_per_pass_at_most() {
        let trace = selection_sort(&[64, 25, 12, 22, 11]);
        assert_eq!(trace.last().unwrap().array, vec![11, 12, 22, 25, 64]);
        let swaps = trace.iter().filter(|s| matches!(s.action, SortAction::Swap { .. })).count();
        assert!(swaps <= 4);
    }

    #[test]
    fn comparison_count_is_quadratic() {
        let trace = selection_sort(&[4, 3, 2, 1]);
        let compares = trace.iter().filter(|s| matches!(s.action, SortAction::Compare { .. })).count();
        assert_eq!(compares, 6);
    }
}
