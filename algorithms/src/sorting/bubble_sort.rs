use std::cmp::Ordering;

use super::{Recorder, SortStep};
use crate::trace::Trace;

/// Adjacent-swap passes; stops after the first pass without a swap, at
/// which point the untouched prefix is marked placed too.
pub fn bubble_sort(array: &[i64]) -> Trace<SortStep> {
    tracing::debug!(len = array.len(), "bubble sort");
    let mut rec = Recorder::new(array);
    let n = rec.len();
    // indices at or past `end` are in their final position
    let mut end = n;

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if rec.compare(j, j + 1) == Ordering::Greater {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        end = n - 1 - pass;
        rec.placed(end);
        if !swapped {
            tracing::trace!(pass, "no swaps, stopping early");
            break;
        }
    }
    for index in 0..end {
        rec.placed(index);
    }
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::SortAction;

    #[test]
    fn sorts() {
        let trace = bubble_sort(&[5, 1, 4, 2, 8]);
        assert_eq!(trace.last().unwrap().array, vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn sorted_input_takes_one_pass() {
        let trace = bubble_sort(&[1, 2, 3, 4]);
        let compares = trace.iter().filter(|s| matches!(s.action, SortAction::Compare { .. })).count();
        assert_eq!(compares, 3);
        assert!(trace.iter().all(|s| !matches!(s.action, SortAction::Swap { .. })));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![3, 2, 1];
        let _ = bubble_sort(&input);
        assert_eq!(input, vec![3, 2, 1]);
    }

    fn placed_indices(trace: &Trace<SortStep>) -> Vec<usize> {
        trace
            .iter()
            .filter_map(|s| match s.action {
                SortAction::Placed { index } => Some(index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn early_exit_places_the_prefix() {
        let trace = bubble_sort(&[1, 2, 3, 4]);
        assert_eq!(placed_indices(&trace), vec![3, 0, 1, 2]);
        assert_eq!(trace.last().unwrap().action, SortAction::Done);
    }

    #[test]
    fn every_index_is_placed_once() {
        let mut placed = placed_indices(&bubble_sort(&[5, 1, 4, 2, 8]));
        placed.sort();
        assert_eq!(placed, vec![0, 1, 2, 3, 4]);
        assert!(placed_indices(&bubble_sort(&[])).is_empty());
    }
}
