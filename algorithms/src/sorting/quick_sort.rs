//! Quick sort, Lomuto partition with the last element as pivot.
//!
//! Equations:
//!   partition(lo, hi): p = a[hi], i = lo
//!     for j in lo..hi: a[j] <= p => swap(i, j), i += 1
//!     swap(i, hi), pivot lands at i
//!   sort(lo, i - 1), sort(i + 1, hi)

use std::cmp::Ordering;

use super::{Recorder, SortAction, SortStep};
use crate::trace::Trace;

pub fn quick_sort(array: &[i64]) -> Trace<SortStep> {
    tracing::debug!(len = array.len(), "quick sort");
    let mut rec = Recorder::new(array);
    if rec.len() > 0 {
        let hi = rec.len() - 1;
        sort(&mut rec, 0, hi);
    }
    rec.finish()
}

/// Inclusive range `[lo, hi]`.
fn sort(rec: &mut Recorder, lo: usize, hi: usize) {
    if lo >= hi {
        if lo == hi {
            rec.placed(lo);
        }
        return;
    }
    let p = partition(rec, lo, hi);
    if p > lo {
        sort(rec, lo, p - 1);
    }
    sort(rec, p + 1, hi);
}

fn partition(rec: &mut Recorder, lo: usize, hi: usize) -> usize {
    let pivot = rec.array[hi];
    rec.record(SortAction::Pivot { index: hi }, format!("Pivot {pivot}"));

    let mut i = lo;
    for j in lo..hi {
        if rec.compare(j, hi) != Ordering::Greater {
            if i != j {
                rec.swap(i, j);
            }
            i += 1;
        }
    }
    if i != hi {
        rec.swap(i, hi);
    }
    rec.placed(i);
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_duplicates() {
        let trace = quick_sort(&[10, 7, 8, 9, 1, 5, 5]);
        assert_eq!(trace.last().unwrap().array, vec![1, 5, 5, 7, 8, 9, 10]);
    }

    #[test]
    fn first_pivot_is_last_element() {
        let trace = quick_sort(&[3, 1, 2]);
        assert_eq!(trace.first().unwrap().action, SortAction::Pivot { index: 2 });
    }

    #[test]
    fn every_index_is_placed_once() {
        let input = [9, 4, 7, 1, 3, 8];
        let trace = quick_sort(&input);
        let mut placed: Vec<usize> = trace
            .iter()
            .filter_map(|s| match s.action {
                SortAction::Placed { index } => Some(index),
                _ => None,
            })
            .collect();
        placed.sort();
        assert_eq!(placed, (0..input.len()).collect::<Vec<_>>());
    }
}
