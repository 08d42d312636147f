//! Top-down merge sort.
//!
//! Equations:
//!   sort(lo, hi) = sort(lo, mid), sort(mid, hi), merge(lo, mid, hi)
//!   mid = lo + (hi - lo) / 2
//!   merge takes from the left run on ties, so equal values keep their order.

use super::{Recorder, SortAction, SortStep};
use crate::trace::Trace;

pub fn merge_sort(array: &[i64]) -> Trace<SortStep> {
    tracing::debug!(len = array.len(), "merge sort");
    let mut rec = Recorder::new(array);
    let n = rec.len();
    split(&mut rec, 0, n);
    rec.finish()
}

/// Sorts the half-open range `[lo, hi)`.
fn split(rec: &mut Recorder, lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    split(rec, lo, mid);
    split(rec, mid, hi);
    merge(rec, lo, mid, hi);
}

fn merge(rec: &mut Recorder, lo: usize, mid: usize, hi: usize) {
    let left = rec.array[lo..mid].to_vec();
    let right = rec.array[mid..hi].to_vec();
    let (mut li, mut ri) = (0, 0);

    for k in lo..hi {
        let take_left = if li < left.len() && ri < right.len() {
            let (a, b) = (left[li], right[ri]);
            rec.record(
                SortAction::Compare { i: lo + li, j: mid + ri },
                format!("Merge: compare {a} and {b}"),
            );
            a <= b
        } else {
            li < left.len()
        };

        let value = if take_left {
            li += 1;
            left[li - 1]
        } else {
            ri += 1;
            right[ri - 1]
        };
        if rec.array[k] != value {
            rec.write(k, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts() {
        let trace = merge_sort(&[38, 27, 43, 3, 9, 82, 10]);
        assert_eq!(trace.last().unwrap().array, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn sorted_input_needs_no_writes() {
        let trace = merge_sort(&[1, 2, 3, 4, 5]);
        assert!(trace.iter().all(|s| !matches!(s.action, SortAction::Write { .. })));
    }

    #[test]
    fn single_element() {
        let trace = merge_sort(&[7]);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last().unwrap().array, vec![7]);
    }
}
