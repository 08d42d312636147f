//! Binary search over an ascending slice.
//!
//! Variables:
//!   left, right = inclusive bounds of the live range
//!   mid         = left + (right - left) / 2
//!
//! Equations:
//!   a[mid] == t => found
//!   a[mid] <  t => left  = mid + 1
//!   a[mid] >  t => right = mid - 1
//!   left > right => not found

use std::cmp::Ordering;

use super::{finish, step, SearchAction, SearchOutcome, SearchStep};
use crate::error::StepResult;
use crate::invariant::{require, Sorted};
use crate::trace::Trace;

pub fn binary_search(array: &[i64], target: i64) -> StepResult<SearchOutcome> {
    require("binary search", Sorted, array)?;
    tracing::debug!(len = array.len(), target, "binary search");

    let mut steps = Trace::new();
    let found = if array.is_empty() {
        None
    } else {
        probe_range(array, target, 0, array.len() - 1, &mut steps)
    };
    Ok(finish(steps, target, found))
}

/// Binary phase over `[left, right]`, shared with exponential search.
pub(crate) fn probe_range(
    array: &[i64],
    target: i64,
    left: usize,
    right: usize,
    steps: &mut Trace<SearchStep>,
) -> Option<usize> {
    // exclusive upper bound keeps `right = mid - 1` from underflowing at 0
    let (mut lo, mut hi) = (left, right + 1);
    while lo < hi {
        let right = hi - 1;
        let mid = lo + (right - lo) / 2;
        let value = array[mid];
        let description = match value.cmp(&target) {
            Ordering::Equal => format!("array[{mid}] = {value} == {target}"),
            Ordering::Less => format!("array[{mid}] = {value} < {target}: search right half"),
            Ordering::Greater => format!("array[{mid}] = {value} > {target}: search left half"),
        };
        step(steps, SearchAction::Probe { left: lo, right, mid }, Some((lo, right)), description);

        match value.cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StepError;

    const ODDS: [i64; 10] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

    fn probes(out: &SearchOutcome) -> Vec<usize> {
        out.steps
            .iter()
            .filter_map(|s| match s.action {
                SearchAction::Probe { mid, .. } => Some(mid),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn finds_seven_at_index_three() {
        let out = binary_search(&ODDS, 7).unwrap();
        assert_eq!(out.result.index, Some(3));
        assert_eq!(probes(&out), vec![4, 1, 2, 3]);
    }

    #[test]
    fn first_probe_is_lower_middle() {
        let out = binary_search(&ODDS, 9).unwrap();
        assert_eq!(probes(&out), vec![4]);
        assert_eq!(out.result.index, Some(4));
    }

    #[test]
    fn missing_below_range() {
        let out = binary_search(&ODDS, 0).unwrap();
        assert!(!out.result.found);
        assert_eq!(out.result.index, None);
    }

    #[test]
    fn rejects_unsorted() {
        let err = binary_search(&[3, 1, 2], 1).unwrap_err();
        assert!(matches!(err, StepError::InvalidInput { algorithm: "binary search", .. }));
    }

    #[test]
    fn empty_has_no_probes() {
        let out = binary_search(&[], 4).unwrap();
        assert!(probes(&out).is_empty());
        assert!(!out.result.found);
    }
}
