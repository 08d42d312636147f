//! Exponential search: double a bound, then binary search the last range.
//!
//! Equations:
//!   a[0] == t => found at 0
//!   bound = 1; while bound < n and a[bound] < t: bound *= 2
//!   binary search over [bound / 2, min(bound, n - 1)]

use super::binary_search::probe_range;
use super::{finish, step, SearchAction, SearchOutcome};
use crate::error::StepResult;
use crate::invariant::{require, Sorted};
use crate::trace::Trace;

pub fn exponential_search(array: &[i64], target: i64) -> StepResult<SearchOutcome> {
    require("exponential search", Sorted, array)?;
    tracing::debug!(len = array.len(), target, "exponential search");
    let n = array.len();
    let mut steps = Trace::new();
    if n == 0 {
        return Ok(finish(steps, target, None));
    }

    step(
        &mut steps,
        SearchAction::Check { index: 0 },
        Some((0, n - 1)),
        format!("array[0] = {} {} {target}", array[0], if array[0] == target { "==" } else { "!=" }),
    );
    if array[0] == target {
        return Ok(finish(steps, target, Some(0)));
    }

    let mut bound = 1;
    while bound < n && array[bound] < target {
        step(
            &mut steps,
            SearchAction::Bound { bound },
            Some((bound, n - 1)),
            format!("array[{bound}] = {} < {target}: double the bound to {}", array[bound], bound * 2),
        );
        bound *= 2;
    }

    let left = bound / 2;
    let right = bound.min(n - 1);
    step(
        &mut steps,
        SearchAction::Range { left, right },
        Some((left, right)),
        format!("Binary search in [{left}, {right}]"),
    );
    let found = probe_range(array, target, left, right, &mut steps);
    Ok(finish(steps, target, found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_then_binary_searches() {
        let array: Vec<i64> = (1..=20).collect();
        let out = exponential_search(&array, 13).unwrap();
        assert_eq!(out.result.index, Some(12));
        let bounds: Vec<usize> = out
            .steps
            .iter()
            .filter_map(|s| match s.action {
                SearchAction::Bound { bound } => Some(bound),
                _ => None,
            })
            .collect();
        assert_eq!(bounds, vec![1, 2, 4, 8]);
        assert!(out.steps.iter().any(|s| s.action == SearchAction::Range { left: 8, right: 16 }));
    }

    #[test]
    fn first_element_short_circuits() {
        let out = exponential_search(&[5, 6, 7], 5).unwrap();
        assert_eq!(out.result.index, Some(0));
        assert_eq!(out.steps.len(), 2);
    }

    #[test]
    fn range_is_clamped_to_length() {
        let out = exponential_search(&[1, 2, 3, 4, 5], 100).unwrap();
        assert!(!out.result.found);
        assert!(out.steps.iter().any(|s| s.action == SearchAction::Range { left: 4, right: 4 }));
    }
}
