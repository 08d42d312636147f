//! Jump search.
//!
//! Variables:
//!   m = floor(sqrt(n)), the block size
//!
//! Equations:
//!   jump while a[min(step, n) - 1] < t: prev = step, step += m
//!   prev >= n => not found
//!   scan a[prev .. min(step, n)] linearly

use super::{finish, step, SearchAction, SearchOutcome};
use crate::error::StepResult;
use crate::invariant::{require, Sorted};
use crate::trace::Trace;

pub fn block_size(n: usize) -> usize {
    ((n as f64).sqrt() as usize).max(1)
}

pub fn jump_search(array: &[i64], target: i64) -> StepResult<SearchOutcome> {
    require("jump search", Sorted, array)?;
    let n = array.len();
    let mut steps = Trace::new();
    if n == 0 {
        return Ok(finish(steps, target, None));
    }
    let m = block_size(n);
    tracing::debug!(len = n, target, block = m, "jump search");

    let mut prev = 0;
    let mut end = m;
    loop {
        let check = end.min(n) - 1;
        if array[check] >= target {
            break;
        }
        step(
            &mut steps,
            SearchAction::Jump { index: check, block_start: prev },
            Some((prev, check)),
            format!("array[{check}] = {} < {target}: jump to the next block", array[check]),
        );
        prev = end;
        end += m;
        if prev >= n {
            return Ok(finish(steps, target, None));
        }
    }

    let last = end.min(n) - 1;
    for index in prev..=last {
        let value = array[index];
        step(
            &mut steps,
            SearchAction::Scan { index },
            Some((index, last)),
            format!("array[{index}] = {value} {} {target}", if value == target { "==" } else { "!=" }),
        );
        if value == target {
            return Ok(finish(steps, target, Some(index)));
        }
        if value > target {
            break;
        }
    }
    Ok(finish(steps, target, None))
}
