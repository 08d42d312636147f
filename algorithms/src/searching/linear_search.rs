use super::{finish, step, SearchAction, SearchOutcome};
use crate::trace::Trace;

/// Checks every element in order; any input order is accepted.
pub fn linear_search(array: &[i64], target: i64) -> SearchOutcome {
    tracing::debug!(len = array.len(), target, "linear search");
    let mut steps = Trace::new();
    let last = array.len().saturating_sub(1);

    for (index, &value) in array.iter().enumerate() {
        let hit = value == target;
        step(
            &mut steps,
            SearchAction::Check { index },
            Some((index, last)),
            format!("array[{index}] = {value} {} {target}", if hit { "==" } else { "!=" }),
        );
        if hit {
            return finish(steps, target, Some(index));
        }
    }
    finish(steps, target, None)
}
