//! Activity selection: earliest finish first.
//!
//! Equations:
//!   order = activities sorted by finish ascending (stable)
//!   accept a  <=>  a.start >= finish of the last accepted activity

use serde::{Deserialize, Serialize};

use super::{GreedyAction, GreedyStep};
use crate::error::{StepError, StepResult};
use crate::trace::{Outcome, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub start: i64,
    pub finish: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Input indices of the accepted activities, by finish time.
    pub selected: Vec<usize>,
}

pub fn activity_selection(activities: &[Activity]) -> StepResult<Outcome<GreedyStep, Selection>> {
    if let Some(i) = activities.iter().position(|a| a.finish < a.start) {
        return Err(StepError::invalid("activity selection", format!("activity {i} finishes before it starts")));
    }
    tracing::debug!(activities = activities.len(), "activity selection");

    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&i| activities[i].finish);

    let mut steps = Trace::new();
    let mut chosen: Vec<usize> = Vec::new();
    steps.push(GreedyStep {
        action: GreedyAction::Sorted { order: order.clone() },
        chosen: Vec::new(),
        description: "Sort activities by finish time".to_string(),
    });

    let mut last_finish: Option<i64> = None;
    for i in order {
        let Activity { start, finish } = activities[i];
        let fits = last_finish.map_or(true, |f| start >= f);
        if fits {
            chosen.push(i);
            last_finish = Some(finish);
            steps.push(GreedyStep {
                action: GreedyAction::Select { item: i },
                chosen: chosen.clone(),
                description: format!("Select activity {i} [{start}, {finish})"),
            });
        } else {
            steps.push(GreedyStep {
                action: GreedyAction::Reject { item: i },
                chosen: chosen.clone(),
                description: format!("Activity {i} starts at {start}, before the last finish"),
            });
        }
    }

    steps.push(GreedyStep {
        action: GreedyAction::Done,
        chosen: chosen.clone(),
        description: format!("{} activities selected", chosen.len()),
    });
    Ok(Outcome::new(steps, Selection { selected: chosen }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acts(pairs: &[(i64, i64)]) -> Vec<Activity> {
        pairs.iter().map(|&(start, finish)| Activity { start, finish }).collect()
    }

    #[test]
    fn classic_instance() {
        let a = acts(&[(1, 2), (3, 4), (0, 6), (5, 7), (8, 9), (5, 9)]);
        let out = activity_selection(&a).unwrap();
        assert_eq!(out.result.selected, vec![0, 1, 3, 4]);
    }

    #[test]
    fn touching_intervals_are_compatible() {
        let out = activity_selection(&acts(&[(0, 2), (2, 4)])).unwrap();
        assert_eq!(out.result.selected, vec![0, 1]);
    }

    #[test]
    fn equal_finish_keeps_input_order() {
        let out = activity_selection(&acts(&[(1, 3), (0, 3)])).unwrap();
        assert_eq!(out.result.selected, vec![0]);
    }

    #[test]
    fn rejects_inverted_interval() {
        assert!(activity_selection(&acts(&[(5, 1)])).is_err());
    }
}
