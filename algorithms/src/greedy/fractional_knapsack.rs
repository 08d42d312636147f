//! Fractional knapsack by value density.
//!
//! Equations:
//!   density(i) = value(i) / weight(i), consider by density descending (stable)
//!   weight(i) <= room => take all of i
//!   otherwise         => take room / weight(i) of i and stop

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{GreedyAction, GreedyStep};
use crate::error::{StepError, StepResult};
use crate::trace::{Outcome, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalItem {
    pub weight: f64,
    pub value: f64,
}

impl FractionalItem {
    pub fn density(&self) -> f64 {
        self.value / self.weight
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    pub item: usize,
    /// In `(0, 1]`.
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionalKnapsack {
    pub total_value: f64,
    pub taken: Vec<Portion>,
}

fn validate(items: &[FractionalItem], capacity: f64) -> StepResult<()> {
    const NAME: &str = "fractional knapsack";
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(StepError::invalid(NAME, "capacity must be a non-negative number"));
    }
    for (i, it) in items.iter().enumerate() {
        if !it.weight.is_finite() || it.weight <= 0.0 {
            return Err(StepError::invalid(NAME, format!("item {i} must have a positive weight")));
        }
        if !it.value.is_finite() || it.value < 0.0 {
            return Err(StepError::invalid(NAME, format!("item {i} must have a non-negative value")));
        }
    }
    Ok(())
}

pub fn fractional_knapsack(
    items: &[FractionalItem],
    capacity: f64,
) -> StepResult<Outcome<GreedyStep, FractionalKnapsack>> {
    validate(items, capacity)?;
    tracing::debug!(items = items.len(), capacity, "fractional knapsack");

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].density().partial_cmp(&items[a].density()).unwrap_or(Ordering::Equal));

    let mut steps = Trace::new();
    let mut chosen: Vec<usize> = Vec::new();
    let mut taken = Vec::new();
    let mut room = capacity;
    let mut total = 0.0;
    steps.push(GreedyStep {
        action: GreedyAction::Sorted { order: order.clone() },
        chosen: Vec::new(),
        description: "Sort items by value per unit weight".to_string(),
    });

    for i in order {
        if room <= 0.0 {
            break;
        }
        let FractionalItem { weight, value } = items[i];
        chosen.push(i);
        if weight <= room {
            room -= weight;
            total += value;
            taken.push(Portion { item: i, fraction: 1.0 });
            steps.push(GreedyStep {
                action: GreedyAction::Select { item: i },
                chosen: chosen.clone(),
                description: format!("Take all of item {i}: +{value}, {room} capacity left"),
            });
        } else {
            let fraction = room / weight;
            total += value * fraction;
            room = 0.0;
            taken.push(Portion { item: i, fraction });
            steps.push(GreedyStep {
                action: GreedyAction::Partial { item: i, fraction },
                chosen: chosen.clone(),
                description: format!("Take {:.2}% of item {i}: +{}", fraction * 100.0, value * fraction),
            });
        }
    }

    steps.push(GreedyStep {
        action: GreedyAction::Done,
        chosen: chosen.clone(),
        description: format!("Total value {total}"),
    });
    Ok(Outcome::new(steps, FractionalKnapsack { total_value: total, taken }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(f64, f64)]) -> Vec<FractionalItem> {
        pairs.iter().map(|&(weight, value)| FractionalItem { weight, value }).collect()
    }

    #[test]
    fn classic_instance() {
        let out = fractional_knapsack(&items(&[(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)]), 50.0).unwrap();
        assert!((out.result.total_value - 240.0).abs() < 1e-9);
        let last = out.result.taken.last().unwrap();
        assert_eq!(last.item, 2);
        assert!((last.fraction - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn everything_fits() {
        let out = fractional_knapsack(&items(&[(1.0, 1.0), (2.0, 5.0)]), 10.0).unwrap();
        assert_eq!(out.result.taken.len(), 2);
        assert_eq!(out.result.taken[0].item, 1);
        assert!((out.result.total_value - 6.0).abs() < 1e-9);
    }

    #[test]
    fn zero_capacity_takes_nothing() {
        let out = fractional_knapsack(&items(&[(1.0, 1.0)]), 0.0).unwrap();
        assert!(out.result.taken.is_empty());
    }

    #[test]
    fn rejects_bad_items() {
        assert!(fractional_knapsack(&items(&[(0.0, 1.0)]), 5.0).is_err());
        assert!(fractional_knapsack(&items(&[(1.0, -1.0)]), 5.0).is_err());
        assert!(fractional_knapsack(&items(&[(1.0, 1.0)]), -5.0).is_err());
    }
}
