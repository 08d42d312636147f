//! 0/1 knapsack.
//!
//! Variables:
//!   dp[i][w] = best value using the first i items with capacity w
//!
//! Equations:
//!   dp[0][w] = 0
//!   wt[i-1] > w => dp[i][w] = dp[i-1][w]
//!   otherwise   => dp[i][w] = max(dp[i-1][w], dp[i-1][w - wt[i-1]] + val[i-1])
//!   backtrace: dp[i][w] != dp[i-1][w] => item i-1 taken, w -= wt[i-1]

use serde::{Deserialize, Serialize};

use super::{DpAction, DpStep, Tableau};
use crate::error::{add_total, StepError, StepResult};
use crate::trace::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub weight: i64,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knapsack {
    pub max_value: i64,
    pub total_weight: i64,
    /// Indices of the chosen items, ascending.
    pub items: Vec<usize>,
}

pub fn knapsack(items: &[Item], capacity: i64) -> StepResult<Outcome<DpStep, Knapsack>> {
    if capacity < 0 {
        return Err(StepError::invalid("0/1 knapsack", "capacity must be non-negative"));
    }
    if items.iter().any(|it| it.weight < 0 || it.value < 0) {
        return Err(StepError::invalid("0/1 knapsack", "weights and values must be non-negative"));
    }
    tracing::debug!(items = items.len(), capacity, "0/1 knapsack");

    let n = items.len();
    let cap = usize::try_from(capacity)
        .map_err(|_| StepError::invalid("0/1 knapsack", "capacity does not fit in memory"))?;
    let mut t = Tableau::new("0/1 knapsack", n + 1, cap.saturating_add(1))?;
    for w in 0..=cap {
        t.seed(0, w, 0);
    }

    for i in 1..=n {
        let Item { weight, value } = items[i - 1];
        for w in 0..=cap {
            let skip = t.get(i - 1, w);
            if weight > w as i64 {
                t.fill(i, w, skip, format!("Item {} (w={weight}) does not fit in {w}", i - 1));
            } else {
                let take = add_total("0/1 knapsack", t.get(i - 1, w - weight as usize), value)?;
                let best = skip.max(take);
                t.fill(i, w, best, format!("max(skip {skip}, take {take}) = {best}"));
            }
        }
    }

    let mut chosen = Vec::new();
    let mut w = cap;
    for i in (1..=n).rev() {
        let taken = t.get(i, w) != t.get(i - 1, w);
        t.record(
            DpAction::Backtrack { row: i, col: w, taken },
            if taken { format!("Item {} is in the knapsack", i - 1) } else { format!("Item {} is left out", i - 1) },
        );
        if taken {
            chosen.push(i - 1);
            w -= items[i - 1].weight as usize;
        }
    }
    chosen.reverse();

    let max_value = t.get(n, cap);
    let total_weight: i64 = chosen.iter().map(|&i| items[i].weight).sum();
    t.record(DpAction::Done, format!("Best value {max_value} with weight {total_weight}"));
    Ok(Outcome::new(t.steps, Knapsack { max_value, total_weight, items: chosen }))
}
