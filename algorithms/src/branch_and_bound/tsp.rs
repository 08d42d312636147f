//! Travelling salesman by depth-first branch and bound.
//!
//! Variables:
//!   d[i][j] = travel cost i -> j, non-negative
//!   best    = cheapest complete tour seen so far
//!
//! Equations:
//!   tours start and end at city 0
//!   extend path with unvisited c:  cost' = cost + d[last][c]
//!   prune when cost' >= best, no extension of it can beat best
//!   complete tour: total = cost + d[last][0], replace best only when total < best

use serde::{Deserialize, Serialize};

use crate::error::{StepError, StepResult};
use crate::invariant::{require, SquareMatrix};
use crate::trace::{Outcome, Trace};

/// Largest instance the exhaustive search accepts.
pub const MAX_CITIES: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TspAction {
    Extend { city: usize, cost: i64 },
    Prune { city: usize, cost: i64, best: i64 },
    /// Complete tour closed back to city 0.
    Tour { cost: i64, improved: bool },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TspStep {
    pub action: TspAction,
    pub path: Vec<usize>,
    pub best: Option<i64>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub cost: i64,
    /// Starts and ends at city 0.
    pub tour: Vec<usize>,
}

struct Search<'a> {
    dist: &'a [Vec<i64>],
    path: Vec<usize>,
    visited: Vec<bool>,
    best: Option<Tour>,
    steps: Trace<TspStep>,
}

impl Search<'_> {
    fn record(&mut self, action: TspAction, description: String) {
        self.steps.push(TspStep {
            action,
            path: self.path.clone(),
            best: self.best.as_ref().map(|t| t.cost),
            description,
        });
    }

    fn explore(&mut self, cost: i64) {
        let n = self.dist.len();
        let last = self.path[self.path.len() - 1];

        if self.path.len() == n {
            let total = cost.saturating_add(self.dist[last][0]);
            let improved = self.best.as_ref().map_or(true, |b| total < b.cost);
            if improved {
                let mut tour = self.path.clone();
                tour.push(0);
                self.best = Some(Tour { cost: total, tour });
            }
            self.record(
                TspAction::Tour { cost: total, improved },
                if improved { format!("New best tour costs {total}") } else { format!("Tour costs {total}, no better") },
            );
            return;
        }

        for city in 1..n {
            if self.visited[city] {
                continue;
            }
            let next = cost.saturating_add(self.dist[last][city]);
            if let Some(best) = self.best.as_ref().map(|b| b.cost) {
                if next >= best {
                    self.record(
                        TspAction::Prune { city, cost: next, best },
                        format!("Going to city {city} costs {next}, best is {best}: prune"),
                    );
                    continue;
                }
            }
            self.visited[city] = true;
            self.path.push(city);
            self.record(TspAction::Extend { city, cost: next }, format!("Visit city {city}, cost so far {next}"));
            self.explore(next);
            self.path.pop();
            self.visited[city] = false;
        }
    }
}

pub fn tsp(dist: &[Vec<i64>]) -> StepResult<Outcome<TspStep, Tour>> {
    require("tsp", SquareMatrix, dist)?;
    if dist.len() > MAX_CITIES {
        return Err(StepError::invalid("tsp", format!("at most {MAX_CITIES} cities are supported")));
    }
    if dist.iter().flatten().any(|&d| d < 0) {
        return Err(StepError::invalid("tsp", "distances must be non-negative"));
    }
    tracing::debug!(cities = dist.len(), "tsp branch and bound");

    let mut search = Search {
        dist,
        path: vec![0],
        visited: vec![false; dist.len()],
        best: None,
        steps: Trace::new(),
    };
    search.visited[0] = true;
    search.explore(0);

    let Some(best) = search.best.take() else {
        return Err(StepError::invalid("tsp", "no tour found"));
    };
    search.path = best.tour.clone();
    search.record(TspAction::Done, format!("Optimal tour costs {}", best.cost));
    Ok(Outcome::new(search.steps, best))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_cities() -> Vec<Vec<i64>> {
        vec![vec![0, 10, 15, 20], vec![10, 0, 35, 25], vec![15, 35, 0, 30], vec![20, 25, 30, 0]]
    }

    #[test]
    fn classic_four_city_tour() {
        let out = tsp(&four_cities()).unwrap();
        assert_eq!(out.result.cost, 80);
        assert_eq!(out.result.tour, vec![0, 1, 3, 2, 0]);
    }

    #[test]
    fn prunes_expensive_branches() {
        let out = tsp(&four_cities()).unwrap();
        assert!(out.steps.iter().any(|s| matches!(s.action, TspAction::Prune { .. })));
    }

    #[test]
    fn equal_cost_tour_does_not_replace_best() {
        let out = tsp(&four_cities()).unwrap();
        let improvements = out
            .steps
            .iter()
            .filter(|s| matches!(s.action, TspAction::Tour { improved: true, .. }))
            .count();
        // 95 via 0-1-2-3-0, then 80 via 0-1-3-2-0; the mirror 0-2-3-1-0 ties and is ignored
        assert_eq!(improvements, 2);
        assert!(out.steps.iter().any(|s| s.action == TspAction::Tour { cost: 80, improved: false }));
    }

    #[test]
    fn branch_matching_best_is_pruned() {
        let out = tsp(&four_cities()).unwrap();
        // 0-3-1 reaches 45 + 35 = 80 at city 2 before closing, equal to the best
        assert!(out.steps.iter().any(|s| s.action == TspAction::Prune { city: 2, cost: 80, best: 80 }));
    }

    #[test]
    fn zero_matrix_stops_after_first_tour() {
        let n = MAX_CITIES;
        let out = tsp(&vec![vec![0; n]; n]).unwrap();
        assert_eq!(out.result.cost, 0);
        let tours = out.steps.iter().filter(|s| matches!(s.action, TspAction::Tour { .. })).count();
        assert_eq!(tours, 1);
        assert!(out.steps.len() < n * n);
    }

    #[test]
    fn single_city() {
        let out = tsp(&[vec![0]]).unwrap();
        assert_eq!(out.result.tour, vec![0, 0]);
        assert_eq!(out.result.cost, 0);
    }

    #[test]
    fn rejects_non_square() {
        assert!(tsp(&[vec![0, 1], vec![1]]).is_err());
        assert!(tsp(&[]).is_err());
    }
}
