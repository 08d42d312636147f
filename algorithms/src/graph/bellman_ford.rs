//! Bellman-Ford single-source shortest paths.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = every adjacency hop (u, v, weight); undirected edges in both directions
//!   dist[v] = shortest known distance from source to v
//!   INF     = Distance::Infinite (sentinel for unreachable)
//!
//! Equations:
//!   Initialise: dist[source] = 0,  dist[v] = INF  for v != source
//!
//!   Relax (repeated V-1 times, stop early on a pass with no update):
//!     for each (u, v, w) in E:
//!       dist[v] = min(dist[v], dist[u] + w)
//!
//!   Negative cycle detection (pass V):
//!     if any edge still relaxes => negative cycle exists
//!
//!   Complexity: O(V * E)

use super::{Distance, Graph, PathAction, PathStep, ShortestPaths, VertexId};
use crate::error::StepResult;
use crate::trace::{Outcome, Trace};

pub fn bellman_ford(graph: &Graph, source: VertexId) -> StepResult<Outcome<PathStep, ShortestPaths>> {
    graph.require_vertex("bellman-ford", source)?;
    tracing::debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), source, "bellman-ford");

    let v = graph.vertex_count();
    let mut dist = vec![Distance::Infinite; v];
    let mut prev = vec![None; v];
    let mut steps = Trace::new();

    dist[source] = Distance::Finite(0);
    steps.push(PathStep {
        action: PathAction::Init { source },
        distances: dist.clone(),
        description: format!("Distance to {} is 0, all others ∞", graph.label(source)),
    });

    for iteration in 1..v {
        steps.push(PathStep {
            action: PathAction::Pass { iteration },
            distances: dist.clone(),
            description: format!("Pass {iteration} of {}: relax every edge", v - 1),
        });

        let mut updated = false;
        for u in 0..v {
            if !dist[u].is_finite() {
                continue;
            }
            for hop in graph.neighbours(u) {
                let candidate = dist[u].extend(hop.weight);
                if candidate < dist[hop.to] {
                    let previous = dist[hop.to];
                    dist[hop.to] = candidate;
                    prev[hop.to] = Some(u);
                    updated = true;
                    steps.push(PathStep {
                        action: PathAction::Relax { from: u, to: hop.to, weight: hop.weight, previous, updated: candidate },
                        distances: dist.clone(),
                        description: format!(
                            "Relax {}->{}: {} + {} = {} < {}",
                            graph.label(u),
                            graph.label(hop.to),
                            dist[u],
                            hop.weight,
                            candidate,
                            previous
                        ),
                    });
                } else {
                    steps.push(PathStep {
                        action: PathAction::Keep { from: u, to: hop.to, weight: hop.weight },
                        distances: dist.clone(),
                        description: format!("No improvement for {} via {}", graph.label(hop.to), graph.label(u)),
                    });
                }
            }
        }

        if !updated {
            break;
        }
    }

    // V-th pass: negative cycle check
    let mut negative_cycle = false;
    'check: for u in 0..v {
        if !dist[u].is_finite() {
            continue;
        }
        for hop in graph.neighbours(u) {
            if dist[u].extend(hop.weight) < dist[hop.to] {
                tracing::warn!(from = u, to = hop.to, "negative cycle reachable from source");
                steps.push(PathStep {
                    action: PathAction::NegativeCycle { from: u, to: hop.to },
                    distances: dist.clone(),
                    description: format!(
                        "Edge {}->{} still relaxes: negative cycle detected",
                        graph.label(u),
                        graph.label(hop.to)
                    ),
                });
                negative_cycle = true;
                break 'check;
            }
        }
    }

    if !negative_cycle {
        steps.push(PathStep {
            action: PathAction::Done,
            distances: dist.clone(),
            description: "No edge can be relaxed further".to_string(),
        });
    }
    Ok(Outcome::new(
        steps,
        ShortestPaths { source, distances: dist, predecessors: prev, negative_cycle },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_negative_edges() {
        let g = Graph::from_edges(4, true, &[(0, 1, 4), (0, 2, 5), (1, 3, 3), (2, 1, -2)]).unwrap();
        let out = bellman_ford(&g, 0).unwrap();
        assert!(!out.result.negative_cycle);
        let d: Vec<_> = out.result.distances.iter().map(|d| d.value()).collect();
        assert_eq!(d, vec![Some(0), Some(3), Some(5), Some(6)]);
        assert_eq!(out.steps.last().unwrap().action, PathAction::Done);
    }

    #[test]
    fn flags_negative_cycle_and_halts() {
        let g = Graph::from_edges(3, true, &[(0, 1, 1), (1, 2, -1), (2, 1, -1)]).unwrap();
        let out = bellman_ford(&g, 0).unwrap();
        assert!(out.result.negative_cycle);
        assert!(matches!(out.steps.last().unwrap().action, PathAction::NegativeCycle { .. }));
        assert_eq!(out.result.path_to(2), None);
    }

    #[test]
    fn stops_early_when_stable() {
        let g = Graph::from_edges(5, true, &[(0, 1, 1)]).unwrap();
        let out = bellman_ford(&g, 0).unwrap();
        let passes = out.steps.iter().filter(|s| matches!(s.action, PathAction::Pass { .. })).count();
        assert_eq!(passes, 2);
    }

    #[test]
    fn single_vertex() {
        let g = Graph::with_vertices(1, true);
        let out = bellman_ford(&g, 0).unwrap();
        assert_eq!(out.result.distances, vec![Distance::Finite(0)]);
    }
}
