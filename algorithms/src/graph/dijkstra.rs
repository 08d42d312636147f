//! Dijkstra single-source shortest paths, array-scan variant.
//!
//! Variables:
//!   dist[v]  = tentative distance from source, INF until reached
//!   done[v]  = v's distance is final
//!
//! Equations:
//!   each round: u = argmin { dist[v] | !done[v], dist[v] < INF }   (O(V) scan)
//!               done[u] = true
//!               for (u, v, w): dist[v] = min(dist[v], dist[u] + w)
//!   Complexity: O(V^2 + E), requires w >= 0

use super::{Distance, Graph, PathAction, PathStep, ShortestPaths, VertexId};
use crate::error::{StepError, StepResult};
use crate::trace::{Outcome, Trace};

pub fn dijkstra(graph: &Graph, source: VertexId) -> StepResult<Outcome<PathStep, ShortestPaths>> {
    graph.require_vertex("dijkstra", source)?;
    if graph.has_negative_weight() {
        return Err(StepError::invalid("dijkstra", "edge weights must be non-negative"));
    }
    tracing::debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), source, "dijkstra");

    let n = graph.vertex_count();
    let mut dist = vec![Distance::Infinite; n];
    let mut prev = vec![None; n];
    let mut done = vec![false; n];
    let mut steps = Trace::new();

    dist[source] = Distance::Finite(0);
    steps.push(PathStep {
        action: PathAction::Init { source },
        distances: dist.clone(),
        description: format!("Distance to {} is 0, all others ∞", graph.label(source)),
    });

    loop {
        let next = (0..n)
            .filter(|&v| !done[v] && dist[v].is_finite())
            .min_by_key(|&v| dist[v]);
        let Some(u) = next else { break };
        done[u] = true;
        steps.push(PathStep {
            action: PathAction::Select { vertex: u, distance: dist[u] },
            distances: dist.clone(),
            description: format!("Select {} with smallest tentative distance {}", graph.label(u), dist[u]),
        });

        for hop in graph.neighbours(u) {
            if done[hop.to] {
                continue;
            }
            let candidate = dist[u].extend(hop.weight);
            if candidate < dist[hop.to] {
                let previous = dist[hop.to];
                dist[hop.to] = candidate;
                prev[hop.to] = Some(u);
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
                    description: format!(
                        "Keep {}: {} + {} is not below {}",
                        graph.label(hop.to),
                        dist[u],
                        hop.weight,
                        dist[hop.to]
                    ),
                });
            }
        }
    }

    steps.push(PathStep {
        action: PathAction::Done,
        distances: dist.clone(),
        description: "All reachable vertices settled".to_string(),
    });
    Ok(Outcome::new(
        steps,
        ShortestPaths { source, distances: dist, predecessors: prev, negative_cycle: false },
    ))
}
