//! Kruskal minimum spanning tree (forest on disconnected input).
//!
//! Equations:
//!   sort E ascending by weight (stable: equal weights keep insertion order)
//!   for (u, v, w) in E:
//!     find(u) != find(v) => accept, union(u, v)
//!     otherwise          => reject, the edge closes a cycle
//!   stop once |tree| = V - 1
//!   Complexity: O(E log E)

use super::{edge_label, Edge, Graph, SpanningAction, SpanningStep, SpanningTree};
use crate::data_structures::UnionFind;
use crate::error::{add_total, StepError, StepResult};
use crate::trace::{Outcome, Trace};

pub fn kruskal(graph: &Graph) -> StepResult<Outcome<SpanningStep, SpanningTree>> {
    if graph.is_directed() {
        return Err(StepError::invalid("kruskal", "graph must be undirected"));
    }
    tracing::debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "kruskal");

    let mut edges: Vec<Edge> = graph.edges().to_vec();
    edges.sort_by_key(|e| e.cost());

    let mut steps = Trace::new();
    let mut tree: Vec<Edge> = Vec::new();
    let mut total = 0i64;
    let mut sets = UnionFind::new(graph.vertex_count());
    let target = graph.vertex_count().saturating_sub(1);

    steps.push(SpanningStep {
        action: SpanningAction::Sorted { edges: edges.clone() },
        tree: Vec::new(),
        total_weight: 0,
        description: "Sort edges by ascending weight".to_string(),
    });

    for edge in edges {
        if tree.len() == target {
            break;
        }
        steps.push(SpanningStep {
            action: SpanningAction::Consider { edge },
            tree: tree.clone(),
            total_weight: total,
            description: format!("Consider {}", edge_label(graph, &edge)),
        });
        if sets.union(edge.from, edge.to) {
            tree.push(edge);
            total = add_total("kruskal", total, edge.cost())?;
            steps.push(SpanningStep {
                action: SpanningAction::Accept { edge },
                tree: tree.clone(),
                total_weight: total,
                description: format!("Accept {}: joins two components", edge_label(graph, &edge)),
            });
        } else {
            steps.push(SpanningStep {
                action: SpanningAction::Reject { edge },
                tree: tree.clone(),
                total_weight: total,
                description: format!("Reject {}: would form a cycle", edge_label(graph, &edge)),
            });
        }
    }

    steps.push(SpanningStep {
        action: SpanningAction::Done,
        tree: tree.clone(),
        total_weight: total,
        description: format!("Spanning tree weight {total} with {} edges", tree.len()),
    });
    Ok(Outcome::new(steps, SpanningTree { edges: tree, total_weight: total }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_five_vertex_graph() {
        // A..E: AB:4, AC:2, BC:1, BE:5, CD:3, CE:6, DE:2
        let g = Graph::from_edges(
            5,
            false,
            &[(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 4, 5), (2, 3, 3), (2, 4, 6), (3, 4, 2)],
        )
        .unwrap();
        let out = kruskal(&g).unwrap();
        assert_eq!(out.result.total_weight, 8);
        assert_eq!(out.result.edges.len(), 4);
        let accepted: Vec<_> = out.result.edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(accepted, vec![(1, 2), (0, 2), (3, 4), (2, 3)]);
    }

    #[test]
    fn rejects_cycle_edges() {
        let g = Graph::from_edges(4, false, &[(0, 1, 1), (1, 2, 2), (0, 2, 3), (2, 3, 4)]).unwrap();
        let out = kruskal(&g).unwrap();
        assert_eq!(out.result.total_weight, 7);
        assert!(out.steps.iter().any(|s| matches!(s.action, SpanningAction::Reject { .. })));
    }

    #[test]
    fn directed_graph_is_invalid() {
        let g = Graph::with_vertices(2, true);
        assert!(kruskal(&g).is_err());
    }

    #[test]
    fn empty_graph() {
        let out = kruskal(&Graph::new(false)).unwrap();
        assert_eq!(out.result.total_weight, 0);
        assert!(out.result.edges.is_empty());
    }

    #[test]
    fn overflowing_total_is_invalid() {
        let g = Graph::from_edges(3, false, &[(0, 1, i64::MAX), (1, 2, i64::MAX)]).unwrap();
        assert_eq!(kruskal(&g).unwrap_err(), StepError::invalid("kruskal", "total overflows i64"));
    }
}
