//! Prim minimum spanning tree, array-scan variant.
//!
//! Variables:
//!   key[v]      = cheapest known edge weight connecting v to the tree, INF if none
//!   min_edge[v] = the edge achieving key[v]
//!   in_tree[v]  = v already joined
//!
//! Equations:
//!   key[start] = 0
//!   each round: u = argmin { key[v] | !in_tree[v], key[v] < INF }
//!               in_tree[u] = true, add min_edge[u]
//!               for (u, v, w), !in_tree[v]: w < key[v] => key[v] = w, min_edge[v] = (u, v)
//!   Complexity: O(V^2 + E). Only the component of `start` is spanned.

use super::{edge_label, Distance, Edge, Graph, SpanningAction, SpanningStep, SpanningTree, VertexId};
use crate::error::{add_total, StepError, StepResult};
use crate::trace::{Outcome, Trace};

pub fn prim(graph: &Graph, start: VertexId) -> StepResult<Outcome<SpanningStep, SpanningTree>> {
    if graph.is_directed() {
        return Err(StepError::invalid("prim", "graph must be undirected"));
    }
    graph.require_vertex("prim", start)?;
    tracing::debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), start, "prim");

    let n = graph.vertex_count();
    let mut key = vec![Distance::Infinite; n];
    let mut min_edge: Vec<Option<Edge>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut tree = Vec::new();
    let mut total = 0i64;
    let mut steps = Trace::new();

    key[start] = Distance::Finite(0);

    loop {
        let next = (0..n)
            .filter(|&v| !in_tree[v] && key[v].is_finite())
            .min_by_key(|&v| key[v]);
        let Some(u) = next else { break };
        in_tree[u] = true;
        let via = min_edge[u];
        if let Some(edge) = via {
            tree.push(edge);
            total = add_total("prim", total, edge.cost())?;
        }
        steps.push(SpanningStep {
            action: SpanningAction::Select { vertex: u, via },
            tree: tree.clone(),
            total_weight: total,
            description: match via {
                Some(edge) => format!("Add {} through {}", graph.label(u), edge_label(graph, &edge)),
                None => format!("Start the tree at {}", graph.label(u)),
            },
        });

        for hop in graph.neighbours(u) {
            if in_tree[hop.to] {
                continue;
            }
            if Distance::Finite(hop.weight) < key[hop.to] {
                let edge = graph.edges()[hop.edge];
                key[hop.to] = Distance::Finite(hop.weight);
                min_edge[hop.to] = Some(edge);
                steps.push(SpanningStep {
                    action: SpanningAction::Update { vertex: hop.to, edge },
                    tree: tree.clone(),
                    total_weight: total,
                    description: format!(
                        "Cheapest link to {} is now {}",
                        graph.label(hop.to),
                        edge_label(graph, &edge)
                    ),
                });
            }
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
    fn matches_textbook_weight() {
        let g = Graph::from_edges(
            5,
            false,
            &[(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 4, 5), (2, 3, 3), (2, 4, 6), (3, 4, 2)],
        )
        .unwrap();
        let out = prim(&g, 0).unwrap();
        assert_eq!(out.result.total_weight, 8);
        assert_eq!(out.result.edges.len(), 4);
    }

    #[test]
    fn spans_only_start_component() {
        let g = Graph::from_edges(4, false, &[(0, 1, 3), (2, 3, 1)]).unwrap();
        let out = prim(&g, 2).unwrap();
        assert_eq!(out.result.total_weight, 1);
        assert_eq!(out.result.edges, vec![Edge::new(2, 3, Some(1))]);
    }

    #[test]
    fn first_select_is_root() {
        let g = Graph::from_edges(2, false, &[(0, 1, 9)]).unwrap();
        let out = prim(&g, 1).unwrap();
        assert_eq!(out.steps.first().unwrap().action, SpanningAction::Select { vertex: 1, via: None });
    }

    #[test]
    fn overflowing_total_is_invalid() {
        let g = Graph::from_edges(3, false, &[(0, 1, i64::MAX), (1, 2, i64::MAX)]).unwrap();
        assert_eq!(prim(&g, 0).unwrap_err(), StepError::invalid("prim", "total overflows i64"));
    }
}
