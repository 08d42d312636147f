//! Strongly connected components (Kosaraju).
//!
//! Pass 1: DFS over the graph, push each vertex when it finishes.
//! Pass 2: DFS over the transposed graph, taking start vertices in reverse
//!         finish order; every tree grown from an untouched start is one SCC.
//!
//! Undirected input is accepted: transpose is the identity and the components
//! are the connected components.

use super::dfs::Walk;
use super::{join_labels, Components, Graph, TraversalAction, TraversalStep, VertexId};
use crate::trace::Outcome;

pub fn kosaraju(graph: &Graph) -> Outcome<TraversalStep, Components> {
    tracing::debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "kosaraju");

    let mut first = Walk::new(graph);
    let mut finished: Vec<VertexId> = Vec::with_capacity(graph.vertex_count());
    for v in 0..graph.vertex_count() {
        if !first.visited[v] {
            first.visit(v, &mut |walk: &mut Walk<'_>, u: VertexId| {
                finished.push(u);
                walk.record(
                    TraversalAction::Finish { vertex: u },
                    format!("{} finished, push onto the stack", walk.graph.label(u)),
                );
            });
        }
    }

    let transposed = graph.transpose();
    let mut second = Walk::new(&transposed);
    second.steps = std::mem::take(&mut first.steps);
    second.record(TraversalAction::Transpose, "Reverse every edge".to_string());

    let mut components: Vec<Vec<VertexId>> = Vec::new();
    for &v in finished.iter().rev() {
        if second.visited[v] {
            continue;
        }
        let mark = second.order.len();
        second.visit(v, &mut |_: &mut Walk<'_>, _: VertexId| {});
        let component = second.order[mark..].to_vec();
        second.record(
            TraversalAction::Component { index: components.len(), vertices: component.clone() },
            format!("Component {}: {}", components.len() + 1, join_labels(graph, &component)),
        );
        components.push(component);
    }

    second.record(TraversalAction::Done, format!("{} strongly connected components", components.len()));
    Outcome::new(second.steps, Components { components })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_three_components() {
        // {0,1,2} cycle, 2 -> 3, {3,4} cycle, 4 -> 5
        let g = Graph::from_edges(6, true, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1), (3, 4, 1), (4, 3, 1), (4, 5, 1)])
            .unwrap();
        let out = kosaraju(&g);
        let mut comps: Vec<Vec<VertexId>> = out
            .result
            .components
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.sort();
                c
            })
            .collect();
        comps.sort();
        assert_eq!(comps, vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
        // source component comes out first
        assert!(out.result.components[0].contains(&0));
    }

    #[test]
    fn transpose_step_separates_passes() {
        let g = Graph::from_edges(2, true, &[(0, 1, 1)]).unwrap();
        let out = kosaraju(&g);
        let t = out.steps.iter().position(|s| s.action == TraversalAction::Transpose).unwrap();
        assert!(out.steps.iter().take(t).all(|s| !matches!(s.action, TraversalAction::Component { .. })));
        assert_eq!(out.result.components, vec![vec![0], vec![1]]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let out = kosaraju(&Graph::new(true));
        assert!(out.result.components.is_empty());
        assert_eq!(out.steps.len(), 2);
    }
}
