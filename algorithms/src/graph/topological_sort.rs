//! Topological orderings of a directed graph.
//!
//! DFS method:
//!   visit every unvisited vertex; push v on `finished` once all of its
//!   descendants are done; order = reverse(finished).
//!   No cycle detection: on a cyclic graph the order is still produced and is
//!   not a valid topological order. Callers must guarantee acyclicity.
//!
//! In-degree method (Kahn):
//!   indegree[v] = |{ u | (u, v) in E }|
//!   Q = { v | indegree[v] = 0 }
//!   pop u, emit u, for (u, v): indegree[v] -= 1, enqueue v at 0
//!   acyclic  <=>  |order| = V

use std::collections::VecDeque;

use super::dfs::Walk;
use super::{join_labels, Graph, TopologicalOrder, TraversalAction, TraversalStep, VertexId};
use crate::error::{StepError, StepResult};
use crate::trace::{Outcome, Trace};

fn require_directed(graph: &Graph, algorithm: &'static str) -> StepResult<()> {
    if graph.is_directed() {
        Ok(())
    } else {
        Err(StepError::invalid(algorithm, "graph must be directed"))
    }
}

pub fn topological_sort(graph: &Graph) -> StepResult<Outcome<TraversalStep, TopologicalOrder>> {
    require_directed(graph, "topological sort")?;
    tracing::debug!(vertices = graph.vertex_count(), "dfs topological sort");

    let mut walk = Walk::new(graph);
    let mut finished: Vec<VertexId> = Vec::new();
    for v in 0..graph.vertex_count() {
        if !walk.visited[v] {
            walk.visit(v, &mut |walk: &mut Walk<'_>, u: VertexId| {
                finished.push(u);
                walk.record(
                    TraversalAction::Finish { vertex: u },
                    format!("{} finished, push onto the stack", walk.graph.label(u)),
                );
            });
        }
    }

    let order: Vec<VertexId> = finished.iter().rev().copied().collect();
    walk.order = order.clone();
    walk.record(
        TraversalAction::Done,
        format!("Pop the stack for the order: {}", join_labels(graph, &order)),
    );
    Ok(Outcome::new(walk.steps, TopologicalOrder { order, acyclic: None }))
}

pub fn kahn(graph: &Graph) -> StepResult<Outcome<TraversalStep, TopologicalOrder>> {
    require_directed(graph, "kahn")?;
    tracing::debug!(vertices = graph.vertex_count(), "kahn topological sort");

    let mut indegree = graph.in_degrees();
    let mut queue: VecDeque<VertexId> = (0..graph.vertex_count()).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::new();
    let mut steps = Trace::new();

    let snapshot = |action, order: &[VertexId], queue: &VecDeque<VertexId>, description: String| TraversalStep {
        action,
        order: order.to_vec(),
        frontier: queue.iter().copied().collect(),
        description,
    };

    while let Some(u) = queue.pop_front() {
        order.push(u);
        steps.push(snapshot(
            TraversalAction::Visit { vertex: u },
            &order,
            &queue,
            format!("Dequeue {} (in-degree 0)", graph.label(u)),
        ));
        for hop in graph.neighbours(u) {
            indegree[hop.to] -= 1;
            steps.push(snapshot(
                TraversalAction::InDegree { vertex: hop.to, in_degree: indegree[hop.to] },
                &order,
                &queue,
                format!("In-degree of {} drops to {}", graph.label(hop.to), indegree[hop.to]),
            ));
            if indegree[hop.to] == 0 {
                queue.push_back(hop.to);
                steps.push(snapshot(
                    TraversalAction::Discover { from: u, to: hop.to },
                    &order,
                    &queue,
                    format!("Enqueue {}", graph.label(hop.to)),
                ));
            }
        }
    }

    let acyclic = order.len() == graph.vertex_count();
    let description = if acyclic {
        format!("Topological order: {}", join_labels(graph, &order))
    } else {
        tracing::warn!(placed = order.len(), vertices = graph.vertex_count(), "cycle prevents a full order");
        format!(
            "Only {} of {} vertices placed: the graph has a cycle",
            order.len(),
            graph.vertex_count()
        )
    };
    steps.push(snapshot(TraversalAction::Done, &order, &queue, description));
    Ok(Outcome::new(steps, TopologicalOrder { order, acyclic: Some(acyclic) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dag() -> Graph {
        // 5 -> 2, 5 -> 0, 4 -> 0, 4 -> 1, 2 -> 3, 3 -> 1
        Graph::from_edges(6, true, &[(5, 2, 1), (5, 0, 1), (4, 0, 1), (4, 1, 1), (2, 3, 1), (3, 1, 1)]).unwrap()
    }

    fn respects_edges(g: &Graph, order: &[VertexId]) -> bool {
        let pos: Vec<usize> = (0..g.vertex_count())
            .map(|v| order.iter().position(|&x| x == v).unwrap())
            .collect();
        g.edges().iter().all(|e| pos[e.from] < pos[e.to])
    }

    #[test]
    fn dfs_order_is_reverse_finish() {
        let g = dag();
        let out = topological_sort(&g).unwrap();
        assert_eq!(out.result.order, vec![5, 4, 2, 3, 1, 0]);
        assert!(respects_edges(&g, &out.result.order));
        assert_eq!(out.result.acyclic, None);
    }

    #[test]
    fn kahn_order() {
        let g = dag();
        let out = kahn(&g).unwrap();
        assert_eq!(out.result.order, vec![4, 5, 2, 0, 3, 1]);
        assert!(respects_edges(&g, &out.result.order));
        assert_eq!(out.result.acyclic, Some(true));
    }

    #[test]
    fn kahn_reports_cycle() {
        let g = Graph::from_edges(3, true, &[(0, 1, 1), (1, 2, 1), (2, 1, 1)]).unwrap();
        let out = kahn(&g).unwrap();
        assert_eq!(out.result.order, vec![0]);
        assert_eq!(out.result.acyclic, Some(false));
    }

    #[test]
    fn dfs_method_does_not_detect_cycles() {
        let g = Graph::from_edges(2, true, &[(0, 1, 1), (1, 0, 1)]).unwrap();
        let out = topological_sort(&g).unwrap();
        assert_eq!(out.result.order.len(), 2);
    }

    #[test]
    fn undirected_is_invalid() {
        let g = Graph::with_vertices(2, false);
        assert!(topological_sort(&g).is_err());
        assert!(kahn(&g).is_err());
    }
}
