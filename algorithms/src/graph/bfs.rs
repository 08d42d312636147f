use std::collections::VecDeque;

use super::{join_labels, Graph, TraversalAction, TraversalStep, VertexId, VisitOrder};
use crate::error::StepResult;
use crate::trace::{Outcome, Trace};

pub fn bfs(graph: &Graph, start: VertexId) -> StepResult<Outcome<TraversalStep, VisitOrder>> {
    graph.require_vertex("breadth-first search", start)?;
    tracing::debug!(vertices = graph.vertex_count(), start, "bfs");

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    let mut steps = Trace::new();

    let snapshot = |action, order: &[VertexId], queue: &VecDeque<VertexId>, description: String| TraversalStep {
        action,
        order: order.to_vec(),
        frontier: queue.iter().copied().collect(),
        description,
    };

    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        steps.push(snapshot(
            TraversalAction::Visit { vertex: node },
            &order,
            &queue,
            format!("Dequeue {} and visit it", graph.label(node)),
        ));
        for n in graph.neighbours(node) {
            if visited[n.to] {
                steps.push(snapshot(
                    TraversalAction::Skip { from: node, to: n.to },
                    &order,
                    &queue,
                    format!("{} already discovered", graph.label(n.to)),
                ));
            } else {
                visited[n.to] = true;
                queue.push_back(n.to);
                steps.push(snapshot(
                    TraversalAction::Discover { from: node, to: n.to },
                    &order,
                    &queue,
                    format!("Enqueue {} (neighbour of {})", graph.label(n.to), graph.label(node)),
                ));
            }
        }
    }

    steps.push(snapshot(
        TraversalAction::Done,
        &order,
        &queue,
        format!("BFS order: {}", join_labels(graph, &order)),
    ));
    Ok(Outcome::new(steps, VisitOrder { order }))
}
