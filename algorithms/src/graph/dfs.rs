use super::{join_labels, Graph, TraversalAction, TraversalStep, VertexId, VisitOrder};
use crate::error::StepResult;
use crate::trace::{Outcome, Trace};

/// Recursive depth-first walk state. `stack` is the active recursion path,
/// deepest vertex last.
pub(crate) struct Walk<'g> {
    pub graph: &'g Graph,
    pub visited: Vec<bool>,
    pub order: Vec<VertexId>,
    pub stack: Vec<VertexId>,
    pub steps: Trace<TraversalStep>,
}

impl<'g> Walk<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            order: Vec::new(),
            stack: Vec::new(),
            steps: Trace::new(),
        }
    }

    pub fn record(&mut self, action: TraversalAction, description: String) {
        self.steps.push(TraversalStep {
            action,
            order: self.order.clone(),
            frontier: self.stack.iter().rev().copied().collect(),
            description,
        });
    }

    /// Pre-order visit of everything reachable from `node`. `on_finish` runs
    /// once all descendants of a vertex are done.
    pub fn visit(&mut self, node: VertexId, on_finish: &mut dyn FnMut(&mut Self, VertexId)) {
        let graph = self.graph;
        self.visited[node] = true;
        self.order.push(node);
        self.stack.push(node);
        self.record(TraversalAction::Visit { vertex: node }, format!("Visit {}", graph.label(node)));

        for n in graph.neighbours(node) {
            if self.visited[n.to] {
                self.record(
                    TraversalAction::Skip { from: node, to: n.to },
                    format!("{} already visited", graph.label(n.to)),
                );
            } else {
                self.record(
                    TraversalAction::Discover { from: node, to: n.to },
                    format!("Go deeper from {} to {}", graph.label(node), graph.label(n.to)),
                );
                self.visit(n.to, on_finish);
            }
        }

        self.stack.pop();
        on_finish(self, node);
    }
}

pub fn dfs(graph: &Graph, start: VertexId) -> StepResult<Outcome<TraversalStep, VisitOrder>> {
    graph.require_vertex("depth-first search", start)?;
    tracing::debug!(vertices = graph.vertex_count(), start, "dfs");

    let mut walk = Walk::new(graph);
    walk.visit(start, &mut |walk: &mut Walk<'_>, v: VertexId| {
        walk.record(
            TraversalAction::Finish { vertex: v },
            format!("Backtrack from {}", walk.graph.label(v)),
        );
    });
    let order = walk.order.clone();
    walk.record(TraversalAction::Done, format!("DFS order: {}", join_labels(graph, &order)));
    Ok(Outcome::new(walk.steps, VisitOrder { order }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goes_deep_before_wide() {
        let g = Graph::from_edges(5, true, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1)]).unwrap();
        assert_eq!(dfs(&g, 0).unwrap().result.order, vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn finish_steps_are_post_order() {
        let g = Graph::from_edges(3, true, &[(0, 1, 1), (1, 2, 1)]).unwrap();
        let out = dfs(&g, 0).unwrap();
        let finished: Vec<_> = out
            .steps
            .iter()
            .filter_map(|s| match s.action {
                TraversalAction::Finish { vertex } => Some(vertex),
                _ => None,
            })
            .collect();
        assert_eq!(finished, vec![2, 1, 0]);
    }

    #[test]
    fn handles_cycles() {
        let g = Graph::from_edges(3, false, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        assert_eq!(dfs(&g, 1).unwrap().result.order, vec![1, 0, 2]);
    }
}
