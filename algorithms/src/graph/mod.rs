//! Graph steppers and the step records they emit.
//!
//! Traversals (BFS, DFS, topological orders, SCC) record [`TraversalStep`]s,
//! single-source shortest paths record [`PathStep`]s, Floyd-Warshall records
//! [`MatrixStep`]s and the spanning-tree builders record [`SpanningStep`]s.

pub mod adj_list;
pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod scc;
pub mod topological_sort;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use adj_list::{Edge, Graph, Neighbour, Position, Vertex, VertexId};
pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;
pub use kruskal::kruskal;
pub use prim::prim;
pub use scc::kosaraju;
pub use topological_sort::{kahn, topological_sort};

/// Tentative path length; every finite value orders below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Finite(i64),
    Infinite,
}

impl Distance {
    pub fn value(self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// `self + weight`, staying infinite when `self` is.
    pub fn extend(self, weight: i64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("∞"),
        }
    }
}

// ---------------------------------------------------------------------------
// Traversals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraversalAction {
    /// Vertex appended to the output order.
    Visit { vertex: VertexId },
    /// Unvisited neighbour pushed onto the frontier.
    Discover { from: VertexId, to: VertexId },
    /// Neighbour already seen.
    Skip { from: VertexId, to: VertexId },
    /// All descendants of `vertex` are done (post-order).
    Finish { vertex: VertexId },
    /// In-degree of `vertex` dropped to `in_degree`.
    InDegree { vertex: VertexId, in_degree: usize },
    /// Second Kosaraju pass starts on the transposed graph.
    Transpose,
    Component { index: usize, vertices: Vec<VertexId> },
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalStep {
    pub action: TraversalAction,
    /// Output order so far.
    pub order: Vec<VertexId>,
    /// Queue / stack contents, next to be processed first.
    pub frontier: Vec<VertexId>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitOrder {
    pub order: Vec<VertexId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologicalOrder {
    pub order: Vec<VertexId>,
    /// `Some` only for the in-degree method, which can tell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acyclic: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub components: Vec<Vec<VertexId>>,
}

// ---------------------------------------------------------------------------
// Single-source shortest paths
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathAction {
    Init { source: VertexId },
    /// Vertex fixed with its final distance (Dijkstra).
    Select { vertex: VertexId, distance: Distance },
    /// Start of a full relaxation pass (Bellman-Ford).
    Pass { iteration: usize },
    Relax { from: VertexId, to: VertexId, weight: i64, previous: Distance, updated: Distance },
    /// Edge examined but it does not improve `to`.
    Keep { from: VertexId, to: VertexId, weight: i64 },
    NegativeCycle { from: VertexId, to: VertexId },
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub action: PathAction,
    pub distances: Vec<Distance>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<VertexId>>,
    pub negative_cycle: bool,
}

impl ShortestPaths {
    /// Vertices from the source to `target`, `None` when unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.distances.get(target)?.is_finite() || self.negative_cycle {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.predecessors[cur]?;
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

// ---------------------------------------------------------------------------
// All pairs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatrixAction {
    Init,
    /// Intermediate vertex `k` is now allowed.
    Pivot { k: VertexId },
    Update { i: VertexId, j: VertexId, k: VertexId, previous: Distance, updated: Distance },
    NegativeCycle { vertex: VertexId },
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixStep {
    pub action: MatrixAction,
    pub matrix: Vec<Vec<Distance>>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairs {
    pub distances: Vec<Vec<Distance>>,
    pub negative_cycle: bool,
}

// ---------------------------------------------------------------------------
// Spanning trees
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpanningAction {
    /// Edge list in the order it will be considered.
    Sorted { edges: Vec<Edge> },
    Consider { edge: Edge },
    Accept { edge: Edge },
    /// Endpoints already connected.
    Reject { edge: Edge },
    /// Vertex joins the tree, through `via` unless it is the root.
    Select { vertex: VertexId, via: Option<Edge> },
    /// Cheaper connection found for `vertex`.
    Update { vertex: VertexId, edge: Edge },
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningStep {
    pub action: SpanningAction,
    pub tree: Vec<Edge>,
    pub total_weight: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: i64,
}

pub(crate) fn join_labels(graph: &Graph, vertices: &[VertexId]) -> String {
    vertices.iter().map(|&v| graph.label(v)).collect::<Vec<_>>().join(", ")
}

pub(crate) fn edge_label(graph: &Graph, e: &Edge) -> String {
    match e.weight {
        Some(w) => format!("{}-{} ({w})", graph.label(e.from), graph.label(e.to)),
        None => format!("{}-{}", graph.label(e.from), graph.label(e.to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_orders_infinity_last() {
        assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(-5) < Distance::Finite(3));
        assert_eq!(Distance::Infinite.extend(4), Distance::Infinite);
        assert_eq!(Distance::Finite(2).extend(-3), Distance::Finite(-1));
        assert_eq!(Distance::Infinite.to_string(), "∞");
    }

    #[test]
    fn distance_serializes_as_number_or_null() {
        let json = serde_json::to_string(&[Distance::Finite(3), Distance::Infinite]).unwrap();
        assert_eq!(json, "[3,null]");
        let back: Vec<Distance> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Distance::Finite(3), Distance::Infinite]);
    }

    #[test]
    fn path_to_follows_predecessors() {
        let paths = ShortestPaths {
            source: 0,
            distances: vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(3), Distance::Infinite],
            predecessors: vec![None, Some(0), Some(1), None],
            negative_cycle: false,
        };
        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.path_to(3), None);
    }
}
