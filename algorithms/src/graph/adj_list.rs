//! Adjacency list graph representation.
//!
//! Variables:
//!   V         = number of vertices, ids 0..V
//!   E         = number of edges as inserted (undirected edges counted once)
//!   adj[u]    = Vec<Neighbour> reachable from u in one hop
//!
//! Equations:
//!   add_edge(u, v, w), directed:    adj[u].push((v, w))
//!   add_edge(u, v, w), undirected:  adj[u].push((v, w)), adj[v].push((u, w))
//!   cost(e)        = w, or 1 when the edge is unweighted
//!   in_degree(v)   = |{ u | v in adj[u] }|   (O(V+E) to compute)
//!   transpose: (u, v) in E  <=>  (v, u) in E^T
//!   remove_vertex(x): drop every edge touching x, then ids above x shift
//!                     down by one so ids stay 0..V-1
//!
//! Every edge references vertices in 0..V; add_edge rejects anything else.

use serde::{Deserialize, Serialize};

use crate::error::{StepError, StepResult};

pub type VertexId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    pub id: VertexId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Option<i64>) -> Self {
        Self { from, to, weight }
    }

    pub fn cost(&self) -> i64 {
        self.weight.unwrap_or(1)
    }
}

/// One outgoing hop in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbour {
    pub to: VertexId,
    pub weight: i64,
    /// Index into [`Graph::edges`].
    pub edge: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphInput")]
pub struct Graph {
    directed: bool,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    #[serde(skip)]
    adj: Vec<Vec<Neighbour>>,
}

/// Label used when a vertex is added without one: A..Z, then V26, V27...
pub fn default_label(id: VertexId) -> String {
    match u8::try_from(id) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => format!("V{id}"),
    }
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self { directed, vertices: Vec::new(), edges: Vec::new(), adj: Vec::new() }
    }

    /// `n` vertices labelled A, B, C...
    pub fn with_vertices(n: usize, directed: bool) -> Self {
        let mut g = Self::new(directed);
        for id in 0..n {
            g.add_vertex(default_label(id));
        }
        g
    }

    /// Build from `(from, to, weight)` triples over `n` default-labelled vertices.
    pub fn from_edges(n: usize, directed: bool, edges: &[(VertexId, VertexId, i64)]) -> StepResult<Self> {
        let mut g = Self::with_vertices(n, directed);
        for &(u, v, w) in edges {
            g.add_edge(u, v, Some(w))?;
        }
        Ok(g)
    }

    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        self.push_vertex(label.into(), None)
    }

    pub fn add_vertex_at(&mut self, label: impl Into<String>, position: Position) -> VertexId {
        self.push_vertex(label.into(), Some(position))
    }

    fn push_vertex(&mut self, label: String, position: Option<Position>) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex { id, label, position });
        self.adj.push(Vec::new());
        id
    }

    /// Insert an edge; undirected graphs record it in both adjacency lists.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Option<i64>) -> StepResult<usize> {
        for v in [from, to] {
            if !self.contains(v) {
                return Err(StepError::invalid(
                    "graph",
                    format!("edge {from}->{to} references unknown vertex {v}"),
                ));
            }
        }
        let index = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.link(index);
        Ok(index)
    }

    /// Remove the first edge `from -> to` (either orientation when undirected).
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> StepResult<Edge> {
        let directed = self.directed;
        let joins = |e: &Edge| (e.from == from && e.to == to) || (!directed && e.from == to && e.to == from);
        let Some(index) = self.edges.iter().position(joins) else {
            return Err(StepError::invalid("graph", format!("no edge {from}->{to}")));
        };
        let edge = self.edges.remove(index);
        self.relink();
        Ok(edge)
    }

    /// Remove a vertex with its incident edges. Later ids shift down by one.
    pub fn remove_vertex(&mut self, v: VertexId) -> StepResult<Vertex> {
        self.require_vertex("graph", v)?;
        let removed = self.vertices.remove(v);
        for (id, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.id = id;
        }
        let shift = |u: VertexId| if u > v { u - 1 } else { u };
        self.edges.retain(|e| e.from != v && e.to != v);
        for e in &mut self.edges {
            e.from = shift(e.from);
            e.to = shift(e.to);
        }
        self.relink();
        Ok(removed)
    }

    fn link(&mut self, index: usize) {
        let Edge { from, to, .. } = self.edges[index];
        let weight = self.edges[index].cost();
        self.adj[from].push(Neighbour { to, weight, edge: index });
        if !self.directed && from != to {
            self.adj[to].push(Neighbour { to: from, weight, edge: index });
        }
    }

    /// Rebuild every adjacency list from `edges`, keeping insertion order.
    fn relink(&mut self) {
        self.adj = vec![Vec::new(); self.vertices.len()];
        for index in 0..self.edges.len() {
            self.link(index);
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn label(&self, v: VertexId) -> &str {
        self.vertices.get(v).map_or("?", |vx| vx.label.as_str())
    }

    pub fn neighbours(&self, u: VertexId) -> &[Neighbour] {
        &self.adj[u]
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.contains(u) && self.adj[u].iter().any(|n| n.to == v)
    }

    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.cost() < 0)
    }

    pub fn in_degrees(&self) -> Vec<usize> {
        let mut indegree = vec![0; self.vertex_count()];
        for neighbours in &self.adj {
            for n in neighbours {
                indegree[n.to] += 1;
            }
        }
        indegree
    }

    /// Same vertices, every edge reversed. Undirected graphs are returned as is.
    pub fn transpose(&self) -> Graph {
        let edges = self
            .edges
            .iter()
            .map(|e| if self.directed { Edge::new(e.to, e.from, e.weight) } else { *e })
            .collect();
        let mut t = Graph {
            directed: self.directed,
            vertices: self.vertices.clone(),
            edges,
            adj: Vec::new(),
        };
        t.relink();
        t
    }

    /// Fail with `InvalidInput` for `algorithm` unless `v` is a vertex.
    pub fn require_vertex(&self, algorithm: &'static str, v: VertexId) -> StepResult<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(StepError::invalid(
                algorithm,
                format!("vertex {v} is not in a graph of {} vertices", self.vertex_count()),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VertexInput {
    Label(String),
    Full {
        label: String,
        #[serde(default)]
        position: Option<Position>,
    },
}

/// Wire form accepted when deserializing a [`Graph`].
#[derive(Debug, Deserialize)]
struct GraphInput {
    #[serde(default)]
    directed: bool,
    vertices: Vec<VertexInput>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl TryFrom<GraphInput> for Graph {
    type Error = StepError;

    fn try_from(input: GraphInput) -> Result<Self, Self::Error> {
        let mut g = Graph::new(input.directed);
        for v in input.vertices {
            match v {
                VertexInput::Label(label) => g.add_vertex(label),
                VertexInput::Full { label, position: Some(p) } => g.add_vertex_at(label, p),
                VertexInput::Full { label, position: None } => g.add_vertex(label),
            };
        }
        for e in input.edges {
            g.add_edge(e.from, e.to, e.weight)?;
        }
        Ok(g)
    }
}
