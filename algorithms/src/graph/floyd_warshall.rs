//! Floyd-Warshall all-pairs shortest paths.
//!
//! Variables:
//!   d[i][j] = shortest i -> j distance using intermediates {0..k}
//!
//! Equations:
//!   d0[i][i] = 0, d0[i][j] = w(i,j) if edge else INF
//!   dk[i][j] = min(d(k-1)[i][j], d(k-1)[i][k] + d(k-1)[k][j])
//!   negative cycle  <=>  some d[i][i] < 0 after the last k
//!   Complexity: O(V^3)

use super::{AllPairs, Distance, Graph, MatrixAction, MatrixStep};
use crate::trace::{Outcome, Trace};

pub fn floyd_warshall(graph: &Graph) -> Outcome<MatrixStep, AllPairs> {
    tracing::debug!(vertices = graph.vertex_count(), "floyd-warshall");

    let n = graph.vertex_count();
    let mut d = vec![vec![Distance::Infinite; n]; n];
    for (i, row) in d.iter_mut().enumerate() {
        row[i] = Distance::Finite(0);
        for hop in graph.neighbours(i) {
            let w = Distance::Finite(hop.weight);
            if w < row[hop.to] {
                row[hop.to] = w;
            }
        }
    }

    let mut steps = Trace::new();
    steps.push(MatrixStep {
        action: MatrixAction::Init,
        matrix: d.clone(),
        description: "Direct edge weights, 0 on the diagonal".to_string(),
    });

    for k in 0..n {
        steps.push(MatrixStep {
            action: MatrixAction::Pivot { k },
            matrix: d.clone(),
            description: format!("Allow paths through {}", graph.label(k)),
        });
        for i in 0..n {
            if !d[i][k].is_finite() {
                continue;
            }
            for j in 0..n {
                let Distance::Finite(kj) = d[k][j] else { continue };
                let via = d[i][k].extend(kj);
                if via < d[i][j] {
                    let previous = d[i][j];
                    d[i][j] = via;
                    steps.push(MatrixStep {
                        action: MatrixAction::Update { i, j, k, previous, updated: via },
                        matrix: d.clone(),
                        description: format!(
                            "{}->{} via {}: {} + {} = {} < {}",
                            graph.label(i),
                            graph.label(j),
                            graph.label(k),
                            d[i][k],
                            d[k][j],
                            via,
                            previous
                        ),
                    });
                }
            }
        }
    }

    let cycle_vertex = (0..n).find(|&i| d[i][i] < Distance::Finite(0));
    if let Some(vertex) = cycle_vertex {
        tracing::warn!(vertex, "negative cycle in all-pairs matrix");
        steps.push(MatrixStep {
            action: MatrixAction::NegativeCycle { vertex },
            matrix: d.clone(),
            description: format!("{} reaches itself with negative cost", graph.label(vertex)),
        });
    } else {
        steps.push(MatrixStep {
            action: MatrixAction::Done,
            matrix: d.clone(),
            description: "All-pairs shortest distances computed".to_string(),
        });
    }

    Outcome::new(steps, AllPairs { distances: d, negative_cycle: cycle_vertex.is_some() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: Distance = Distance::Infinite;

    fn f(d: i64) -> Distance {
        Distance::Finite(d)
    }

    #[test]
    fn all_pairs_directed() {
        let g = Graph::from_edges(4, true, &[(0, 1, 3), (1, 2, 1), (0, 2, 7), (2, 3, 2), (3, 0, 6)]).unwrap();
        let out = floyd_warshall(&g);
        assert!(!out.result.negative_cycle);
        assert_eq!(out.result.distances[0], vec![f(0), f(3), f(4), f(6)]);
        assert_eq!(out.result.distances[3], vec![f(6), f(9), f(10), f(0)]);
    }

    #[test]
    fn unreachable_pairs_stay_infinite() {
        let g = Graph::from_edges(3, true, &[(0, 1, 2)]).unwrap();
        let out = floyd_warshall(&g);
        assert_eq!(out.result.distances[1][0], INF);
        assert_eq!(out.result.distances[2], vec![INF, INF, f(0)]);
    }

    #[test]
    fn detects_negative_cycle() {
        let g = Graph::from_edges(2, true, &[(0, 1, 1), (1, 0, -3)]).unwrap();
        let out = floyd_warshall(&g);
        assert!(out.result.negative_cycle);
    }

    #[test]
    fn every_update_lowers_a_cell() {
        let g = Graph::from_edges(3, false, &[(0, 1, 5), (1, 2, 1), (0, 2, 9)]).unwrap();
        let out = floyd_warshall(&g);
        for s in &out.steps {
            if let MatrixAction::Update { previous, updated, i, j, .. } = s.action {
                assert!(updated < previous);
                assert_eq!(s.matrix[i][j], updated);
            }
        }
    }
}
