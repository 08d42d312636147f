//! End-to-end scenarios over the public API, including JSON fixtures.

use std::path::PathBuf;

use algovista::branch_and_bound::{job_sequencing, tsp, Job};
use algovista::dynamic_programming::{knapsack, lcs, Item};
use algovista::graph::bellman_ford::bellman_ford;
use algovista::graph::bfs::bfs;
use algovista::graph::dijkstra::dijkstra;
use algovista::graph::kruskal::kruskal;
use algovista::graph::prim::prim;
use algovista::graph::topological_sort::{kahn, topological_sort};
use algovista::graph::{Distance, Graph, SpanningAction};
use algovista::searching::{binary_search, SearchAction};
use algovista::sorting::counting_sort;
use algovista::{Outcome, StepError};

fn load_graph(name: &str) -> Graph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name);
    let data = std::fs::read(path).expect("fixture exists");
    serde_json::from_slice(&data).expect("valid graph")
}

#[test]
fn test_counting_sort_example() {
    let trace = counting_sort(&[4, 2, 2, 8, 3, 3, 1]).unwrap();
    assert_eq!(trace.last().unwrap().array, vec![1, 2, 2, 3, 3, 4, 8]);
}

#[test]
fn test_binary_search_example() {
    let out = binary_search(&[1, 3, 5, 7, 9, 11, 13, 15, 17, 19], 7).unwrap();
    assert!(out.result.found);
    assert_eq!(out.result.index, Some(3));
    let probes = out.steps.iter().filter(|s| matches!(s.action, SearchAction::Probe { .. })).count();
    assert_eq!(probes, 4);
}

#[test]
fn test_kruskal_fixture_total() {
    let g = load_graph("textbook_graph.json");
    assert_eq!(g.label(4), "E");
    let out = kruskal(&g).unwrap();
    assert_eq!(out.result.total_weight, 8);
    let accepted = out.steps.iter().filter(|s| matches!(s.action, SpanningAction::Accept { .. })).count();
    assert_eq!(accepted, 4);
}

#[test]
fn test_prim_fixture_matches_kruskal() {
    let g = load_graph("textbook_graph.json");
    assert_eq!(prim(&g, 3).unwrap().result.total_weight, kruskal(&g).unwrap().result.total_weight);
}

#[test]
fn test_shortest_paths_on_fixture() {
    let g = load_graph("textbook_graph.json");
    let d = dijkstra(&g, 0).unwrap();
    let b = bellman_ford(&g, 0).unwrap();
    assert_eq!(d.result.distances, b.result.distances);
    assert_eq!(d.result.distances[4], Distance::Finite(7));
    assert_eq!(d.result.path_to(4), Some(vec![0, 2, 3, 4]));
}

#[test]
fn test_course_dag_orderings() {
    let g = load_graph("course_dag.json");
    assert!(g.is_directed());
    assert_eq!(g.vertices()[4].position.and_then(|p| p.z), Some(1.0));

    let dfs_order = topological_sort(&g).unwrap().result.order;
    let kahn_out = kahn(&g).unwrap();
    assert_eq!(kahn_out.result.acyclic, Some(true));
    for order in [dfs_order, kahn_out.result.order] {
        let pos = |v: usize| order.iter().position(|&x| x == v).unwrap();
        for e in g.edges() {
            assert!(pos(e.from) < pos(e.to), "{} before {}", g.label(e.from), g.label(e.to));
        }
    }
}

#[test]
fn test_bfs_from_unknown_vertex_is_invalid() {
    let g = load_graph("textbook_graph.json");
    assert!(matches!(bfs(&g, 9), Err(StepError::InvalidInput { .. })));
}

#[test]
fn test_graph_with_dangling_edge_fails_to_load() {
    let json = r#"{ "vertices": ["A"], "edges": [{ "from": 0, "to": 3 }] }"#;
    assert!(serde_json::from_str::<Graph>(json).is_err());
}

#[test]
fn test_outcome_wire_shape() {
    let out: Outcome<_, _> = binary_search(&[2, 4, 6], 6).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["index"], 2);
    assert_eq!(json["steps"][0]["action"]["type"], "probe");
    assert_eq!(json["steps"][0]["action"]["mid"], 1);
}

#[test]
fn test_tsp_classic() {
    let m = vec![vec![0, 10, 15, 20], vec![10, 0, 35, 25], vec![15, 35, 0, 30], vec![20, 25, 30, 0]];
    assert_eq!(tsp(&m).unwrap().result.cost, 80);
}

#[test]
fn test_bfs_after_removing_a_bridge() {
    // A - B - C with a spur B - D; cutting B - C leaves C unreachable
    let mut g = Graph::from_edges(4, false, &[(0, 1, 1), (1, 2, 1), (1, 3, 1)]).unwrap();
    assert_eq!(bfs(&g, 0).unwrap().result.order, vec![0, 1, 2, 3]);
    g.remove_edge(1, 2).unwrap();
    assert_eq!(bfs(&g, 0).unwrap().result.order, vec![0, 1, 3]);
}

#[test]
fn test_bfs_after_removing_a_vertex() {
    let mut g = Graph::from_edges(4, false, &[(0, 1, 1), (1, 2, 1), (0, 3, 1), (3, 2, 1)]).unwrap();
    g.remove_vertex(3).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(bfs(&g, 0).unwrap().result.order, vec![0, 1, 2]);
    g.remove_vertex(0).unwrap();
    // B and C are now ids 0 and 1
    assert_eq!(bfs(&g, 1).unwrap().result.order, vec![1, 0]);
    assert!(bfs(&g, 2).is_err());
}

#[test]
fn test_max_weights_fail_cleanly() {
    let g = Graph::from_edges(3, false, &[(0, 1, i64::MAX), (1, 2, i64::MAX)]).unwrap();
    assert!(matches!(kruskal(&g), Err(StepError::InvalidInput { algorithm: "kruskal", .. })));
    assert!(matches!(prim(&g, 0), Err(StepError::InvalidInput { algorithm: "prim", .. })));

    let items = [Item { weight: 1, value: i64::MAX }, Item { weight: 1, value: i64::MAX }];
    assert!(matches!(knapsack(&items, 2), Err(StepError::InvalidInput { .. })));

    let jobs: Vec<Job> = (0..2).map(|i| Job { id: i.to_string(), deadline: 2, profit: i64::MAX }).collect();
    assert!(matches!(job_sequencing(&jobs), Err(StepError::InvalidInput { .. })));
}

#[test]
fn test_single_max_weight_is_still_valid() {
    let g = Graph::from_edges(2, false, &[(0, 1, i64::MAX)]).unwrap();
    assert_eq!(kruskal(&g).unwrap().result.total_weight, i64::MAX);
    let items = [Item { weight: 1, value: i64::MAX }];
    assert_eq!(knapsack(&items, 1).unwrap().result.max_value, i64::MAX);
}

#[test]
fn test_oversized_tables_are_rejected() {
    assert!(matches!(knapsack(&[Item { weight: 1, value: 1 }], 10_000), Err(StepError::InvalidInput { .. })));
    let long = "x".repeat(5_000);
    assert!(matches!(lcs(&long, &long), Err(StepError::InvalidInput { algorithm: "lcs", .. })));
    assert!(matches!(tsp(&vec![vec![0; 13]; 13]), Err(StepError::InvalidInput { .. })));
}
