//! JSON requests accepted by `step-runner run`.
//!
//! A request is an object tagged by `"algorithm"` (the catalog key) whose
//! remaining fields are the stepper's inputs, e.g.
//! `{ "algorithm": "binary-search", "array": [1, 3, 5], "target": 3 }`.
//! The response is the stepper's outcome: `{ "steps": [...], ...result }`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use algovista::branch_and_bound::{job_sequencing, tsp, Job};
use algovista::dynamic_programming::{knapsack, lcs, matrix_chain, Item};
use algovista::graph::{
    bellman_ford, bfs, dfs, dijkstra, floyd_warshall, kahn, kosaraju, kruskal, prim, topological_sort, Graph,
    VertexId,
};
use algovista::greedy::{activity_selection, fractional_knapsack, huffman, Activity, FractionalItem};
use algovista::searching::SearchAlgorithm;
use algovista::sorting::{SortAlgorithm, SortStep};
use algovista::string_algorithms::MatchAlgorithm;
use algovista::Trace;

use crate::playground::{self, GraphOp, HeapOp, ListOp, QueueOp, SetOp, StackOp, TreeOp};

#[derive(Debug, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum Request {
    // Containers
    Stack {
        #[serde(default)]
        capacity: Option<usize>,
        operations: Vec<StackOp>,
    },
    Queue {
        #[serde(default)]
        capacity: Option<usize>,
        operations: Vec<QueueOp>,
    },
    LinkedList {
        operations: Vec<ListOp>,
    },
    BinarySearchTree {
        operations: Vec<TreeOp>,
    },
    UnionFind {
        size: usize,
        operations: Vec<SetOp>,
    },
    MinHeap {
        operations: Vec<HeapOp>,
    },
    #[serde(rename = "graph")]
    GraphPlayground {
        #[serde(default)]
        directed: bool,
        operations: Vec<GraphOp>,
    },

    // Sorting
    BubbleSort { array: Vec<i64> },
    SelectionSort { array: Vec<i64> },
    InsertionSort { array: Vec<i64> },
    MergeSort { array: Vec<i64> },
    QuickSort { array: Vec<i64> },
    HeapSort { array: Vec<i64> },
    CountingSort { array: Vec<i64> },
    RadixSort { array: Vec<i64> },

    // Searching
    LinearSearch { array: Vec<i64>, target: i64 },
    BinarySearch { array: Vec<i64>, target: i64 },
    JumpSearch { array: Vec<i64>, target: i64 },
    ExponentialSearch { array: Vec<i64>, target: i64 },

    // Graph
    Bfs {
        graph: Graph,
        #[serde(default)]
        start: VertexId,
    },
    Dfs {
        graph: Graph,
        #[serde(default)]
        start: VertexId,
    },
    Dijkstra {
        graph: Graph,
        #[serde(default, alias = "start")]
        source: VertexId,
    },
    BellmanFord {
        graph: Graph,
        #[serde(default, alias = "start")]
        source: VertexId,
    },
    FloydWarshall { graph: Graph },
    Kruskal { graph: Graph },
    Prim {
        graph: Graph,
        #[serde(default)]
        start: VertexId,
    },
    TopologicalSort { graph: Graph },
    Kahn { graph: Graph },
    Kosaraju { graph: Graph },

    // Greedy
    Huffman { text: String },
    ActivitySelection { activities: Vec<Activity> },
    FractionalKnapsack { items: Vec<FractionalItem>, capacity: f64 },

    // Dynamic programming
    Lcs {
        #[serde(alias = "string1")]
        a: String,
        #[serde(alias = "string2")]
        b: String,
    },
    MatrixChain { dimensions: Vec<i64> },
    Knapsack { items: Vec<Item>, capacity: i64 },

    // Branch and bound
    Tsp {
        #[serde(alias = "distances")]
        matrix: Vec<Vec<i64>>,
    },
    JobSequencing { jobs: Vec<Job> },

    // String matching
    Naive { text: String, pattern: String },
    Kmp { text: String, pattern: String },
    RabinKarp { text: String, pattern: String },
}

/// Sorting steppers return a bare trace; the runner adds the final array.
#[derive(Debug, Serialize)]
pub struct SortOutput {
    pub steps: Trace<SortStep>,
    pub sorted: Vec<i64>,
}

pub fn sort(algorithm: SortAlgorithm, array: &[i64]) -> Result<SortOutput> {
    let steps = algorithm.run(array)?;
    let sorted = steps.last().map(|s| s.array.clone()).unwrap_or_default();
    Ok(SortOutput { steps, sorted })
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("failed to serialize outcome")
}

impl Request {
    /// Catalog key of the requested stepper.
    pub fn key(&self) -> &'static str {
        match self {
            Request::Stack { .. } => "stack",
            Request::Queue { .. } => "queue",
            Request::LinkedList { .. } => "linked-list",
            Request::BinarySearchTree { .. } => "binary-search-tree",
            Request::UnionFind { .. } => "union-find",
            Request::MinHeap { .. } => "min-heap",
            Request::GraphPlayground { .. } => "graph",
            Request::BubbleSort { .. } => SortAlgorithm::Bubble.key(),
            Request::SelectionSort { .. } => SortAlgorithm::Selection.key(),
            Request::InsertionSort { .. } => SortAlgorithm::Insertion.key(),
            Request::MergeSort { .. } => SortAlgorithm::Merge.key(),
            Request::QuickSort { .. } => SortAlgorithm::Quick.key(),
            Request::HeapSort { .. } => SortAlgorithm::Heap.key(),
            Request::CountingSort { .. } => SortAlgorithm::Counting.key(),
            Request::RadixSort { .. } => SortAlgorithm::Radix.key(),
            Request::LinearSearch { .. } => SearchAlgorithm::Linear.key(),
            Request::BinarySearch { .. } => SearchAlgorithm::Binary.key(),
            Request::JumpSearch { .. } => SearchAlgorithm::Jump.key(),
            Request::ExponentialSearch { .. } => SearchAlgorithm::Exponential.key(),
            Request::Bfs { .. } => "bfs",
            Request::Dfs { .. } => "dfs",
            Request::Dijkstra { .. } => "dijkstra",
            Request::BellmanFord { .. } => "bellman-ford",
            Request::FloydWarshall { .. } => "floyd-warshall",
            Request::Kruskal { .. } => "kruskal",
            Request::Prim { .. } => "prim",
            Request::TopologicalSort { .. } => "topological-sort",
            Request::Kahn { .. } => "kahn",
            Request::Kosaraju { .. } => "kosaraju",
            Request::Huffman { .. } => "huffman",
            Request::ActivitySelection { .. } => "activity-selection",
            Request::FractionalKnapsack { .. } => "fractional-knapsack",
            Request::Lcs { .. } => "lcs",
            Request::MatrixChain { .. } => "matrix-chain",
            Request::Knapsack { .. } => "knapsack",
            Request::Tsp { .. } => "tsp",
            Request::JobSequencing { .. } => "job-sequencing",
            Request::Naive { .. } => MatchAlgorithm::Naive.key(),
            Request::Kmp { .. } => MatchAlgorithm::Kmp.key(),
            Request::RabinKarp { .. } => MatchAlgorithm::RabinKarp.key(),
        }
    }

    pub fn execute(self) -> Result<Value> {
        let key = self.key();
        tracing::debug!(algorithm = key, "executing request");
        self.dispatch().with_context(|| format!("{key} failed"))
    }

    fn dispatch(self) -> Result<Value> {
        match self {
            Request::Stack { capacity, operations } => to_json(playground::stack(capacity, &operations)?),
            Request::Queue { capacity, operations } => to_json(playground::queue(capacity, &operations)?),
            Request::LinkedList { operations } => to_json(playground::linked_list(&operations)),
            Request::BinarySearchTree { operations } => to_json(playground::binary_search_tree(&operations)),
            Request::UnionFind { size, operations } => to_json(playground::union_find(size, &operations)?),
            Request::MinHeap { operations } => to_json(playground::min_heap(&operations)),
            Request::GraphPlayground { directed, operations } => {
                to_json(playground::graph(directed, &operations))
            }

            Request::BubbleSort { array } => to_json(sort(SortAlgorithm::Bubble, &array)?),
            Request::SelectionSort { array } => to_json(sort(SortAlgorithm::Selection, &array)?),
            Request::InsertionSort { array } => to_json(sort(SortAlgorithm::Insertion, &array)?),
            Request::MergeSort { array } => to_json(sort(SortAlgorithm::Merge, &array)?),
            Request::QuickSort { array } => to_json(sort(SortAlgorithm::Quick, &array)?),
            Request::HeapSort { array } => to_json(sort(SortAlgorithm::Heap, &array)?),
            Request::CountingSort { array } => to_json(sort(SortAlgorithm::Counting, &array)?),
            Request::RadixSort { array } => to_json(sort(SortAlgorithm::Radix, &array)?),

            Request::LinearSearch { array, target } => to_json(SearchAlgorithm::Linear.run(&array, target)?),
            Request::BinarySearch { array, target } => to_json(SearchAlgorithm::Binary.run(&array, target)?),
            Request::JumpSearch { array, target } => to_json(SearchAlgorithm::Jump.run(&array, target)?),
            Request::ExponentialSearch { array, target } => {
                to_json(SearchAlgorithm::Exponential.run(&array, target)?)
            }

            Request::Bfs { graph, start } => to_json(bfs(&graph, start)?),
            Request::Dfs { graph, start } => to_json(dfs(&graph, start)?),
            Request::Dijkstra { graph, source } => to_json(dijkstra(&graph, source)?),
            Request::BellmanFord { graph, source } => to_json(bellman_ford(&graph, source)?),
            Request::FloydWarshall { graph } => to_json(floyd_warshall(&graph)),
            Request::Kruskal { graph } => to_json(kruskal(&graph)?),
            Request::Prim { graph, start } => to_json(prim(&graph, start)?),
            Request::TopologicalSort { graph } => to_json(topological_sort(&graph)?),
            Request::Kahn { graph } => to_json(kahn(&graph)?),
            Request::Kosaraju { graph } => to_json(kosaraju(&graph)),

            Request::Huffman { text } => to_json(huffman(&text)?),
            Request::ActivitySelection { activities } => to_json(activity_selection(&activities)?),
            Request::FractionalKnapsack { items, capacity } => to_json(fractional_knapsack(&items, capacity)?),

            Request::Lcs { a, b } => to_json(lcs(&a, &b)?),
            Request::MatrixChain { dimensions } => to_json(matrix_chain(&dimensions)?),
            Request::Knapsack { items, capacity } => to_json(knapsack(&items, capacity)?),

            Request::Tsp { matrix } => to_json(tsp(&matrix)?),
            Request::JobSequencing { jobs } => to_json(job_sequencing(&jobs)?),

            Request::Naive { text, pattern } => to_json(MatchAlgorithm::Naive.run(&text, &pattern)?),
            Request::Kmp { text, pattern } => to_json(MatchAlgorithm::Kmp.run(&text, &pattern)?),
            Request::RabinKarp { text, pattern } => to_json(MatchAlgorithm::RabinKarp.run(&text, &pattern)?),
        }
    }
}

/// Parses `5,3,1`, `5 3 1` or the JSON form `[5, 3, 1]`.
pub fn parse_array(raw: &str) -> Result<Vec<i64>> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        return serde_json::from_str(raw).with_context(|| format!("`{raw}` is not a JSON array of integers"));
    }
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>().with_context(|| format!("`{s}` is not an integer")))
        .collect()
}
