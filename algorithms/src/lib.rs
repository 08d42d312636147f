//! # algovista
//!
//! Step generators for algorithm visualisation, organized by family.
//!
//! ## Modules
//!
//! - `data_structures` – Playground containers (stack, queue, linked list, BST, min-heap, union-find)
//! - `sorting` – Bubble, selection, insertion, merge, quick, heap, counting, radix
//! - `searching` – Linear, binary, jump, exponential
//! - `graph` – Adjacency-list graph, traversals, shortest paths, spanning trees, orderings, SCC
//! - `greedy` – Huffman coding, activity selection, fractional knapsack
//! - `dynamic_programming` – LCS, matrix chain, 0/1 knapsack
//! - `branch_and_bound` – Travelling salesman, job sequencing
//! - `string_algorithms` – Naive, KMP, Rabin–Karp
//! - `catalog` – Names, families and complexities of everything above
//!
//! Every stepper is a pure function: it borrows its input, runs to completion
//! and returns the recorded steps (a [`Trace`]) together with the result.
//! Replay pacing belongs to the caller.
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algovista::sorting::counting_sort;
//! use algovista::searching::binary_search;
//!
//! let steps = counting_sort(&[4, 2, 2, 8, 3, 3, 1]).unwrap();
//! assert_eq!(steps.last().unwrap().array, vec![1, 2, 2, 3, 3, 4, 8]);
//!
//! let out = binary_search(&[1, 3, 5, 7, 9], 7).unwrap();
//! assert_eq!(out.result.index, Some(3));
//! ```

pub mod branch_and_bound;
pub mod catalog;
pub mod data_structures;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod invariant;
pub mod searching;
pub mod sorting;
pub mod string_algorithms;
pub mod trace;

pub use error::{StepError, StepResult};
pub use trace::{Cursor, Outcome, Trace};
