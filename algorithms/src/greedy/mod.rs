//! Greedy steppers.

pub mod activity_selection;
pub mod fractional_knapsack;
pub mod huffman;

use serde::{Deserialize, Serialize};

pub use activity_selection::{activity_selection, Activity, Selection};
pub use fractional_knapsack::{fractional_knapsack, FractionalItem, FractionalKnapsack, Portion};
pub use huffman::{huffman, HuffmanAction, HuffmanCode, HuffmanNode, HuffmanStep};

/// Step shared by activity selection and fractional knapsack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GreedyAction {
    /// Consideration order, as indices into the input.
    Sorted { order: Vec<usize> },
    Select { item: usize },
    Reject { item: usize },
    /// Only `fraction` of the item fits.
    Partial { item: usize, fraction: f64 },
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreedyStep {
    pub action: GreedyAction,
    /// Items taken so far, in the order they were taken.
    pub chosen: Vec<usize>,
    pub description: String,
}
