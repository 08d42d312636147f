//! Table-filling dynamic programming steppers.
//!
//! Each stepper fills a 2-D table in increasing subproblem order, one
//! [`DpAction::Fill`] per cell, then walks it back once to rebuild the
//! solution. Cells not yet computed are `None` in the snapshots.

pub mod knapsack;
pub mod lcs;
pub mod matrix_chain;

use serde::{Deserialize, Serialize};

use crate::error::{StepError, StepResult};
use crate::trace::Trace;

pub use knapsack::{knapsack, Item, Knapsack};
pub use lcs::{lcs, Lcs};
pub use matrix_chain::{matrix_chain, MatrixChain};

pub type Table = Vec<Vec<Option<i64>>>;

/// Largest table any stepper fills. Every step snapshots the whole table,
/// so trace size grows with the square of this.
pub const MAX_CELLS: usize = 2_048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DpAction {
    Fill { row: usize, col: usize, value: i64 },
    /// Matrix chain: splitting `(row, col)` after matrix `k` costs `cost`.
    Split { row: usize, col: usize, k: usize, cost: i64 },
    /// Backtrace passes `(row, col)`; `taken` marks a cell that contributes
    /// to the solution.
    Backtrack { row: usize, col: usize, taken: bool },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpStep {
    pub action: DpAction,
    pub table: Table,
    pub description: String,
}

pub(crate) struct Tableau {
    pub table: Table,
    pub steps: Trace<DpStep>,
}

impl Tableau {
    pub fn new(algorithm: &'static str, rows: usize, cols: usize) -> StepResult<Self> {
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_CELLS => {
                Ok(Self { table: vec![vec![None; cols]; rows], steps: Trace::new() })
            }
            _ => Err(StepError::invalid(algorithm, format!("a {rows}x{cols} table exceeds {MAX_CELLS} cells"))),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.table[row][col].unwrap_or(0)
    }

    /// Store a base case without recording a step.
    pub fn seed(&mut self, row: usize, col: usize, value: i64) {
        self.table[row][col] = Some(value);
    }

    pub fn fill(&mut self, row: usize, col: usize, value: i64, description: String) {
        self.table[row][col] = Some(value);
        self.record(DpAction::Fill { row, col, value }, description);
    }

    pub fn record(&mut self, action: DpAction, description: String) {
        self.steps.push(DpStep { action, table: self.table.clone(), description });
    }
}
