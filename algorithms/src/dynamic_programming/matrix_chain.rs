//! Matrix-chain multiplication order.
//!
//! Variables:
//!   p[0..=n]   = dimensions, matrix A(i+1) is p[i] x p[i+1]
//!   m[i][j]    = fewest scalar multiplications for A(i+1)..A(j+1)
//!   s[i][j]    = split k achieving m[i][j]
//!
//! Equations:
//!   m[i][i] = 0
//!   m[i][j] = min over i <= k < j of m[i][k] + m[k+1][j] + p[i] p[k+1] p[j+1]
//!   filled by increasing chain length; ties keep the first k.

use serde::{Deserialize, Serialize};

use super::{DpAction, DpStep, Tableau};
use crate::error::{StepError, StepResult};
use crate::trace::Outcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixChain {
    pub cost: i64,
    /// e.g. `((A1A2)A3)`
    pub parenthesization: String,
}

/// Longest chain accepted; split steps grow with the cube of the length.
pub const MAX_MATRICES: usize = 24;

pub fn matrix_chain(dims: &[i64]) -> StepResult<Outcome<DpStep, MatrixChain>> {
    if dims.len() < 2 {
        return Err(StepError::invalid("matrix chain", "need at least two dimensions"));
    }
    if dims.iter().any(|&d| d <= 0) {
        return Err(StepError::invalid("matrix chain", "dimensions must be positive"));
    }
    let n = dims.len() - 1;
    if n > MAX_MATRICES {
        return Err(StepError::invalid("matrix chain", format!("at most {MAX_MATRICES} matrices are supported")));
    }
    tracing::debug!(matrices = n, "matrix chain");

    let mut t = Tableau::new("matrix chain", n, n)?;
    let mut split = vec![vec![0usize; n]; n];
    for i in 0..n {
        t.seed(i, i, 0);
    }

    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            let mut best: Option<(i64, usize)> = None;
            for k in i..j {
                let cost = t
                    .get(i, k)
                    .saturating_add(t.get(k + 1, j))
                    .saturating_add(dims[i].saturating_mul(dims[k + 1]).saturating_mul(dims[j + 1]));
                t.record(
                    DpAction::Split { row: i, col: j, k, cost },
                    format!("Split A{}..A{} after A{}: {cost}", i + 1, j + 1, k + 1),
                );
                if best.map_or(true, |(c, _)| cost < c) {
                    best = Some((cost, k));
                }
            }
            if let Some((cost, k)) = best {
                split[i][j] = k;
                t.fill(i, j, cost, format!("m[{}][{}] = {cost} (split after A{})", i + 1, j + 1, k + 1));
            }
        }
    }

    let parenthesization = parenthesize(&split, 0, n - 1);
    let cost = t.get(0, n - 1);
    t.record(DpAction::Done, format!("Optimal order {parenthesization} costs {cost}"));
    Ok(Outcome::new(t.steps, MatrixChain { cost, parenthesization }))
}

fn parenthesize(split: &[Vec<usize>], i: usize, j: usize) -> String {
    if i == j {
        return format!("A{}", i + 1);
    }
    let k = split[i][j];
    format!("({}{})", parenthesize(split, i, k), parenthesize(split, k + 1, j))
}
