//! Longest common subsequence.
//!
//! Variables:
//!   dp[i][j] = LCS length of a[..i] and b[..j]
//!
//! Equations:
//!   dp[0][*] = dp[*][0] = 0
//!   a[i-1] == b[j-1] => dp[i][j] = dp[i-1][j-1] + 1
//!   otherwise        => dp[i][j] = max(dp[i-1][j], dp[i][j-1])
//!   backtrace from (|a|, |b|): diagonal on equal chars, else towards the
//!   larger neighbour, left on ties.

use serde::{Deserialize, Serialize};

use super::{DpAction, DpStep, Tableau};
use crate::error::{StepError, StepResult};
use crate::trace::Outcome;

/// Longest string, in characters, either side may have.
pub const MAX_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcs {
    pub length: usize,
    pub subsequence: String,
}

pub fn lcs(a: &str, b: &str) -> StepResult<Outcome<DpStep, Lcs>> {
    if a.chars().count() > MAX_LEN || b.chars().count() > MAX_LEN {
        return Err(StepError::invalid("lcs", format!("strings are limited to {MAX_LEN} characters")));
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    tracing::debug!(m, n, "lcs");

    let mut t = Tableau::new("lcs", m + 1, n + 1)?;
    for i in 0..=m {
        t.seed(i, 0, 0);
    }
    for j in 0..=n {
        t.seed(0, j, 0);
    }

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                let value = t.get(i - 1, j - 1) + 1;
                t.fill(i, j, value, format!("'{}' matches: diagonal + 1 = {value}", a[i - 1]));
            } else {
                let (up, left) = (t.get(i - 1, j), t.get(i, j - 1));
                let value = up.max(left);
                t.fill(
                    i,
                    j,
                    value,
                    format!("'{}' != '{}': max({up}, {left}) = {value}", a[i - 1], b[j - 1]),
                );
            }
        }
    }

    let mut picked = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            picked.push(a[i - 1]);
            t.record(DpAction::Backtrack { row: i, col: j, taken: true }, format!("Take '{}'", a[i - 1]));
            i -= 1;
            j -= 1;
        } else {
            t.record(DpAction::Backtrack { row: i, col: j, taken: false }, "Move to the larger neighbour".to_string());
            if t.get(i - 1, j) > t.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }
    }
    picked.reverse();
    let subsequence: String = picked.into_iter().collect();
    let length = subsequence.chars().count();

    t.record(DpAction::Done, format!("LCS \"{subsequence}\" of length {length}"));
    Ok(Outcome::new(t.steps, Lcs { length, subsequence }))
}
