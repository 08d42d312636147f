//! Knuth-Morris-Pratt.
//!
//! Variables:
//!   lps[i] = length of the longest proper prefix of p[0..=i] that is also its suffix
//!
//! Equations:
//!   text[i] == p[j]          => i += 1, j += 1
//!   j == m                   => match at i - m, j = lps[j - 1]
//!   text[i] != p[j], j > 0   => j = lps[j - 1]
//!   text[i] != p[j], j == 0  => i += 1
//!   Complexity: O(n + m)

use super::{MatchAction, MatchOutcome, Matcher};
use crate::error::StepResult;

pub fn kmp(text: &str, pattern: &str) -> StepResult<MatchOutcome> {
    let mut m = Matcher::new("kmp", text, pattern)?;
    let lps = build_lps(&mut m);

    if m.fits() {
        let (n, len) = (m.text.len(), m.pattern.len());
        let (mut i, mut j) = (0, 0);
        while i < n {
            if m.compare(i, j, i - j) {
                i += 1;
                j += 1;
                if j == len {
                    m.matched(i - j);
                    j = fall_back(&mut m, &lps, j, i);
                }
            } else if j > 0 {
                j = fall_back(&mut m, &lps, j, i);
            } else {
                i += 1;
            }
        }
    }
    Ok(m.finish(Some(lps)))
}

fn fall_back(m: &mut Matcher, lps: &[usize], j: usize, i: usize) -> usize {
    let to = lps[j - 1];
    m.record(
        MatchAction::Fallback { from: j, to },
        i - to,
        format!("Reuse lps[{}] = {to}: continue at pattern[{to}]", j - 1),
    );
    to
}

fn build_lps(m: &mut Matcher) -> Vec<usize> {
    let p = m.pattern.clone();
    let mut lps = vec![0; p.len()];
    m.record(MatchAction::Lps { index: 0, value: 0 }, 0, "lps[0] = 0".to_string());

    let mut len = 0;
    for i in 1..p.len() {
        while len > 0 && p[i] != p[len] {
            len = lps[len - 1];
        }
        if p[i] == p[len] {
            len += 1;
        }
        lps[i] = len;
        m.record(MatchAction::Lps { index: i, value: len }, 0, format!("lps[{i}] = {len}"));
    }
    lps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lps_table() {
        let out = kmp("x", "AAACAAAA").unwrap();
        assert_eq!(out.result.lps, Some(vec![0, 1, 2, 0, 1, 2, 3, 3]));
        let out = kmp("x", "ABABCABAB").unwrap();
        assert_eq!(out.result.lps, Some(vec![0, 0, 1, 2, 0, 1, 2, 3, 4]));
    }

    #[test]
    fn classic_search() {
        let out = kmp("ABABDABACDABABCABAB", "ABABCABAB").unwrap();
        assert_eq!(out.result.matches, vec![10]);
    }

    #[test]
    fn overlapping_matches() {
        let out = kmp("aaaaa", "aaa").unwrap();
        assert_eq!(out.result.matches, vec![0, 1, 2]);
        assert!(out.steps.iter().any(|s| matches!(s.action, MatchAction::Fallback { from: 3, to: 2 })));
    }
}
