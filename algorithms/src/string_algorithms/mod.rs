//! Pattern matching steppers over Unicode scalar values.
//!
//! Positions in every step and result are char indices, not byte offsets.

pub mod kmp;
pub mod naive;
pub mod rabin_karp;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StepError, StepResult};
use crate::trace::{Outcome, Trace};

pub use kmp::kmp;
pub use naive::naive;
pub use rabin_karp::rabin_karp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchAction {
    Compare { text_index: usize, pattern_index: usize, equal: bool },
    /// KMP preprocessing fixed `lps[index]`.
    Lps { index: usize, value: usize },
    /// KMP falls back from pattern position `from` to `to` without moving in the text.
    Fallback { from: usize, to: usize },
    /// Rabin-Karp window hash next to the pattern hash.
    Hash { window: usize, text_hash: u64, pattern_hash: u64 },
    HashMatch { window: usize },
    /// Hashes agreed but the characters did not.
    SpuriousHit { window: usize },
    Match { position: usize },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStep {
    pub action: MatchAction,
    /// Text offset the pattern is currently aligned with.
    pub window: usize,
    /// Matches found so far.
    pub matches: Vec<usize>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matches: Vec<usize>,
    /// Longest proper prefix-suffix table, KMP only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lps: Option<Vec<usize>>,
}

pub type MatchOutcome = Outcome<MatchStep, MatchResult>;

/// Decoded inputs plus the trace being built.
pub(crate) struct Matcher {
    pub text: Vec<char>,
    pub pattern: Vec<char>,
    pub matches: Vec<usize>,
    steps: Trace<MatchStep>,
}

impl Matcher {
    pub fn new(algorithm: &'static str, text: &str, pattern: &str) -> StepResult<Self> {
        if pattern.is_empty() {
            return Err(StepError::invalid(algorithm, "pattern must not be empty"));
        }
        let matcher = Self {
            text: text.chars().collect(),
            pattern: pattern.chars().collect(),
            matches: Vec::new(),
            steps: Trace::new(),
        };
        tracing::debug!(algorithm, text = matcher.text.len(), pattern = matcher.pattern.len(), "string match");
        Ok(matcher)
    }

    /// Pattern fits in the text at least once.
    pub fn fits(&self) -> bool {
        self.pattern.len() <= self.text.len()
    }

    pub fn record(&mut self, action: MatchAction, window: usize, description: String) {
        self.steps.push(MatchStep { action, window, matches: self.matches.clone(), description });
    }

    pub fn compare(&mut self, text_index: usize, pattern_index: usize, window: usize) -> bool {
        let (t, p) = (self.text[text_index], self.pattern[pattern_index]);
        let equal = t == p;
        self.record(
            MatchAction::Compare { text_index, pattern_index, equal },
            window,
            format!(
                "text[{text_index}] = '{t}' {} pattern[{pattern_index}] = '{p}'",
                if equal { "==" } else { "!=" }
            ),
        );
        equal
    }

    pub fn matched(&mut self, position: usize) {
        self.matches.push(position);
        self.record(MatchAction::Match { position }, position, format!("Pattern found at index {position}"));
    }

    pub fn finish(mut self, lps: Option<Vec<usize>>) -> MatchOutcome {
        let description = if !self.fits() {
            "Pattern is longer than the text".to_string()
        } else {
            format!("{} match(es) found", self.matches.len())
        };
        let window = self.text.len().saturating_sub(self.pattern.len());
        self.record(MatchAction::Done, window, description);
        Outcome::new(self.steps, MatchResult { matches: self.matches, lps })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchAlgorithm {
    #[serde(rename = "naive")]
    Naive,
    #[serde(rename = "kmp")]
    Kmp,
    #[serde(rename = "rabin-karp")]
    RabinKarp,
}

impl MatchAlgorithm {
    pub const ALL: [MatchAlgorithm; 3] = [MatchAlgorithm::Naive, MatchAlgorithm::Kmp, MatchAlgorithm::RabinKarp];

    pub fn key(self) -> &'static str {
        match self {
            MatchAlgorithm::Naive => "naive",
            MatchAlgorithm::Kmp => "kmp",
            MatchAlgorithm::RabinKarp => "rabin-karp",
        }
    }

    pub fn run(self, text: &str, pattern: &str) -> StepResult<MatchOutcome> {
        match self {
            MatchAlgorithm::Naive => naive(text, pattern),
            MatchAlgorithm::Kmp => kmp(text, pattern),
            MatchAlgorithm::RabinKarp => rabin_karp(text, pattern),
        }
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MatchAlgorithm {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        MatchAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.key() == name)
            .ok_or_else(|| StepError::invalid("match", format!("unknown string matching algorithm `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_is_invalid_everywhere() {
        for alg in MatchAlgorithm::ALL {
            assert!(alg.run("abc", "").is_err(), "{alg}");
        }
    }

    #[test]
    fn long_pattern_has_no_matches() {
        for alg in MatchAlgorithm::ALL {
            let out = alg.run("ab", "abc").unwrap();
            assert!(out.result.matches.is_empty(), "{alg}");
            assert_eq!(out.steps.last().unwrap().action, MatchAction::Done);
        }
    }

    #[test]
    fn positions_are_char_indices() {
        for alg in MatchAlgorithm::ALL {
            let out = alg.run("héllo wörld", "wö").unwrap();
            assert_eq!(out.result.matches, vec![6], "{alg}");
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("Rabin_Karp".parse::<MatchAlgorithm>().unwrap(), MatchAlgorithm::RabinKarp);
        assert!("boyer-moore".parse::<MatchAlgorithm>().is_err());
    }
}
