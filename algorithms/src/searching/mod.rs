//! Searching steppers.
//!
//! All four return an [`Outcome`] whose result is a [`SearchResult`]. Binary,
//! jump and exponential search require ascending input and reject anything
//! else with `InvalidInput`.

pub mod binary_search;
pub mod exponential_search;
pub mod jump_search;
pub mod linear_search;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StepError, StepResult};
use crate::trace::{Outcome, Trace};

pub use binary_search::binary_search;
pub use exponential_search::exponential_search;
pub use jump_search::jump_search;
pub use linear_search::linear_search;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchAction {
    /// Linear comparison of one element.
    Check { index: usize },
    Probe { left: usize, right: usize, mid: usize },
    /// Last element of a block compared during the jump phase.
    Jump { index: usize, block_start: usize },
    /// Linear comparison inside the chosen block.
    Scan { index: usize },
    /// `array[bound] < target`, bound doubles next.
    Bound { bound: usize },
    /// Range handed to the binary phase.
    Range { left: usize, right: usize },
    Found { index: usize },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub action: SearchAction,
    /// Inclusive index range still under consideration, `None` once exhausted.
    pub window: Option<(usize, usize)>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub found: bool,
    pub index: Option<usize>,
}

impl SearchResult {
    pub fn at(index: usize) -> Self {
        Self { found: true, index: Some(index) }
    }

    pub fn missing() -> Self {
        Self { found: false, index: None }
    }
}

pub type SearchOutcome = Outcome<SearchStep, SearchResult>;

pub(crate) fn step(
    steps: &mut Trace<SearchStep>,
    action: SearchAction,
    window: Option<(usize, usize)>,
    description: String,
) {
    steps.push(SearchStep { action, window, description });
}

pub(crate) fn finish(mut steps: Trace<SearchStep>, target: i64, index: Option<usize>) -> SearchOutcome {
    match index {
        Some(i) => {
            step(&mut steps, SearchAction::Found { index: i }, Some((i, i)), format!("Found {target} at index {i}"));
            Outcome::new(steps, SearchResult::at(i))
        }
        None => {
            step(&mut steps, SearchAction::NotFound, None, format!("{target} is not in the array"));
            Outcome::new(steps, SearchResult::missing())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    #[serde(rename = "linear-search")]
    Linear,
    #[serde(rename = "binary-search")]
    Binary,
    #[serde(rename = "jump-search")]
    Jump,
    #[serde(rename = "exponential-search")]
    Exponential,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 4] =
        [SearchAlgorithm::Linear, SearchAlgorithm::Binary, SearchAlgorithm::Jump, SearchAlgorithm::Exponential];

    pub fn key(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear-search",
            SearchAlgorithm::Binary => "binary-search",
            SearchAlgorithm::Jump => "jump-search",
            SearchAlgorithm::Exponential => "exponential-search",
        }
    }

    pub fn run(self, array: &[i64], target: i64) -> StepResult<SearchOutcome> {
        match self {
            SearchAlgorithm::Linear => Ok(linear_search(array, target)),
            SearchAlgorithm::Binary => binary_search(array, target),
            SearchAlgorithm::Jump => jump_search(array, target),
            SearchAlgorithm::Exponential => exponential_search(array, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        let name = name.strip_suffix("-search").unwrap_or(&name);
        SearchAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.key().trim_end_matches("-search") == name)
            .ok_or_else(|| StepError::invalid("search", format!("unknown search algorithm `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_flattens_into_outcome() {
        let out = linear_search(&[4, 2], 2);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["index"], 1);
        assert!(json["steps"].is_array());
    }

    #[test]
    fn all_agree_on_sorted_input() {
        let array = [1, 4, 4, 9, 12, 15, 20];
        for target in [0, 1, 9, 20, 21] {
            let expected = array.contains(&target);
            for alg in SearchAlgorithm::ALL {
                let out = alg.run(&array, target).unwrap();
                assert_eq!(out.result.found, expected, "{alg} target {target}");
                if let Some(i) = out.result.index {
                    assert_eq!(array[i], target);
                }
            }
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("binary".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::Binary);
        assert_eq!("jump_search".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::Jump);
        assert!("ternary".parse::<SearchAlgorithm>().is_err());
    }
}
