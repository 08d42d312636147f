//! Sorting steppers.
//!
//! Every stepper takes a borrowed slice, sorts a private copy ascending and
//! returns the [`Trace`] of [`SortStep`]s it went through. Each step carries
//! one comparison, one swap or one write plus a full array snapshot; the last
//! step is always [`SortAction::Done`].

pub mod bubble_sort;
pub mod counting_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod selection_sort;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StepError, StepResult};
use crate::trace::Trace;

pub use bubble_sort::bubble_sort;
pub use counting_sort::counting_sort;
pub use heap_sort::heap_sort;
pub use insertion_sort::insertion_sort;
pub use merge_sort::merge_sort;
pub use quick_sort::quick_sort;
pub use radix_sort::radix_sort;
pub use selection_sort::selection_sort;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SortAction {
    Compare { i: usize, j: usize },
    /// Array slot compared against a value held outside the array.
    CompareKey { index: usize, key: i64 },
    Swap { i: usize, j: usize },
    Write { index: usize, value: i64 },
    /// Insertion sort lifts `value` out of `index`.
    Key { index: usize, value: i64 },
    /// Selection sort found a smaller candidate.
    Minimum { index: usize },
    Pivot { index: usize },
    /// `index` holds its final value.
    Placed { index: usize },
    /// Counting sort tallied the element at `index`.
    Count { index: usize, value: i64 },
    /// Radix sort dropped the element at `index` into bucket `digit`.
    Bucket { index: usize, digit: i64 },
    /// Radix sort starts the pass for decimal `place`.
    Digit { place: i64 },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    pub action: SortAction,
    pub array: Vec<i64>,
    /// Counting / bucket table for the non-comparison sorts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aux: Vec<i64>,
    pub description: String,
}

/// Working copy plus the trace being built.
pub(crate) struct Recorder {
    pub array: Vec<i64>,
    pub aux: Vec<i64>,
    steps: Trace<SortStep>,
}

impl Recorder {
    pub fn new(input: &[i64]) -> Self {
        Self { array: input.to_vec(), aux: Vec::new(), steps: Trace::new() }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn record(&mut self, action: SortAction, description: impl Into<String>) {
        self.steps.push(SortStep {
            action,
            array: self.array.clone(),
            aux: self.aux.clone(),
            description: description.into(),
        });
    }

    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        let (a, b) = (self.array[i], self.array[j]);
        let ord = a.cmp(&b);
        let sign = match ord {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        self.record(SortAction::Compare { i, j }, format!("Compare {a} and {b}: {a} {sign} {b}"));
        ord
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        let (a, b) = (self.array[i], self.array[j]);
        self.record(SortAction::Swap { i, j }, format!("Swap {b} and {a}"));
    }

    pub fn write(&mut self, index: usize, value: i64) {
        self.array[index] = value;
        self.record(SortAction::Write { index, value }, format!("Write {value} at position {index}"));
    }

    pub fn placed(&mut self, index: usize) {
        let value = self.array[index];
        self.record(SortAction::Placed { index }, format!("{value} is in its final position"));
    }

    pub fn finish(mut self) -> Trace<SortStep> {
        self.aux.clear();
        let description = if self.array.is_empty() {
            "Nothing to sort".to_string()
        } else {
            "Array is sorted".to_string()
        };
        self.record(SortAction::Done, description);
        self.steps
    }
}

/// Every sorting stepper, addressable by catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    #[serde(rename = "bubble-sort")]
    Bubble,
    #[serde(rename = "selection-sort")]
    Selection,
    #[serde(rename = "insertion-sort")]
    Insertion,
    #[serde(rename = "merge-sort")]
    Merge,
    #[serde(rename = "quick-sort")]
    Quick,
    #[serde(rename = "heap-sort")]
    Heap,
    #[serde(rename = "counting-sort")]
    Counting,
    #[serde(rename = "radix-sort")]
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 8] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble-sort",
            SortAlgorithm::Selection => "selection-sort",
            SortAlgorithm::Insertion => "insertion-sort",
            SortAlgorithm::Merge => "merge-sort",
            SortAlgorithm::Quick => "quick-sort",
            SortAlgorithm::Heap => "heap-sort",
            SortAlgorithm::Counting => "counting-sort",
            SortAlgorithm::Radix => "radix-sort",
        }
    }

    pub fn run(self, array: &[i64]) -> StepResult<Trace<SortStep>> {
        match self {
            SortAlgorithm::Bubble => Ok(bubble_sort(array)),
            SortAlgorithm::Selection => Ok(selection_sort(array)),
            SortAlgorithm::Insertion => Ok(insertion_sort(array)),
            SortAlgorithm::Merge => Ok(merge_sort(array)),
            SortAlgorithm::Quick => Ok(quick_sort(array)),
            SortAlgorithm::Heap => Ok(heap_sort(array)),
            SortAlgorithm::Counting => counting_sort(array),
            SortAlgorithm::Radix => radix_sort(array),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortAlgorithm {
    type Err = StepError;

    /// Accepts the catalog key (`heap-sort`) or the bare name (`heap`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_suffix("-sort").or_else(|| name.strip_suffix("_sort")).unwrap_or(&name);
        SortAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.key().trim_end_matches("-sort") == name)
            .ok_or_else(|| StepError::invalid("sort", format!("unknown sorting algorithm `{s}`")))
    }
}
