//! Append-only step arena.
//!
//! Variables:
//!   steps : Vec<S>   recorded snapshots, index = replay position
//!   N     : usize    number of recorded steps
//!
//! Equations:
//!   push(s):   steps[N] = s,  N' = N + 1,  returns N      O(1) amortised
//!   get(i):    i < N => Some(&steps[i])                  O(1)
//!
//!   Once pushed a step is never handed out mutably, so step i observed at
//!   replay time is exactly the state recorded at decision i.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S> Trace<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step and return its index.
    pub fn push(&mut self, step: S) -> usize {
        self.steps.push(step);
        self.steps.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }

    pub fn cursor(&self) -> Cursor<'_, S> {
        Cursor {
            trace: self,
            position: 0,
        }
    }

    pub fn into_vec(self) -> Vec<S> {
        self.steps
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<S> IntoIterator for Trace<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Replay position over a finished trace.
///
/// Owns no timing: a driver decides when to call [`Cursor::advance`], and
/// stopping early is simply not calling it again.
#[derive(Debug, Clone)]
pub struct Cursor<'a, S> {
    trace: &'a Trace<S>,
    position: usize,
}

impl<'a, S> Cursor<'a, S> {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&'a S> {
        self.trace.get(self.position)
    }

    /// Move one step forward; returns the new current step, or `None` at the end.
    pub fn advance(&mut self) -> Option<&'a S> {
        if self.position + 1 >= self.trace.len() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// Move one step back; returns the new current step, or `None` at the start.
    pub fn back(&mut self) -> Option<&'a S> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    /// Jump to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) -> Option<&'a S> {
        self.position = index.min(self.trace.len().saturating_sub(1));
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }
}

/// Steps plus the final summary of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<S, R> {
    pub steps: Trace<S>,
    #[serde(flatten)]
    pub result: R,
}

impl<S, R> Outcome<S, R> {
    pub fn new(steps: Trace<S>, result: R) -> Self {
        Self { steps, result }
    }
}
