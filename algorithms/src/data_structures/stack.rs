//! Stack: LIFO structure backed by Vec, optionally bounded.
//!
//! Variables:
//!   data : Vec<T>         backing storage, top = data[N-1]
//!   N    : usize          current number of elements = data.len()
//!   C    : Option<usize>  capacity bound, None = unbounded
//!
//! Equations:
//!   push(x): N < C => data[N] = x,  N' = N + 1   O(1) amortised
//!            N = C => CapacityExceeded
//!   pop():   N' = N - 1,   returns data[N-1]     O(1)
//!   peek():  returns &data[N-1]                  O(1)

use serde::{Deserialize, Serialize};

use crate::error::{StepError, StepResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    data: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { data: Vec::new(), capacity: None }
    }

    pub fn bounded(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity), capacity: Some(capacity) }
    }

    pub fn push(&mut self, val: T) -> StepResult<()> {
        if let Some(capacity) = self.capacity.filter(|&c| self.data.len() >= c) {
            return Err(StepError::CapacityExceeded { capacity });
        }
        self.data.push(val);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T>    { self.data.pop() }
    pub fn peek(&self) -> Option<&T>      { self.data.last() }
    pub fn is_empty(&self) -> bool        { self.data.is_empty() }
    pub fn len(&self) -> usize            { self.data.len() }
    pub fn capacity(&self) -> Option<usize> { self.capacity }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|c| self.data.len() >= c)
    }

    /// Free slots left, `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        self.capacity.map(|c| c.saturating_sub(self.data.len()))
    }

    /// Top first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().rev()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
