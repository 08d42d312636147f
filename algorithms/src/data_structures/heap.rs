//! Array-backed binary min-heap whose slots can be snapshotted.
//!
//! Variables:
//!   slots : Vec<T>  level-order tree, root at 0
//!
//! Equations:
//!   up(i)    = (i - 1) / 2
//!   down(i)  = { 2i + 1, 2i + 2 } ∩ [0, N)
//!   slots[up(i)] <= slots[i]  for 0 < i < N
//!
//!   push(x):   append, bubble toward the root while smaller than up(i)
//!   pop_min(): move the last slot to the root, sink it below the smaller
//!              child until neither child is smaller. Equal children: left.

#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    slots: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot the new value settled in.
    pub fn push(&mut self, val: T) -> usize {
        self.slots.push(val);
        self.bubble_up(self.slots.len() - 1)
    }

    pub fn pop_min(&mut self) -> Option<T> {
        let last = self.slots.pop()?;
        if self.slots.is_empty() {
            return Some(last);
        }
        let min = std::mem::replace(&mut self.slots[0], last);
        self.sink(0);
        Some(min)
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.slots.first()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in array order, which is not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    fn bubble_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let up = (i - 1) / 2;
            if self.slots[i] >= self.slots[up] {
                break;
            }
            self.slots.swap(i, up);
            i = up;
        }
        i
    }

    fn sink(&mut self, mut i: usize) {
        let n = self.slots.len();
        loop {
            let (l, r) = (2 * i + 1, 2 * i + 2);
            let child = match (l < n, r < n) {
                (false, _) => break,
                (true, false) => l,
                (true, true) if self.slots[r] < self.slots[l] => r,
                (true, true) => l,
            };
            if self.slots[child] >= self.slots[i] {
                break;
            }
            self.slots.swap(i, child);
            i = child;
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        for val in iter {
            heap.push(val);
        }
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_order() {
        let mut heap: MinHeap<i32> = [5, 1, 4, 1, 3].into_iter().collect();
        let mut out = Vec::new();
        while let Some(v) = heap.pop_min() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 1, 3, 4, 5]);
        assert!(heap.pop_min().is_none());
    }

    #[test]
    fn root_is_minimum_after_each_push() {
        let mut heap = MinHeap::new();
        for v in [9, 7, 8, 2] {
            heap.push(v);
            assert_eq!(heap.peek_min(), heap.iter().min());
        }
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn push_reports_settled_slot() {
        let mut heap = MinHeap::new();
        assert_eq!(heap.push(5), 0);
        assert_eq!(heap.push(7), 1);
        assert_eq!(heap.push(1), 0);
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 7, 5]);
    }
}
