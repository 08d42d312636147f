//! Heap sort over an implicit max-heap.
//!
//! Variables:
//!   n      = size of the heap prefix
//!   l, r   = 2i + 1, 2i + 2
//!
//! Equations:
//!   build: sift_down(i) for i = n/2 - 1 down to 0
//!   extract: swap(0, end), sift_down(0) over [0, end)
//!   sift_down picks the larger child; on a tie the left child wins.

use std::cmp::Ordering;

use super::{Recorder, SortStep};
use crate::trace::Trace;

pub fn heap_sort(array: &[i64]) -> Trace<SortStep> {
    tracing::debug!(len = array.len(), "heap sort");
    let mut rec = Recorder::new(array);
    let len = rec.len();

    for i in (0..len / 2).rev() {
        sift_down(&mut rec, len, i);
    }
    for end in (1..len).rev() {
        rec.swap(0, end);
        rec.placed(end);
        sift_down(&mut rec, end, 0);
    }
    if len > 0 {
        rec.placed(0);
    }
    rec.finish()
}

fn sift_down(rec: &mut Recorder, n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;

        if l < n && rec.compare(l, largest) == Ordering::Greater {
            largest = l;
        }
        if r < n && rec.compare(r, largest) == Ordering::Greater {
            largest = r;
        }
        if largest == i {
            return;
        }
        rec.swap(i, largest);
        i = largest;
    }
}
