//! The two priority collections backing a [`crate::MedianTracker`]
//!
//! Both halves store [`OrderedFloat`] internally so that [`BinaryHeap`] gets a total order over `f64`.
//! Everything crossing their interface is a plain `f64`.

use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;

/// Max-ordered collection holding the lower half of the stream
#[derive(Debug, Clone, Default)]
pub(crate) struct LowerHalf {
    heap: BinaryHeap<OrderedFloat<f64>>,
}

impl LowerHalf {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, v: f64) {
        self.heap.push(OrderedFloat(v));
    }

    pub(crate) fn pop_max(&mut self) -> Option<f64> {
        self.heap.pop().map(|v| v.0)
    }

    pub(crate) fn peek_max(&self) -> Option<f64> {
        self.heap.peek().map(|v| v.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }

    /// Copies the contents out, largest first
    ///
    /// The heap itself is left untouched.
    pub(crate) fn sorted_desc(&self) -> Vec<f64> {
        let mut values: Vec<_> = self.heap.iter().copied().collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values.into_iter().map(|v| v.0).collect()
    }
}

/// Min-ordered collection holding the upper half of the stream
#[derive(Debug, Clone, Default)]
pub(crate) struct UpperHalf {
    heap: BinaryHeap<Reverse<OrderedFloat<f64>>>,
}

impl UpperHalf {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, v: f64) {
        self.heap.push(Reverse(OrderedFloat(v)));
    }

    pub(crate) fn pop_min(&mut self) -> Option<f64> {
        self.heap.pop().map(|Reverse(v)| v.0)
    }

    pub(crate) fn peek_min(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(v)| v.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }

    /// Copies the contents out, smallest first
    pub(crate) fn sorted_asc(&self) -> Vec<f64> {
        let mut values: Vec<_> = self.heap.iter().map(|Reverse(v)| *v).collect();
        values.sort_unstable();
        values.into_iter().map(|v| v.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_pops_largest_first() {
        let mut lower = LowerHalf::default();
        for v in [3., -1., 7., 7., 0.5] {
            lower.push(v);
        }

        assert_eq!(lower.peek_max(), Some(7.));
        assert_eq!(lower.pop_max(), Some(7.));
        assert_eq!(lower.pop_max(), Some(7.));
        assert_eq!(lower.pop_max(), Some(3.));
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn upper_pops_smallest_first() {
        let mut upper = UpperHalf::default();
        for v in [3., -1., 7., -1., 0.5] {
            upper.push(v);
        }

        assert_eq!(upper.peek_min(), Some(-1.));
        assert_eq!(upper.pop_min(), Some(-1.));
        assert_eq!(upper.pop_min(), Some(-1.));
        assert_eq!(upper.pop_min(), Some(0.5));
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn sorted_views_do_not_drain() {
        let mut lower = LowerHalf::with_capacity(4);
        let mut upper = UpperHalf::with_capacity(4);
        for v in [2., 9., 4., 1.] {
            lower.push(v);
            upper.push(v);
        }

        assert_eq!(lower.sorted_desc(), vec![9., 4., 2., 1.]);
        assert_eq!(upper.sorted_asc(), vec![1., 2., 4., 9.]);

        // Same answer twice, and the roots are still in place
        assert_eq!(lower.sorted_desc(), vec![9., 4., 2., 1.]);
        assert_eq!(lower.peek_max(), Some(9.));
        assert_eq!(upper.peek_min(), Some(1.));
        assert_eq!(lower.len(), 4);
        assert_eq!(upper.len(), 4);
    }

    #[test]
    fn empty_halves() {
        let mut lower = LowerHalf::default();
        let mut upper = UpperHalf::default();

        assert!(lower.is_empty());
        assert_eq!(upper.len(), 0);
        assert_eq!(lower.peek_max(), None);
        assert_eq!(upper.peek_min(), None);
        assert_eq!(lower.pop_max(), None);
        assert_eq!(upper.pop_min(), None);
        assert!(lower.sorted_desc().is_empty());
        assert!(upper.sorted_asc().is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut lower = LowerHalf::default();
        let mut upper = UpperHalf::default();
        lower.push(1.);
        upper.push(2.);

        lower.clear();
        upper.clear();

        assert!(lower.is_empty());
        assert_eq!(upper.peek_min(), None);
    }

    #[test]
    fn nan_sorts_above_everything() {
        let mut lower = LowerHalf::default();
        lower.push(f64::INFINITY);
        lower.push(f64::NAN);

        assert!(lower.peek_max().is_some_and(f64::is_nan));
    }
}
