//! UpdateQueue - FIFO of grid indices with O(1) membership
//!
//! An index is held at most once; pushing it again while queued is a no-op.
//! Once popped it may be pushed again.

use std::collections::{HashSet, VecDeque};

#[derive(Clone, Debug, Default)]
pub struct UpdateQueue {
    order: VecDeque<usize>,
    members: HashSet<usize>,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the index was already queued
    #[inline]
    pub fn push(&mut self, idx: usize) -> bool {
        if !self.members.insert(idx) {
            return false;
        }
        self.order.push_back(idx);
        true
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<usize> {
        let idx = self.order.pop_front()?;
        self.members.remove(&idx);
        Some(idx)
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.members.contains(&idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Indices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_dropped_and_order_kept() {
        let mut q = UpdateQueue::new();
        assert!(q.push(5));
        assert!(q.push(2));
        assert!(!q.push(5));
        assert!(q.push(9));

        assert_eq!(q.iter().collect::<Vec<_>>(), vec![5, 2, 9]);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn popped_index_can_be_pushed_again() {
        let mut q = UpdateQueue::new();
        q.push(1);
        q.push(2);
        assert_eq!(q.pop_front(), Some(1));
        assert!(!q.contains(1));
        assert!(q.push(1));
        assert_eq!(q.pop_front(), Some(2));
        assert_eq!(q.pop_front(), Some(1));
        assert_eq!(q.pop_front(), None);
    }

    #[test]
    fn clear_empties_both_views() {
        let mut q = UpdateQueue::new();
        q.push(3);
        q.clear();
        assert!(q.is_empty());
        assert!(!q.contains(3));
        assert!(q.push(3));
    }
}
