//! Bounded position history used to draw motion trails

use crate::physics::math::Vector;
use std::collections::VecDeque;

/// Fixed-capacity FIFO of past positions, oldest first
///
/// Appending to a full trail evicts the oldest point. A capacity of zero
/// disables recording entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vector>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, position: Vector) {
        if self.capacity == 0 {
            return;
        }

        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<Vector> {
        self.points.front().copied()
    }

    pub fn newest(&self) -> Option<Vector> {
        self.points.back().copied()
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Vector> + ExactSizeIterator + '_ {
        self.points.iter().copied()
    }

    /// Owned copy of the trail, oldest first
    pub fn snapshot(&self) -> Vec<Vector> {
        self.points.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(crate::physics::body::DEFAULT_MAX_TRAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_creation() {
        let trail = Trail::with_capacity(5);

        assert!(trail.is_empty());
        assert_eq!(trail.capacity(), 5);
        assert_eq!(trail.oldest(), None);
        assert_eq!(trail.newest(), None);
    }

    #[test]
    fn test_trail_push_keeps_order() {
        let mut trail = Trail::with_capacity(5);
        trail.push(Vector::new(0.0, 0.0));
        trail.push(Vector::new(1.0, 0.0));

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.oldest(), Some(Vector::new(0.0, 0.0)));
        assert_eq!(trail.newest(), Some(Vector::new(1.0, 0.0))); // Newest point last
    }

    #[test]
    fn test_trail_evicts_oldest_when_full() {
        let mut trail = Trail::with_capacity(3);

        for i in 0..10 {
            trail.push(Vector::new(i as f64, 0.0));
        }

        assert_eq!(trail.len(), 3);
        assert_eq!(
            trail.snapshot(),
            vec![
                Vector::new(7.0, 0.0),
                Vector::new(8.0, 0.0),
                Vector::new(9.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut trail = Trail::with_capacity(0);
        trail.push(Vector::ONE);

        assert!(trail.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut trail = Trail::with_capacity(4);
        trail.push(Vector::ONE);
        trail.push(Vector::ZERO);
        trail.clear();

        assert!(trail.is_empty());
        assert_eq!(trail.capacity(), 4);
    }
}
