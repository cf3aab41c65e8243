// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory event log.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Keeps the newest `capacity` items, oldest first, and counts what it had
/// to drop so a report can say it is incomplete.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    items: VecDeque<T>,
    capacity: BufferCapacity,
    dropped: u64,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.value()),
            capacity,
            dropped: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() >= self.capacity.value() {
            self.items.pop_front();
            self.dropped += 1;
        }
        self.items.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items pushed out by newer ones since creation.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::buffer_capacity_bounds;

    #[test]
    fn items_come_back_oldest_first() {
        let mut buffer = CircularBuffer::new(BufferCapacity::default());
        for value in ["fetch", "select", "next"] {
            buffer.push(value);
        }
        assert_eq!(
            buffer.iter().copied().collect::<Vec<_>>(),
            vec!["fetch", "select", "next"]
        );
        assert_eq!(buffer.dropped(), 0);
    }

    #[test]
    fn overflow_evicts_oldest_and_counts_it() {
        let capacity = buffer_capacity_bounds::MIN;
        let mut buffer = CircularBuffer::new(BufferCapacity::new(capacity));
        for value in 0..capacity + 2 {
            buffer.push(value);
        }

        assert_eq!(buffer.len(), capacity);
        assert_eq!(buffer.dropped(), 2);
        assert_eq!(buffer.iter().next(), Some(&2));
        assert_eq!(buffer.iter().last(), Some(&(capacity + 1)));
    }
}
