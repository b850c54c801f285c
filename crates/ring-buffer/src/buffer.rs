//! History Buffer Implementation

use crate::BufferError;
use serde::Serialize;
use std::collections::VecDeque;

/// Fixed-capacity FIFO of recent samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryBuffer<T> {
    /// Samples, oldest at the front
    samples: VecDeque<T>,
    /// Maximum number of retained samples
    capacity: usize,
    /// Total samples pushed (for statistics)
    total_written: usize,
}

impl<T: Copy> HistoryBuffer<T> {
    /// Create a new history buffer with given capacity
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            total_written: 0,
        })
    }

    /// Push a sample, returning the evicted oldest sample if the buffer was full
    pub fn push(&mut self, sample: T) -> Option<T> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        self.total_written += 1;
        evicted
    }

    /// Get the number of samples currently in the buffer
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Copy the current contents, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.samples.iter().copied().collect()
    }

    /// Get total samples pushed (for statistics)
    pub fn total_written(&self) -> usize {
        self.total_written
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overwrite_oldest() {
        let mut buffer = HistoryBuffer::new(5).unwrap();

        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            assert_eq!(buffer.push(v), None);
        }
        assert!(buffer.is_full());

        assert_eq!(buffer.push(6.0), Some(1.0));
        assert_eq!(buffer.to_vec(), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(buffer.is_full());
        assert_eq!(buffer.total_written(), 6);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            HistoryBuffer::<f64>::new(0).unwrap_err(),
            BufferError::ZeroCapacity
        );
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = HistoryBuffer::new(2).unwrap();
        buffer.push(1.0);
        buffer.push(2.0);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.total_written(), 2);

        // Capacity survives the clear
        for v in [3.0, 4.0, 5.0] {
            buffer.push(v);
        }
        assert_eq!(buffer.to_vec(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_serializes_contents() {
        let mut buffer = HistoryBuffer::new(2).unwrap();
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let json = serde_json::to_value(&buffer).unwrap();
        assert_eq!(json["samples"], serde_json::json!([2, 3]));
        assert_eq!(json["capacity"], 2);
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(
            capacity in 1usize..16,
            values in proptest::collection::vec(-100.0f64..100.0, 0..64),
        ) {
            let mut buffer = HistoryBuffer::new(capacity).unwrap();
            for &v in &values {
                buffer.push(v);
                prop_assert!(buffer.len() <= capacity);
            }

            let keep = values.len().min(capacity);
            prop_assert_eq!(buffer.to_vec(), values[values.len() - keep..].to_vec());
        }
    }
}
