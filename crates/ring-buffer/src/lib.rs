//! Bounded History Buffer
//!
//! Provides a fixed-capacity FIFO used to retain the most recent per-frame
//! samples of a tracked quantity. Pushing into a full buffer evicts the oldest
//! sample.

mod buffer;

pub use buffer::HistoryBuffer;

use thiserror::Error;

/// Buffer construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("History buffer capacity must be at least 1")]
    ZeroCapacity,
}
