//! Error types for grids and the work queue.

use thiserror::Error;

/// Error type for grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The requested side length cannot hold a start and an end cell.
    #[error("invalid grid size {0}: side length must be at least 1")]
    InvalidSize(usize),
}

/// Error type for work-queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue has been disposed; no further items will be accepted or
    /// produced.
    #[error("work queue is disposed")]
    Disposed,
}
