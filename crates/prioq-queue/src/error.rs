//! Error types for priority queue operations.

use thiserror::Error;

/// Errors that can occur during priority queue operations.
///
/// Every variant is reported to the caller of the operation that produced it.
/// The queue is never modified by a failing enqueue or dequeue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Priority value could not be converted to an integer.
    #[error("invalid priority format: {0:?} is not an integer")]
    InvalidPriorityFormat(String),

    /// Priority integer is outside the accepted range.
    #[error("invalid priority range: {0} is not between 0 and 10")]
    InvalidPriorityRange(i64),

    /// Dequeue attempted on a queue with no tasks.
    #[error("queue is empty")]
    EmptyQueue,

    /// A task processor failed while draining the queue.
    ///
    /// Processors are arbitrary caller code, so the failure is carried as a
    /// message. This keeps the error `Clone` and comparable.
    #[error("processing failed: {0}")]
    Processing(String),
}

/// Result type alias for priority queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
