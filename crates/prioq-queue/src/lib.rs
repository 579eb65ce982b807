//! In-memory priority task queue.
//!
//! This crate provides the `PriorityQueue` for ordering tasks with:
//! - Validated integer priorities from 0 (lowest) to 10 (highest)
//! - FIFO ordering among tasks of equal priority, by arrival time
//! - Drain helpers that hand each task to a `TaskProcessor`
//! - A numbered text rendering for diagnostics
//!
//! # Example
//!
//! ```
//! use prioq_queue::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("Buy coffee for John", 1).unwrap();
//! queue.enqueue("Pay bills", 9).unwrap();
//! queue.enqueue("Pay rent", "9").unwrap();
//!
//! assert_eq!(
//!     queue.to_string(),
//!     "Order: 1 - Task: Pay bills\nOrder: 2 - Task: Pay rent\nOrder: 3 - Task: Buy coffee for John\n"
//! );
//!
//! assert!(matches!(queue.enqueue("Oops", 15), Err(QueueError::InvalidPriorityRange(15))));
//!
//! let mut out = Vec::new();
//! queue.process_tasks(&mut out).unwrap();
//! assert!(queue.is_empty());
//! ```

pub mod clock;
pub mod error;
pub mod filter;
pub mod priority;
pub mod processor;
pub mod queue;
pub mod task;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{QueueError, Result};
pub use filter::TaskFilter;
pub use priority::{IntoPriority, Priority};
pub use processor::{TaskProcessor, WriterProcessor};
pub use queue::{Drain, PriorityQueue};
pub use task::Task;
