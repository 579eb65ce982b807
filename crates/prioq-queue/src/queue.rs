//! PriorityQueue - ordered task container with FIFO tie-break.
//!
//! Tasks are kept sorted at all times:
//! - Higher priority comes first (10 before 0)
//! - For the same priority, earlier arrival comes first
//! - Tasks stamped with the same instant leave in acceptance order
//!
//! New tasks are placed with a binary search for the insertion point, which
//! yields the same order as a stable re-sort of the whole queue.

use std::cmp::Ordering;
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;
use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::{QueueError, Result};
use crate::filter::TaskFilter;
use crate::priority::IntoPriority;
use crate::processor::{TaskProcessor, WriterProcessor};
use crate::task::Task;

/// Single-threaded priority queue of [`Task`]s.
///
/// Mutating operations take `&mut self`. Sharing a queue between threads
/// requires wrapping it in a lock such as `Mutex<PriorityQueue>`.
///
/// # Example
///
/// ```
/// use prioq_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("Pay bills", 9).unwrap();
/// queue.enqueue("Do workout", 10).unwrap();
/// queue.enqueue("Pay rent", 9).unwrap();
///
/// assert_eq!(queue.dequeue().unwrap().command(), "Do workout");
/// assert_eq!(queue.dequeue().unwrap().command(), "Pay bills");
/// assert_eq!(queue.dequeue().unwrap().command(), "Pay rent");
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug)]
pub struct PriorityQueue<C = SystemClock> {
    /// Tasks in queue order; index 0 is dequeued next.
    tasks: VecDeque<Task>,
    /// Source of arrival timestamps.
    clock: C,
    /// Sequence number handed to the most recently accepted task.
    last_sequence: u64,
    /// Arrival time handed to the most recently accepted task.
    last_arrival: Option<DateTime<Utc>>,
}

impl PriorityQueue<SystemClock> {
    /// Creates an empty queue stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PriorityQueue<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PriorityQueue<C> {
    /// Creates an empty queue that stamps arrivals with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: VecDeque::new(),
            clock,
            last_sequence: 0,
            last_arrival: None,
        }
    }

    /// Validates and adds a task.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidPriorityFormat`] or
    /// [`QueueError::InvalidPriorityRange`] if `priority` does not validate.
    /// The queue is unchanged in that case.
    pub fn enqueue(&mut self, command: impl Into<String>, priority: impl IntoPriority) -> Result<()> {
        let task = Task::new(command, priority)?;
        self.push(task);
        Ok(())
    }

    /// Adds an already validated task, stamping its arrival.
    ///
    /// Any arrival data the task carried from another queue is replaced.
    pub fn push(&mut self, mut task: Task) {
        let now = self.clock.now();
        // Keep arrivals non-decreasing even if the wall clock steps back.
        let arrival = match self.last_arrival {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_arrival = Some(arrival);
        self.last_sequence += 1;
        task.stamp(arrival, self.last_sequence);

        let index = self
            .tasks
            .partition_point(|queued| queued.queue_order(&task) != Ordering::Greater);

        debug!(
            command = %task.command(),
            priority = %task.priority(),
            sequence = task.sequence(),
            position = index,
            "Enqueued task"
        );

        self.tasks.insert(index, task);
    }

    /// Removes and returns the highest-priority, earliest-arrived task.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to dequeue.
    pub fn dequeue(&mut self) -> Result<Task> {
        self.try_dequeue().ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the head task, or `None` when empty.
    pub fn try_dequeue(&mut self) -> Option<Task> {
        let task = self.tasks.pop_front()?;
        trace!(command = %task.command(), remaining = self.tasks.len(), "Dequeued task");
        Some(task)
    }

    /// Returns the task that would be dequeued next without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.tasks.front()
    }

    /// Returns an iterator that removes and yields tasks in queue order.
    ///
    /// Tasks not yet yielded when the iterator is dropped stay queued.
    pub fn drain(&mut self) -> Drain<'_> {
        Drain {
            tasks: &mut self.tasks,
        }
    }

    /// Drains the queue through `processor`, one task at a time.
    ///
    /// # Returns
    ///
    /// The number of tasks processed.
    ///
    /// # Errors
    ///
    /// Stops at the first processor error and returns it. The failing task
    /// has been removed; every task behind it stays queued.
    pub fn process_tasks_with<P: TaskProcessor>(&mut self, mut processor: P) -> Result<usize> {
        let mut processed = 0;
        while let Some(task) = self.try_dequeue() {
            debug!(command = %task.command(), priority = %task.priority(), "Processing task");
            processor.process(&task)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Drains the queue, writing one line per task to `writer`:
    ///
    /// ```text
    /// Processing command: <command> (Priority: <priority>)
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Processing`] if writing fails.
    pub fn process_tasks<W: Write>(&mut self, writer: W) -> Result<usize> {
        self.process_tasks_with(WriterProcessor::new(writer))
    }

    /// Iterates over queued tasks in queue order without removing them.
    pub fn iter(&self) -> vec_deque::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Lists queued tasks matching `filter`, in queue order.
    pub fn list(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    /// Removes every queued task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Returns the number of queued tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the queue has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<C> fmt::Display for PriorityQueue<C> {
    /// One line per task, numbered from 1: `Order: <n> - Task: <command>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, task) in self.tasks.iter().enumerate() {
            writeln!(f, "Order: {} - Task: {}", index + 1, task.command())?;
        }
        Ok(())
    }
}

impl<'a, C> IntoIterator for &'a PriorityQueue<C> {
    type Item = &'a Task;
    type IntoIter = vec_deque::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Iterator returned by [`PriorityQueue::drain`].
#[derive(Debug)]
pub struct Drain<'a> {
    tasks: &'a mut VecDeque<Task>,
}

impl Iterator for Drain<'_> {
    type Item = Task;

    fn next(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tasks.len(), Some(self.tasks.len()))
    }
}

impl ExactSizeIterator for Drain<'_> {}
