//! Hooks invoked for each task drained from a queue.

use std::io::Write;

use crate::error::{QueueError, Result};
use crate::task::Task;

/// Receives each task as the queue is drained.
///
/// Processing is a side effect chosen by the caller; the queue never runs a
/// task's command itself. Any `FnMut(&Task)` closure is a processor.
pub trait TaskProcessor {
    /// Handles one drained task.
    ///
    /// Returning an error stops the drain.
    fn process(&mut self, task: &Task) -> Result<()>;
}

impl<F> TaskProcessor for F
where
    F: FnMut(&Task),
{
    fn process(&mut self, task: &Task) -> Result<()> {
        self(task);
        Ok(())
    }
}

/// Writes a `Processing command: <command> (Priority: <priority>)` line per
/// task.
#[derive(Debug)]
pub struct WriterProcessor<W> {
    writer: W,
}

impl<W: Write> WriterProcessor<W> {
    /// Wraps a writer, e.g. `std::io::stdout()` or a `Vec<u8>`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TaskProcessor for WriterProcessor<W> {
    fn process(&mut self, task: &Task) -> Result<()> {
        writeln!(self.writer, "Processing command: {task}")
            .map_err(|e| QueueError::Processing(e.to_string()))
    }
}
