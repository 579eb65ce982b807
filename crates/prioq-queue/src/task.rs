//! Task type held by the priority queue.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::priority::{IntoPriority, Priority};

/// A unit of work: an opaque command string with a validated priority.
///
/// Fields are read-only once the task exists. The arrival time and sequence
/// number are assigned by the queue when the task is accepted, so a task that
/// was built with [`Task::new`] but never queued has no arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    command: String,
    priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    arrival_time: Option<DateTime<Utc>>,
    sequence: u64,
}

impl Task {
    /// Creates a task from a command and any value coercible to a priority.
    ///
    /// The command is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPriorityFormat`](crate::QueueError::InvalidPriorityFormat)
    /// or [`InvalidPriorityRange`](crate::QueueError::InvalidPriorityRange)
    /// when `priority` does not validate.
    pub fn new(command: impl Into<String>, priority: impl IntoPriority) -> Result<Self> {
        Ok(Self {
            command: command.into(),
            priority: priority.into_priority()?,
            arrival_time: None,
            sequence: 0,
        })
    }

    /// The command payload.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The validated priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// When the task was accepted into a queue, if it has been.
    pub fn arrival_time(&self) -> Option<DateTime<Utc>> {
        self.arrival_time
    }

    /// Acceptance counter assigned by the queue; 0 before acceptance.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Consumes the task, returning its command.
    pub fn into_command(self) -> String {
        self.command
    }

    /// Records acceptance into a queue.
    pub(crate) fn stamp(&mut self, arrival_time: DateTime<Utc>, sequence: u64) {
        self.arrival_time = Some(arrival_time);
        self.sequence = sequence;
    }

    /// Compares two tasks by queue position.
    ///
    /// Higher priority first, then earlier arrival, then lower sequence.
    pub(crate) fn queue_order(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.arrival_time.cmp(&other.arrival_time))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Priority: {})", self.command, self.priority)
    }
}
