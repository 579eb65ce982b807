//! Task specifications from the command line and JSON task files.
//!
//! A task file is a JSON array of objects:
//!
//! ```json
//! [
//!   { "command": "Pay bills", "priority": 9 },
//!   { "command": "Walk the dog", "priority": "3" }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use prioq_queue::{Clock, IntoPriority, Priority, PriorityQueue, QueueError, Task};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a task file.
#[derive(Error, Debug)]
pub enum TasksFileError {
    /// Failed to read the file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a JSON array of task objects.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entry was rejected by the queue.
    #[error("task {index} in {path}: {source}")]
    InvalidTask {
        path: PathBuf,
        index: usize,
        #[source]
        source: QueueError,
    },
}

/// Priority as written by the user, validated only when enqueued.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawPriority {
    /// A JSON integer.
    Integer(i64),
    /// A JSON string or command-line text.
    Text(String),
    /// Any other JSON value, such as `5.5`, `null` or an integer beyond `i64`.
    Other(serde_json::Value),
}

impl IntoPriority for RawPriority {
    fn into_priority(self) -> prioq_queue::Result<Priority> {
        match self {
            RawPriority::Integer(value) => value.into_priority(),
            RawPriority::Text(text) => text.into_priority(),
            RawPriority::Other(value) => match value.as_u64() {
                Some(value) => value.into_priority(),
                None => Err(QueueError::InvalidPriorityFormat(value.to_string())),
            },
        }
    }
}

/// A task waiting to be enqueued.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskSpec {
    pub command: String,
    pub priority: RawPriority,
}

impl FromStr for TaskSpec {
    type Err = String;

    /// Parses `PRIORITY:COMMAND`, splitting at the first colon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (priority, command) = s
            .split_once(':')
            .ok_or_else(|| format!("expected PRIORITY:COMMAND, got {s:?}"))?;

        Ok(Self {
            command: command.to_string(),
            priority: RawPriority::Text(priority.to_string()),
        })
    }
}

/// Reads task specifications from a JSON task file.
pub fn read_tasks(path: &Path) -> Result<Vec<TaskSpec>, TasksFileError> {
    let contents = fs::read_to_string(path).map_err(|source| TasksFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| TasksFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Enqueues every task from a JSON task file, in file order.
///
/// Entries are validated before any is enqueued, so a file with a bad entry
/// leaves the queue untouched.
///
/// # Returns
///
/// The number of tasks enqueued.
pub fn load_into<C: Clock>(queue: &mut PriorityQueue<C>, path: &Path) -> Result<usize, TasksFileError> {
    let specs = read_tasks(path)?;

    let mut tasks = Vec::with_capacity(specs.len());
    for (index, spec) in specs.into_iter().enumerate() {
        let task = Task::new(spec.command, spec.priority).map_err(|source| {
            TasksFileError::InvalidTask {
                path: path.to_path_buf(),
                index,
                source,
            }
        })?;
        tasks.push(task);
    }

    let count = tasks.len();
    for task in tasks {
        queue.push(task);
    }
    Ok(count)
}
