//! Task filtering for queue listings.

use crate::priority::Priority;
use crate::task::Task;

/// Filter criteria for listing queued tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only tasks with exactly this priority.
    pub priority: Option<Priority>,
    /// Only tasks with at least this priority.
    pub min_priority: Option<Priority>,
    /// Only tasks whose command contains this text.
    pub command_contains: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exact priority filter.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the minimum priority filter.
    pub fn with_min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = Some(priority);
        self
    }

    /// Sets the command substring filter.
    pub fn with_command_contains(mut self, text: impl Into<String>) -> Self {
        self.command_contains = Some(text.into());
        self
    }

    /// Returns true if the task matches this filter.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(priority) = self.priority {
            if task.priority() != priority {
                return false;
            }
        }

        if let Some(min) = self.min_priority {
            if task.priority() < min {
                return false;
            }
        }

        if let Some(ref text) = self.command_contains {
            if !task.command().contains(text.as_str()) {
                return false;
            }
        }

        true
    }
}
