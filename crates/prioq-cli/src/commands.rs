//! Command handlers for CLI subcommands.

use std::io::Write;
use std::path::Path;

use prioq_queue::{Priority, PriorityQueue, TaskFilter};
use tracing::info;

use crate::cli::{Commands, OutputFormat};
use crate::tasks_file::{self, TaskSpec};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command, writing its output to `out`.
pub fn execute(command: Commands, tasks_file: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Show {
            tasks,
            format,
            min_priority,
        } => {
            let queue = build_queue(tasks_file, &tasks.tasks)?;
            cmd_show(&queue, format, min_priority, out)
        }
        Commands::Run { tasks } => {
            let mut queue = build_queue(tasks_file, &tasks.tasks)?;
            cmd_run(&mut queue, out)
        }
        Commands::Next { tasks } => {
            let mut queue = build_queue(tasks_file, &tasks.tasks)?;
            cmd_next(&mut queue, out)
        }
    }
}

/// Builds a queue from the task file (if any) followed by command-line tasks.
pub fn build_queue(tasks_file: Option<&Path>, tasks: &[TaskSpec]) -> Result<PriorityQueue> {
    let mut queue = PriorityQueue::new();

    if let Some(path) = tasks_file {
        let loaded = tasks_file::load_into(&mut queue, path)?;
        info!(path = %path.display(), loaded, "Loaded task file");
    }

    for spec in tasks {
        queue.enqueue(spec.command.clone(), spec.priority.clone())?;
    }

    info!(queued = queue.len(), "Queue ready");
    Ok(queue)
}

fn cmd_show(
    queue: &PriorityQueue,
    format: OutputFormat,
    min_priority: Option<Priority>,
    out: &mut dyn Write,
) -> Result<()> {
    let filter = match min_priority {
        Some(min) => TaskFilter::new().with_min_priority(min),
        None => TaskFilter::new(),
    };
    let tasks = queue.list(&filter);

    match format {
        OutputFormat::Table => {
            if tasks.is_empty() {
                writeln!(out, "No tasks queued.")?;
            } else if tasks.len() == queue.len() {
                write!(out, "{}", queue)?;
            } else {
                // Keep each task's position in the full queue.
                for (index, task) in queue.iter().enumerate() {
                    if filter.matches(task) {
                        writeln!(out, "Order: {} - Task: {}", index + 1, task.command())?;
                    }
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tasks)?;
            writeln!(out)?;
        }
        OutputFormat::Brief => {
            for task in tasks {
                writeln!(out, "{}", task.command())?;
            }
        }
    }

    Ok(())
}

fn cmd_run(queue: &mut PriorityQueue, out: &mut dyn Write) -> Result<()> {
    let processed = queue.process_tasks(&mut *out)?;
    info!(processed, "Drained queue");
    Ok(())
}

fn cmd_next(queue: &mut PriorityQueue, out: &mut dyn Write) -> Result<()> {
    let task = queue.dequeue()?;
    writeln!(out, "{}", task)?;
    Ok(())
}
