//! Command-line interface definition using clap.

use clap::{Args, Parser, Subcommand};
use prioq_queue::{Priority, QueueError};
use std::path::PathBuf;

use crate::config::TASKS_FILE_ENV;
use crate::tasks_file::TaskSpec;

/// prioq - order commands by priority and drain them
#[derive(Parser, Debug)]
#[command(name = "prioq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON task file loaded before command-line tasks
    #[arg(short = 'f', long, env = TASKS_FILE_ENV, global = true)]
    pub tasks_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the queue in priority order
    Show {
        #[command(flatten)]
        tasks: TaskArgs,

        /// Output format (table, json, brief)
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Only show tasks with at least this priority
        #[arg(long, value_parser = parse_priority)]
        min_priority: Option<Priority>,
    },

    /// Drain the queue, printing each task as it is processed
    Run {
        #[command(flatten)]
        tasks: TaskArgs,
    },

    /// Print the task that would be processed first
    Next {
        #[command(flatten)]
        tasks: TaskArgs,
    },
}

/// Tasks given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct TaskArgs {
    /// Task to enqueue, as PRIORITY:COMMAND (repeatable)
    #[arg(short = 't', long = "task", value_name = "PRIORITY:COMMAND")]
    pub tasks: Vec<TaskSpec>,
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse().map_err(|e: QueueError| e.to_string())
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
