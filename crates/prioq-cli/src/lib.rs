//! prioq CLI library.
//!
//! Provides the command-line interface for building a priority queue from
//! arguments or a JSON task file, then rendering or draining it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod tasks_file;
