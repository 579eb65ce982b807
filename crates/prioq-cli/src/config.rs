//! Configuration lookup for the prioq CLI.
//!
//! # Environment Variables
//!
//! - `PRIOQ_TASKS_FILE`: JSON task file loaded before command-line tasks
//! - `RUST_LOG`: tracing filter, overrides `-v`
//!
//! Both may also be set in a `.env.local` file in the working directory.
//! Without an explicit task file, `~/.prioq/tasks.json` is used when it
//! exists.

use std::path::{Path, PathBuf};

/// Environment variable naming the task file.
pub const TASKS_FILE_ENV: &str = "PRIOQ_TASKS_FILE";

/// Dotenv file read at start-up.
pub const ENV_FILE: &str = ".env.local";

/// Default directory name under home.
const DEFAULT_DIR: &str = ".prioq";

/// Default task file name inside the default directory.
const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Loads `.env.local` into the process environment, if present.
///
/// A missing file is not an error. The caller reports other failures once
/// logging is set up.
pub fn load_env_file() -> Result<(), dotenvy::Error> {
    load_env_file_from(Path::new(ENV_FILE))
}

fn load_env_file_from(path: &Path) -> Result<(), dotenvy::Error> {
    match dotenvy::from_path(path) {
        Err(e) if e.not_found() => Ok(()),
        result => result,
    }
}

/// Returns the default task file path, `~/.prioq/tasks.json`.
pub fn default_tasks_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| default_tasks_file_in(&home))
}

fn default_tasks_file_in(home: &Path) -> PathBuf {
    home.join(DEFAULT_DIR).join(DEFAULT_TASKS_FILE)
}

/// Picks the task file to load.
///
/// An explicit path (flag or `PRIOQ_TASKS_FILE`) always wins; otherwise the
/// default file is used only if it exists.
pub fn resolve_tasks_file(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| default_tasks_file().filter(|path| path.is_file()))
}
