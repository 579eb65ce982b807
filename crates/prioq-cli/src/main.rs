//! prioq CLI entry point.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use prioq_cli::cli::Cli;
use prioq_cli::{commands, config};

fn main() {
    let env_file = config::load_env_file();

    let cli = Cli::parse();

    // Initialize tracing on stderr so drained output stays clean on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = env_file {
        warn!(file = config::ENV_FILE, error = %e, "Failed to load env file");
    }

    let tasks_file = config::resolve_tasks_file(cli.tasks_file.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = commands::execute(cli.command, tasks_file.as_deref(), &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
