//! Integration tests for running commands against JSON task files.

use std::io::Write;

use clap::Parser;
use prioq_cli::cli::{Cli, Commands, OutputFormat, TaskArgs};
use prioq_cli::commands::execute;
use tempfile::NamedTempFile;

const SCENARIO_FILE: &str = r#"[
    { "command": "Buy coffee for John", "priority": 1 },
    { "command": "Write a letter to Sarah", "priority": 5 },
    { "command": "Go shopping with Emma", "priority": 0 },
    { "command": "Pay bills", "priority": 9 },
    { "command": "Pay rent", "priority": 9 },
    { "command": "Do workout", "priority": 10 },
    { "command": "Clean up your room", "priority": 4 },
    { "command": "Call Peter", "priority": "5" },
    { "command": "Walk the dog", "priority": 3 }
]"#;

fn task_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(command: Commands, file: &NamedTempFile) -> Result<String, String> {
    let mut out = Vec::new();
    execute(command, Some(file.path()), &mut out).map_err(|e| e.to_string())?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_show_task_file() {
    let file = task_file(SCENARIO_FILE);
    let output = run(
        Commands::Show {
            tasks: TaskArgs::default(),
            format: OutputFormat::Table,
            min_priority: None,
        },
        &file,
    )
    .unwrap();

    let expected = "Order: 1 - Task: Do workout\n\
                    Order: 2 - Task: Pay bills\n\
                    Order: 3 - Task: Pay rent\n\
                    Order: 4 - Task: Write a letter to Sarah\n\
                    Order: 5 - Task: Call Peter\n\
                    Order: 6 - Task: Clean up your room\n\
                    Order: 7 - Task: Walk the dog\n\
                    Order: 8 - Task: Buy coffee for John\n\
                    Order: 9 - Task: Go shopping with Emma\n";
    assert_eq!(output, expected);
}

#[test]
fn test_run_task_file() {
    let file = task_file(SCENARIO_FILE);
    let output = run(Commands::Run { tasks: TaskArgs::default() }, &file).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Processing command: Do workout (Priority: 10)");
    assert_eq!(lines[3], "Processing command: Write a letter to Sarah (Priority: 5)");
    assert_eq!(lines[4], "Processing command: Call Peter (Priority: 5)");
    assert_eq!(lines[8], "Processing command: Go shopping with Emma (Priority: 0)");
}

#[test]
fn test_command_line_tasks_follow_file_tasks() {
    let file = task_file(r#"[{ "command": "From file", "priority": 5 }]"#);
    let cli = Cli::parse_from(["prioq", "show", "--format", "brief", "-t", "5:From args", "-t", "6:Urgent"]);

    let output = run(cli.command, &file).unwrap();
    assert_eq!(output, "Urgent\nFrom file\nFrom args\n");
}

#[test]
fn test_invalid_entry_reports_index() {
    let file = task_file(r#"[{ "command": "ok", "priority": 2 }, { "command": "bad", "priority": "abc" }]"#);
    let err = run(Commands::Run { tasks: TaskArgs::default() }, &file).unwrap_err();

    assert!(err.starts_with("task 1 in "), "unexpected error: {err}");
    assert!(err.ends_with("invalid priority format: \"abc\" is not an integer"));
}

#[test]
fn test_missing_task_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("tasks.json");

    let mut out = Vec::new();
    let err = execute(Commands::Next { tasks: TaskArgs::default() }, Some(&missing), &mut out).unwrap_err();
    assert!(err.to_string().starts_with("failed to read "));
}
