//! # taskpad CLI
//!
//! The binary is intentionally thin: argument parsing, store selection,
//! dispatch, and rendering. Everything with actual rules lives in the
//! `taskpad` library; this layer is the only place that knows about
//! stdout, stderr and exit codes.
//!
//! Three front ends share one store:
//! - plain subcommands (`add`, `list`, `show`, `update`, `delete`, `toggle`)
//! - `chat`, an interactive natural-language session
//! - `serve`, an embedded REST API

use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use taskpad::api::TaskApi;
use taskpad::error::{Result, TaskError};
use taskpad::model::Task;
use taskpad::store::memory::InMemoryStore;
use taskpad::store::sqlite::SqliteStore;
use taskpad::store::DataStore;

mod args;
mod chat;
mod serve;

use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli { command, db } = cli;

    match command {
        Some(Commands::Chat { ephemeral }) if ephemeral => {
            chat::run(TaskApi::new(InMemoryStore::new()))
        }
        Some(Commands::Chat { .. }) => {
            let db_path = resolve_db_path(db)?;
            chat::run(TaskApi::new(SqliteStore::open(&db_path)?))
        }
        Some(Commands::Serve { port }) => {
            let db_path = resolve_db_path(db)?;
            serve::run(serve::ServeConfig { port, db_path })
        }
        command => {
            let db_path = resolve_db_path(db)?;
            let mut api = TaskApi::new(SqliteStore::open(&db_path)?);
            run_task_command(&mut api, command)
        }
    }
}

/// Resolution order: `--db` flag, `TASKPAD_DB` env var, platform data dir.
fn resolve_db_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Ok(path) = std::env::var("TASKPAD_DB") {
        return Ok(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("com", "taskpad", "taskpad")
        .ok_or_else(|| TaskError::Store("Could not determine data directory".to_string()))?;
    std::fs::create_dir_all(dirs.data_dir())?;
    Ok(dirs.data_dir().join("tasks.db"))
}

fn run_task_command<S: DataStore>(api: &mut TaskApi<S>, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add { title, description }) => {
            let task = api.create(&title, description.as_deref().unwrap_or(""))?;
            println!("Task {} added: {}", task.id, task.title.green());
        }
        Some(Commands::List { json }) => {
            let tasks = api.list_all()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print_tasks(&tasks);
            }
        }
        Some(Commands::Show { id, json }) => {
            let task = api.get_by_id(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                print_task(&task);
            }
        }
        Some(Commands::Update {
            id,
            title,
            description,
        }) => {
            let task = api.update(id, &title, description.as_deref().unwrap_or(""))?;
            println!("Task {} updated: {}", task.id, task.title.green());
        }
        Some(Commands::Delete { id }) => {
            api.delete(id)?;
            println!("Task {} deleted", id.to_string().red());
        }
        Some(Commands::Toggle { id }) => {
            let task = api.toggle_completion(id)?;
            println!(
                "Task {} is now {}",
                task.id,
                status_label(&task)
            );
        }
        // Handled in run(); listed here so the match stays exhaustive.
        Some(Commands::Chat { .. }) | Some(Commands::Serve { .. }) => {}
        None => {
            print_tasks(&api.list_all()?);
        }
    }
    Ok(())
}

fn status_label(task: &Task) -> ColoredString {
    if task.completed {
        "Completed".green()
    } else {
        "Pending".yellow()
    }
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!("{:<4} {:<10} {}", "ID", "Status", "Title");
    println!("{}", "-".repeat(46));
    for task in tasks {
        let status = format!(
            "{:<10}",
            if task.completed { "Completed" } else { "Pending" }
        );
        let status = if task.completed {
            status.green()
        } else {
            status.yellow()
        };
        println!("{:<4} {} {}", task.id, status, task.title);
    }
}

fn print_task(task: &Task) {
    println!("{} {}", task.id.to_string().cyan(), task.title.bold());
    println!("Status: {}", status_label(task));
    if !task.description.is_empty() {
        println!("{}", task.description);
    }
}
