use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskpad::model::TaskId;

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(about = "A small task manager with CLI, chat and REST front ends", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the SQLite database (overrides TASKPAD_DB and the platform default)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Title of the task
        title: String,

        /// Description of the task (optional)
        #[arg(required = false)]
        description: Option<String>,
    },

    /// List all tasks
    #[command(alias = "ls")]
    List {
        /// Print tasks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single task
    Show {
        /// Id of the task
        id: TaskId,

        /// Print the task as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a task's title and description
    #[command(alias = "up")]
    Update {
        id: TaskId,

        /// New title
        title: String,

        /// New description (cleared when omitted)
        #[arg(required = false)]
        description: Option<String>,
    },

    /// Delete a task permanently
    #[command(alias = "rm")]
    Delete { id: TaskId },

    /// Flip a task's completion status
    #[command(alias = "t")]
    Toggle { id: TaskId },

    /// Manage tasks in an interactive natural-language session
    Chat {
        /// Keep tasks in memory only for this session
        #[arg(long)]
        ephemeral: bool,
    },

    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}
