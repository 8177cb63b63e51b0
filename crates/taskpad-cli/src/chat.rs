//! Interactive chat session: read a line, parse it into a task command,
//! run it against the store, print a short reply. Operation errors are
//! replies, not exits — only I/O failures end the session.

use colored::*;
use std::io::{self, BufRead, Write};
use taskpad::api::TaskApi;
use taskpad::chat::{parse, ChatCommand, SUGGESTIONS};
use taskpad::error::Result;
use taskpad::store::DataStore;

pub fn run<S: DataStore>(mut api: TaskApi<S>) -> Result<()> {
    println!(
        "{}",
        "Chat with your task list. Type 'help' for examples, 'quit' to leave.".bold()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse(&line) {
            ChatCommand::Quit => {
                println!("Bye!");
                break;
            }
            ChatCommand::Help => print_help(),
            ChatCommand::List => match api.list_all() {
                Ok(tasks) if tasks.is_empty() => println!("No tasks yet."),
                Ok(tasks) => {
                    for task in tasks {
                        let mark = if task.completed { "[x]" } else { "[ ]" };
                        println!("{} {} {}", mark, task.id, task.title);
                    }
                }
                Err(e) => print_error(&e),
            },
            ChatCommand::Create { title } => match api.create(&title, "") {
                Ok(task) => println!("Added task {}: {}", task.id, task.title.green()),
                Err(e) => print_error(&e),
            },
            ChatCommand::Update { id, title } => match api.update(id, &title, "") {
                Ok(task) => println!("Updated task {}: {}", task.id, task.title.green()),
                Err(e) => print_error(&e),
            },
            ChatCommand::Delete { id } => match api.delete(id) {
                Ok(()) => println!("Deleted task {}", id),
                Err(e) => print_error(&e),
            },
            ChatCommand::Toggle { id } => match api.toggle_completion(id) {
                Ok(task) if task.completed => {
                    println!("Task {} completed: {}", task.id, task.title.green())
                }
                Ok(task) => println!("Task {} reopened: {}", task.id, task.title.yellow()),
                Err(e) => print_error(&e),
            },
            ChatCommand::Unknown => {
                println!("I didn't catch that. Try one of:");
                for suggestion in SUGGESTIONS {
                    println!("  {}", suggestion.cyan());
                }
            }
        }
    }

    Ok(())
}

fn print_error(e: &taskpad::error::TaskError) {
    println!("{}", e.to_string().red());
}

fn print_help() {
    println!("Things you can say:");
    println!("  {} — create a task", "add task <title>".cyan());
    println!("  {} — show everything", "list tasks".cyan());
    println!("  {} — flip completion", "complete task <id>".cyan());
    println!("  {} — rename a task", "update task <id> to <title>".cyan());
    println!("  {} — remove a task", "delete task <id>".cyan());
    println!("  {} — leave the session", "quit".cyan());
}
