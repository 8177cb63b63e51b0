//! # Chat Command Parsing
//!
//! Maps free-text chat lines onto a closed set of task commands. This is
//! a keyword matcher, not an inference engine: a line either starts with
//! one of the known verb phrases or it is [`ChatCommand::Unknown`].
//!
//! Matching is ASCII case-insensitive on the verb phrase; the payload
//! (title text) keeps the user's original casing. Ids are read as the
//! first whitespace-delimited token after the verb phrase.

use crate::model::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Create { title: String },
    List,
    Update { id: TaskId, title: String },
    Delete { id: TaskId },
    Toggle { id: TaskId },
    Help,
    Quit,
    Unknown,
}

/// Example phrasings offered when a line is not recognized.
pub const SUGGESTIONS: &[&str] = &[
    "add task buy groceries",
    "list tasks",
    "complete task 2",
    "update task 2 to call the bank",
    "delete task 3",
];

const CREATE_PREFIXES: &[&str] = &[
    "add a task",
    "add task",
    "create a task",
    "create task",
    "new task",
    "make task",
];

const LIST_PHRASES: &[&str] = &[
    "list tasks",
    "list all tasks",
    "show tasks",
    "show my tasks",
    "my tasks",
    "get tasks",
    "all tasks",
    "view tasks",
    "list",
];

const TOGGLE_PREFIXES: &[&str] = &[
    "complete task",
    "finish task",
    "toggle task",
    "mark task",
    "done task",
];

const DELETE_PREFIXES: &[&str] = &["delete task", "remove task"];

const UPDATE_PREFIXES: &[&str] = &["update task", "change task", "rename task"];

/// Parse one chat line into a command.
pub fn parse(input: &str) -> ChatCommand {
    let line = input.trim();
    if line.is_empty() {
        return ChatCommand::Unknown;
    }

    let lower = line.to_lowercase();
    match lower.as_str() {
        "help" | "?" => return ChatCommand::Help,
        "quit" | "exit" | "bye" => return ChatCommand::Quit,
        _ => {}
    }

    if LIST_PHRASES.iter().any(|p| *p == lower) {
        return ChatCommand::List;
    }

    for prefix in CREATE_PREFIXES {
        if let Some(rest) = strip_prefix_ci(line, prefix) {
            if rest.is_empty() {
                // "add task" with nothing after it; the reply suggests
                // the full form rather than creating an empty title.
                return ChatCommand::Unknown;
            }
            return ChatCommand::Create {
                title: rest.to_string(),
            };
        }
    }

    for prefix in TOGGLE_PREFIXES {
        if let Some(rest) = strip_prefix_ci(line, prefix) {
            if let Some((id, _)) = leading_id(rest) {
                return ChatCommand::Toggle { id };
            }
        }
    }

    for prefix in DELETE_PREFIXES {
        if let Some(rest) = strip_prefix_ci(line, prefix) {
            if let Some((id, _)) = leading_id(rest) {
                return ChatCommand::Delete { id };
            }
        }
    }

    for prefix in UPDATE_PREFIXES {
        if let Some(rest) = strip_prefix_ci(line, prefix) {
            if let Some((id, tail)) = leading_id(rest) {
                // Accept both "update task 2 to <title>" and "update task 2 <title>".
                let title = strip_prefix_ci(tail, "to").unwrap_or(tail);
                if !title.is_empty() {
                    return ChatCommand::Update {
                        id,
                        title: title.to_string(),
                    };
                }
            }
        }
    }

    ChatCommand::Unknown
}

/// Case-insensitive prefix strip. The prefix must end at a word
/// boundary so "listen" does not match "list".
fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    if input.len() < prefix.len() || !input.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, tail) = input.split_at(prefix.len());
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    if !tail.is_empty() && !tail.starts_with(char::is_whitespace) {
        return None;
    }
    Some(tail.trim_start())
}

/// Read the first whitespace-delimited token as an id, returning it with
/// the rest of the line.
fn leading_id(input: &str) -> Option<(TaskId, &str)> {
    let token = input.split_whitespace().next()?;
    let id: TaskId = token.parse().ok()?;
    let rest = input[input.find(token)? + token.len()..].trim_start();
    Some((id, rest))
}
