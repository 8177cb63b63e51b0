//! API request/response types (DTOs).
//!
//! Tasks themselves serialize straight from the library's `Task` record
//! as `{id, title, description, completed}`; only the request bodies and
//! the two wrapper responses need their own types.

use serde::{Deserialize, Serialize};

/// Body of `POST /tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /tasks/{id}`.
#[derive(Debug, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Plain message payload, used by the welcome route and delete
/// confirmations.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Error payload: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
