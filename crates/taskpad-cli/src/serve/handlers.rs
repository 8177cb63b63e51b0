//! HTTP route handlers for the task API.
//!
//! Handlers are kept thin: lock the store, call the one matching
//! operation, translate the result. Status mapping lives on
//! [`ApiError`] so handlers can use `?` on store calls.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use taskpad::error::TaskError;
use taskpad::model::{Task, TaskId};

use super::models::{ErrorBody, Message, TaskCreate, TaskUpdate};
use super::AppState;

/// Transport-side wrapper for the library error.
///
/// Empty title maps to 400, unknown id to 404, anything else (backend
/// trouble) to 500. The message text is the library error's Display
/// output, unchanged.
pub struct ApiError(TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TaskError::EmptyTitle => StatusCode::BAD_REQUEST,
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// GET `/` - welcome message.
pub async fn root() -> Json<Message> {
    Json(Message {
        message: "Welcome to the taskpad API!".to_string(),
    })
}

/// GET `/tasks` - every task in creation order.
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<Vec<Task>>, ApiError> {
    let api = state.api.lock().await;
    Ok(Json(api.list_all()?))
}

/// POST `/tasks` - create a task. 201 on success, 400 on empty title.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TaskCreate>,
) -> std::result::Result<(StatusCode, Json<Task>), ApiError> {
    let mut api = state.api.lock().await;
    let task = api.create(&body.title, &body.description)?;
    debug!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET `/tasks/{id}` - one task, 404 when unknown.
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TaskId>,
) -> std::result::Result<Json<Task>, ApiError> {
    let api = state.api.lock().await;
    Ok(Json(api.get_by_id(id)?))
}

/// PUT `/tasks/{id}` - replace title and description.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TaskId>,
    Json(body): Json<TaskUpdate>,
) -> std::result::Result<Json<Task>, ApiError> {
    let mut api = state.api.lock().await;
    let task = api.update(id, &body.title, &body.description)?;
    debug!(id = task.id, "task updated");
    Ok(Json(task))
}

/// DELETE `/tasks/{id}` - permanent removal, confirmed with a message.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TaskId>,
) -> std::result::Result<Json<Message>, ApiError> {
    let mut api = state.api.lock().await;
    api.delete(id)?;
    debug!(id, "task deleted");
    Ok(Json(Message {
        message: format!("Task {} deleted", id),
    }))
}

/// PATCH `/tasks/{id}/toggle` - flip the completion flag.
pub async fn toggle_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TaskId>,
) -> std::result::Result<Json<Task>, ApiError> {
    let mut api = state.api.lock().await;
    Ok(Json(api.toggle_completion(id)?))
}
