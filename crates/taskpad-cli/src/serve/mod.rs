//! Embedded REST server exposing the task store over HTTP.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//!
//! The rest of the binary stays synchronous; the tokio runtime lives
//! entirely inside this subcommand.

mod handlers;
mod models;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskpad::api::TaskApi;
use taskpad::error::Result;
use taskpad::store::sqlite::SqliteStore;

/// Shared application state for the server.
///
/// One lock around the whole store: every operation is a single short
/// statement and tasks never reference each other, so per-record
/// locking buys nothing here.
pub struct AppState {
    pub api: Mutex<TaskApi<SqliteStore>>,
}

/// Configuration for the API server.
pub struct ServeConfig {
    /// Port to listen on.
    pub port: u16,
    /// Path to the SQLite database.
    pub db_path: PathBuf,
}

pub fn run(config: ServeConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(start_server(config))
}

async fn start_server(config: ServeConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "taskpad=info".into()),
        )
        .init();

    let api = TaskApi::new(SqliteStore::open(&config.db_path)?);
    let state = Arc::new(AppState {
        api: Mutex::new(api),
    });

    let app = Router::new()
        .route("/", get(handlers::root))
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/tasks/{id}/toggle", patch(handlers::toggle_task))
        // CORS for browser clients
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!(%addr, db = %config.db_path.display(), "taskpad API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
