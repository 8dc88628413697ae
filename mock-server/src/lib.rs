use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub completed: bool,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("todo with ID {0} not found")]
    NotFound(i64),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

/// In-memory table. Ids come from a counter and are never reused.
#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl Store {
    pub fn insert(&mut self, title: String) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id,
            title,
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }

    /// Newest first.
    pub fn list(&self) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self.todos.values().cloned().collect();
        todos.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        todos
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    router(Db::default())
}

/// Router over an existing store, so tests can inspect or seed it.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(update_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    if input.title.is_empty() {
        return Err(AppError::Validation("Title is required"));
    }
    let todo = db.write().await.insert(input.title);
    info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<StatusCode, AppError> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(AppError::NotFound(id))?;
    todo.completed = input.completed;
    info!(id, completed = input.completed, "todo updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    db.write()
        .await
        .todos
        .remove(&id)
        .ok_or(AppError::NotFound(id))?;
    info!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
