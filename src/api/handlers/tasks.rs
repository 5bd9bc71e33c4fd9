//! Task API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::tasks::{Task, TaskStatus};
use crate::store::AppState;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Task list query parameters
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>, // "TODO" | "IN_PROGRESS" | "DONE"
}

/// Create/update task request body
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Helper functions
// ============================================================================

/// Title length bounds (inclusive)
const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
/// Longest accepted description
const DESCRIPTION_MAX: usize = 300;

/// Reject out-of-bounds fields before they reach the store
fn validate_request(req: &TaskRequest) -> Result<(), AppError> {
    let title_len = req.title.chars().count();
    if title_len < TITLE_MIN || title_len > TITLE_MAX {
        return Err(AppError::validation(format!(
            "title must be between {TITLE_MIN} and {TITLE_MAX} characters"
        )));
    }
    if let Some(description) = &req.description {
        if description.chars().count() > DESCRIPTION_MAX {
            return Err(AppError::validation(format!(
                "description must be at most {DESCRIPTION_MAX} characters"
            )));
        }
    }
    Ok(())
}

/// Parse a status query value
fn parse_status(value: &str) -> Result<TaskStatus, AppError> {
    match value {
        "TODO" => Ok(TaskStatus::Todo),
        "IN_PROGRESS" => Ok(TaskStatus::InProgress),
        "DONE" => Ok(TaskStatus::Done),
        _ => Err(AppError::validation(format!(
            "status must be one of TODO, IN_PROGRESS, DONE (got {value:?})"
        ))),
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /tasks
/// List tasks, optionally filtered by status
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<Task>>, AppError> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    Ok(Json(state.lock().tasks.list(status)))
}

/// GET /tasks/{id}
/// Get a single task
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, AppError> {
    Ok(Json(state.lock().tasks.get(&id)?))
}

/// POST /tasks
/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<TaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    validate_request(&req)?;

    let task = state.lock().tasks.create(req.title, req.description)?;
    tracing::debug!(task_id = %task.id, "task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id}
/// Update a task's title and description (status is left untouched)
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TaskRequest>,
) -> Result<Json<Task>, AppError> {
    validate_request(&req)?;

    let task = state.lock().tasks.update(&id, req.title, req.description)?;
    tracing::debug!(task_id = %task.id, "task updated");

    Ok(Json(task))
}

/// DELETE /tasks/{id}
/// Delete a task. Idempotent: unknown ids get the same confirmation.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<MessageResponse> {
    state.lock().tasks.delete(&id);
    tracing::debug!(task_id = %id, "task deleted");

    Json(MessageResponse {
        message: "Task deleted".to_string(),
    })
}
