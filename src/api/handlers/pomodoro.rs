//! Pomodoro API handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::pomodoro::PomodoroSession;
use crate::store::{AppState, Stores};

use super::tasks::MessageResponse;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Session start query parameters
#[derive(Debug, Deserialize)]
pub struct StartQuery {
    pub task_id: String,
}

/// Aggregate stats response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Completed-session count per task id
    pub completed_sessions: HashMap<String, u32>,
    /// Total seconds spent across all completed sessions
    pub total_time_spent: f64,
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST /pomodoro?task_id=X
/// Start a 25-minute session against a task
pub async fn start_pomodoro(
    State(state): State<AppState>,
    Query(query): Query<StartQuery>,
) -> Result<(StatusCode, Json<PomodoroSession>), AppError> {
    let mut stores = state.lock();
    // Split borrow: the session store checks task existence against the task
    // store under the same guard.
    let Stores { tasks, pomodoro } = &mut *stores;

    let session = pomodoro.start(tasks, &query.task_id)?;
    tracing::debug!(task_id = %query.task_id, "pomodoro started");

    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /pomodoro/{task_id}/stop
/// Complete the active session for a task
pub async fn stop_pomodoro(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.lock().pomodoro.stop(&task_id)?;
    tracing::debug!(%task_id, "pomodoro stopped");

    Ok(Json(MessageResponse {
        message: "Pomodoro session stopped".to_string(),
    }))
}

/// GET /pomodoro/stats
/// Completed-session counts per task plus total time spent
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.lock().pomodoro.stats();

    Json(StatsResponse {
        completed_sessions: stats.completed_sessions,
        total_time_spent: stats.total_time_spent,
    })
}
