use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::tasks::TaskStore;

/// Fixed session length in minutes
pub const SESSION_MINUTES: i64 = 25;

/// One focused-work interval against a task.
///
/// `task_id` is a back-reference, not ownership: the task may be deleted
/// later without touching its sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroSession {
    pub task_id: String,
    pub start_time: DateTime<Utc>,
    /// Advisory end of the interval (start + 25 min). Nothing fires when it
    /// passes; the session stays active until explicitly stopped.
    pub end_time: DateTime<Utc>,
    pub completed: bool,
}

/// Aggregate completion statistics
#[derive(Debug, Clone, PartialEq)]
pub struct PomodoroStats {
    /// Completed-session count per task id. Tasks with zero completed
    /// sessions are absent, never present with 0.
    pub completed_sessions: HashMap<String, u32>,
    /// Sum of (end - start) over all completed sessions, in seconds
    pub total_time_spent: f64,
}

/// In-memory session collection, insertion-ordered. Sessions are never
/// deleted.
#[derive(Debug, Default)]
pub struct PomodoroStore {
    sessions: Vec<PomodoroSession>,
}

impl PomodoroStore {
    /// Open a session for `task_id`.
    ///
    /// The task must exist in `tasks`, and at most one uncompleted session
    /// per task may be open at a time.
    pub fn start(&mut self, tasks: &TaskStore, task_id: &str) -> Result<PomodoroSession> {
        if !tasks.contains(task_id) {
            return Err(AppError::not_found(format!("no task with id {task_id}")));
        }
        if self
            .sessions
            .iter()
            .any(|s| s.task_id == task_id && !s.completed)
        {
            return Err(AppError::active_session(task_id));
        }

        let now = Utc::now();
        let session = PomodoroSession {
            task_id: task_id.to_string(),
            start_time: now,
            end_time: now + Duration::minutes(SESSION_MINUTES),
            completed: false,
        };
        self.sessions.push(session.clone());
        Ok(session)
    }

    /// Complete the first uncompleted session for `task_id`, in insertion
    /// order.
    pub fn stop(&mut self, task_id: &str) -> Result<()> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.task_id == task_id && !s.completed)
            .ok_or_else(|| {
                AppError::not_found(format!("no active Pomodoro session for task {task_id}"))
            })?;
        session.completed = true;
        Ok(())
    }

    /// Tally completed sessions per task plus total time spent.
    pub fn stats(&self) -> PomodoroStats {
        let mut completed_sessions: HashMap<String, u32> = HashMap::new();
        let mut total_time_spent = 0.0;

        for session in &self.sessions {
            if !session.completed {
                continue;
            }
            *completed_sessions
                .entry(session.task_id.clone())
                .or_insert(0) += 1;
            total_time_spent +=
                (session.end_time - session.start_time).num_milliseconds() as f64 / 1000.0;
        }

        PomodoroStats {
            completed_sessions,
            total_time_spent,
        }
    }
}
