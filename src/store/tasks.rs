use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

/// A unit of work with a unique title
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task id (UUID v4, generated at creation)
    pub id: String,
    /// Title (unique across all stored tasks, case-sensitive)
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Workflow status (new tasks always start as TODO)
    pub status: TaskStatus,
}

/// In-memory task collection, insertion-ordered.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Append a new task. Fails if any stored task already has `title`.
    pub fn create(&mut self, title: String, description: Option<String>) -> Result<Task> {
        if self.tasks.iter().any(|t| t.title == title) {
            return Err(AppError::duplicate_title(title));
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            status: TaskStatus::Todo,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// All tasks in insertion order, optionally filtered by status.
    pub fn list(&self, status: Option<TaskStatus>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect()
    }

    /// Look up a task by id.
    pub fn get(&self, id: &str) -> Result<Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("no task with id {id}")))
    }

    /// Rewrite a task's title and description in place. Status is untouched.
    ///
    /// A missing id wins over a title collision: `NotFound` is checked first.
    pub fn update(&mut self, id: &str, title: String, description: Option<String>) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("no task with id {id}")))?;

        // Updating a task to its own current title is allowed.
        if self.tasks.iter().any(|t| t.id != id && t.title == title) {
            return Err(AppError::duplicate_title(title));
        }

        let task = &mut self.tasks[index];
        task.title = title;
        task.description = description;
        Ok(task.clone())
    }

    /// Remove a task if present. Idempotent: unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Whether a task with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_todo_with_fresh_id() {
        let mut store = TaskStore::default();
        let a = store.create("Write report".to_string(), None).unwrap();
        let b = store
            .create("Read book".to_string(), Some("two chapters".to_string()))
            .unwrap();

        assert_eq!(a.status, TaskStatus::Todo);
        assert_eq!(b.status, TaskStatus::Todo);
        assert_ne!(a.id, b.id);
        assert_eq!(b.description.as_deref(), Some("two chapters"));
    }

    #[test]
    fn test_create_rejects_duplicate_title() {
        let mut store = TaskStore::default();
        store.create("Write report".to_string(), None).unwrap();

        let err = store.create("Write report".to_string(), None).unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle(_)));

        // Exact match only: a different casing is a different title.
        assert!(store.create("write report".to_string(), None).is_ok());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = TaskStore::default();
        for title in ["first", "second", "third"] {
            store.create(title.to_string(), None).unwrap();
        }

        let titles: Vec<String> = store.list(None).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_list_filter_by_status() {
        let mut store = TaskStore::default();
        store.create("only task".to_string(), None).unwrap();

        // No exposed operation ever sets DONE, so the filter finds nothing.
        assert!(store.list(Some(TaskStatus::Done)).is_empty());
        assert_eq!(store.list(Some(TaskStatus::Todo)).len(), 1);
    }

    #[test]
    fn test_get_missing_id() {
        let store = TaskStore::default();
        assert!(matches!(store.get("nope"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_update_rules() {
        let mut store = TaskStore::default();
        let a = store.create("alpha".to_string(), None).unwrap();
        store.create("beta".to_string(), None).unwrap();

        // Missing id wins over a colliding title.
        let err = store
            .update("missing", "beta".to_string(), None)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // Another task's title is rejected.
        let err = store.update(&a.id, "beta".to_string(), None).unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle(_)));

        // A task's own title is fine; description is rewritten in place.
        let updated = store
            .update(&a.id, "alpha".to_string(), Some("note".to_string()))
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("note"));
        assert_eq!(updated.status, TaskStatus::Todo);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = TaskStore::default();
        let task = store.create("gone soon".to_string(), None).unwrap();

        store.delete(&task.id);
        assert!(!store.contains(&task.id));
        // Second delete of the same id is a no-op, not an error.
        store.delete(&task.id);

        // Deleting frees the title for reuse.
        assert!(store.create("gone soon".to_string(), None).is_ok());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let parsed: TaskStatus = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(parsed, TaskStatus::Done);
    }
}
