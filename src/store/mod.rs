//! In-memory stores shared across request handlers.
//!
//! All state is process-lifetime only: nothing is written to disk, and a
//! restart starts from empty collections.

pub mod pomodoro;
pub mod tasks;

use std::sync::{Arc, Mutex, MutexGuard};

use self::pomodoro::PomodoroStore;
use self::tasks::TaskStore;

/// Both collections behind one lock.
///
/// A single guard serializes every operation, so title uniqueness and the
/// one-active-session-per-task invariant hold under concurrent requests.
#[derive(Debug, Default)]
pub struct Stores {
    pub tasks: TaskStore,
    pub pomodoro: PomodoroStore,
}

/// Shared handle injected into every handler via axum `State`.
///
/// Constructed once per process in the serve command; handlers never reach
/// for globals.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    inner: Arc<Mutex<Stores>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock both stores for the duration of one operation.
    pub fn lock(&self) -> MutexGuard<'_, Stores> {
        // A poisoned lock means a handler panicked mid-operation; every store
        // mutation is a single in-memory update, so the data is still usable.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
