//! In-memory task list state and operations.
//!
//! [`TaskListManager`] owns the ordered task list plus the transient form
//! state (drafts, editing reference, detail selection) and applies
//! user-initiated transitions to it. All operations are synchronous and
//! total: the single validation rule and every failed id lookup degrade to
//! silent no-ops rather than errors.

pub mod manager;

pub use manager::TaskListManager;

use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
///
/// Uniqueness at creation is the only property the operations rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id assigned at creation; never changes afterwards.
    pub id: TaskId,
    /// Short task title. Trimmed and non-empty at creation.
    pub title: String,
    /// Free-form description. Trimmed and non-empty at creation.
    pub description: String,
    /// Whether the task is done. Only `toggle_completed` flips this.
    pub completed: bool,
}
