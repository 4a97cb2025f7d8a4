//! Task list manager: the application-layer interface for creating,
//! editing, completing, deleting, and selecting tasks.

use tracing::debug;

use super::{Task, TaskId};

/// Owns the ordered task list and the transient form state, and applies
/// user-initiated transitions to it.
///
/// Constructed explicitly and passed by reference to callers; there is no
/// global instance, so the logic is testable without a terminal. Display
/// order is insertion order and there is no reordering operation.
#[derive(Debug, Default)]
pub struct TaskListManager {
    tasks: Vec<Task>,
    draft_title: String,
    draft_description: String,
    editing_task_id: Option<TaskId>,
    selected_task_id: Option<TaskId>,
}

impl TaskListManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- drafts ---

    /// Overwrites the draft title. No validation, unlimited length.
    pub fn set_draft_title(&mut self, text: impl Into<String>) {
        self.draft_title = text.into();
    }

    /// Overwrites the draft description. No validation, unlimited length.
    pub fn set_draft_description(&mut self, text: impl Into<String>) {
        self.draft_description = text.into();
    }

    /// Current draft title, as typed.
    #[must_use]
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    /// Current draft description, as typed.
    #[must_use]
    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    /// Mutable access to the draft title for cursor-based editing in the
    /// input widget.
    pub fn draft_title_mut(&mut self) -> &mut String {
        &mut self.draft_title
    }

    /// Mutable access to the draft description for cursor-based editing in
    /// the input widget.
    pub fn draft_description_mut(&mut self) -> &mut String {
        &mut self.draft_description
    }

    /// Clears both drafts and the editing reference without committing.
    pub fn cancel_edit(&mut self) {
        self.draft_title.clear();
        self.draft_description.clear();
        self.editing_task_id = None;
    }

    // --- commit (add-or-save) ---

    /// Commits the drafts: appends a new task, or saves the task being
    /// edited.
    ///
    /// Refuses silently when either draft is empty after trimming; this is
    /// the only validation in the system. On the create path the stored
    /// title and description are trimmed; on the edit path the drafts are
    /// saved exactly as typed. Trimming happens only on create.
    ///
    /// Returns the id of the created or saved task, or `None` when nothing
    /// changed.
    pub fn commit(&mut self) -> Option<TaskId> {
        if self.draft_title.trim().is_empty() || self.draft_description.trim().is_empty() {
            debug!("commit refused: empty draft field");
            return None;
        }

        if let Some(id) = self.editing_task_id {
            let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
                // The edited task was deleted out from under the form. The
                // drafts and editing reference stay pending rather than
                // silently creating a new task.
                debug!(%id, "commit ignored: edited task no longer exists");
                return None;
            };
            task.title = self.draft_title.clone();
            task.description = self.draft_description.clone();
            self.draft_title.clear();
            self.draft_description.clear();
            self.editing_task_id = None;
            debug!(%id, "task saved");
            Some(id)
        } else {
            let task = Task {
                id: TaskId::new(),
                title: self.draft_title.trim().to_string(),
                description: self.draft_description.trim().to_string(),
                completed: false,
            };
            let id = task.id;
            self.tasks.push(task);
            self.draft_title.clear();
            self.draft_description.clear();
            debug!(%id, "task created");
            Some(id)
        }
    }

    // --- per-task operations ---

    /// Loads a task's fields into the drafts and marks it as being edited.
    /// Silent no-op if the id is unknown.
    pub fn begin_edit(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            debug!(%id, "begin_edit ignored: unknown task");
            return;
        };
        self.draft_title = task.title.clone();
        self.draft_description = task.description.clone();
        self.editing_task_id = Some(id);
    }

    /// Flips the completed flag. Silent no-op if the id is unknown. Draft
    /// and editing state are untouched either way.
    pub fn toggle_completed(&mut self, id: TaskId) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(%id, completed = task.completed, "task toggled");
            }
            None => debug!(%id, "toggle ignored: unknown task"),
        }
    }

    /// Removes the task permanently. Silent no-op if the id is unknown.
    ///
    /// A matching `editing_task_id` is deliberately left dangling: delete
    /// never clears it, and a later commit then no-ops because the lookup
    /// fails.
    pub fn delete(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            debug!(%id, "delete ignored: unknown task");
        } else {
            debug!(%id, "task deleted");
        }
    }

    /// Marks a task as shown in the detail overlay. The lookup happens at
    /// read time in [`selected_task`](Self::selected_task).
    pub fn select(&mut self, id: TaskId) {
        self.selected_task_id = Some(id);
    }

    /// Closes the detail overlay.
    pub fn deselect(&mut self) {
        self.selected_task_id = None;
    }

    // --- accessors ---

    /// All tasks in display (insertion) order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The task currently shown in the detail overlay, if the selection
    /// still resolves to a live task.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_task_id.and_then(|id| self.task(id))
    }

    /// Id of the task being edited, if any.
    #[must_use]
    pub const fn editing_task_id(&self) -> Option<TaskId> {
        self.editing_task_id
    }

    /// Whether a commit would save an existing task rather than add one.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing_task_id.is_some()
    }
}
