use chrono::NaiveDate;
use taskflow_storage_core::{Priority, Task, TaskId, TaskUpdate};

use crate::{Core, CoreError, CoreResult, CreateTaskInput};

/// Form fields of the task editor, defaulting to an empty create form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl TaskDraft {
    fn from_task(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            priority: task.priority,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Create,
    Editing(TaskId),
}

/// Single-slot form state machine: either creating a new task or editing one
/// existing task, never both.
#[derive(Debug, Default)]
pub struct EditSession {
    mode: EditMode,
    draft: TaskDraft,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    /// Enter edit mode on `task`, pre-filling the draft from its current
    /// values. Any in-progress edit target is silently replaced.
    pub fn begin_edit(&mut self, task: &Task) {
        self.mode = EditMode::Editing(task.id.clone());
        self.draft = TaskDraft::from_task(task);
    }

    /// Leave edit mode without writing anything and reset the form.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Issue the create or update call for the current draft. On success the
    /// session returns to an empty create form; on failure mode and draft are
    /// kept so the caller can retry without losing input.
    pub async fn submit(&mut self, core: &mut Core) -> CoreResult<Task> {
        if self.draft.title.trim().is_empty() {
            return Err(CoreError::EmptyTitle);
        }

        let result = match self.mode.clone() {
            EditMode::Create => {
                core.create_task(CreateTaskInput {
                    title: self.draft.title.clone(),
                    description: self.draft.description.clone(),
                    due_date: self.draft.due_date,
                    priority: self.draft.priority,
                })
                .await
            }
            EditMode::Editing(task_id) => {
                let current = core
                    .store()
                    .get(&task_id)
                    .cloned()
                    .ok_or_else(|| CoreError::TaskNotFound(task_id.clone()))?;

                let edited = Task {
                    title: self.draft.title.trim().to_owned(),
                    description: self.draft.description.clone(),
                    due_date: self.draft.due_date,
                    priority: self.draft.priority,
                    ..current.clone()
                };

                let update =
                    TaskUpdate::from_task_diff(&current, &edited).map_err(CoreError::Storage)?;
                core.update_task(task_id, update).await
            }
        };

        if result.is_ok() {
            *self = Self::default();
        }
        result
    }
}
