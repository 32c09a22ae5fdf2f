use chrono::NaiveDate;
use taskflow_config::CoreConfig;
use taskflow_storage::StorageBox;
use taskflow_storage_core::{Priority, Task, TaskId, TaskQuery, TaskUpdate};
use ulid::Ulid;

pub mod error;
mod load;
mod session;
mod store;
mod utils;

pub use error::{CoreError, CoreResult};
pub use load::load;
pub use session::{EditMode, EditSession, TaskDraft};
pub use store::{Filter, PrefixMatch, TaskCounts, TaskStore};

pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Task sync client: translates edit intents into backend calls and keeps the
/// in-memory [`TaskStore`] reconciled with the source of truth. Every
/// successful write is followed by a full reload rather than a local patch,
/// trading responsiveness for consistency.
pub struct Core {
    config: CoreConfig,
    storage: StorageBox,
    store: TaskStore,
}

impl Core {
    /// Explicit construction with an injected backend, so tests can plug the
    /// in-memory fake.
    pub fn with_storage(config: CoreConfig, storage: StorageBox) -> Self {
        Core {
            config,
            storage,
            store: TaskStore::default(),
        }
    }

    pub async fn initialize(&self) -> eyre::Result<()> {
        self.storage.init().await
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Reload the whole task list from the backend.
    pub async fn refresh(&mut self) -> CoreResult<()> {
        let tasks = self
            .storage
            .list_tasks(TaskQuery::default())
            .await
            .map_err(CoreError::storage)?;

        self.store.replace_all(tasks);
        Ok(())
    }

    pub async fn create_task(&mut self, input: CreateTaskInput) -> CoreResult<Task> {
        let title = input.title.trim().to_owned();
        if title.is_empty() {
            return Err(CoreError::EmptyTitle);
        }

        let now = utils::unix_now();
        let task = Task {
            id: Ulid::new().to_string(),
            title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
            completed: false,
            owner: self.config.owner.clone(),
            created_at: now,
            updated_at: now,
        };
        let task_id = task.id.clone();

        self.storage
            .create_task(task)
            .await
            .map_err(CoreError::storage)?;
        self.refresh().await?;

        self.stored(task_id)
    }

    pub async fn update_task(&mut self, task_id: TaskId, update: TaskUpdate) -> CoreResult<Task> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(CoreError::EmptyTitle);
            }
        }
        self.stored(task_id.clone())?;

        let update = update.set_updated_at(utils::unix_now());
        self.storage
            .update_task(task_id.clone(), update)
            .await
            .map_err(CoreError::storage)?;
        self.refresh().await?;

        self.stored(task_id)
    }

    pub async fn delete_task(&mut self, task_id: TaskId) -> CoreResult<Task> {
        let task = self.stored(task_id.clone())?;

        self.storage
            .delete_task(task_id)
            .await
            .map_err(CoreError::storage)?;
        self.refresh().await?;

        Ok(task)
    }

    /// Toggle completion as a read-modify-write: fetch the current record,
    /// then write the negated flag. Two interleaved toggles on the same task
    /// can race; the backends offer no conditional update, so the window is
    /// accepted.
    pub async fn toggle_task(&mut self, task_id: TaskId) -> CoreResult<Task> {
        self.stored(task_id.clone())?;

        let current = self
            .storage
            .get_task(task_id.clone())
            .await
            .map_err(CoreError::storage)?;

        self.update_task(
            task_id,
            TaskUpdate::default().set_completed(!current.completed),
        )
        .await
    }

    fn stored(&self, task_id: TaskId) -> CoreResult<Task> {
        self.store
            .get(&task_id)
            .cloned()
            .ok_or(CoreError::TaskNotFound(task_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_storage::storage::in_memory::InMemoryStorageConfig;
    use taskflow_storage_core::StorageConfig;

    fn test_core() -> Core {
        let config = CoreConfig {
            owner: Some("tester".to_string()),
        };
        Core::with_storage(config, InMemoryStorageConfig::default().to_storage())
    }

    fn input(title: &str) -> CreateTaskInput {
        CreateTaskInput {
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: Priority::default(),
        }
    }

    fn ids(tasks: Vec<&Task>) -> Vec<String> {
        tasks.into_iter().map(|t| t.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_create_toggle_delete_lifecycle() {
        let mut core = test_core();

        let task = core
            .create_task(CreateTaskInput {
                title: "Buy milk".to_string(),
                description: None,
                due_date: None,
                priority: Priority::Low,
            })
            .await
            .unwrap();

        // a fresh task shows up in "all" and "active" but not "completed"
        assert!(ids(core.store().filtered(Filter::All)).contains(&task.id));
        assert!(ids(core.store().filtered(Filter::Active)).contains(&task.id));
        assert!(!ids(core.store().filtered(Filter::Completed)).contains(&task.id));

        let toggled = core.toggle_task(task.id.clone()).await.unwrap();
        assert!(toggled.completed);
        assert!(ids(core.store().filtered(Filter::Completed)).contains(&task.id));
        assert!(!ids(core.store().filtered(Filter::Active)).contains(&task.id));

        let before = core.store().counts();
        core.delete_task(task.id.clone()).await.unwrap();
        let after = core.store().counts();

        assert!(core.store().get(&task.id).is_none());
        assert_eq!(after.total, before.total - 1);
        assert_eq!(after.completed, before.completed - 1);
    }

    #[tokio::test]
    async fn test_empty_title_never_creates() {
        let mut core = test_core();

        assert!(matches!(
            core.create_task(input("")).await,
            Err(CoreError::EmptyTitle)
        ));
        assert!(matches!(
            core.create_task(input("   \t")).await,
            Err(CoreError::EmptyTitle)
        ));
        assert_eq!(core.store().counts().total, 0);
    }

    #[tokio::test]
    async fn test_empty_title_never_updates() {
        let mut core = test_core();
        let task = core.create_task(input("Buy milk")).await.unwrap();

        let result = core
            .update_task(task.id.clone(), TaskUpdate::default().set_title("  "))
            .await;

        assert!(matches!(result, Err(CoreError::EmptyTitle)));
        assert_eq!(core.store().get(&task.id).unwrap().title, "Buy milk");
    }

    #[tokio::test]
    async fn test_toggle_twice_round_trips() {
        let mut core = test_core();
        let task = core.create_task(input("Buy milk")).await.unwrap();

        core.toggle_task(task.id.clone()).await.unwrap();
        let back = core.toggle_task(task.id.clone()).await.unwrap();

        assert_eq!(back.completed, task.completed);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_task() {
        let mut core = test_core();
        let keep = core.create_task(input("keep")).await.unwrap();
        let drop = core.create_task(input("drop")).await.unwrap();

        core.delete_task(drop.id.clone()).await.unwrap();

        assert!(core.store().get(&keep.id).is_some());
        assert!(core.store().get(&drop.id).is_none());
        assert_eq!(core.store().counts().total, 1);
    }

    #[tokio::test]
    async fn test_unknown_ids_surface_not_found() {
        let mut core = test_core();
        core.refresh().await.unwrap();

        let missing = "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string();
        assert!(matches!(
            core.toggle_task(missing.clone()).await,
            Err(CoreError::TaskNotFound(_))
        ));
        assert!(matches!(
            core.delete_task(missing.clone()).await,
            Err(CoreError::TaskNotFound(_))
        ));
        assert!(matches!(
            core.update_task(missing, TaskUpdate::default()).await,
            Err(CoreError::TaskNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_created_tasks_carry_the_configured_owner() {
        let mut core = test_core();
        let task = core.create_task(input("Buy milk")).await.unwrap();
        assert_eq!(task.owner.as_deref(), Some("tester"));
    }

    #[tokio::test]
    async fn test_update_keeps_untouched_fields() {
        let mut core = test_core();
        let task = core
            .create_task(CreateTaskInput {
                title: "Buy milk".to_string(),
                description: Some("two bottles".to_string()),
                due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
                priority: Priority::High,
            })
            .await
            .unwrap();

        let updated = core
            .update_task(task.id.clone(), TaskUpdate::default().set_title("Buy bread"))
            .await
            .unwrap();

        assert_eq!(updated.title, "Buy bread");
        assert_eq!(updated.description.as_deref(), Some("two bottles"));
        assert_eq!(updated.due_date, task.due_date);
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_session_submit_creates_and_resets() {
        let mut core = test_core();
        let mut session = EditSession::new();
        session.draft_mut().title = "Buy milk".to_string();
        session.draft_mut().priority = Priority::Low;

        let task = session.submit(&mut core).await.unwrap();

        assert_eq!(task.title, "Buy milk");
        assert_eq!(session.mode(), &EditMode::Create);
        assert_eq!(session.draft(), &TaskDraft::default());
    }

    #[tokio::test]
    async fn test_session_submit_edits_then_returns_to_create() {
        let mut core = test_core();
        let task = core.create_task(input("Buy milk")).await.unwrap();

        let mut session = EditSession::new();
        session.begin_edit(&task);
        session.draft_mut().title = "Buy oat milk".to_string();

        let updated = session.submit(&mut core).await.unwrap();

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(session.mode(), &EditMode::Create);
    }

    #[tokio::test]
    async fn test_session_keeps_draft_on_validation_failure() {
        let mut core = test_core();
        let task = core.create_task(input("Buy milk")).await.unwrap();

        let mut session = EditSession::new();
        session.begin_edit(&task);
        session.draft_mut().title = "  ".to_string();

        assert!(matches!(
            session.submit(&mut core).await,
            Err(CoreError::EmptyTitle)
        ));
        // the form input and edit target survive for a retry
        assert_eq!(session.mode(), &EditMode::Editing(task.id.clone()));
        assert_eq!(session.draft().title, "  ");
        // and the task itself was never touched
        assert_eq!(core.store().get(&task.id).unwrap().title, "Buy milk");
    }

    #[tokio::test]
    async fn test_session_cancel_mutates_nothing() {
        let mut core = test_core();
        let task = core.create_task(input("Buy milk")).await.unwrap();

        let mut session = EditSession::new();
        session.begin_edit(&task);
        session.draft_mut().title = "changed".to_string();
        session.cancel();

        assert_eq!(core.store().get(&task.id).unwrap().title, "Buy milk");
        assert_eq!(session.draft(), &TaskDraft::default());
    }
}
