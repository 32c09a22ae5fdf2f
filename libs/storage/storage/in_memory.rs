use serde_derive::Deserialize;
use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use taskflow_storage_core::{
    PinFuture, Storage, StorageBox, StorageConfig, Task, TaskId, TaskQuery, TaskUpdate,
};

/// This storage type is mainly used for testing, data is not persisted to
/// disk but only present in memory
#[derive(Default)]
pub struct InMemoryStorage {
    tasks: RwLock<BTreeMap<TaskId, Task>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryStorageConfig {}

impl StorageConfig for InMemoryStorageConfig {
    type Storage = InMemoryStorage;

    fn to_storage(self) -> StorageBox {
        StorageBox::new(InMemoryStorage::default())
    }
}

impl InMemoryStorage {
    fn read(&self) -> eyre::Result<RwLockReadGuard<'_, BTreeMap<TaskId, Task>>> {
        self.tasks
            .read()
            .map_err(|_| eyre::eyre!("in-memory storage lock poisoned"))
    }

    fn write(&self) -> eyre::Result<RwLockWriteGuard<'_, BTreeMap<TaskId, Task>>> {
        self.tasks
            .write()
            .map_err(|_| eyre::eyre!("in-memory storage lock poisoned"))
    }
}

impl Storage for InMemoryStorage {
    fn init(&self) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move { Ok(()) })
    }

    fn list_tasks(&self, query: TaskQuery) -> PinFuture<eyre::Result<Vec<Task>>> {
        Box::pin(async move {
            let tasks = self.read()?;

            let mut tasks: Vec<Task> = tasks
                .values()
                .filter(|task| query.matches(task))
                .cloned()
                .collect();
            tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            Ok(tasks)
        })
    }

    fn get_task(&self, task_id: TaskId) -> PinFuture<eyre::Result<Task>> {
        Box::pin(async move {
            let tasks = self.read()?;

            tasks
                .get(&task_id)
                .cloned()
                .ok_or_else(|| eyre::eyre!("task '{task_id}' was not found"))
        })
    }

    fn create_task(&self, task: Task) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            let mut tasks = self.write()?;
            tasks.insert(task.id.clone(), task);
            Ok(())
        })
    }

    fn update_task(&self, task_id: TaskId, update: TaskUpdate) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            let mut tasks = self.write()?;

            let task = tasks
                .get(&task_id)
                .ok_or_else(|| eyre::eyre!("task '{task_id}' was not found"))?;

            let updated = update.merge_with_task(task);
            tasks.insert(task_id, updated);
            Ok(())
        })
    }

    fn delete_task(&self, task_id: TaskId) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            let mut tasks = self.write()?;

            tasks
                .remove(&task_id)
                .ok_or_else(|| eyre::eyre!("task '{task_id}' was not found"))?;

            Ok(())
        })
    }
}
