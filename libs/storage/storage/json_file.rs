use crate::utils::files;
use serde_derive::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::PathBuf};
use taskflow_storage_core::{
    PinFuture, Storage, StorageBox, StorageConfig, Task, TaskId, TaskQuery, TaskUpdate,
};

/// Single json document holding the whole task list, read and rewritten on
/// every operation. This is the device-local persistence variant.
#[derive(Serialize, Deserialize, Default)]
struct TasksDocument {
    tasks: BTreeMap<TaskId, Task>,
}

#[derive(Debug, Deserialize, Default)]
pub struct JsonFileStorageConfig {
    /// path of the json document where tasks are stored (default to
    /// ~/.local/share/taskflow/tasks.json)
    tasks_file: Option<String>,
}

impl JsonFileStorageConfig {
    pub fn get_tasks_file_path(&self) -> eyre::Result<PathBuf> {
        let path_raw = self
            .tasks_file
            .clone()
            .unwrap_or("~/.local/share/taskflow/tasks.json".to_owned());

        Ok(PathBuf::from(shellexpand::full(&path_raw)?.into_owned()))
    }
}

impl StorageConfig for JsonFileStorageConfig {
    type Storage = JsonFileStorage;

    fn to_storage(self) -> StorageBox {
        StorageBox::new(JsonFileStorage::new(self))
    }
}

pub struct JsonFileStorage {
    config: JsonFileStorageConfig,
}

impl JsonFileStorage {
    pub fn new(config: JsonFileStorageConfig) -> Self {
        JsonFileStorage { config }
    }

    fn read_document(&self) -> eyre::Result<TasksDocument> {
        let path = self.config.get_tasks_file_path()?;
        files::read_json_document_as_struct_with_default(path)
    }

    fn write_document(&self, document: &TasksDocument) -> eyre::Result<()> {
        let path = self.config.get_tasks_file_path()?;
        files::save_json_document(path, document)
    }
}

impl Storage for JsonFileStorage {
    fn init(&self) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            let path = self.config.get_tasks_file_path()?;
            if let Some(parent) = path.parent() {
                files::create_dir_if_not_exists_deep(parent)?;
            }
            if !path.exists() {
                files::save_json_document(&path, &TasksDocument::default())?;
            }
            Ok(())
        })
    }

    fn list_tasks(&self, query: TaskQuery) -> PinFuture<eyre::Result<Vec<Task>>> {
        Box::pin(async move {
            let document = self.read_document()?;

            let mut tasks: Vec<Task> = document
                .tasks
                .into_values()
                .filter(|task| query.matches(task))
                .collect();
            tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            Ok(tasks)
        })
    }

    fn get_task(&self, task_id: TaskId) -> PinFuture<eyre::Result<Task>> {
        Box::pin(async move {
            let document = self.read_document()?;

            let task = document
                .tasks
                .get(&task_id)
                .ok_or_else(|| eyre::eyre!("task '{task_id}' was not found"))?;

            Ok(task.clone())
        })
    }

    fn create_task(&self, task: Task) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            let mut document = self.read_document()?;
            document.tasks.insert(task.id.clone(), task);
            self.write_document(&document)?;
            Ok(())
        })
    }

    fn update_task(&self, task_id: TaskId, update: TaskUpdate) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            let mut document = self.read_document()?;

            let task = document
                .tasks
                .get(&task_id)
                .ok_or_else(|| eyre::eyre!("task '{task_id}' was not found"))?;

            let updated = update.merge_with_task(task);
            document.tasks.insert(task_id, updated);
            self.write_document(&document)?;
            Ok(())
        })
    }

    fn delete_task(&self, task_id: TaskId) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            let mut document = self.read_document()?;

            document
                .tasks
                .remove(&task_id)
                .ok_or_else(|| eyre::eyre!("task '{task_id}' was not found"))?;

            self.write_document(&document)?;
            Ok(())
        })
    }
}
