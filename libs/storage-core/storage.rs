use super::{
    query::TaskQuery,
    task::{Task, TaskId, TaskUpdate},
};
use crate::PinFuture;
use derive_more::{Deref, DerefMut};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct StorageBox(Box<dyn Storage>);

impl StorageBox {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self(Box::new(storage))
    }
}

pub trait Storage: Send + Sync {
    /// Prepare the backend for first use (create directories, empty documents)
    fn init(&self) -> PinFuture<eyre::Result<()>>;

    // List tasks matching the query, newest first
    fn list_tasks(&self, query: TaskQuery) -> PinFuture<eyre::Result<Vec<Task>>>;

    // Get a task by id
    fn get_task(&self, task_id: TaskId) -> PinFuture<eyre::Result<Task>>;

    // Create a new task record
    fn create_task(&self, task: Task) -> PinFuture<eyre::Result<()>>;

    // Update a task with a partial field set
    fn update_task(&self, task_id: TaskId, update: TaskUpdate) -> PinFuture<eyre::Result<()>>;

    // Delete a task by id
    fn delete_task(&self, task_id: TaskId) -> PinFuture<eyre::Result<()>>;
}
