use std::{future::Future, pin::Pin};

mod query;
mod storage;
mod storage_config;
mod task;

pub use query::TaskQuery;
pub use storage::{Storage, StorageBox};
pub use storage_config::StorageConfig;
pub use task::{Priority, Task, TaskId, TaskUpdate};

pub type PinFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
