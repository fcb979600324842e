use std::error::Error;

pub mod implementations;
pub use implementations::*;

use crate::task::{Task, TaskId};

/// Task registry used by the service layer.
///
/// Implementations must hand out snapshots: the `Vec` returned by
/// [`TaskStore::list_all`] is not affected by later inserts.
#[async_trait::async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a task, replacing any task with the same id.
    async fn insert(&self, task: Task) -> Result<(), Box<dyn Error + Send + Sync>>;

    async fn get(&self, id: TaskId) -> Result<Option<Task>, Box<dyn Error + Send + Sync>>;

    async fn list_all(&self) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>>;
}
