use async_trait::async_trait;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::storage::TaskStore;
use crate::task::{Task, TaskId};

/// In-memory implementation of TaskStore.
///
/// Writers take the write lock; `list_all` clones under the read lock, so
/// a schedule never observes a registration that lands mid-computation.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl MemoryStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered tasks
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert(&self, task: Task) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.tasks.write().await.insert(task.id, task);
        Ok(())
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, Box<dyn Error + Send + Sync>> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>> {
        let tasks = self.tasks.read().await;
        let mut snapshot: Vec<Task> = tasks.values().cloned().collect();
        snapshot.sort_by_key(|t| t.id);
        Ok(snapshot)
    }
}
