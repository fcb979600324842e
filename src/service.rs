use log::{debug, info};
use std::error::Error;
use std::sync::Arc;

use crate::engine::{Planner, PlannerOptions};
use crate::error::{Result, SchedulerError};
use crate::storage::TaskStore;
use crate::task::{Task, TaskId};

fn storage_error(e: Box<dyn Error + Send + Sync>) -> SchedulerError {
    SchedulerError::Storage(e.to_string())
}

/// Task registration and scheduling on top of a [`TaskStore`].
#[derive(Clone)]
pub struct TaskService {
    /// Storage backend holding registered tasks
    store: Arc<dyn TaskStore>,
    planner: Planner,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            planner: Planner::default(),
        }
    }

    pub fn with_options(mut self, options: PlannerOptions) -> Self {
        self.planner = Planner::new(options);
        self
    }

    /// Register a task. A task with the same id is replaced.
    pub async fn add_task(&self, task: Task) -> Result<Task> {
        debug!(
            "Registering task '{}' (priority {}, {} dependencies)",
            task.id,
            task.priority,
            task.dependencies.len()
        );
        self.store
            .insert(task.clone())
            .await
            .map_err(storage_error)?;
        Ok(task)
    }

    pub async fn get_task(&self, id: TaskId) -> Result<Option<Task>> {
        self.store.get(id).await.map_err(storage_error)
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.store.list_all().await.map_err(storage_error)
    }

    /// Whether the registered tasks currently contain a dependency cycle.
    pub async fn has_cycle(&self) -> Result<bool> {
        let tasks = self.list_tasks().await?;
        Ok(self.planner.detect_cycle(&tasks))
    }

    /// Execution order for every registered task.
    ///
    /// Works on a snapshot; tasks added while planning are not included.
    pub async fn schedule(&self) -> Result<Vec<TaskId>> {
        let tasks = self.list_tasks().await?;
        info!("Computing schedule for {} registered tasks", tasks.len());
        self.planner.plan(&tasks)
    }
}
