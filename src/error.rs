use thiserror::Error;

use crate::task::TaskId;

/// Errors returned while planning a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The dependency graph cannot be fully linearized.
    ///
    /// Holds either the cycle path (`[a, b, a]`) or, when the scheduler's
    /// count check trips, the ids that never became ready.
    #[error("Cycle detected in task dependencies: {tasks:?}")]
    CycleDetected { tasks: Vec<TaskId> },

    #[error("Task '{task}' depends on non-existent task '{dependency}'")]
    MissingDependency { task: TaskId, dependency: TaskId },

    #[error("Task '{0}' appears more than once in the task set")]
    DuplicateTask(TaskId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SchedulerError {
    pub fn is_cycle(&self) -> bool {
        matches!(self, SchedulerError::CycleDetected { .. })
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
