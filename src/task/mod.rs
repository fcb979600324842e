use serde::{Deserialize, Serialize};


/// Identifier of a task, unique within one task set.
pub type TaskId = i64;

/// A unit of work with a priority and the ids of the tasks it waits on.
///
/// `execution_time` is carried through unchanged; ordering never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub execution_time: i64,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl Task {
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            priority: 0,
            execution_time: 0,
            dependencies: Vec::new(),
        }
    }

    pub fn with_priority(mut self, value: i64) -> Self {
        self.priority = value;
        self
    }

    pub fn with_execution_time(mut self, value: i64) -> Self {
        self.execution_time = value;
        self
    }

    pub fn with_dependencies(mut self, value: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies = value.into_iter().collect();
        self
    }

    pub fn depends_on(&self, id: TaskId) -> bool {
        self.dependencies.contains(&id)
    }
}
