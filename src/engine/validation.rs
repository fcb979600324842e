use std::collections::HashSet;

use super::options::DanglingDependencyPolicy;
use crate::error::{Result, SchedulerError};
use crate::task::Task;


/// Referential checks run before any graph is built.
///
/// Rejects duplicate task ids, and dependency ids with no task in the set
/// when `policy` is [`DanglingDependencyPolicy::Reject`]. Cycles, including
/// self-dependencies, are left to the cycle detector.
pub fn validate_tasks(tasks: &[Task], policy: DanglingDependencyPolicy) -> Result<()> {
    let mut all_task_ids: HashSet<_> = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !all_task_ids.insert(task.id) {
            return Err(SchedulerError::DuplicateTask(task.id));
        }
    }

    if policy == DanglingDependencyPolicy::Reject {
        for task in tasks {
            if let Some(&dep) = task
                .dependencies
                .iter()
                .find(|&&dep| !all_task_ids.contains(&dep))
            {
                return Err(SchedulerError::MissingDependency {
                    task: task.id,
                    dependency: dep,
                });
            }
        }
    }

    Ok(())
}
