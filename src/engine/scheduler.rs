use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::options::PlannerOptions;
use super::validation;
use crate::error::{Result, SchedulerError};
use crate::task::{Task, TaskId};

mod tests;

/// Entry of the ready queue.
///
/// Orders by priority, then by lower id, so the heap pops the highest
/// priority first and resolves ties by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReadyTask {
    priority: i64,
    id: TaskId,
}

impl From<&Task> for ReadyTask {
    fn from(task: &Task) -> Self {
        Self {
            priority: task.priority,
            id: task.id,
        }
    }
}

impl Ord for ReadyTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for ReadyTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute an execution order for `tasks` with the default options.
///
/// Dependencies always come first; among ready tasks the highest priority
/// wins and equal priorities go in ascending id order. Fails with
/// [`SchedulerError::CycleDetected`] rather than returning a partial order.
pub fn compute_schedule(tasks: &[Task]) -> Result<Vec<TaskId>> {
    compute_schedule_with(tasks, &PlannerOptions::default())
}

pub fn compute_schedule_with(tasks: &[Task], options: &PlannerOptions) -> Result<Vec<TaskId>> {
    validation::validate_tasks(tasks, options.dangling)?;
    linearize(tasks)
}

/// Kahn's algorithm over a task set that passed `validation::validate_tasks`.
///
/// Ids must be unique. A dependency id outside the set can only get here
/// under the `Ignore` policy, and is treated as already satisfied.
pub(crate) fn linearize(tasks: &[Task]) -> Result<Vec<TaskId>> {
    let position: HashMap<TaskId, usize> =
        tasks.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
    let mut in_degree: Vec<usize> = vec![0; tasks.len()];
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];

    for (i, task) in tasks.iter().enumerate() {
        for dep in &task.dependencies {
            match position.get(dep) {
                Some(&d) => {
                    successors[d].push(i);
                    in_degree[i] += 1;
                }
                None => debug!("Task '{}': ignoring unknown dependency '{}'", task.id, dep),
            }
        }
    }

    let mut queue: BinaryHeap<(ReadyTask, usize)> = tasks
        .iter()
        .enumerate()
        .filter(|&(i, _)| in_degree[i] == 0)
        .map(|(i, t)| (ReadyTask::from(t), i))
        .collect();

    debug!("Scheduling {} tasks, {} initially ready", tasks.len(), queue.len());

    let mut execution_order = Vec::with_capacity(tasks.len());
    while let Some((ready, current)) = queue.pop() {
        execution_order.push(ready.id);

        for &next in &successors[current] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push((ReadyTask::from(&tasks[next]), next));
            }
        }
    }

    if execution_order.len() != tasks.len() {
        let mut blocked: Vec<TaskId> = tasks
            .iter()
            .zip(&in_degree)
            .filter(|&(_, &degree)| degree > 0)
            .map(|(t, _)| t.id)
            .collect();
        blocked.sort_unstable();
        warn!(
            "Scheduled {}/{} tasks; {} blocked by a cycle",
            execution_order.len(),
            tasks.len(),
            blocked.len()
        );
        return Err(SchedulerError::CycleDetected { tasks: blocked });
    }

    Ok(execution_order)
}
