use log::{debug, info, warn};

use super::cycle;
use super::dependency::build_graph;
use super::options::PlannerOptions;
use super::scheduler;
use super::validation;
use crate::error::{Result, SchedulerError};
use crate::task::{Task, TaskId};


/// Returns true if the dependencies of `tasks` form at least one cycle.
///
/// Dependency ids with no task are graph nodes without dependencies of
/// their own, so they never close a cycle.
pub fn detect_cycle(tasks: &[Task]) -> bool {
    cycle::has_cycle(&build_graph(tasks))
}

/// Runs validation, cycle detection and scheduling over a task snapshot.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    options: PlannerOptions,
}

impl Planner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    pub fn detect_cycle(&self, tasks: &[Task]) -> bool {
        detect_cycle(tasks)
    }

    /// The first dependency cycle found, as a closed path of task ids.
    pub fn find_cycle(&self, tasks: &[Task]) -> Option<Vec<TaskId>> {
        cycle::find_cycle(&build_graph(tasks))
    }

    /// Validate `tasks`, reject cycles, then compute the execution order.
    pub fn plan(&self, tasks: &[Task]) -> Result<Vec<TaskId>> {
        debug!(
            "Planning {} tasks (dangling dependencies: {})",
            tasks.len(),
            self.options.dangling
        );

        validation::validate_tasks(tasks, self.options.dangling)?;

        let graph = build_graph(tasks);
        debug!(
            "Dependency graph has {} nodes and {} edges",
            graph.len(),
            graph.edge_count()
        );

        let synthetic = graph.synthetic_nodes(tasks);
        if !synthetic.is_empty() {
            debug!("Dependencies with no task, treated as satisfied: {:?}", synthetic);
        }

        if let Some(path) = cycle::find_cycle(&graph) {
            warn!("Rejecting schedule, dependency cycle: {:?}", path);
            return Err(SchedulerError::CycleDetected { tasks: path });
        }

        let order = scheduler::linearize(tasks)?;
        info!("Computed execution order for {} tasks", order.len());
        Ok(order)
    }
}
