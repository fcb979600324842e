pub mod cycle;
pub mod dependency;
mod options;
mod planner;
pub mod scheduler;
mod validation;

pub use cycle::{find_cycle, has_cycle};
pub use dependency::{build_graph, DependencyGraph};
pub use options::{DanglingDependencyPolicy, PlannerOptions, DANGLING_POLICY_ENV};
pub use planner::{detect_cycle, Planner};
pub use scheduler::{compute_schedule, compute_schedule_with};
pub use validation::validate_tasks;
