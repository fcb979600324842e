//! # Task Scheduler
//!
//! Computes a priority-biased execution order for tasks linked by
//! dependency edges, rejecting dependency cycles before scheduling.
//!
//! ## Features
//!
//! - Build a forward dependency graph from task dependency lists
//! - Detect dependency cycles without recursion
//! - Priority-aware topological ordering (Kahn's algorithm with a max-heap)
//! - Deterministic tie-break: equal priorities run in ascending id order
//! - Explicit validation of unknown dependency ids and duplicate task ids
//! - Async task store with an in-memory implementation
//!
//! ## Usage
//!
//! Add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! task-scheduler = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use task_scheduler::{compute_schedule, detect_cycle, Task};
//!
//! let tasks = vec![
//!     Task::new(1).with_priority(5),
//!     Task::new(2).with_priority(10).with_dependencies([1]),
//!     Task::new(3).with_priority(1).with_dependencies([1]),
//! ];
//!
//! assert!(!detect_cycle(&tasks));
//! assert_eq!(compute_schedule(&tasks).unwrap(), vec![1, 2, 3]);
//! ```
//!
//! With a store:
//!
//! ```rust
//! use std::sync::Arc;
//! use task_scheduler::storage::implementations::MemoryStore;
//! use task_scheduler::{Task, TaskService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = TaskService::new(Arc::new(MemoryStore::new()));
//!     service.add_task(Task::new(1)).await.unwrap();
//!     service.add_task(Task::new(2).with_dependencies([1])).await.unwrap();
//!
//!     match service.schedule().await {
//!         Ok(order) => println!("Execution order: {:?}", order),
//!         Err(e) => eprintln!("Scheduling failed: {}", e),
//!     }
//! }
//! ```
//!
//! ## License
//!
//! Licensed under the MIT license. See the [LICENSE](LICENSE) file for details.

pub mod engine;
pub mod error;
pub mod service;
pub mod storage;
pub mod task;

pub use engine::{
    compute_schedule, compute_schedule_with, detect_cycle, DanglingDependencyPolicy, Planner,
    PlannerOptions,
};
pub use error::{Result, SchedulerError};
pub use service::TaskService;
pub use storage::TaskStore;
pub use task::{Task, TaskId};
