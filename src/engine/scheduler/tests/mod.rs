#[cfg(test)]
mod tests {
    use crate::engine::options::{DanglingDependencyPolicy, PlannerOptions};
    use crate::engine::scheduler::{compute_schedule, compute_schedule_with, linearize};
    use crate::{SchedulerError, Task};

    #[test]
    fn test_schedule_empty() {
        assert_eq!(compute_schedule(&[]), Ok(vec![]));
    }

    #[test]
    fn test_schedule_prefers_higher_priority_once_ready() {
        let tasks = vec![
            Task::new(1).with_priority(5),
            Task::new(2).with_priority(10).with_dependencies([1]),
            Task::new(3).with_priority(1).with_dependencies([1]),
        ];
        assert_eq!(compute_schedule(&tasks), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_schedule_dependencies_beat_priority() {
        let tasks = vec![
            Task::new(2).with_priority(100).with_dependencies([1]),
            Task::new(1).with_priority(1),
        ];
        assert_eq!(compute_schedule(&tasks), Ok(vec![1, 2]));
    }

    #[test]
    fn test_schedule_picks_among_ready_only() {
        // 2 has the highest priority but is not ready until 1 runs.
        let tasks = vec![
            Task::new(1).with_priority(1),
            Task::new(2).with_priority(50).with_dependencies([1]),
            Task::new(3).with_priority(10),
        ];
        assert_eq!(compute_schedule(&tasks), Ok(vec![3, 1, 2]));
    }

    #[test]
    fn test_schedule_ties_broken_by_ascending_id() {
        let tasks = vec![
            Task::new(3).with_priority(5),
            Task::new(1).with_priority(5),
            Task::new(2).with_priority(5),
            Task::new(0).with_priority(1),
        ];
        assert_eq!(compute_schedule(&tasks), Ok(vec![1, 2, 3, 0]));
    }

    #[test]
    fn test_schedule_negative_priorities() {
        let tasks = vec![
            Task::new(1).with_priority(-5),
            Task::new(2).with_priority(-1),
            Task::new(3),
        ];
        assert_eq!(compute_schedule(&tasks), Ok(vec![3, 2, 1]));
    }

    #[test]
    fn test_schedule_ignores_execution_time() {
        let tasks = vec![
            Task::new(1).with_execution_time(1),
            Task::new(2).with_execution_time(1_000),
        ];
        assert_eq!(compute_schedule(&tasks), Ok(vec![1, 2]));
    }

    #[test]
    fn test_schedule_repeated_dependency_entry() {
        let tasks = vec![Task::new(1), Task::new(2).with_dependencies([1, 1])];
        assert_eq!(compute_schedule(&tasks), Ok(vec![1, 2]));
    }

    #[test]
    fn test_schedule_independent_of_input_order() {
        let mut tasks = vec![
            Task::new(1).with_priority(2),
            Task::new(2).with_priority(2).with_dependencies([1]),
            Task::new(3).with_priority(7),
            Task::new(4).with_priority(7).with_dependencies([3, 1]),
            Task::new(5).with_priority(7),
        ];
        let forward = compute_schedule(&tasks).unwrap();
        tasks.reverse();
        let backward = compute_schedule(&tasks).unwrap();

        assert_eq!(forward, vec![3, 5, 1, 4, 2]);
        assert_eq!(forward, backward);
        assert_eq!(forward, compute_schedule(&tasks).unwrap());
    }

    #[test]
    fn test_schedule_cycle_rejected() {
        let tasks = vec![
            Task::new(1).with_dependencies([2]),
            Task::new(2).with_dependencies([1]),
        ];
        assert_eq!(
            compute_schedule(&tasks),
            Err(SchedulerError::CycleDetected { tasks: vec![1, 2] })
        );
    }

    #[test]
    fn test_schedule_cycle_reports_blocked_tasks() {
        let tasks = vec![
            Task::new(1),
            Task::new(2).with_dependencies([1, 3]),
            Task::new(3).with_dependencies([2]),
            Task::new(4).with_dependencies([3]),
        ];
        let err = compute_schedule(&tasks).unwrap_err();
        assert!(err.is_cycle());
        assert_eq!(err, SchedulerError::CycleDetected { tasks: vec![2, 3, 4] });
    }

    #[test]
    fn test_schedule_self_dependency_rejected() {
        let tasks = vec![Task::new(1).with_dependencies([1])];
        assert!(compute_schedule(&tasks).unwrap_err().is_cycle());
    }

    #[test]
    fn test_schedule_dangling_dependency_rejected_by_default() {
        let tasks = vec![Task::new(1).with_dependencies([99])];
        assert_eq!(
            compute_schedule(&tasks),
            Err(SchedulerError::MissingDependency {
                task: 1,
                dependency: 99
            })
        );
    }

    #[test]
    fn test_schedule_dangling_dependency_ignored() {
        let options = PlannerOptions::new().with_dangling(DanglingDependencyPolicy::Ignore);
        let tasks = vec![
            Task::new(1).with_dependencies([99]),
            Task::new(2).with_priority(3).with_dependencies([1, 98]),
        ];
        assert_eq!(compute_schedule_with(&tasks, &options), Ok(vec![1, 2]));
    }

    #[test]
    fn test_schedule_duplicate_ids_rejected() {
        let tasks = vec![Task::new(1), Task::new(1)];
        assert_eq!(
            compute_schedule(&tasks),
            Err(SchedulerError::DuplicateTask(1))
        );
    }

    #[test]
    fn test_linearize_skips_unknown_dependencies() {
        let tasks = vec![
            Task::new(1).with_dependencies([99]),
            Task::new(2).with_priority(4).with_dependencies([98, 1, 99]),
            Task::new(3).with_priority(9),
        ];
        assert_eq!(linearize(&tasks), Ok(vec![3, 1, 2]));
    }

    #[test]
    fn test_linearize_unknown_dependency_does_not_mask_cycle() {
        let tasks = vec![
            Task::new(1).with_dependencies([99, 2]),
            Task::new(2).with_dependencies([1]),
            Task::new(3).with_dependencies([99]),
        ];
        assert_eq!(
            linearize(&tasks),
            Err(SchedulerError::CycleDetected { tasks: vec![1, 2] })
        );
    }
}
