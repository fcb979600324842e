use std::collections::HashSet;

use super::dependency::DependencyGraph;
use crate::task::TaskId;


/// One entry of the depth-first work stack.
struct Frame {
    node: TaskId,
    /// Index of the next neighbor to visit
    next: usize,
}

impl Frame {
    fn new(node: TaskId) -> Self {
        Self { node, next: 0 }
    }
}

/// Returns true if the graph contains at least one directed cycle.
pub fn has_cycle(graph: &DependencyGraph) -> bool {
    find_cycle(graph).is_some()
}

/// Find the first cycle reachable from any node.
///
/// The returned path starts and ends on the same id, e.g. `[1, 2, 1]`.
/// Uses an explicit stack, so deep chains do not grow the call stack.
pub fn find_cycle(graph: &DependencyGraph) -> Option<Vec<TaskId>> {
    // `visited` is never cleared; `on_stack` mirrors the current path.
    let mut visited: HashSet<TaskId> = HashSet::with_capacity(graph.len());
    let mut on_stack: HashSet<TaskId> = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.nodes() {
        if !visited.insert(root) {
            continue;
        }
        on_stack.insert(root);
        stack.push(Frame::new(root));

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match graph.dependents_of(node).get(frame.next) {
                Some(&next) => {
                    frame.next += 1;

                    if on_stack.contains(&next) {
                        // Back edge
                        return Some(cycle_path(&stack, next));
                    }
                    if visited.insert(next) {
                        on_stack.insert(next);
                        stack.push(Frame::new(next));
                    }
                }
                None => {
                    on_stack.remove(&node);
                    stack.pop();
                }
            }
        }
    }

    None
}

fn cycle_path(stack: &[Frame], start: TaskId) -> Vec<TaskId> {
    let mut path: Vec<TaskId> = stack
        .iter()
        .map(|f| f.node)
        .skip_while(|&id| id != start)
        .collect();
    path.push(start);
    path
}
