use std::collections::{BTreeMap, HashSet};

use crate::task::{Task, TaskId};


/// Forward adjacency over task ids: each id maps to the tasks that depend on it.
///
/// Keys iterate in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Tasks that depend on each task
    dependents: BTreeMap<TaskId, Vec<TaskId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immediate dependents of `id`, empty for unknown ids.
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.dependents
            .get(&id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.dependents.contains_key(&id)
    }

    /// All node ids, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.dependents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.dependents.values().map(Vec::len).sum()
    }

    /// Nodes that only exist because some task listed them as a dependency.
    pub fn synthetic_nodes(&self, tasks: &[Task]) -> Vec<TaskId> {
        let known: HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();
        self.nodes().filter(|id| !known.contains(id)).collect()
    }

    fn ensure_node(&mut self, id: TaskId) -> &mut Vec<TaskId> {
        self.dependents.entry(id).or_default()
    }
}

/// Build the dependency graph for `tasks`.
///
/// Every task gets a node. A dependency id with no backing task still gets
/// a node so that edges always have both endpoints. Nothing is validated here.
pub fn build_graph(tasks: &[Task]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();

    for task in tasks {
        graph.ensure_node(task.id);
    }

    // Edges: dependency -> task
    for task in tasks {
        for &dep in &task.dependencies {
            graph.ensure_node(dep).push(task.id);
        }
    }

    graph
}
