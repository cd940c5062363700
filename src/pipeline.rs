//! Generation tasks and the order they run in.

use crate::config::Module;
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use std::fmt;

/// One step of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Task {
    /// Base directories
    Layout,
    /// Manifest, app files and the two shared files
    App,
    /// A feature's subtree, keyed by its snake_case name
    Feature(String),
    /// The app router
    Router,
    /// A module's own files
    Module(Module),
    /// A module's edits to the shared files
    Integrate(Module),
    /// The first screen of the app
    Navigation,
    /// The composed Redux store
    ReduxStore,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => write!(f, "layout"),
            Self::App => write!(f, "app"),
            Self::Feature(name) => write!(f, "feature:{name}"),
            Self::Router => write!(f, "router"),
            Self::Module(module) => write!(f, "module:{}", module.key()),
            Self::Integrate(module) => write!(f, "integrate:{}", module.key()),
            Self::Navigation => write!(f, "navigation"),
            Self::ReduxStore => write!(f, "redux_store"),
        }
    }
}

/// Tasks plus "must run before" edges.
#[derive(Debug, Default)]
pub struct TaskGraph {
    tasks: IndexSet<Task>,
    /// Index of a task to the indices it depends on
    dependencies: IndexMap<usize, IndexSet<usize>>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task, returning `false` if it was already planned.
    pub fn add_task(&mut self, task: Task) -> bool {
        self.tasks.insert(task)
    }

    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Requires `before` to run before `after`. Edges touching an unplanned task are ignored,
    /// so callers can declare them unconditionally.
    pub fn add_edge(&mut self, before: &Task, after: &Task) {
        if let (Some(before), Some(after)) =
            (self.tasks.get_index_of(before), self.tasks.get_index_of(after))
        {
            self.dependencies.entry(after).or_default().insert(before);
        }
    }

    /// Tasks `task` directly depends on.
    pub fn dependencies_of(&self, task: &Task) -> Vec<&Task> {
        self.tasks
            .get_index_of(task)
            .and_then(|index| self.dependencies.get(&index))
            .map(|deps| {
                deps.iter()
                    .filter_map(|&i| self.tasks.get_index(i))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Topological order of the tasks (Kahn's algorithm).
    ///
    /// Among tasks that are ready at the same time the one planned first runs first, so
    /// the order is deterministic for a given plan.
    ///
    /// # Errors
    /// * `Error::PipelineError` if the edges form a cycle
    pub fn execution_order(&self) -> Result<Vec<Task>> {
        let count = self.tasks.len();
        let mut in_degree = vec![0usize; count];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
        for (&after, befores) in &self.dependencies {
            in_degree[after] = befores.len();
            for &before in befores {
                dependents[before].push(after);
            }
        }

        let mut ready: BTreeSet<usize> = (0..count).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(count);
        while let Some(next) = ready.pop_first() {
            order.push(next);
            for &dependent in &dependents[next] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if order.len() != count {
            let stuck: Vec<String> = (0..count)
                .filter(|&i| in_degree[i] > 0)
                .filter_map(|i| self.tasks.get_index(i))
                .map(Task::to_string)
                .collect();
            return Err(Error::PipelineError(format!(
                "dependency cycle between tasks: {}",
                stuck.join(", ")
            )));
        }

        Ok(order
            .into_iter()
            .filter_map(|i| self.tasks.get_index(i).cloned())
            .collect())
    }
}
