pub mod builder;
pub mod sequencer;
pub mod task_dag;

pub use builder::{BuildPolicy, GraphBuildError, GraphBuilder};
pub use sequencer::{CycleDetected, Sequencer};
pub use task_dag::TaskDag;

use std::collections::HashMap;

use crate::task::Task;

/// Validated dependency graph. Tasks keep their input order; the successor
/// map is derived once from the resolved predecessor lists.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
    successors: HashMap<String, Vec<String>>,
}

impl TaskGraph {
    pub(crate) fn new(
        tasks: Vec<Task>,
        index: HashMap<String, usize>,
        successors: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            tasks,
            index,
            successors,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in input order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, code: &str) -> Option<&Task> {
        self.index.get(code).map(|&idx| &self.tasks[idx])
    }

    /// Codes of the tasks that depend on `code`, in input order.
    pub fn successors(&self, code: &str) -> &[String] {
        self.successors
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn apply_early(&mut self, early: &HashMap<String, (i64, i64)>) {
        for task in &mut self.tasks {
            if let Some(&(start, finish)) = early.get(&task.code) {
                task.early_start = Some(start);
                task.early_finish = Some(finish);
            }
        }
    }

    pub(crate) fn apply_late(&mut self, late: &HashMap<String, (i64, i64)>) {
        for task in &mut self.tasks {
            if let Some(&(start, finish)) = late.get(&task.code) {
                task.late_start = Some(start);
                task.late_finish = Some(finish);
            }
        }
    }

    pub(crate) fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}
