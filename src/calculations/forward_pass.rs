use std::collections::HashMap;

use crate::graph::TaskGraph;

/// Early dates keyed by task code, plus the project duration they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardPassResult {
    pub early: HashMap<String, (i64, i64)>,
    pub project_duration: i64,
}

pub struct ForwardPass<'a> {
    graph: &'a TaskGraph,
}

impl<'a> ForwardPass<'a> {
    pub fn new(graph: &'a TaskGraph) -> Self {
        Self { graph }
    }

    /// `order` must be a topological order of the graph, so every
    /// predecessor's early finish is final before its dependents are
    /// visited. The project duration is only meaningful once the whole
    /// order has been consumed, which is why it is returned rather than
    /// queried mid-pass.
    pub fn execute(&self, order: &[String]) -> ForwardPassResult {
        let mut early: HashMap<String, (i64, i64)> = HashMap::with_capacity(order.len());
        let mut project_duration = 0;

        for code in order {
            let Some(task) = self.graph.task(code) else {
                continue;
            };
            let early_start = task
                .predecessors
                .iter()
                .filter_map(|pred| early.get(pred).map(|&(_, finish)| finish))
                .max()
                .unwrap_or(0);
            let early_finish = early_start + task.duration_days;
            if early_finish > project_duration {
                project_duration = early_finish;
            }
            early.insert(code.clone(), (early_start, early_finish));
        }

        ForwardPassResult {
            early,
            project_duration,
        }
    }
}
