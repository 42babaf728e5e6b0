use std::collections::HashMap;

use crate::graph::TaskGraph;

pub struct BackwardPass<'a> {
    graph: &'a TaskGraph,
}

impl<'a> BackwardPass<'a> {
    pub fn new(graph: &'a TaskGraph) -> Self {
        Self { graph }
    }

    /// Late dates keyed by task code. Visits `order` in reverse, so every
    /// successor's late start is final before its predecessors are visited.
    /// Tasks with no successors anchor at the project duration.
    pub fn execute(&self, order: &[String], project_duration: i64) -> HashMap<String, (i64, i64)> {
        let mut late: HashMap<String, (i64, i64)> = HashMap::with_capacity(order.len());

        for code in order.iter().rev() {
            let Some(task) = self.graph.task(code) else {
                continue;
            };
            let late_finish = self
                .graph
                .successors(code)
                .iter()
                .filter_map(|succ| late.get(succ).map(|&(start, _)| start))
                .min()
                .unwrap_or(project_duration);
            let late_start = late_finish - task.duration_days;
            late.insert(code.clone(), (late_start, late_finish));
        }

        late
    }
}
