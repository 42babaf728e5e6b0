use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

use super::TaskGraph;

/// The sequence came up short: at least one dependency cycle runs through
/// the listed codes. Membership is the whole unprocessed set, not the
/// minimal cycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("dependency cycle detected among tasks: {}", remaining.join(", "))]
pub struct CycleDetected {
    pub remaining: Vec<String>,
}

pub struct Sequencer<'a> {
    graph: &'a TaskGraph,
}

impl<'a> Sequencer<'a> {
    pub fn new(graph: &'a TaskGraph) -> Self {
        Self { graph }
    }

    /// Kahn's algorithm over the dependency edges. Zero in-degree tasks are
    /// seeded in input order and the queue is FIFO, so the order is
    /// reproducible run to run.
    pub fn sequence(&self) -> Result<Vec<String>, CycleDetected> {
        let mut in_degree: HashMap<&str, usize> = HashMap::with_capacity(self.graph.len());
        for task in self.graph.tasks() {
            in_degree.insert(task.code.as_str(), task.predecessors.len());
        }

        let mut queue: VecDeque<&str> = self
            .graph
            .tasks()
            .iter()
            .filter(|task| task.predecessors.is_empty())
            .map(|task| task.code.as_str())
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(self.graph.len());
        while let Some(code) = queue.pop_front() {
            order.push(code.to_string());
            for successor in self.graph.successors(code) {
                if let Some(degree) = in_degree.get_mut(successor.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(successor.as_str());
                    }
                }
            }
        }

        if order.len() < self.graph.len() {
            let sequenced: HashSet<&str> = order.iter().map(String::as_str).collect();
            let remaining = self
                .graph
                .tasks()
                .iter()
                .filter(|task| !sequenced.contains(task.code.as_str()))
                .map(|task| task.code.clone())
                .collect();
            return Err(CycleDetected { remaining });
        }

        Ok(order)
    }
}
