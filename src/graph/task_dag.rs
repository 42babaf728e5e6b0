use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::task::Task;

/// petgraph projection of the dependency edges, consumed by the diagram
/// renderer. Nodes carry the task code; edges run predecessor -> dependent.
pub struct TaskDag {
    pub graph: DiGraph<String, ()>,
    pub code_to_index: HashMap<String, NodeIndex>,
}

impl TaskDag {
    pub fn build(tasks: &[Task]) -> Self {
        let mut graph: DiGraph<String, ()> = DiGraph::new();
        let mut code_to_index: HashMap<String, NodeIndex> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let node_ix = graph.add_node(task.code.clone());
            code_to_index.insert(task.code.clone(), node_ix);
        }

        for task in tasks {
            for predecessor in &task.predecessors {
                if let (Some(&u), Some(&v)) = (
                    code_to_index.get(predecessor),
                    code_to_index.get(&task.code),
                ) {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self {
            graph,
            code_to_index,
        }
    }
}
