use petgraph::visit::EdgeRef;

use crate::graph::TaskDag;
use crate::schedule::Schedule;
use crate::task::Task;

const CRITICAL_FILL: &str = "red";
const NORMAL_FILL: &str = "lightgray";

/// Renders the schedule as a Graphviz digraph: one node per task labelled
/// with its computed record, one edge per predecessor relation, critical
/// tasks filled red, plus a legend cluster. Layout is left to Graphviz.
pub fn render_dot(schedule: &Schedule) -> String {
    let dag = TaskDag::build(schedule.tasks());

    let mut out = String::new();
    out.push_str("digraph schedule {\n");
    out.push_str(&format!(
        "    label=\"{}\";\n",
        escape(&schedule.metadata().project_name)
    ));
    out.push_str("    rankdir=LR;\n");
    out.push_str("    node [shape=box, style=filled];\n");

    for node_ix in dag.graph.node_indices() {
        let code = &dag.graph[node_ix];
        if let Some(task) = schedule.task(code) {
            let fill = if task.is_critical == Some(true) {
                CRITICAL_FILL
            } else {
                NORMAL_FILL
            };
            out.push_str(&format!(
                "    {} [label=\"{}\", fillcolor=\"{}\"];\n",
                quote(code),
                node_label(task),
                fill
            ));
        }
    }

    for edge in dag.graph.edge_references() {
        out.push_str(&format!(
            "    {} -> {};\n",
            quote(&dag.graph[edge.source()]),
            quote(&dag.graph[edge.target()])
        ));
    }

    out.push_str("    subgraph cluster_legend {\n");
    out.push_str("        label=\"Legend\";\n");
    out.push_str(&format!(
        "        legend_critical [label=\"critical task\", fillcolor=\"{CRITICAL_FILL}\"];\n"
    ));
    out.push_str(&format!(
        "        legend_non_critical [label=\"non-critical task\", fillcolor=\"{NORMAL_FILL}\"];\n"
    ));
    out.push_str(
        "        legend_key [shape=note, fillcolor=\"white\", \
         label=\"ES: earliest start\\lEF: earliest finish\\lLS: latest start\\l\
         LF: latest finish\\lslack: LS - ES\\l\"];\n",
    );
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

fn node_label(task: &Task) -> String {
    format!(
        "{}\\nDUR: {}\\nES:{} EF:{}\\nLS:{} LF:{}\\nSLACK:{}",
        escape(&task.code),
        task.duration_days,
        format_value(task.early_start),
        format_value(task.early_finish),
        format_value(task.late_start),
        format_value(task.late_finish),
        format_value(task.slack),
    )
}

fn format_value(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn quote(code: &str) -> String {
    format!("\"{}\"", escape(code))
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
