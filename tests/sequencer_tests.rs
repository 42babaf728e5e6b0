use cpm_tool::RawTask;
use cpm_tool::graph::{GraphBuilder, Sequencer};

fn raw(code: &str, duration: &str, predecessors: &str) -> RawTask {
    RawTask::new(code, "", duration, predecessors)
}

#[test]
fn every_task_follows_all_its_predecessors() {
    let records = vec![
        raw("A", "2", ""),
        raw("B", "5", "A"),
        raw("C", "1", "A"),
        raw("D", "2", "B,C"),
    ];
    let graph = GraphBuilder::new(records).build().unwrap();
    let order = Sequencer::new(&graph).sequence().unwrap();

    assert_eq!(order.len(), 4);
    let position = |code: &str| order.iter().position(|c| c == code).unwrap();
    for task in graph.tasks() {
        for predecessor in &task.predecessors {
            assert!(
                position(predecessor) < position(&task.code),
                "{} sequenced before its predecessor {}",
                task.code,
                predecessor
            );
        }
    }
}

#[test]
fn independent_tasks_keep_input_order() {
    let records = vec![raw("X", "1", ""), raw("Y", "1", ""), raw("Z", "1", "")];
    let graph = GraphBuilder::new(records).build().unwrap();
    let order = Sequencer::new(&graph).sequence().unwrap();
    assert_eq!(order, vec!["X", "Y", "Z"]);
}

#[test]
fn sequence_is_reproducible() {
    let records = vec![
        raw("A", "1", ""),
        raw("B", "1", "A"),
        raw("C", "1", "A"),
        raw("D", "1", "B C"),
    ];
    let graph = GraphBuilder::new(records).build().unwrap();
    let first = Sequencer::new(&graph).sequence().unwrap();
    let second = Sequencer::new(&graph).sequence().unwrap();
    assert_eq!(first, second);
}

#[test]
fn two_task_cycle_is_detected() {
    let records = vec![raw("A", "2", "B"), raw("B", "3", "A")];
    let graph = GraphBuilder::new(records).build().unwrap();
    let err = Sequencer::new(&graph).sequence().unwrap_err();

    assert_eq!(err.remaining, vec!["A".to_string(), "B".to_string()]);
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn cycle_downstream_of_valid_tasks_is_detected() {
    // A is fine; B and C depend on each other.
    let records = vec![raw("A", "2", ""), raw("B", "3", "A,C"), raw("C", "1", "B")];
    let graph = GraphBuilder::new(records).build().unwrap();
    let err = Sequencer::new(&graph).sequence().unwrap_err();
    assert_eq!(err.remaining, vec!["B".to_string(), "C".to_string()]);
}

#[test]
fn self_reference_is_a_cycle() {
    let records = vec![raw("A", "2", "A")];
    let graph = GraphBuilder::new(records).build().unwrap();
    let err = Sequencer::new(&graph).sequence().unwrap_err();
    assert_eq!(err.remaining, vec!["A".to_string()]);
}
