use cpm_tool::RawTask;
use cpm_tool::graph::{BuildPolicy, GraphBuildError, GraphBuilder};

fn raw(code: &str, duration: &str, predecessors: &str) -> RawTask {
    RawTask::new(code, "", duration, predecessors)
}

#[test]
fn builds_graph_with_resolved_predecessors() {
    let records = vec![
        raw("A", "2", ""),
        raw("B", "3", "A"),
        raw("C", "1", "A,B"),
    ];
    let graph = GraphBuilder::new(records).build().unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.task("C").unwrap().predecessors, vec!["A", "B"]);
    assert_eq!(graph.successors("A"), ["B".to_string(), "C".to_string()]);
    assert!(graph.successors("C").is_empty());
}

#[test]
fn undelimited_predecessor_text_splits_per_character() {
    let records = vec![
        raw("D", "1", ""),
        raw("F", "1", ""),
        raw("G", "2", "DF"),
    ];
    let graph = GraphBuilder::new(records).build().unwrap();
    assert_eq!(graph.task("G").unwrap().predecessors, vec!["D", "F"]);
}

#[test]
fn space_separated_predecessors_keep_multi_character_codes() {
    let records = vec![
        raw("T10", "1", ""),
        raw("T20", "1", ""),
        raw("T30", "2", "T10 T20"),
    ];
    let graph = GraphBuilder::new(records).build().unwrap();
    assert_eq!(graph.task("T30").unwrap().predecessors, vec!["T10", "T20"]);
}

#[test]
fn unknown_predecessor_is_dropped_without_error() {
    let records = vec![raw("A", "2", "Z"), raw("B", "1", "A")];
    let graph = GraphBuilder::new(records).build().unwrap();
    assert!(graph.task("A").unwrap().predecessors.is_empty());
}

#[test]
fn unknown_predecessor_fails_in_strict_mode() {
    let records = vec![raw("A", "2", "Z")];
    let err = GraphBuilder::with_policy(records, BuildPolicy::strict())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        GraphBuildError::UnknownPredecessor {
            code: "A".to_string(),
            predecessor: "Z".to_string(),
        }
    );
}

#[test]
fn duplicate_code_is_fatal() {
    let records = vec![raw("A", "2", ""), raw("A", "3", "")];
    let err = GraphBuilder::new(records).build().unwrap_err();
    assert_eq!(
        err,
        GraphBuildError::DuplicateCode {
            code: "A".to_string()
        }
    );
}

#[test]
fn malformed_duration_defaults_to_zero() {
    let records = vec![raw("A", "abc", ""), raw("B", "", "")];
    let graph = GraphBuilder::new(records).build().unwrap();
    assert_eq!(graph.task("A").unwrap().duration_days, 0);
    assert_eq!(graph.task("B").unwrap().duration_days, 0);
}

#[test]
fn malformed_duration_fails_in_strict_mode() {
    let records = vec![raw("A", "abc", "")];
    let err = GraphBuilder::with_policy(records, BuildPolicy::strict())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        GraphBuildError::MalformedDuration {
            code: "A".to_string(),
            value: "abc".to_string(),
        }
    );
}

#[test]
fn missing_duration_is_zero_even_in_strict_mode() {
    let records = vec![raw("A", "", "")];
    let graph = GraphBuilder::with_policy(records, BuildPolicy::strict())
        .build()
        .unwrap();
    assert_eq!(graph.task("A").unwrap().duration_days, 0);
}

#[test]
fn negative_duration_fails_in_strict_mode() {
    let records = vec![raw("A", "-3", "")];
    let err = GraphBuilder::with_policy(records, BuildPolicy::strict())
        .build()
        .unwrap_err();
    assert!(matches!(err, GraphBuildError::MalformedDuration { .. }));
}

#[test]
fn codes_are_trimmed_before_lookup() {
    let records = vec![raw("  A  ", "2", ""), raw("B", "1", "A")];
    let graph = GraphBuilder::new(records).build().unwrap();
    assert!(graph.task("A").is_some());
    assert_eq!(graph.task("B").unwrap().predecessors, vec!["A"]);
}

#[test]
fn repeated_predecessor_references_are_deduped() {
    let records = vec![raw("A", "2", ""), raw("B", "1", "A,A")];
    let graph = GraphBuilder::new(records).build().unwrap();
    assert_eq!(graph.task("B").unwrap().predecessors, vec!["A"]);
    assert_eq!(graph.successors("A"), ["B".to_string()]);
}
