use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TaskGraph;
use crate::task::{RawTask, Task};

/// How the builder treats dirty input. The default is lenient: malformed
/// durations become 0 and unknown predecessor references are dropped, both
/// with a warning. Strict mode turns both into build errors. Duplicate
/// codes are fatal either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPolicy {
    pub strict: bool,
}

impl BuildPolicy {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphBuildError {
    #[error("duplicate task code '{code}'")]
    DuplicateCode { code: String },
    #[error("task '{code}' has malformed duration '{value}'")]
    MalformedDuration { code: String, value: String },
    #[error("task '{code}' references unknown predecessor '{predecessor}'")]
    UnknownPredecessor { code: String, predecessor: String },
}

pub struct GraphBuilder {
    records: Vec<RawTask>,
    policy: BuildPolicy,
}

impl GraphBuilder {
    pub fn new(records: Vec<RawTask>) -> Self {
        Self::with_policy(records, BuildPolicy::default())
    }

    pub fn with_policy(records: Vec<RawTask>, policy: BuildPolicy) -> Self {
        Self { records, policy }
    }

    pub fn build(self) -> Result<TaskGraph, GraphBuildError> {
        let Self { records, policy } = self;

        let mut tasks: Vec<Task> = Vec::with_capacity(records.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut notations: Vec<Vec<String>> = Vec::with_capacity(records.len());

        for record in records {
            let code = record.code.trim().to_string();
            if index.contains_key(&code) {
                return Err(GraphBuildError::DuplicateCode { code });
            }
            let duration = parse_duration(&code, &record.duration_days, policy)?;
            notations.push(parse_predecessor_notation(&record.predecessors));
            index.insert(code.clone(), tasks.len());
            tasks.push(Task::new(code, record.description, duration));
        }

        // References can only be resolved once every code is known.
        for (idx, notation) in notations.into_iter().enumerate() {
            let mut seen: HashSet<String> = HashSet::with_capacity(notation.len());
            let mut resolved: Vec<String> = Vec::with_capacity(notation.len());
            for predecessor in notation {
                if !index.contains_key(&predecessor) {
                    if policy.strict {
                        return Err(GraphBuildError::UnknownPredecessor {
                            code: tasks[idx].code.clone(),
                            predecessor,
                        });
                    }
                    log::warn!(
                        "task '{}' references unknown predecessor '{}'; reference dropped",
                        tasks[idx].code,
                        predecessor
                    );
                    continue;
                }
                if seen.insert(predecessor.clone()) {
                    resolved.push(predecessor);
                }
            }
            tasks[idx].predecessors = resolved;
        }

        let mut successors: HashMap<String, Vec<String>> = HashMap::with_capacity(tasks.len());
        for task in &tasks {
            successors.entry(task.code.clone()).or_default();
        }
        for task in &tasks {
            for predecessor in &task.predecessors {
                successors
                    .entry(predecessor.clone())
                    .or_default()
                    .push(task.code.clone());
            }
        }

        Ok(TaskGraph::new(tasks, index, successors))
    }
}

fn parse_duration(code: &str, raw: &str, policy: BuildPolicy) -> Result<i64, GraphBuildError> {
    let trimmed = raw.trim();
    // A missing duration is a defined default, not dirty input.
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i64>() {
        Ok(days) if days >= 0 => Ok(days),
        _ if policy.strict => Err(GraphBuildError::MalformedDuration {
            code: code.to_string(),
            value: trimmed.to_string(),
        }),
        _ => {
            log::warn!("task '{code}' has malformed duration '{trimmed}'; defaulting to 0");
            Ok(0)
        }
    }
}

/// Split raw predecessor text into codes: comma-separated if any comma is
/// present, else space-separated if any space is present, else one code per
/// character ("DF" means D and F). The last tier is why a single
/// multi-character code cannot be written without a delimiter.
pub(crate) fn parse_predecessor_notation(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if text.contains(',') {
        return text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
    }
    if text.contains(' ') {
        return text
            .split(' ')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
    }
    text.chars().map(String::from).collect()
}
