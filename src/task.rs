use serde::{Deserialize, Serialize};

/// One row of raw input, exactly as read. Duration and predecessors stay
/// text until the graph builder validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration_days: String,
    #[serde(default)]
    pub predecessors: String,
}

impl RawTask {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        duration_days: impl Into<String>,
        predecessors: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            duration_days: duration_days.into(),
            predecessors: predecessors.into(),
        }
    }
}

/// A validated task. The computed fields are `None` until the corresponding
/// pipeline stage has run over the whole graph: early dates after the
/// forward pass, late dates after the backward pass, slack and the critical
/// flag after classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub code: String,
    pub description: String,
    pub duration_days: i64,
    pub predecessors: Vec<String>,
    pub early_start: Option<i64>,
    pub early_finish: Option<i64>,
    pub late_start: Option<i64>,
    pub late_finish: Option<i64>,
    pub slack: Option<i64>,
    pub is_critical: Option<bool>,
}

impl Task {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        duration_days: i64,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            duration_days,
            predecessors: Vec::new(),
            early_start: None,
            early_finish: None,
            late_start: None,
            late_finish: None,
            slack: None,
            is_critical: None,
        }
    }
}
