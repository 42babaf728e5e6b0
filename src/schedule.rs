use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::classifier;
use crate::calculations::{BackwardPass, ForwardPass};
use crate::graph::{BuildPolicy, CycleDetected, GraphBuildError, GraphBuilder, Sequencer};
use crate::metadata::ScheduleMetadata;
use crate::task::{RawTask, Task};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("graph construction failed: {0}")]
    Build(#[from] GraphBuildError),
    #[error("sequencing failed: {0}")]
    Cycle(#[from] CycleDetected),
}

/// A fully computed schedule. Tasks keep input order and carry every
/// computed field; nothing mutates after construction, so this is the
/// snapshot handed to reporting and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    metadata: ScheduleMetadata,
    tasks: Vec<Task>,
    project_duration: i64,
}

impl Schedule {
    pub fn compute(records: Vec<RawTask>, policy: BuildPolicy) -> Result<Self, ScheduleError> {
        Self::compute_with_metadata(records, policy, ScheduleMetadata::default())
    }

    /// Runs the whole pipeline: build, sequence, forward pass, backward
    /// pass, classify. Each stage consumes the previous stage's complete
    /// output; a fatal error aborts before any later stage runs.
    pub fn compute_with_metadata(
        records: Vec<RawTask>,
        policy: BuildPolicy,
        metadata: ScheduleMetadata,
    ) -> Result<Self, ScheduleError> {
        let mut graph = GraphBuilder::with_policy(records, policy).build()?;
        let order = Sequencer::new(&graph).sequence()?;

        let forward = ForwardPass::new(&graph).execute(&order);
        graph.apply_early(&forward.early);

        let late = BackwardPass::new(&graph).execute(&order, forward.project_duration);
        graph.apply_late(&late);

        let mut tasks = graph.into_tasks();
        classifier::classify(&mut tasks);

        Ok(Self {
            metadata,
            tasks,
            project_duration: forward.project_duration,
        })
    }

    /// Tasks in input order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, code: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.code == code)
    }

    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Total project duration in days: the latest early finish.
    pub fn project_duration(&self) -> i64 {
        self.project_duration
    }

    pub fn critical_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_critical == Some(true))
    }
}
