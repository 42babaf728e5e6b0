use std::io;

use thiserror::Error;

use crate::schedule::Schedule;
use crate::task::Task;
use crate::task_validation;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub fn validate_tasks(tasks: &[Task]) -> PersistenceResult<()> {
    task_validation::validate_task_collection(tasks)
        .map_err(|err| PersistenceError::InvalidData(err.to_string()))
}

/// Snapshot-level consistency: per-task invariants plus the project
/// duration matching the latest early finish.
pub fn validate_schedule(schedule: &Schedule) -> PersistenceResult<()> {
    validate_tasks(schedule.tasks())?;
    let latest_finish = schedule
        .tasks()
        .iter()
        .filter_map(|task| task.early_finish)
        .max()
        .unwrap_or(0);
    if schedule.project_duration() != latest_finish {
        return Err(PersistenceError::InvalidData(format!(
            "project duration {} does not match latest early finish {}",
            schedule.project_duration(),
            latest_finish
        )));
    }
    Ok(())
}

pub mod file;

pub use file::{
    load_raw_tasks_from_csv, load_schedule_from_json, save_schedule_to_csv, save_schedule_to_json,
};
