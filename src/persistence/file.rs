use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PersistenceError, PersistenceResult};
use crate::schedule::Schedule;
use crate::task::{RawTask, Task};

/// One task per row of the computed-schedule export, in input order.
#[derive(Debug, Serialize, Deserialize)]
struct ScheduleCsvRecord {
    code: String,
    description: String,
    predecessors: String,
    duration_days: i64,
    early_start: i64,
    early_finish: i64,
    late_start: i64,
    late_finish: i64,
    slack: i64,
    is_critical: bool,
}

impl From<&Task> for ScheduleCsvRecord {
    fn from(task: &Task) -> Self {
        Self {
            code: task.code.clone(),
            description: task.description.clone(),
            predecessors: task.predecessors.join(","),
            duration_days: task.duration_days,
            early_start: task.early_start.unwrap_or(0),
            early_finish: task.early_finish.unwrap_or(0),
            late_start: task.late_start.unwrap_or(0),
            late_finish: task.late_finish.unwrap_or(0),
            slack: task.slack.unwrap_or(0),
            is_critical: task.is_critical.unwrap_or(false),
        }
    }
}

/// Reads raw task rows from a CSV with headers
/// `code,description,duration_days,predecessors`. Everything stays text;
/// validation belongs to the graph builder.
pub fn load_raw_tasks_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<RawTask>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for record in reader.deserialize::<RawTask>() {
        records.push(record?);
    }
    if records.is_empty() {
        return Err(PersistenceError::InvalidData(
            "CSV file contained no tasks".into(),
        ));
    }
    Ok(records)
}

pub fn save_schedule_to_csv<P: AsRef<Path>>(schedule: &Schedule, path: P) -> PersistenceResult<()> {
    super::validate_schedule(schedule)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for task in schedule.tasks() {
        writer.serialize(ScheduleCsvRecord::from(task))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_schedule_to_json<P: AsRef<Path>>(
    schedule: &Schedule,
    path: P,
) -> PersistenceResult<()> {
    super::validate_schedule(schedule)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, schedule)?;
    Ok(())
}

pub fn load_schedule_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Schedule> {
    let file = File::open(path)?;
    let schedule: Schedule = serde_json::from_reader(file)?;
    super::validate_schedule(&schedule)?;
    Ok(schedule)
}
