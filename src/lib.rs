pub mod calculations;
pub mod graph;
pub mod metadata;
pub mod persistence;
pub mod report;
pub mod schedule;
pub mod task;
pub(crate) mod task_validation;

pub use graph::{BuildPolicy, CycleDetected, GraphBuildError, GraphBuilder, Sequencer, TaskGraph};
pub use metadata::ScheduleMetadata;
pub use persistence::{
    PersistenceError, load_raw_tasks_from_csv, load_schedule_from_json, save_schedule_to_csv,
    save_schedule_to_json, validate_schedule, validate_tasks,
};
pub use report::{render_dot, render_glossary, render_schedule_table};
pub use schedule::{Schedule, ScheduleError};
pub use task::{RawTask, Task};
