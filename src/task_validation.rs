use std::collections::HashSet;

use thiserror::Error;

use crate::task::Task;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TaskValidationError {
    message: String,
}

impl TaskValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Structural consistency of a single computed task. Fields left `None`
/// are not checked; populated fields must agree with each other.
pub fn validate_task(task: &Task) -> Result<(), TaskValidationError> {
    if task.duration_days < 0 {
        return Err(TaskValidationError::new(format!(
            "task '{}' has negative duration {}",
            task.code, task.duration_days
        )));
    }

    if let (Some(early_start), Some(early_finish)) = (task.early_start, task.early_finish) {
        if early_finish != early_start + task.duration_days {
            return Err(TaskValidationError::new(format!(
                "task '{}' early dates are inconsistent with its duration",
                task.code
            )));
        }
    }

    if let (Some(late_start), Some(late_finish)) = (task.late_start, task.late_finish) {
        if late_start != late_finish - task.duration_days {
            return Err(TaskValidationError::new(format!(
                "task '{}' late dates are inconsistent with its duration",
                task.code
            )));
        }
    }

    if let (Some(early_start), Some(late_start), Some(slack)) =
        (task.early_start, task.late_start, task.slack)
    {
        if slack != late_start - early_start {
            return Err(TaskValidationError::new(format!(
                "task '{}' slack does not match its start dates",
                task.code
            )));
        }
    }

    if let Some(slack) = task.slack {
        if slack < 0 {
            return Err(TaskValidationError::new(format!(
                "task '{}' has negative slack {}",
                task.code, slack
            )));
        }
        if let Some(is_critical) = task.is_critical {
            if is_critical != (slack == 0) {
                return Err(TaskValidationError::new(format!(
                    "task '{}' critical flag does not match its slack",
                    task.code
                )));
            }
        }
    }

    Ok(())
}

pub fn validate_task_collection(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.code.as_str()) {
            return Err(TaskValidationError::new(format!(
                "duplicate task code '{}'",
                task.code
            )));
        }
        validate_task(task)?;
    }
    Ok(())
}
