use crate::task::Task;

/// Slack is the gap between late and early start; zero slack puts the task
/// on a longest path through the graph. Reads only each task's own dates,
/// so no visiting order is required.
pub fn classify(tasks: &mut [Task]) {
    for task in tasks.iter_mut() {
        if let (Some(early_start), Some(late_start)) = (task.early_start, task.late_start) {
            let slack = late_start - early_start;
            task.slack = Some(slack);
            task.is_critical = Some(slack == 0);
        }
    }
}
