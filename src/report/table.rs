use crate::schedule::Schedule;
use crate::task::Task;

const HEADERS: [&str; 10] = [
    "code",
    "description",
    "predecessors",
    "duration_days",
    "early_start",
    "early_finish",
    "late_start",
    "late_finish",
    "slack",
    "critical",
];

/// Renders the schedule as an ASCII box table, tasks in input order.
pub fn render_schedule_table(schedule: &Schedule) -> String {
    let rows: Vec<[String; 10]> = schedule.tasks().iter().map(row_values).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|name| name.len()).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            if cell.len() > widths[idx] {
                widths[idx] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for width in &widths {
        sep.push_str(&"-".repeat(*width + 2));
        sep.push('+');
    }

    let header: Vec<String> = HEADERS.iter().map(|name| name.to_string()).collect();

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &header, &widths);
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

/// The abbreviation key printed after the table.
pub fn render_glossary() -> String {
    let mut out = String::new();
    out.push_str("ES: earliest start\n");
    out.push_str("EF: earliest finish\n");
    out.push_str("LS: latest start\n");
    out.push_str("LF: latest finish\n");
    out.push_str("slack: schedule margin (LS - ES)\n");
    out
}

fn row_values(task: &Task) -> [String; 10] {
    [
        task.code.clone(),
        task.description.clone(),
        task.predecessors.join(","),
        task.duration_days.to_string(),
        format_value(task.early_start),
        format_value(task.early_finish),
        format_value(task.late_start),
        format_value(task.late_finish),
        format_value(task.slack),
        match task.is_critical {
            Some(true) => "yes".to_string(),
            Some(false) => "no".to_string(),
            None => String::new(),
        },
    ]
}

fn format_value(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (idx, cell) in cells.iter().enumerate() {
        out.push(' ');
        out.push_str(cell);
        let pad = widths[idx].saturating_sub(cell.len());
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
}
