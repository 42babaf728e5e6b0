use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cpm_tool::graph::{BuildPolicy, GraphBuilder, Sequencer};
use cpm_tool::persistence::{
    load_raw_tasks_from_csv, load_schedule_from_json, save_schedule_to_csv, save_schedule_to_json,
};
use cpm_tool::report::{render_dot, render_glossary, render_schedule_table};
use cpm_tool::{Schedule, ScheduleMetadata};

#[derive(Parser)]
#[command(name = "cpm", version, about = "Critical path scheduling for dependency task graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a schedule from a task CSV and print it
    Compute {
        /// CSV with columns: code, description, duration_days, predecessors
        input: PathBuf,
        /// Write the computed schedule to this CSV file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write a Graphviz diagram of the schedule to this file
        #[arg(long)]
        dot: Option<PathBuf>,
        /// Write a JSON snapshot of the schedule to this file
        #[arg(long)]
        json: Option<PathBuf>,
        /// Fail on malformed durations and unknown predecessor references
        #[arg(long)]
        strict: bool,
        /// Project name shown above the schedule table
        #[arg(long)]
        project_name: Option<String>,
    },
    /// Validate and sequence a task CSV without printing a schedule
    Check {
        input: PathBuf,
        #[arg(long)]
        strict: bool,
    },
    /// Render a Graphviz diagram from a stored JSON snapshot
    Diagram {
        snapshot: PathBuf,
        /// Write the diagram here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compute {
            input,
            out,
            dot,
            json,
            strict,
            project_name,
        } => compute(input, out, dot, json, strict, project_name),
        Commands::Check { input, strict } => check(input, strict),
        Commands::Diagram { snapshot, out } => diagram(snapshot, out),
    }
}

fn compute(
    input: PathBuf,
    out: Option<PathBuf>,
    dot: Option<PathBuf>,
    json: Option<PathBuf>,
    strict: bool,
    project_name: Option<String>,
) -> Result<()> {
    let records = load_raw_tasks_from_csv(&input)
        .with_context(|| format!("failed to read tasks from {}", input.display()))?;

    let mut metadata = ScheduleMetadata::default();
    if let Some(name) = project_name {
        metadata.project_name = name;
    }

    let schedule =
        Schedule::compute_with_metadata(records, BuildPolicy { strict }, metadata)?;

    println!("Project: {}", schedule.metadata().project_name);
    print!("{}", render_schedule_table(&schedule));
    println!("Project duration: {} days", schedule.project_duration());
    println!();
    print!("{}", render_glossary());

    if let Some(path) = out {
        save_schedule_to_csv(&schedule, &path)
            .with_context(|| format!("failed to write schedule CSV to {}", path.display()))?;
        println!("Schedule written to {}", path.display());
    }
    if let Some(path) = dot {
        fs::write(&path, render_dot(&schedule))
            .with_context(|| format!("failed to write diagram to {}", path.display()))?;
        println!("Diagram written to {}", path.display());
    }
    if let Some(path) = json {
        save_schedule_to_json(&schedule, &path)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}

fn check(input: PathBuf, strict: bool) -> Result<()> {
    let records = load_raw_tasks_from_csv(&input)
        .with_context(|| format!("failed to read tasks from {}", input.display()))?;
    let graph = GraphBuilder::with_policy(records, BuildPolicy { strict }).build()?;
    let order = Sequencer::new(&graph).sequence()?;
    println!("OK: {} tasks, no cycles", order.len());
    Ok(())
}

fn diagram(snapshot: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let schedule = load_schedule_from_json(&snapshot)
        .with_context(|| format!("failed to load snapshot from {}", snapshot.display()))?;
    let dot = render_dot(&schedule);
    match out {
        Some(path) => {
            fs::write(&path, dot)
                .with_context(|| format!("failed to write diagram to {}", path.display()))?;
            println!("Diagram written to {}", path.display());
        }
        None => print!("{dot}"),
    }
    Ok(())
}
