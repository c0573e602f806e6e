use std::path::Path;
use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::info;
use crate::config::SchedulerConfig;
use crate::models::EmployeeId;
use crate::plan::{load_plan, Plan};
use crate::report::{render, ReportFormat};
use crate::scheduler::Scheduler;

/// Builds a scheduler from `config` and replays `plan` into it.
pub fn build_scheduler(plan: &Plan, config: SchedulerConfig) -> Result<Scheduler> {
    let mut scheduler = Scheduler::with_config(config);
    let outcome = plan.apply(&mut scheduler).context("Failed to apply plan")?;
    info!(
        employees = outcome.employees,
        tasks = outcome.tasks,
        assignments = outcome.assignments,
        completions = outcome.completions,
        skipped = outcome.skipped,
        "plan applied"
    );
    Ok(scheduler)
}

/// Renders the task report of a plan in the requested format.
pub fn report_for(plan: &Plan, config: SchedulerConfig, format: ReportFormat) -> Result<String> {
    let scheduler = build_scheduler(plan, config)?;
    render(scheduler.tasks(), format).context("Failed to render report")
}

/// Runs the built-in walkthrough and prints its report.
pub fn cmd_demo(config: SchedulerConfig, format: ReportFormat) -> Result<()> {
    print_report(&report_for(&Plan::demo(), config, format)?);
    Ok(())
}

/// Loads a plan file, applies it and prints the report.
pub fn cmd_run(path: &Path, config: SchedulerConfig, format: ReportFormat) -> Result<()> {
    let plan = load_plan(path).with_context(|| format!("Cannot load plan '{}'", path.display()))?;
    print_report(&report_for(&plan, config, format)?);
    Ok(())
}

/// Prints each employee's current assignments.
pub fn cmd_roster(path: &Path, config: SchedulerConfig) -> Result<()> {
    let plan = load_plan(path).with_context(|| format!("Cannot load plan '{}'", path.display()))?;
    let scheduler = build_scheduler(&plan, config)?;
    if scheduler.employees().is_empty() {
        println!("No employees found.");
        return Ok(());
    }
    println!("{}", roster_table(&scheduler));
    Ok(())
}

/// Renders one row per employee: name, role, held tasks and open count.
pub fn roster_table(scheduler: &Scheduler) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Role").add_attribute(Attribute::Bold),
            Cell::new("Assigned").add_attribute(Attribute::Bold),
            Cell::new("Open").add_attribute(Attribute::Bold),
        ]);

    for (idx, e) in scheduler.employees().iter().enumerate() {
        let held = scheduler.employee_tasks(EmployeeId(idx));
        let assigned = if held.is_empty() {
            "-".to_string()
        } else {
            held.iter()
                .map(|t| format!("{} {}", t.id, t.title))
                .collect::<Vec<_>>()
                .join("\n")
        };
        // Stale duplicates of completed tasks are listed but not counted.
        let open = held.iter().filter(|t| !t.completed).count();

        table.add_row(vec![
            Cell::new(&e.name),
            Cell::new(&e.role),
            Cell::new(assigned),
            Cell::new(open).fg(if open > 0 { Color::Yellow } else { Color::Green }),
        ]);
    }
    table
}

fn print_report(report: &str) {
    println!("{report}");
}
