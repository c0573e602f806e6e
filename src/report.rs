use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use crate::models::{Task, TaskStatus};

/// Output format for a task report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain text, one labelled block per task
    #[default]
    Text,
    /// Bordered table
    Table,
    /// JSON array of tasks
    Json,
}

/// Renders the plain-text report.
///
/// The layout is fixed: a `Task Report:` header and a blank line, then for
/// each task the `Title`, `Description`, `Deadline` and `Status` lines
/// followed by a blank line.
pub fn render_text(tasks: &[Task]) -> String {
    let mut report = String::from("Task Report:\n\n");
    for t in tasks {
        report.push_str(&format!(
            "Title: {}\nDescription: {}\nDeadline: {}\nStatus: {}\n\n",
            t.title,
            t.description,
            t.deadline,
            t.status().label()
        ));
    }
    report
}

/// Renders the report as a table.
pub fn render_table(tasks: &[Task]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Deadline").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for t in tasks {
        let status = t.status();
        let status_color = match status {
            TaskStatus::Completed => Color::Green,
            TaskStatus::Pending => Color::Yellow,
        };
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.title),
            Cell::new(&t.description),
            Cell::new(&t.deadline),
            Cell::new(status.label()).fg(status_color),
        ]);
    }

    table.to_string()
}

/// Serializes the tasks as a pretty-printed JSON array.
pub fn render_json(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks)
}

pub fn render(tasks: &[Task], format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(tasks)),
        ReportFormat::Table => Ok(render_table(tasks)),
        ReportFormat::Json => render_json(tasks),
    }
}
