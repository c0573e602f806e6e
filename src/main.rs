//! # Crewplan
//!
//! A small in-memory tracker for who is working on what. Employees and tasks
//! live for the duration of one run: the CLI replays a built-in walkthrough or
//! a JSON plan file and prints the resulting task report.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in walkthrough
//! crewplan demo
//!
//! # Replay a plan file, as a table
//! crewplan run plan.json --format table
//!
//! # Who holds what after the plan ran
//! crewplan roster plan.json
//! ```
//!
//! ## Plan files
//!
//! ```json
//! {
//!   "employees": [{ "name": "John Doe", "role": "Developer" }],
//!   "tasks": [{ "title": "Implement login feature", "deadline": "2022-01-10" }],
//!   "assignments": [{ "task": 1, "employee": "John Doe" }],
//!   "complete": [1]
//! }
//! ```
//!
//! ## Strict mode
//!
//! Unknown task or employee ids are ignored by default. Pass `--strict` or set
//! `CREWPLAN_STRICT=1` to turn them into errors. Set `CREWPLAN_DEBUG` to log
//! every scheduler mutation to stderr.

use std::io;
use std::path::PathBuf;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use crewplan::commands::{cmd_demo, cmd_roster, cmd_run};
use crewplan::config::SchedulerConfig;
use crewplan::report::ReportFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crewplan")]
#[command(about = "In-memory employee task tracker", long_about = None)]
struct Cli {
    /// Treat unknown task or employee ids as errors
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in walkthrough and print its report
    Demo {
        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Apply a plan file and print the task report
    Run {
        /// Path to a JSON plan
        plan: PathBuf,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Apply a plan file and list each employee's assignments
    Roster {
        /// Path to a JSON plan
        plan: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    if std::env::var("CREWPLAN_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("crewplan=debug"))
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let mut config = SchedulerConfig::from_env();
    if cli.strict {
        config.strict = true;
    }

    match cli.command {
        Some(Commands::Demo { format }) => cmd_demo(config, format),
        Some(Commands::Run { plan, format }) => cmd_run(&plan, config, format),
        Some(Commands::Roster { plan }) => cmd_roster(&plan, config),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "crewplan", &mut io::stdout());
            Ok(())
        }
        None => cmd_demo(config, ReportFormat::Text),
    }
}
