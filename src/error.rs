use thiserror::Error;
use crate::models::{EmployeeId, TaskId};

/// Failures reported by the scheduler in strict mode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),

    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),
}

/// Failures while loading or replaying a plan file.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to read plan: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid plan JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Plan assigns task {task} to unknown employee '{name}'")]
    UnknownEmployee { task: TaskId, name: String },

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}
