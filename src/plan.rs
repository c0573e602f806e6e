use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::error::PlanError;
use crate::models::{EmployeeId, TaskId};
use crate::scheduler::Scheduler;

/// A scripted scheduler session, read from a JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Plan {
    #[serde(default)]
    pub employees: Vec<EmployeeSpec>,
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Task ids to complete, in order.
    #[serde(default)]
    pub complete: Vec<TaskId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeSpec {
    pub name: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskSpec {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deadline: String,
}

/// Links a task id to an employee, referenced by name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Assignment {
    pub task: TaskId,
    pub employee: String,
}

/// What a plan did to the scheduler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOutcome {
    pub employees: usize,
    pub tasks: usize,
    pub assignments: usize,
    pub completions: usize,
    /// Assignments dropped because the employee or task was unknown.
    pub skipped: usize,
}

/// Loads a plan from a JSON file.
pub fn load_plan(path: &Path) -> Result<Plan, PlanError> {
    let s = fs::read_to_string(path)?;
    let plan = serde_json::from_str(&s)?;
    debug!(path = %path.display(), "plan loaded");
    Ok(plan)
}

impl Plan {
    /// The two-employee walkthrough: John builds login, Jane designs the
    /// homepage, and the login task is completed.
    pub fn demo() -> Plan {
        Plan {
            employees: vec![
                EmployeeSpec { name: "John Doe".into(), role: "Developer".into() },
                EmployeeSpec { name: "Jane Smith".into(), role: "Designer".into() },
            ],
            tasks: vec![
                TaskSpec {
                    title: "Implement login feature".into(),
                    description: "Write code to allow users to log in".into(),
                    deadline: "2022-01-10".into(),
                },
                TaskSpec {
                    title: "Design homepage layout".into(),
                    description: "Create a visually appealing design for the homepage".into(),
                    deadline: "2022-01-15".into(),
                },
            ],
            assignments: vec![
                Assignment { task: TaskId(1), employee: "John Doe".into() },
                Assignment { task: TaskId(2), employee: "Jane Smith".into() },
            ],
            complete: vec![TaskId(1)],
        }
    }

    /// Replays the plan: employees, then tasks, then assignments, then
    /// completions.
    ///
    /// Task ids are handed to the scheduler unchanged, so its own strictness
    /// decides what happens to unknown ids.
    pub fn apply(&self, scheduler: &mut Scheduler) -> Result<PlanOutcome, PlanError> {
        let mut outcome = PlanOutcome::default();

        for e in &self.employees {
            scheduler.create_employee(e.name.as_str(), e.role.as_str());
            outcome.employees += 1;
        }
        for t in &self.tasks {
            scheduler.create_task(t.title.as_str(), t.description.as_str(), t.deadline.as_str());
            outcome.tasks += 1;
        }

        for a in &self.assignments {
            let Some(idx) = scheduler.employees().iter().position(|e| e.name == a.employee) else {
                if scheduler.config().strict {
                    return Err(PlanError::UnknownEmployee { task: a.task, name: a.employee.clone() });
                }
                warn!(task = %a.task, employee = %a.employee, "skipping assignment to unknown employee");
                outcome.skipped += 1;
                continue;
            };
            if scheduler.task(a.task).is_none() && !scheduler.config().strict {
                warn!(task = %a.task, employee = %a.employee, "skipping assignment of unknown task");
                outcome.skipped += 1;
                continue;
            }
            scheduler.assign_task_to_employee(a.task, EmployeeId(idx))?;
            outcome.assignments += 1;
        }

        for id in &self.complete {
            scheduler.complete_task(*id)?;
            outcome.completions += 1;
        }

        Ok(outcome)
    }
}
