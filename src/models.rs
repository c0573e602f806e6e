use std::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a task, issued sequentially by the scheduler starting at 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to an employee registered with a scheduler (its registration index).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EmployeeId(pub usize);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Completion state of a task. `Completed` is terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// Label used in the task report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// Represents a single unit of work.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: TaskId,
    /// Short title of the task.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Deadline token, echoed verbatim and never parsed.
    pub deadline: String,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>, deadline: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            description: description.into(),
            deadline: deadline.into(),
            completed: false,
        }
    }

    /// Marks the task as completed. Calling it again has no further effect.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed { TaskStatus::Completed } else { TaskStatus::Pending }
    }
}

/// An actor holding the ids of the tasks currently assigned to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub role: String,
    tasks: Vec<TaskId>,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Employee {
            name: name.into(),
            role: role.into(),
            tasks: Vec::new(),
        }
    }

    /// Appends a task reference. Assigning the same task twice keeps both entries.
    pub fn assign_task(&mut self, task: TaskId) {
        self.tasks.push(task);
    }

    /// Removes the first entry matching `task`.
    ///
    /// Returns `false` when the employee holds no such entry.
    pub fn complete_task(&mut self, task: TaskId) -> bool {
        match self.tasks.iter().position(|t| *t == task) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Assigned task ids in assignment order.
    pub fn get_tasks(&self) -> &[TaskId] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_complete_is_idempotent() {
        let mut task = Task::new(TaskId(1), "Write docs", "", "2022-01-10");
        assert_eq!(task.status(), TaskStatus::Pending);
        task.mark_complete();
        let once = task.clone();
        task.mark_complete();
        task.mark_complete();
        assert_eq!(task, once);
        assert_eq!(task.status(), TaskStatus::Completed);
    }

    #[test]
    fn empty_fields_are_accepted() {
        let task = Task::new(TaskId(7), "", "", "not a date");
        assert_eq!(task.title, "");
        assert_eq!(task.deadline, "not a date");
    }

    #[test]
    fn complete_task_removes_first_match_only() {
        let mut e = Employee::new("John Doe", "Developer");
        e.assign_task(TaskId(1));
        e.assign_task(TaskId(2));
        e.assign_task(TaskId(1));

        assert!(e.complete_task(TaskId(1)));
        assert_eq!(e.get_tasks(), &[TaskId(2), TaskId(1)]);
    }

    #[test]
    fn complete_unknown_task_is_noop() {
        let mut e = Employee::new("Jane Smith", "Designer");
        e.assign_task(TaskId(2));
        assert!(!e.complete_task(TaskId(9)));
        assert_eq!(e.get_tasks(), &[TaskId(2)]);
    }
}
