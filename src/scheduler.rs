use tracing::{debug, warn};
use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::models::{Employee, EmployeeId, Task, TaskId};
use crate::report;

/// Owner of every employee and task, and the only place they are mutated.
///
/// Employees only hold task ids; the task records live here. Unknown ids are
/// ignored unless the scheduler was built with a strict [`SchedulerConfig`].
#[derive(Debug, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
    employees: Vec<Employee>,
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Scheduler { config, ..Self::default() }
    }

    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    /// Registers a new employee and returns its handle.
    pub fn create_employee(&mut self, name: impl Into<String>, role: impl Into<String>) -> EmployeeId {
        let id = EmployeeId(self.employees.len());
        let employee = Employee::new(name, role);
        debug!(employee = %id, name = %employee.name, role = %employee.role, "employee created");
        self.employees.push(employee);
        id
    }

    /// Creates a task with the next sequential id (task count + 1).
    pub fn create_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<String>,
    ) -> TaskId {
        // Tasks are never removed, so the count stays a valid id source.
        let id = TaskId(self.tasks.len() as u64 + 1);
        let task = Task::new(id, title, description, deadline);
        debug!(task = %id, title = %task.title, "task created");
        self.tasks.push(task);
        id
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(id.0)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Resolves an employee's assignments against the task store.
    ///
    /// Duplicate entries show up once per entry; ids this scheduler never
    /// issued are skipped.
    pub fn employee_tasks(&self, id: EmployeeId) -> Vec<&Task> {
        match self.employee(id) {
            Some(e) => e.get_tasks().iter().filter_map(|t| self.task(*t)).collect(),
            None => Vec::new(),
        }
    }

    /// Appends `task` to the employee's list. Duplicates are not checked.
    ///
    /// Only tasks held by this scheduler can be assigned, so every id in an
    /// employee's list resolves to a stored task.
    pub fn assign_task_to_employee(&mut self, task: TaskId, employee: EmployeeId) -> Result<(), SchedulerError> {
        if self.task(task).is_none() {
            if self.config.strict {
                warn!(task = %task, "assignment rejected: unknown task");
                return Err(SchedulerError::TaskNotFound(task));
            }
            debug!(task = %task, "assignment ignored: unknown task");
            return Ok(());
        }
        let strict = self.config.strict;
        match self.employees.get_mut(employee.0) {
            Some(e) => {
                e.assign_task(task);
                debug!(task = %task, employee = %employee, "task assigned");
                Ok(())
            }
            None if strict => {
                warn!(employee = %employee, "assignment rejected: unknown employee");
                Err(SchedulerError::EmployeeNotFound(employee))
            }
            None => {
                debug!(employee = %employee, "assignment ignored: unknown employee");
                Ok(())
            }
        }
    }

    /// Marks the task complete and drops the first matching entry from every
    /// employee's list.
    pub fn complete_task(&mut self, id: TaskId) -> Result<(), SchedulerError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            if self.config.strict {
                warn!(task = %id, "completion rejected: unknown task");
                return Err(SchedulerError::TaskNotFound(id));
            }
            debug!(task = %id, "completion ignored: unknown task");
            return Ok(());
        };
        task.mark_complete();

        let released = self
            .employees
            .iter_mut()
            .map(|e| e.complete_task(id))
            .filter(|removed| *removed)
            .count();
        debug!(task = %id, released, "task completed");
        Ok(())
    }

    /// Renders the plain-text task report in creation order.
    pub fn generate_task_report(&self) -> String {
        report::render_text(&self.tasks)
    }
}
