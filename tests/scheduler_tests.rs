use crewplan::config::SchedulerConfig;
use crewplan::error::SchedulerError;
use crewplan::models::{EmployeeId, TaskId, TaskStatus};
use crewplan::scheduler::Scheduler;

const DEMO_REPORT: &str = "Task Report:\n\n\
Title: Implement login feature\n\
Description: Write code to allow users to log in\n\
Deadline: 2022-01-10\n\
Status: Completed\n\n\
Title: Design homepage layout\n\
Description: Create a visually appealing design for the homepage\n\
Deadline: 2022-01-15\n\
Status: Pending\n\n";

#[test]
fn test_task_ids_are_sequential() {
    let mut s = Scheduler::new();
    let ids: Vec<TaskId> = (0..5).map(|i| s.create_task(format!("Task {i}"), "", "")).collect();
    assert_eq!(ids, vec![TaskId(1), TaskId(2), TaskId(3), TaskId(4), TaskId(5)]);
    for (pos, t) in s.tasks().iter().enumerate() {
        assert_eq!(t.id, TaskId(pos as u64 + 1));
        assert_eq!(t.status(), TaskStatus::Pending);
    }
}

#[test]
fn test_demo_scenario() {
    let mut s = Scheduler::new();
    let john = s.create_employee("John Doe", "Developer");
    let jane = s.create_employee("Jane Smith", "Designer");
    let login = s.create_task("Implement login feature", "Write code to allow users to log in", "2022-01-10");
    let homepage = s.create_task(
        "Design homepage layout",
        "Create a visually appealing design for the homepage",
        "2022-01-15",
    );
    s.assign_task_to_employee(login, john).unwrap();
    s.assign_task_to_employee(homepage, jane).unwrap();

    s.complete_task(TaskId(1)).unwrap();

    assert_eq!(s.generate_task_report(), DEMO_REPORT);
    assert!(s.employee(john).unwrap().get_tasks().is_empty());
    assert_eq!(s.employee(jane).unwrap().get_tasks(), &[homepage]);
    assert_eq!(s.employee_tasks(jane)[0].title, "Design homepage layout");
}

#[test]
fn test_completing_unknown_task_changes_nothing() {
    let mut s = Scheduler::new();
    let e = s.create_employee("John Doe", "Developer");
    let t = s.create_task("Only task", "", "");
    s.assign_task_to_employee(t, e).unwrap();
    let before = s.generate_task_report();

    assert_eq!(s.complete_task(TaskId(99)), Ok(()));

    assert_eq!(s.generate_task_report(), before);
    assert_eq!(s.employee(e).unwrap().get_tasks(), &[t]);
    assert!(!s.task(t).unwrap().completed);
}

#[test]
fn test_double_assignment_leaves_stale_reference() {
    let mut s = Scheduler::new();
    let e = s.create_employee("John Doe", "Developer");
    let t = s.create_task("Twice", "", "");
    s.assign_task_to_employee(t, e).unwrap();
    s.assign_task_to_employee(t, e).unwrap();

    s.complete_task(t).unwrap();

    let held = s.employee_tasks(e);
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].id, t);
    assert!(held[0].completed);
}

#[test]
fn test_repeated_completion_is_harmless() {
    let mut s = Scheduler::new();
    let t = s.create_task("Done", "", "");
    s.complete_task(t).unwrap();
    let once = s.generate_task_report();
    s.complete_task(t).unwrap();
    assert_eq!(s.generate_task_report(), once);
}

#[test]
fn test_task_can_stay_unassigned() {
    let mut s = Scheduler::new();
    s.create_employee("Jane Smith", "Designer");
    let t = s.create_task("Nobody's", "", "");
    s.complete_task(t).unwrap();
    assert!(s.task(t).unwrap().completed);
    assert!(s.generate_task_report().contains("Title: Nobody's\n"));
}

#[test]
fn test_strict_mode_reports_unknown_ids() {
    let mut s = Scheduler::with_config(SchedulerConfig::strict());
    let e = s.create_employee("John Doe", "Developer");
    let t = s.create_task("Real", "", "");

    assert_eq!(s.complete_task(TaskId(5)), Err(SchedulerError::TaskNotFound(TaskId(5))));
    assert_eq!(
        s.assign_task_to_employee(TaskId(5), e),
        Err(SchedulerError::TaskNotFound(TaskId(5)))
    );
    assert_eq!(
        s.assign_task_to_employee(t, EmployeeId(4)),
        Err(SchedulerError::EmployeeNotFound(EmployeeId(4)))
    );
    assert!(s.employee(e).unwrap().get_tasks().is_empty());

    // Known ids behave exactly as in lenient mode.
    s.assign_task_to_employee(t, e).unwrap();
    s.assign_task_to_employee(t, e).unwrap();
    s.complete_task(t).unwrap();
    assert_eq!(s.employee(e).unwrap().get_tasks(), &[t]);
}
