//! Core of the crewplan task-assignment tracker.
//!
//! A [`scheduler::Scheduler`] owns every employee and task, links them and
//! renders a plain-text report. Employees hold task ids only.

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod plan;
pub mod report;
pub mod scheduler;
