//! Work items, their dependencies and the employees they are assigned to

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dependency kind between two work items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyType {
    /// Finish-to-start
    FS,
    /// Start-to-start
    SS,
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyType::FS => write!(f, "FS"),
            DependencyType::SS => write!(f, "SS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDependency {
    #[serde(rename = "type")]
    pub kind: DependencyType,
    pub task_id: String,
}

/// A task assigned to one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub department: String,
    pub employee_id: String,
    pub employee_name: String,
    pub title: String,
    pub description: String,
    pub earliest_start_date: NaiveDate,
    pub deadline_date: NaiveDate,
    /// Length in working days
    pub duration_days: u32,
    pub scheduled_start_date: NaiveDate,
    pub dependencies: Vec<WorkDependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub role: String,
    pub hourly_cost: u32,
    pub weekly_capacity_hours: u32,
    pub absences: Vec<Absence>,
}
