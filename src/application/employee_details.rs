//! Employee details use case

use crate::application::generate_demo::DemoData;
use crate::domain::calendar::WorkCalendar;
use crate::domain::work_item::{EmployeeProfile, WorkItem};
use crate::domain::workload::{overloaded_weeks, visible_hours, WeekLoad};
use crate::error::{Result, WorklaneError};
use chrono::NaiveDate;
use serde::Serialize;

/// Profile, tasks and workload of one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub profile: EmployeeProfile,
    pub tasks: Vec<WorkItem>,
    /// Hours booked inside the visible window
    pub visible_hours: u32,
    pub overloaded_weeks: Vec<WeekLoad>,
}

/// Collect the details shown for `employee_id` over the given window.
pub fn employee_details(
    calendar: &WorkCalendar,
    data: &DemoData,
    employee_id: &str,
    window_start: NaiveDate,
    window_days: usize,
) -> Result<EmployeeDetails> {
    let profile = data
        .employee(employee_id)
        .ok_or_else(|| WorklaneError::EmployeeNotFound(employee_id.to_string()))?;

    let tasks = data.tasks_of(employee_id);
    let visible_hours = visible_hours(calendar, &tasks, window_start, window_days);
    let overloaded_weeks = overloaded_weeks(calendar, &tasks, profile.weekly_capacity_hours);

    Ok(EmployeeDetails {
        profile: profile.clone(),
        tasks: tasks.into_iter().cloned().collect(),
        visible_hours,
        overloaded_weeks,
    })
}
