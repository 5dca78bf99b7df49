//! Timeline view use case
//!
//! Turns a task list plus the current window, filter and expanded week into
//! everything a renderer needs: day columns, week header cells, one row per
//! employee with positioned task blocks, the department choices and the
//! project legend.

use crate::domain::calendar::WorkCalendar;
use crate::domain::geometry::{
    day_widths, task_block_geometry, week_header_layout, BlockGeometry, DayGeometry, ExpandedWeek,
    WeekHeaderCell, WidthSettings,
};
use crate::domain::grouping::group_by_department_and_employee;
use crate::domain::search::TaskFilter;
use crate::domain::week::{day_range, week_header_groups};
use crate::domain::work_item::WorkItem;
use chrono::NaiveDate;
use serde::Serialize;

/// Window, filter and display settings for one timeline render
#[derive(Debug, Clone)]
pub struct TimelineOptions {
    pub start_date: NaiveDate,
    pub total_days: usize,
    pub filter: TaskFilter,
    pub expanded: ExpandedWeek,
    pub widths: WidthSettings,
}

/// One visible day column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    pub date: NaiveDate,
    pub working: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBlock {
    pub task_id: String,
    pub title: String,
    pub project_id: String,
    pub geometry: BlockGeometry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub employee_id: String,
    pub employee_name: String,
    pub blocks: Vec<TaskBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSection {
    pub department: String,
    pub employees: Vec<EmployeeRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub project_id: String,
    pub project_name: String,
    /// Single-letter marker used by text renderers
    pub marker: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub days: Vec<DayColumn>,
    pub weeks: Vec<WeekHeaderCell>,
    pub geometry: DayGeometry,
    pub departments: Vec<DepartmentSection>,
    /// Every department of the unfiltered task list, first-seen order
    pub department_choices: Vec<String>,
    pub legend: Vec<LegendEntry>,
    pub visible_tasks: usize,
}

impl TimelineView {
    pub fn legend_marker(&self, project_id: &str) -> Option<char> {
        self.legend
            .iter()
            .find(|entry| entry.project_id == project_id)
            .map(|entry| entry.marker)
    }
}

/// Service for building timeline views
pub struct TimelineService<'a> {
    calendar: &'a WorkCalendar,
}

impl<'a> TimelineService<'a> {
    pub fn new(calendar: &'a WorkCalendar) -> Self {
        TimelineService { calendar }
    }

    pub fn build(&self, tasks: &[WorkItem], options: &TimelineOptions) -> TimelineView {
        let dates = day_range(options.start_date, options.total_days);
        let geometry = DayGeometry::from_widths(day_widths(&dates, options.expanded, options.widths));
        let weeks = week_header_layout(&week_header_groups(&dates), &geometry);

        let days = dates
            .iter()
            .map(|&date| DayColumn {
                date,
                working: self.calendar.is_working_day(date),
                expanded: options.expanded.contains(date),
            })
            .collect();

        let visible = options.filter.apply(tasks);
        let departments = group_by_department_and_employee(&visible)
            .into_iter()
            .map(|group| DepartmentSection {
                department: group.department.to_string(),
                employees: group
                    .employees
                    .into_iter()
                    .map(|employee| EmployeeRow {
                        employee_id: employee.employee_id.to_string(),
                        employee_name: employee.employee_name.to_string(),
                        blocks: employee
                            .tasks
                            .iter()
                            .map(|task| TaskBlock {
                                task_id: task.id.clone(),
                                title: task.title.clone(),
                                project_id: task.project_id.clone(),
                                geometry: task_block_geometry(
                                    self.calendar,
                                    task,
                                    options.start_date,
                                    &geometry,
                                ),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        tracing::debug!(
            days = options.total_days,
            visible = visible.len(),
            total = tasks.len(),
            "built timeline view"
        );

        TimelineView {
            days,
            weeks,
            geometry,
            departments,
            department_choices: department_choices(tasks),
            legend: project_legend(tasks),
            visible_tasks: visible.len(),
        }
    }
}

/// Distinct departments in first-seen order
pub fn department_choices(tasks: &[WorkItem]) -> Vec<String> {
    let mut choices: Vec<String> = Vec::new();
    for task in tasks {
        if !choices.contains(&task.department) {
            choices.push(task.department.clone());
        }
    }
    choices
}

/// Marker for the project at `index` in the legend: `A`-`Z`, then `a`-`z`,
/// then `*` for every further project.
pub fn legend_marker_for(index: usize) -> char {
    const UPPER: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const LOWER: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
    match index {
        0..=25 => char::from(UPPER[index]),
        26..=51 => char::from(LOWER[index - 26]),
        _ => '*',
    }
}

/// Distinct projects in first-seen order, each with its [`legend_marker_for`] marker
pub fn project_legend(tasks: &[WorkItem]) -> Vec<LegendEntry> {
    let mut legend: Vec<LegendEntry> = Vec::new();
    for task in tasks {
        if legend.iter().any(|entry| entry.project_id == task.project_id) {
            continue;
        }
        let marker = legend_marker_for(legend.len());
        legend.push(LegendEntry {
            project_id: task.project_id.clone(),
            project_name: task.project_name.clone(),
            marker,
        });
    }
    legend
}
