//! Output formatting utilities

use crate::application::employee_details::EmployeeDetails;
use crate::application::timeline::TimelineView;
use crate::domain::geometry::WeekHeaderCell;
use crate::domain::week::week_label;
use crate::infrastructure::Config;
use chrono::NaiveDate;

/// Pixels per terminal column
pub const PX_PER_COLUMN: u32 = 14;

/// Width of the row label column
const LABEL_WIDTH: usize = 22;

fn column(px: u32) -> usize {
    (px / PX_PER_COLUMN) as usize
}

/// Fit `text` into exactly `width` columns
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

fn week_cell_text(cell: &WeekHeaderCell) -> String {
    let label = week_label(cell.group.key);
    if cell.shows_range {
        format!(
            "{} ({} - {})",
            label,
            cell.group.week_start.format("%d.%m"),
            cell.group.week_end.format("%d.%m")
        )
    } else {
        label
    }
}

/// Render the timeline as text: week header, day numbers, one row per
/// employee and the project legend.
pub fn format_timeline(view: &TimelineView) -> String {
    let total_columns = column(view.geometry.total_width());
    let mut output = String::new();

    if let (Some(first), Some(last)) = (view.days.first(), view.days.last()) {
        output.push_str(&format!(
            "Timeline {} - {} ({} days, {} tasks)\n",
            first.date.format("%d.%m.%Y"),
            last.date.format("%d.%m.%Y"),
            view.days.len(),
            view.visible_tasks
        ));
    }
    output.push_str(&format!(
        "Departments: {}\n\n",
        view.department_choices.join(", ")
    ));

    let mut weeks = String::new();
    for cell in &view.weeks {
        let width = column(cell.left + cell.width) - column(cell.left);
        weeks.push_str(&fit(&format!("|{}", week_cell_text(cell)), width));
    }
    output.push_str(&format!("{}{}\n", " ".repeat(LABEL_WIDTH), weeks));

    let mut day_numbers = String::new();
    let mut background = String::with_capacity(total_columns);
    for (index, day) in view.days.iter().enumerate() {
        let left = view.geometry.offsets()[index];
        let width = column(left + view.geometry.widths()[index]) - column(left);
        day_numbers.push_str(&fit(&day.date.format("%d").to_string(), width));
        let fill = if day.working { "." } else { ":" };
        background.push_str(&fill.repeat(width));
    }
    output.push_str(&format!("{}{}\n", " ".repeat(LABEL_WIDTH), day_numbers));

    if view.departments.is_empty() {
        output.push_str("\nNo tasks match the current filter\n");
    }

    for department in &view.departments {
        output.push_str(&format!("\n{}\n", department.department));
        for employee in &department.employees {
            let mut row: Vec<char> = background.chars().collect();
            for block in &employee.blocks {
                let marker = view.legend_marker(&block.project_id).unwrap_or('#');
                let start = column(block.geometry.left);
                let end = column(block.geometry.left + block.geometry.width).min(row.len());
                for slot in row.iter_mut().take(end).skip(start) {
                    *slot = marker;
                }
            }
            output.push_str(&format!(
                "  {}{}\n",
                fit(&employee.employee_name, LABEL_WIDTH - 2),
                row.into_iter().collect::<String>()
            ));
        }
    }

    if !view.legend.is_empty() {
        let entries: Vec<String> = view
            .legend
            .iter()
            .map(|entry| format!("{} {}", entry.marker, entry.project_name))
            .collect();
        output.push_str(&format!("\nLegend: {}\n", entries.join("  ")));
    }

    output
}

/// Format the details view of one employee
pub fn format_employee_details(details: &EmployeeDetails) -> String {
    let profile = &details.profile;
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", profile.employee_name, profile.employee_id));
    output.push_str(&format!("Department: {}\n", profile.department));
    output.push_str(&format!("Role: {}\n", profile.role));
    output.push_str(&format!("Hourly cost: {}\n", profile.hourly_cost));
    output.push_str(&format!("Weekly capacity: {} h\n", profile.weekly_capacity_hours));

    if profile.absences.is_empty() {
        output.push_str("Absences: none\n");
    } else {
        output.push_str("Absences:\n");
        for absence in &profile.absences {
            output.push_str(&format!(
                "  {} - {}  {}\n",
                absence.start_date, absence.end_date, absence.reason
            ));
        }
    }

    output.push_str(&format!("Visible hours: {} h\n", details.visible_hours));

    if details.overloaded_weeks.is_empty() {
        output.push_str("Overloaded weeks: none\n");
    } else {
        let weeks: Vec<String> = details
            .overloaded_weeks
            .iter()
            .map(|load| format!("{} ({} h)", load.week, load.hours))
            .collect();
        output.push_str(&format!("Overloaded weeks: {}\n", weeks.join(", ")));
    }

    output.push_str("Tasks:\n");
    for task in &details.tasks {
        let dependency = task
            .dependencies
            .iter()
            .map(|dep| format!("{} {}", dep.kind, dep.task_id))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "  {}  {}  {}d  {}  {}",
            task.id, task.scheduled_start_date, task.duration_days, task.project_name, task.title
        ));
        if !dependency.is_empty() {
            output.push_str(&format!("  [after {}]", dependency));
        }
        output.push('\n');
    }

    output
}

/// Format a year's holiday list
pub fn format_holidays(holidays: &[(NaiveDate, &str)]) -> String {
    if holidays.is_empty() {
        return "No holidays found".to_string();
    }

    let mut output = String::new();
    for (date, name) in holidays {
        output.push_str(&format!("{}  {}  {}\n", date, date.format("%a"), name));
    }
    output
}

/// Format every config value as `key = value` lines
pub fn format_config(config: &Config) -> String {
    let mut output = String::new();
    output.push_str(&format!("start_date = {}\n", config.start_date));
    output.push_str(&format!("weeks = {}\n", config.weeks));
    output.push_str(&format!("day_width = {}\n", config.day_width));
    output.push_str(&format!("expanded_day_width = {}\n", config.expanded_day_width));
    output.push_str(&format!("seed = {}\n", config.seed));
    if let Some(created) = config.created {
        output.push_str(&format!("created = {}\n", created.to_rfc3339()));
    }
    output
}
