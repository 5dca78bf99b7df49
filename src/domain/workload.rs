//! Hours booked per employee, inside the visible window and per ISO week

use crate::domain::calendar::WorkCalendar;
use crate::domain::week::WeekKey;
use crate::domain::work_item::WorkItem;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Hours booked for each working day of a task
pub const HOURS_PER_DAY: u32 = 8;

/// Working days covered by a task's span
pub fn task_working_days(calendar: &WorkCalendar, task: &WorkItem) -> Vec<NaiveDate> {
    let start = task.scheduled_start_date;
    let end_exclusive = calendar.advance_working_days(start, i64::from(task.duration_days));
    start
        .iter_days()
        .take_while(|day| *day < end_exclusive)
        .filter(|day| calendar.is_working_day(*day))
        .collect()
}

/// Hours of `tasks` falling inside `[window_start, window_start + window_days)`
pub fn visible_hours(
    calendar: &WorkCalendar,
    tasks: &[&WorkItem],
    window_start: NaiveDate,
    window_days: usize,
) -> u32 {
    let window_end = window_start + Duration::days(window_days as i64);
    let days: usize = tasks
        .iter()
        .map(|task| {
            task_working_days(calendar, task)
                .into_iter()
                .filter(|day| *day >= window_start && *day < window_end)
                .count()
        })
        .sum();
    days as u32 * HOURS_PER_DAY
}

/// Booked hours of one ISO week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekLoad {
    pub week: WeekKey,
    pub hours: u32,
}

/// Weeks in which the booked hours exceed `weekly_capacity_hours`, in week order
pub fn overloaded_weeks(
    calendar: &WorkCalendar,
    tasks: &[&WorkItem],
    weekly_capacity_hours: u32,
) -> Vec<WeekLoad> {
    let mut hours_by_week: BTreeMap<WeekKey, u32> = BTreeMap::new();
    for task in tasks {
        for day in task_working_days(calendar, task) {
            *hours_by_week.entry(WeekKey::of(day)).or_insert(0) += HOURS_PER_DAY;
        }
    }

    hours_by_week
        .into_iter()
        .filter(|(_, hours)| *hours > weekly_capacity_hours)
        .map(|(week, hours)| WeekLoad { week, hours })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(start: NaiveDate, duration_days: u32) -> WorkItem {
        WorkItem {
            id: format!("T-{}", start),
            project_id: "P-AURORA".to_string(),
            project_name: "Project Aurora".to_string(),
            department: "Software".to_string(),
            employee_id: "EMP-SO-01".to_string(),
            employee_name: "Diego León".to_string(),
            title: "Refactor de flujo 1".to_string(),
            description: String::new(),
            earliest_start_date: start,
            deadline_date: start,
            duration_days,
            scheduled_start_date: start,
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn test_task_working_days_skip_weekend() {
        let cal = WorkCalendar::default();
        let days = task_working_days(&cal, &task(date(2026, 2, 5), 3));
        assert_eq!(days, vec![date(2026, 2, 5), date(2026, 2, 6), date(2026, 2, 9)]);
    }

    #[test]
    fn test_visible_hours_clips_to_window() {
        let cal = WorkCalendar::default();
        let a = task(date(2026, 2, 5), 3);
        let b = task(date(2026, 1, 29), 3); // Jan 29, Jan 30, Feb 2
        let hours = visible_hours(&cal, &[&a, &b], date(2026, 2, 2), 7);
        // a: Thu, Fri (Mon 9th is outside) ; b: Mon 2nd
        assert_eq!(hours, 3 * HOURS_PER_DAY);
    }

    #[test]
    fn test_overloaded_weeks() {
        let cal = WorkCalendar::default();
        let a = task(date(2026, 2, 2), 5); // whole of W06
        let b = task(date(2026, 2, 4), 2); // Wed, Thu of W06
        let c = task(date(2026, 2, 9), 1); // W07
        let weeks = overloaded_weeks(&cal, &[&a, &b, &c], 40);
        assert_eq!(
            weeks,
            vec![WeekLoad {
                week: WeekKey { year: 2026, week: 6 },
                hours: 56
            }]
        );
    }

    #[test]
    fn test_no_overload_within_capacity() {
        let cal = WorkCalendar::default();
        let a = task(date(2026, 2, 2), 5);
        assert!(overloaded_weeks(&cal, &[&a], 40).is_empty());
    }
}
