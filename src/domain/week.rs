//! Day ranges and ISO-week grouping for the timeline header

use crate::error::{Result, WorklaneError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn week_key_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-[Ww](\d{1,2})$").unwrap())
}

/// ISO week-year plus ISO week number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    /// Week key of a date. Dates between Dec 29 and Jan 4 may belong to the
    /// neighbouring ISO year.
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        WeekKey {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Monday of this week
    pub fn monday(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
            .unwrap_or_else(|| panic!("{} is not an ISO week", self))
    }

    /// Sunday of this week
    pub fn sunday(&self) -> NaiveDate {
        self.monday() + Duration::days(6)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = WorklaneError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WorklaneError::InvalidWeekKey(s.to_string());
        let captures = week_key_regex().captures(s.trim()).ok_or_else(invalid)?;
        let year: i32 = captures[1].parse().map_err(|_| invalid())?;
        let week: u32 = captures[2].parse().map_err(|_| invalid())?;

        // Rejects week 0 and week 53 in years that only have 52
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)?;
        Ok(WeekKey { year, week })
    }
}

/// ISO-8601 week number of a date
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Header label for a week
pub fn week_label(key: WeekKey) -> String {
    format!("KW {}", key.week)
}

/// `total_days` consecutive calendar days starting at `start`
pub fn day_range(start: NaiveDate, total_days: usize) -> Vec<NaiveDate> {
    start.iter_days().take(total_days).collect()
}

/// A run of consecutive visible days sharing one ISO week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGroup {
    pub key: WeekKey,
    pub week_number: u32,
    /// Monday of the week, visible or not
    pub week_start: NaiveDate,
    /// Sunday of the week, visible or not
    pub week_end: NaiveDate,
    pub visible_days: usize,
}

/// Split an ordered day sequence into ISO-week groups.
///
/// A new group starts whenever the week key differs from the previous day's.
pub fn week_header_groups(days: &[NaiveDate]) -> Vec<WeekGroup> {
    let mut groups: Vec<WeekGroup> = Vec::new();

    for &day in days {
        let key = WeekKey::of(day);
        match groups.last_mut() {
            Some(group) if group.key == key => group.visible_days += 1,
            _ => groups.push(WeekGroup {
                key,
                week_number: key.week,
                week_start: key.monday(),
                week_end: key.sunday(),
                visible_days: 1,
            }),
        }
    }

    groups
}
