//! Pixel geometry of the timeline
//!
//! Every visible day has a width. Cumulative offsets turn a day index into a
//! left position, and task blocks cover the calendar days their working-day
//! span touches.

use crate::domain::calendar::WorkCalendar;
use crate::domain::week::{WeekGroup, WeekKey};
use crate::domain::work_item::WorkItem;
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_DAY_WIDTH: u32 = 42;
pub const DEFAULT_EXPANDED_DAY_WIDTH: u32 = 84;

/// Minimum week header width that still fits the date range label
pub const WEEK_RANGE_MIN_WIDTH: u32 = 150;

/// Day widths for the two display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthSettings {
    pub day_width: u32,
    pub expanded_day_width: u32,
}

impl Default for WidthSettings {
    fn default() -> Self {
        WidthSettings {
            day_width: DEFAULT_DAY_WIDTH,
            expanded_day_width: DEFAULT_EXPANDED_DAY_WIDTH,
        }
    }
}

/// The single week currently shown with wide days, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandedWeek(Option<WeekKey>);

impl ExpandedWeek {
    pub fn none() -> Self {
        ExpandedWeek(None)
    }

    pub fn of(key: WeekKey) -> Self {
        ExpandedWeek(Some(key))
    }

    pub fn key(&self) -> Option<WeekKey> {
        self.0
    }

    /// Selecting the expanded week again collapses it; any other week
    /// replaces the current selection.
    pub fn toggle(self, key: WeekKey) -> Self {
        match self.0 {
            Some(current) if current == key => ExpandedWeek(None),
            _ => ExpandedWeek(Some(key)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0 == Some(WeekKey::of(date))
    }
}

/// Width of every visible day
pub fn day_widths(days: &[NaiveDate], expanded: ExpandedWeek, settings: WidthSettings) -> Vec<u32> {
    days.iter()
        .map(|&day| {
            if expanded.contains(day) {
                settings.expanded_day_width
            } else {
                settings.day_width
            }
        })
        .collect()
}

/// Left offset of each day: the sum of all widths before it
pub fn cumulative_offsets(widths: &[u32]) -> Vec<u32> {
    widths
        .iter()
        .scan(0, |acc, &width| {
            let left = *acc;
            *acc += width;
            Some(left)
        })
        .collect()
}

/// Widths, offsets and total width of one visible window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGeometry {
    widths: Vec<u32>,
    offsets: Vec<u32>,
    total_width: u32,
}

impl DayGeometry {
    pub fn from_widths(widths: Vec<u32>) -> Self {
        let offsets = cumulative_offsets(&widths);
        let total_width = widths.iter().sum();
        DayGeometry {
            widths,
            offsets,
            total_width,
        }
    }

    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Sum of widths of days `[start, start + count)`, ignoring indices
    /// outside the window
    pub fn span_width(&self, start: i64, count: i64) -> u32 {
        (start..start + count)
            .filter_map(|index| usize::try_from(index).ok())
            .filter_map(|index| self.widths.get(index))
            .sum()
    }
}

/// Position of a task block on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockGeometry {
    pub left: u32,
    pub width: u32,
}

/// Place a task on the timeline.
///
/// A task starting before the window is drawn from the first visible day and
/// only its visible days count toward the width. The block covers every
/// calendar day between the start and the end of its working-day span, so
/// weekends and holidays inside the span widen it.
pub fn task_block_geometry(
    calendar: &WorkCalendar,
    task: &WorkItem,
    window_start: NaiveDate,
    geometry: &DayGeometry,
) -> BlockGeometry {
    assert!(task.duration_days > 0, "task {} has no duration", task.id);

    let start = task.scheduled_start_date;
    let start_index = (start - window_start).num_days();
    let end_exclusive = calendar.advance_working_days(start, i64::from(task.duration_days));
    let span_days = (end_exclusive - start).num_days().max(1);

    let left = usize::try_from(start_index.max(0))
        .ok()
        .and_then(|index| geometry.offsets().get(index).copied())
        .unwrap_or(0);

    BlockGeometry {
        left,
        width: geometry.span_width(start_index, span_days),
    }
}

/// A week header cell positioned above its visible days
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekHeaderCell {
    pub group: WeekGroup,
    pub left: u32,
    pub width: u32,
    /// Whether the cell is wide enough for the "(dd.mm - dd.mm)" label
    pub shows_range: bool,
}

/// Lay out week header cells over the same days `groups` was built from
pub fn week_header_layout(groups: &[WeekGroup], geometry: &DayGeometry) -> Vec<WeekHeaderCell> {
    let mut first_day = 0usize;
    groups
        .iter()
        .map(|group| {
            let left = geometry.offsets().get(first_day).copied().unwrap_or(0);
            let width = geometry.span_width(first_day as i64, group.visible_days as i64);
            first_day += group.visible_days;
            WeekHeaderCell {
                group: group.clone(),
                left,
                width,
                shows_range: width >= WEEK_RANGE_MIN_WIDTH,
            }
        })
        .collect()
}
