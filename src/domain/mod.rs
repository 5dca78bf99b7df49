//! Domain layer - Calendar, placement, layout and search logic

pub mod calendar;
pub mod geometry;
pub mod grouping;
pub mod placement;
pub mod search;
pub mod week;
pub mod work_item;
pub mod workload;

pub use calendar::{HolidayRule, WorkCalendar};
pub use geometry::{BlockGeometry, DayGeometry, ExpandedWeek, WidthSettings};
pub use grouping::{group_by_department_and_employee, DepartmentGroup, EmployeeGroup};
pub use placement::{place_without_overlap, Interval, SeededRng};
pub use search::{matches_query, TaskFilter};
pub use week::{day_range, week_header_groups, WeekGroup, WeekKey};
pub use work_item::{Absence, DependencyType, EmployeeProfile, WorkDependency, WorkItem};
