//! Working-day calendar with weekend rule and per-year holiday sets

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// How a holiday's date is derived for a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayDate {
    /// Same month and day every year
    Fixed { month: u32, day: u32 },
    /// Signed day offset from that year's Easter Sunday
    EasterOffset(i64),
}

/// A named holiday rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    pub name: String,
    pub date: HolidayDate,
}

impl HolidayRule {
    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> Self {
        HolidayRule {
            name: name.into(),
            date: HolidayDate::Fixed { month, day },
        }
    }

    pub fn easter(name: impl Into<String>, offset: i64) -> Self {
        HolidayRule {
            name: name.into(),
            date: HolidayDate::EasterOffset(offset),
        }
    }

    /// Resolve this rule for a year. Fixed dates that do not exist in the
    /// year (e.g. Feb 29) resolve to None.
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        match self.date {
            HolidayDate::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            HolidayDate::EasterOffset(offset) => Some(easter_sunday(year) + Duration::days(offset)),
        }
    }
}

/// Easter Sunday for a Gregorian year (Meeus/Jones/Butcher)
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| panic!("year {} is outside the supported date range", year))
}

/// Calendar deciding which days are working days.
///
/// Holiday sets are computed lazily per year and kept for the lifetime of the
/// calendar.
#[derive(Debug)]
pub struct WorkCalendar {
    weekend: [Weekday; 2],
    rules: Vec<HolidayRule>,
    cache: RwLock<HashMap<i32, Arc<HashSet<NaiveDate>>>>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::baden_wuerttemberg()
    }
}

impl WorkCalendar {
    /// Create a calendar from a weekend rule and a list of holiday rules
    pub fn new(weekend: [Weekday; 2], rules: Vec<HolidayRule>) -> Self {
        WorkCalendar {
            weekend,
            rules,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Saturday/Sunday weekend with the public holidays of Baden-Württemberg
    pub fn baden_wuerttemberg() -> Self {
        Self::new(
            [Weekday::Sat, Weekday::Sun],
            vec![
                HolidayRule::fixed("Neujahr", 1, 1),
                HolidayRule::fixed("Heilige Drei Könige", 1, 6),
                HolidayRule::easter("Karfreitag", -2),
                HolidayRule::easter("Ostermontag", 1),
                HolidayRule::fixed("Tag der Arbeit", 5, 1),
                HolidayRule::easter("Christi Himmelfahrt", 39),
                HolidayRule::easter("Pfingstmontag", 50),
                HolidayRule::easter("Fronleichnam", 60),
                HolidayRule::fixed("Tag der Deutschen Einheit", 10, 3),
                HolidayRule::fixed("Allerheiligen", 11, 1),
                HolidayRule::fixed("Erster Weihnachtstag", 12, 25),
                HolidayRule::fixed("Zweiter Weihnachtstag", 12, 26),
            ],
        )
    }

    /// The two weekend days of this calendar
    pub fn weekend(&self) -> [Weekday; 2] {
        self.weekend
    }

    /// Holiday set for a year, computed on first use
    pub fn holidays(&self, year: i32) -> Arc<HashSet<NaiveDate>> {
        // The cache only memoizes deterministic data, so a poisoned lock is still usable.
        if let Some(set) = self
            .cache
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&year)
        {
            return Arc::clone(set);
        }

        let set: Arc<HashSet<NaiveDate>> = Arc::new(
            self.rules
                .iter()
                .filter_map(|rule| rule.resolve(year))
                .filter(|date| date.year() == year)
                .collect(),
        );

        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(cache.entry(year).or_insert(set))
    }

    /// Named holidays of a year, sorted by date
    pub fn holiday_list(&self, year: i32) -> Vec<(NaiveDate, &str)> {
        let mut list: Vec<(NaiveDate, &str)> = self
            .rules
            .iter()
            .filter_map(|rule| rule.resolve(year).map(|date| (date, rule.name.as_str())))
            .filter(|(date, _)| date.year() == year)
            .collect();
        list.sort_by_key(|(date, _)| *date);
        list
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays(date.year()).contains(&date)
    }

    /// A working day is neither a weekend day nor a holiday
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// The date itself when it is a working day, otherwise the first working day after it
    pub fn next_working_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_working_day(current) {
            current = current + Duration::days(1);
        }
        current
    }

    /// Move `days` working days forward (or backward when negative).
    ///
    /// Zero resolves to [`WorkCalendar::next_working_day`]. Otherwise the
    /// result is the date on which the last working-day step landed.
    pub fn advance_working_days(&self, date: NaiveDate, days: i64) -> NaiveDate {
        if days == 0 {
            return self.next_working_day(date);
        }

        let step = Duration::days(days.signum());
        let mut current = date;
        let mut remaining = days.abs();
        while remaining > 0 {
            current = current + step;
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026), date(2026, 4, 5));
        assert_eq!(easter_sunday(2000), date(2000, 4, 23));
        assert_eq!(easter_sunday(1818), date(1818, 3, 22));
        assert_eq!(easter_sunday(2038), date(2038, 4, 25));
    }

    #[test]
    fn test_good_friday_2026_is_holiday() {
        let cal = WorkCalendar::default();
        let good_friday = date(2026, 4, 3);
        assert!(cal.holidays(2026).contains(&good_friday));
        assert!(!cal.is_working_day(good_friday));
    }

    #[test]
    fn test_movable_holidays_2026() {
        let cal = WorkCalendar::default();
        let set = cal.holidays(2026);
        assert!(set.contains(&date(2026, 4, 6))); // Easter Monday
        assert!(set.contains(&date(2026, 5, 14))); // Ascension
        assert!(set.contains(&date(2026, 5, 25))); // Whit Monday
        assert!(set.contains(&date(2026, 6, 4))); // Corpus Christi
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn test_weekend_not_working() {
        let cal = WorkCalendar::default();
        // 2026-02-07 is a Saturday
        assert!(!cal.is_working_day(date(2026, 2, 7)));
        assert!(!cal.is_working_day(date(2026, 2, 8)));
        assert!(cal.is_working_day(date(2026, 2, 9)));
    }

    #[test]
    fn test_holidays_cached_per_year() {
        let cal = WorkCalendar::default();
        let first = cal.holidays(2027);
        let second = cal.holidays(2027);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_independent_calendars() {
        let plain = WorkCalendar::new([Weekday::Sat, Weekday::Sun], Vec::new());
        let bw = WorkCalendar::default();
        let new_year = date(2026, 1, 1);
        assert!(plain.is_working_day(new_year));
        assert!(!bw.is_working_day(new_year));
    }

    #[test]
    fn test_fixed_rule_missing_in_year_is_skipped() {
        let cal = WorkCalendar::new(
            [Weekday::Sat, Weekday::Sun],
            vec![HolidayRule::fixed("Leap", 2, 29)],
        );
        assert!(cal.holidays(2025).is_empty());
        assert!(cal.holidays(2028).contains(&date(2028, 2, 29)));
    }

    #[test]
    fn test_holiday_list_sorted_with_names() {
        let cal = WorkCalendar::default();
        let list = cal.holiday_list(2026);
        assert_eq!(list.first().unwrap(), &(date(2026, 1, 1), "Neujahr"));
        assert_eq!(list.last().unwrap(), &(date(2026, 12, 26), "Zweiter Weihnachtstag"));
        assert!(list.windows(2).all(|pair| pair[0].0 <= pair[1].0));
    }

    #[test]
    fn test_next_working_day() {
        let cal = WorkCalendar::default();
        // Friday stays Friday
        assert_eq!(cal.next_working_day(date(2026, 2, 6)), date(2026, 2, 6));
        // Saturday moves to Monday
        assert_eq!(cal.next_working_day(date(2026, 2, 7)), date(2026, 2, 9));
        // Good Friday 2026 runs through Easter Monday to Tuesday
        assert_eq!(cal.next_working_day(date(2026, 4, 3)), date(2026, 4, 7));
    }

    #[test]
    fn test_advance_zero_is_next_working_day() {
        let cal = WorkCalendar::default();
        assert_eq!(cal.advance_working_days(date(2026, 2, 7), 0), date(2026, 2, 9));
        assert_eq!(cal.advance_working_days(date(2026, 2, 9), 0), date(2026, 2, 9));
    }

    #[test]
    fn test_advance_forward_skips_weekend() {
        let cal = WorkCalendar::default();
        // Monday + 5 working days = next Monday
        assert_eq!(cal.advance_working_days(date(2026, 2, 2), 5), date(2026, 2, 9));
        // Thursday + 2 working days = Monday
        assert_eq!(cal.advance_working_days(date(2026, 2, 5), 2), date(2026, 2, 9));
    }

    #[test]
    fn test_advance_skips_easter_holidays() {
        let cal = WorkCalendar::default();
        // Thursday 2026-04-02 + 1 working day: Good Friday, weekend and
        // Easter Monday are skipped
        assert_eq!(cal.advance_working_days(date(2026, 4, 2), 1), date(2026, 4, 7));
    }

    #[test]
    fn test_advance_backward() {
        let cal = WorkCalendar::default();
        assert_eq!(cal.advance_working_days(date(2026, 2, 9), -1), date(2026, 2, 6));
        assert_eq!(cal.advance_working_days(date(2026, 4, 7), -1), date(2026, 4, 2));
    }

    #[test]
    fn test_advance_roundtrip_over_working_days() {
        let cal = WorkCalendar::default();
        let mut day = date(2025, 12, 1);
        while day < date(2026, 7, 1) {
            if cal.is_working_day(day) {
                for n in 1..=12 {
                    let forward = cal.advance_working_days(day, n);
                    assert_eq!(cal.advance_working_days(forward, -n), day, "{} +{}", day, n);
                }
            }
            day = day + Duration::days(1);
        }
    }

    #[test]
    fn test_next_working_day_properties() {
        let cal = WorkCalendar::default();
        let mut day = date(2025, 12, 20);
        while day < date(2027, 1, 10) {
            let next = cal.next_working_day(day);
            assert!(cal.is_working_day(next));
            assert!(next >= day);
            day = day + Duration::days(1);
        }
    }
}
