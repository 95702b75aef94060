use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::time::calendar::calendarerror::CalendarError;
use crate::holiday::Holiday;
use crate::time::utility::{days_of_month, is_valid_month};
use super::recurringholiday::RecurringHoliday;

/// Holiday on the n-th given weekday of a month ("Happy Monday" holidays),
/// e.g. 敬老の日 on the third Monday of September.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
    name: String
}

impl NthWeekdayHoliday {
    /// `n` counts from 1 (the first occurrence) to 5.
    pub fn new(month: u32, n: u8, weekday: Weekday, name: impl Into<String>) -> Option<NthWeekdayHoliday> {
        if !is_valid_month(month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday, name: name.into() })
        }
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    /// Zero-based occurrence index: 0 for the first, 1 for the second, ...
    pub fn ordinal_index(&self) -> u32 {
        (self.n - 1) as u32
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    fn day_of_month(&self, year: i32) -> Option<u32> {
        let first = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let first_weekday = first.weekday().num_days_from_sunday();
        let target = self.weekday.num_days_from_sunday();
        let day = 1 + (target + 7 - first_weekday) % 7 + 7 * self.ordinal_index();
        (day <= days_of_month(year, self.month)).then_some(day)
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn month(&self) -> u32 {
        self.month
    }

    fn get_holiday(&self, year: i32) -> Result<Option<Holiday>, CalendarError> {
        Ok(self.day_of_month(year)
            .and_then(|day| NaiveDate::from_ymd_opt(year, self.month, day))
            .map(|d| Holiday::new(d, self.name.as_str())))
    }
}
