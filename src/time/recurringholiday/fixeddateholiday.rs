use chrono::NaiveDate;

use crate::time::calendar::calendarerror::CalendarError;
use crate::holiday::Holiday;
use crate::time::utility::{days_of_month, is_valid_month};
use super::recurringholiday::RecurringHoliday;

/// Holiday on the same month and day every year, e.g. 元日 on 1 January.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    name: String
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, name: impl Into<String>) -> Option<FixedDateHoliday> {
        // 2000 is a leap year, so 29 February is accepted here
        if !is_valid_month(month) || day == 0 || day > days_of_month(2000, month) {
            None
        } else {
            Some(FixedDateHoliday { month, day, name: name.into() })
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn month(&self) -> u32 {
        self.month
    }

    fn get_holiday(&self, year: i32) -> Result<Option<Holiday>, CalendarError> {
        Ok(NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(|d| Holiday::new(d, self.name.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(13, 1, "x").is_none());
        assert!(FixedDateHoliday::new(4, 31, "x").is_none());
        assert!(FixedDateHoliday::new(1, 0, "x").is_none());
        assert!(FixedDateHoliday::new(2, 29, "x").is_some());
    }

    #[test]
    fn resolves_every_year() {
        let culture_day = FixedDateHoliday::new(11, 3, "文化の日").unwrap();
        let holiday = culture_day.get_holiday(2031).unwrap().unwrap();
        assert_eq!(holiday.date(), NaiveDate::from_ymd_opt(2031, 11, 3).unwrap());
        assert_eq!(holiday.name(), "文化の日");
    }

    #[test]
    fn leap_day_skips_common_years() {
        let leap = FixedDateHoliday::new(2, 29, "leap").unwrap();
        assert!(leap.get_holiday(2023).unwrap().is_none());
        assert!(leap.get_holiday(2024).unwrap().is_some());
    }

    #[test]
    fn is_holiday_checks_month_first() {
        let foundation_day = FixedDateHoliday::new(2, 11, "建国記念の日").unwrap();
        assert!(foundation_day.is_holiday(&NaiveDate::from_ymd_opt(2024, 2, 11).unwrap()).unwrap());
        assert!(!foundation_day.is_holiday(&NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()).unwrap());
    }
}
