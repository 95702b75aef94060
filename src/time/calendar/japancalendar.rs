use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::holiday::Holiday;
use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holidaycalculator::HolidayCalculator;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::statictable::StaticHolidayTable;
use crate::time::utility::is_valid_month;

/// Which years the lookup engine answers for.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum Coverage {
    /// Only the static table's years; anything else is not a holiday.
    #[default]
    StaticTableOnly,
    /// Years after the static table's last year are calculated from the
    /// rules. Years before its first year stay uncovered.
    ExtendWithRules
}

/// The lookup engine: the static table is authoritative for the years it
/// covers, the calculator optionally answers for later years.
#[derive(Clone, Debug)]
pub struct JapanHolidayCalendar {
    table: Arc<StaticHolidayTable>,
    calculator: Arc<HolidayCalculator>,
    coverage: Coverage
}

impl JapanHolidayCalendar {
    pub fn new(
        table: Arc<StaticHolidayTable>,
        calculator: Arc<HolidayCalculator>,
        coverage: Coverage
    ) -> JapanHolidayCalendar {
        JapanHolidayCalendar { table, calculator, coverage }
    }

    /// Embedded data, static table only.
    pub fn builtin() -> JapanHolidayCalendar {
        JapanHolidayCalendar::new(StaticHolidayTable::builtin(), HolidayCalculator::builtin(), Coverage::default())
    }

    pub fn table(&self) -> &StaticHolidayTable {
        &self.table
    }

    pub fn calculator(&self) -> &HolidayCalculator {
        &self.calculator
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    #[inline]
    fn is_calculated(&self, year: i32) -> bool {
        let calculated = self.coverage == Coverage::ExtendWithRules && year > self.table.end_year();
        if calculated {
            debug!(year, "year beyond static table, calculating from rules");
        }
        calculated
    }
}

impl HolidayCalendar for JapanHolidayCalendar {
    fn find_holiday(&self, d: NaiveDate) -> Result<Option<Holiday>, CalendarError> {
        if self.is_calculated(d.year()) {
            self.calculator.find_holiday(d)
        } else {
            Ok(self.table.find(d).cloned())
        }
    }

    fn holidays_in_month(&self, year: i32, month: u32) -> Result<Vec<Holiday>, CalendarError> {
        if !is_valid_month(month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if self.is_calculated(year) {
            self.calculator.calculate_month(year, month)
        } else {
            Ok(self.table.month_slice(year, month).to_vec())
        }
    }

    fn holidays_in_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        if self.is_calculated(year) {
            self.calculator.calculate_year(year)
        } else {
            Ok(self.table.year_slice(year).to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::time::rangeofdates::RangeOfDates;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn extended() -> JapanHolidayCalendar {
        JapanHolidayCalendar::new(
            StaticHolidayTable::builtin(),
            HolidayCalculator::builtin(),
            Coverage::ExtendWithRules
        )
    }

    #[test]
    fn olympic_mountain_day() {
        let calendar = JapanHolidayCalendar::builtin();
        let holiday = calendar.find_holiday(date(2021, 8, 8)).unwrap().unwrap();
        assert_eq!(holiday.name(), "山の日");
        assert_eq!(calendar.find_holiday(date(2021, 8, 11)).unwrap(), None);
    }

    #[test]
    fn january_2023_keeps_recorded_substitute() {
        let calendar = JapanHolidayCalendar::builtin();
        let january = calendar.holidays_in_month(2023, 1).unwrap();
        assert_eq!(
            january,
            vec![
                Holiday::new(date(2023, 1, 1), "元日"),
                Holiday::new(date(2023, 1, 2), "休日"),
                Holiday::new(date(2023, 1, 9), "成人の日"),
            ]
        );
    }

    #[test]
    fn before_coverage_is_not_found() {
        assert_eq!(JapanHolidayCalendar::builtin().find_holiday(date(1950, 1, 1)).unwrap(), None);
        assert_eq!(extended().find_holiday(date(1950, 1, 1)).unwrap(), None);
        assert!(extended().holidays_in_year(1950).unwrap().is_empty());
    }

    #[test]
    fn static_only_ignores_later_years() {
        let calendar = JapanHolidayCalendar::builtin();
        assert_eq!(calendar.find_holiday(date(2030, 1, 1)).unwrap(), None);
        assert!(calendar.holidays_in_year(2030).unwrap().is_empty());
    }

    #[test]
    fn extension_calculates_later_years() {
        let calendar = extended();
        let new_year = calendar.find_holiday(date(2030, 1, 1)).unwrap().unwrap();
        assert_eq!(new_year.name(), "元日");
        let march = calendar.holidays_in_month(2030, 3).unwrap();
        assert_eq!(march, vec![Holiday::new(date(2030, 3, 20), "春分の日")]);
    }

    #[test]
    fn extension_leaves_table_years_alone() {
        // Calculated years lack substitutes; table years must keep them.
        let calendar = extended();
        assert_eq!(calendar.find_holiday(date(2026, 9, 22)).unwrap().unwrap().name(), "休日");
    }

    #[test]
    fn range_spans_table_and_calculation() {
        let calendar = extended();
        let range = RangeOfDates::new(date(2027, 12, 1), date(2028, 1, 31));
        let holidays = calendar.holidays_between(&range).unwrap();
        let dates: Vec<NaiveDate> = holidays.iter().map(|h| h.date()).collect();
        assert_eq!(dates, vec![date(2028, 1, 1), date(2028, 1, 10)]);
    }

    #[test]
    fn business_days_skip_holidays_and_weekends() {
        let calendar = JapanHolidayCalendar::builtin();
        // Golden week 2025: 05-03 Sat to 05-06 Tue (substitute day).
        assert!(!calendar.is_business_day(date(2025, 5, 6)).unwrap());
        assert_eq!(calendar.next_business_day(date(2025, 5, 2)).unwrap(), date(2025, 5, 7));
        assert_eq!(calendar.previous_business_day(date(2025, 5, 7)).unwrap(), date(2025, 5, 2));
        assert_eq!(calendar.shift_n_business_day(date(2025, 5, 2), 0).unwrap(), date(2025, 5, 2));
    }

    #[test]
    fn last_representable_year_does_not_overflow() {
        let calendar = JapanHolidayCalendar::builtin();
        assert_eq!(calendar.holidays_in_year(i32::MAX), Ok(vec![]));
        assert_eq!(calendar.holidays_in_month(i32::MAX, 12), Ok(vec![]));

        // No calendar date exists in that year, so rules yield nothing and
        // the equinox cannot be located.
        let calendar = extended();
        assert_eq!(calendar.holidays_in_month(i32::MAX, 12), Ok(vec![]));
        assert_eq!(
            calendar.holidays_in_year(i32::MAX),
            Err(CalendarError::EquinoxUnresolved { year: i32::MAX, month: 3 })
        );
    }

    #[test]
    fn shifting_past_the_calendar_limits_is_an_error() {
        let calendar = JapanHolidayCalendar::builtin();
        assert_eq!(
            calendar.next_business_day(NaiveDate::MAX),
            Err(CalendarError::DateOutOfRange(NaiveDate::MAX))
        );
        assert_eq!(
            calendar.previous_business_day(NaiveDate::MIN),
            Err(CalendarError::DateOutOfRange(NaiveDate::MIN))
        );
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert_eq!(
            JapanHolidayCalendar::builtin().holidays_in_month(2023, 0),
            Err(CalendarError::InvalidMonth(0))
        );
    }
}
