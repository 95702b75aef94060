use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holiday::Holiday;
use crate::time::calendar::calendarerror::CalendarError;
use crate::time::rangeofdates::RangeOfDates;

const ONE_DAY: Days = Days::new(1);

/// Read-only view over a set of holidays.
///
/// Implementors hold immutable data only, so one instance can be shared
/// behind an `Arc` by any number of threads.
pub trait HolidayCalendar: Send + Sync {
    /// The holiday on `d`, or `None` when `d` is an ordinary day.
    fn find_holiday(&self, d: NaiveDate) -> Result<Option<Holiday>, CalendarError>;

    /// Holidays of one month in ascending date order.
    fn holidays_in_month(&self, year: i32, month: u32) -> Result<Vec<Holiday>, CalendarError>;

    /// Holidays of one year in ascending date order; the twelve months
    /// concatenated.
    fn holidays_in_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        let mut holidays = Vec::new();
        for month in 1..=12 {
            holidays.extend(self.holidays_in_month(year, month)?);
        }
        Ok(holidays)
    }

    /// Holidays within an inclusive date range, in ascending date order.
    fn holidays_between(&self, range: &RangeOfDates) -> Result<Vec<Holiday>, CalendarError> {
        let mut holidays = Vec::new();
        for (year, month) in range.months() {
            holidays.extend(
                self.holidays_in_month(year, month)?
                    .into_iter()
                    .filter(|h| range.contain(h.date()))
            );
        }
        Ok(holidays)
    }

    fn is_holiday(&self, d: NaiveDate) -> Result<bool, CalendarError> {
        Ok(self.find_holiday(d)?.is_some())
    }

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_business_day(&self, d: NaiveDate) -> Result<bool, CalendarError> {
        Ok(!self.is_weekend(d) && !self.is_holiday(d)?)
    }

    /// Fails with `DateOutOfRange` when the walk runs off either end of
    /// the representable dates.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate, CalendarError> {
        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d).ok_or(CalendarError::DateOutOfRange(d))?;
            m -= self.is_business_day(d)? as u32;
        }
        Ok(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.shift_n_business_day(d, -1)
    }
}
