use chrono::{Datelike, NaiveDate};

use crate::time::calendar::calendarerror::CalendarError;
use crate::holiday::Holiday;

/// A holiday that recurs every year within one month.
pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &str;

    /// The month the holiday always falls in.
    fn month(&self) -> u32;

    /// The holiday's occurrence in `year`, or `None` when the rule has no
    /// date that year (29 February, a fifth weekday that does not exist).
    fn get_holiday(&self, year: i32) -> Result<Option<Holiday>, CalendarError>;

    fn is_holiday(&self, d: &NaiveDate) -> Result<bool, CalendarError> {
        if d.month() != self.month() {
            return Ok(false);
        }
        let holiday = self.get_holiday(d.year())?;
        Ok(holiday.is_some_and(|h| h.date() == *d))
    }
}
