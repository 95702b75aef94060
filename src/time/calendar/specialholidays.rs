use crate::holiday::{ensure_unique_dates, Holiday};
use crate::time::calendar::calendarerror::CalendarError;

/// One-off holidays declared by special laws (imperial ceremonies, the
/// Olympic relocations). Each applies to a single year only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialHolidayTable {
    holidays: Vec<Holiday>
}

impl SpecialHolidayTable {
    pub fn new(mut holidays: Vec<Holiday>) -> Result<SpecialHolidayTable, CalendarError> {
        holidays.sort_by_key(|h| h.date());
        ensure_unique_dates(&holidays)?;
        Ok(SpecialHolidayTable { holidays })
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn in_month(&self, year: i32, month: u32) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter().filter(move |h| h.is_in_month(year, month))
    }
}
