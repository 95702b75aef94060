use chrono::FixedOffset;

use crate::astronomy::equinox::{equinox_date, Equinox};
use crate::time::calendar::calendarerror::CalendarError;
use crate::holiday::Holiday;
use super::recurringholiday::RecurringHoliday;

/// 春分の日 / 秋分の日: the local day on which the sun crosses the equinox
/// point, as seen from `tz`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquinoxHoliday {
    equinox: Equinox,
    tz: FixedOffset
}

impl EquinoxHoliday {
    pub fn new(equinox: Equinox, tz: FixedOffset) -> EquinoxHoliday {
        EquinoxHoliday { equinox, tz }
    }

    pub fn equinox(&self) -> Equinox {
        self.equinox
    }
}

impl RecurringHoliday for EquinoxHoliday {
    fn name(&self) -> &str {
        self.equinox.holiday_name()
    }

    fn month(&self) -> u32 {
        self.equinox.month()
    }

    fn get_holiday(&self, year: i32) -> Result<Option<Holiday>, CalendarError> {
        let date = equinox_date(year, self.equinox, &self.tz)?;
        Ok(Some(Holiday::new(date, self.name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::astronomy::equinox::japan_standard_time;

    #[test]
    fn resolves_named_equinox() {
        let autumn = EquinoxHoliday::new(Equinox::Autumnal, japan_standard_time());
        let holiday = autumn.get_holiday(2024).unwrap().unwrap();
        assert_eq!(holiday.date(), NaiveDate::from_ymd_opt(2024, 9, 22).unwrap());
        assert_eq!(holiday.name(), "秋分の日");
        assert_eq!(autumn.month(), 9);
    }
}
