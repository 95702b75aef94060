use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::calendar::calendarerror::CalendarError;

/// A single public holiday: a calendar day and its Japanese name.
///
/// Serializes as `{"date": "YYYY-MM-DD", "name": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Holiday {
        Holiday { date, name: name.into() }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.name)
    }
}

/// Fails on the first date carried by two holidays of a date-sorted slice.
pub(crate) fn ensure_unique_dates(sorted: &[Holiday]) -> Result<(), CalendarError> {
    match sorted.windows(2).find(|w| w[0].date == w[1].date) {
        Some(pair) => Err(CalendarError::ConflictingHolidays {
            date: pair[0].date,
            first: pair[0].name.clone(),
            second: pair[1].name.clone()
        }),
        None => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_iso_date() {
        let holiday = Holiday::new(NaiveDate::from_ymd_opt(2021, 8, 8).unwrap(), "山の日");
        let json = serde_json::to_string(&holiday).unwrap();
        assert_eq!(json, r#"{"date":"2021-08-08","name":"山の日"}"#);

        let back: Holiday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, holiday);
    }

    #[test]
    fn display_is_zero_padded() {
        let holiday = Holiday::new(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), "休日");
        assert_eq!(holiday.to_string(), "2023-01-02 休日");
        assert!(holiday.is_in_month(2023, 1));
        assert!(!holiday.is_in_month(2023, 2));
    }

    #[test]
    fn duplicate_dates_are_reported() {
        let d = NaiveDate::from_ymd_opt(2020, 7, 23).unwrap();
        let holidays = vec![Holiday::new(d, "海の日"), Holiday::new(d, "スポーツの日")];
        assert_eq!(
            ensure_unique_dates(&holidays),
            Err(CalendarError::ConflictingHolidays {
                date: d,
                first: "海の日".to_owned(),
                second: "スポーツの日".to_owned()
            })
        );
        assert_eq!(ensure_unique_dates(&holidays[..1]), Ok(()));
    }
}
