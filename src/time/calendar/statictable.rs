use std::fmt;
use std::sync::{Arc, LazyLock};

use chrono::NaiveDate;

use crate::data::syukujitsu::SYUKUJITSU;
use crate::holiday::{ensure_unique_dates, Holiday};
use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::{is_valid_month, next_month};

static BUILTIN: LazyLock<Arc<StaticHolidayTable>> = LazyLock::new(|| {
    let holidays = SYUKUJITSU
        .iter()
        .map(|&(y, m, d, name)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("embedded holiday is a valid date");
            Holiday::new(date, name)
        })
        .collect();
    Arc::new(StaticHolidayTable::new(holidays).expect("embedded holiday table is well formed"))
});

/// Officially published holidays for a contiguous span of years, kept
/// sorted by date so every query is a binary search.
///
/// Within `[start_year, end_year]` the table is the authority: it already
/// carries substitute days (`休日`) and one-off holidays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticHolidayTable {
    holidays: Vec<Holiday>,
    start_year: i32,
    end_year: i32
}

impl StaticHolidayTable {
    /// Sorts `holidays` and checks that no day appears twice.
    pub fn new(mut holidays: Vec<Holiday>) -> Result<StaticHolidayTable, CalendarError> {
        holidays.sort_by_key(|h| h.date());
        ensure_unique_dates(&holidays)?;
        let (start_year, end_year) = match (holidays.first(), holidays.last()) {
            (Some(first), Some(last)) => (first.year(), last.year()),
            _ => return Err(CalendarError::EmptyStaticTable)
        };
        Ok(StaticHolidayTable { holidays, start_year, end_year })
    }

    /// The table compiled into the crate.
    pub fn builtin() -> Arc<StaticHolidayTable> {
        Arc::clone(&BUILTIN)
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn covers_year(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }

    /// Index of the first holiday on or after `d`.
    fn lower_bound(&self, d: NaiveDate) -> usize {
        self.holidays.partition_point(|h| h.date() < d)
    }

    /// Holidays in `[from, until)`; an unrepresentable `until` means
    /// "to the end of the table".
    fn slice_between(&self, from: Option<NaiveDate>, until: Option<NaiveDate>) -> &[Holiday] {
        let Some(from) = from else {
            return &[];
        };
        let start = self.lower_bound(from);
        let end = until.map_or(self.holidays.len(), |d| self.lower_bound(d));
        &self.holidays[start..end.max(start)]
    }

    pub fn find(&self, d: NaiveDate) -> Option<&Holiday> {
        self.holidays
            .binary_search_by_key(&d, |h| h.date())
            .ok()
            .map(|idx| &self.holidays[idx])
    }

    pub fn month_slice(&self, year: i32, month: u32) -> &[Holiday] {
        if !is_valid_month(month) {
            return &[];
        }
        self.slice_between(
            NaiveDate::from_ymd_opt(year, month, 1),
            next_month(year, month).and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
        )
    }

    pub fn year_slice(&self, year: i32) -> &[Holiday] {
        self.slice_between(
            NaiveDate::from_ymd_opt(year, 1, 1),
            year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        )
    }

    pub fn range_slice(&self, range: &RangeOfDates) -> &[Holiday] {
        self.slice_between(Some(range.start_date()), range.end_date().succ_opt())
    }

    pub fn stats(&self) -> StaticTableStats {
        let num_years = (self.end_year - self.start_year + 1) as usize;
        StaticTableStats {
            num_years,
            start_year: self.start_year,
            end_year: self.end_year,
            total_holidays: self.len(),
            avg_holidays_per_year: self.len() as f64 / num_years as f64
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticTableStats {
    pub num_years: usize,
    pub start_year: i32,
    pub end_year: i32,
    pub total_holidays: usize,
    pub avg_holidays_per_year: f64
}

impl fmt::Display for StaticTableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} ({} years), {} holidays, {:.1} per year",
            self.start_year,
            self.end_year,
            self.num_years,
            self.total_holidays,
            self.avg_holidays_per_year
        )
    }
}

impl HolidayCalendar for StaticHolidayTable {
    fn find_holiday(&self, d: NaiveDate) -> Result<Option<Holiday>, CalendarError> {
        Ok(self.find(d).cloned())
    }

    fn holidays_in_month(&self, year: i32, month: u32) -> Result<Vec<Holiday>, CalendarError> {
        if !is_valid_month(month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(self.month_slice(year, month).to_vec())
    }

    fn holidays_in_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        Ok(self.year_slice(year).to_vec())
    }

    fn holidays_between(&self, range: &RangeOfDates) -> Result<Vec<Holiday>, CalendarError> {
        Ok(self.range_slice(range).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_table() -> StaticHolidayTable {
        StaticHolidayTable::new(vec![
            Holiday::new(date(2024, 1, 8), "成人の日"),
            Holiday::new(date(2023, 12, 23), "x"),
            Holiday::new(date(2024, 1, 1), "元日"),
            Holiday::new(date(2024, 2, 11), "建国記念の日"),
        ]).unwrap()
    }

    #[test]
    fn sorts_and_reports_span() {
        let table = small_table();
        assert_eq!(table.start_year(), 2023);
        assert_eq!(table.end_year(), 2024);
        assert_eq!(table.holidays()[0].date(), date(2023, 12, 23));
        assert!(table.covers_year(2024));
        assert!(!table.covers_year(2025));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(StaticHolidayTable::new(vec![]), Err(CalendarError::EmptyStaticTable));
    }

    #[test]
    fn find_exact_day_only() {
        let table = small_table();
        assert_eq!(table.find(date(2024, 1, 8)).unwrap().name(), "成人の日");
        assert!(table.find(date(2024, 1, 9)).is_none());
        assert!(table.find(date(1900, 1, 1)).is_none());
        assert!(table.find(date(2100, 1, 1)).is_none());
    }

    #[test]
    fn month_and_year_slices() {
        let table = small_table();
        let january: Vec<&str> = table.month_slice(2024, 1).iter().map(|h| h.name()).collect();
        assert_eq!(january, vec!["元日", "成人の日"]);
        assert!(table.month_slice(2024, 3).is_empty());
        assert!(table.month_slice(2024, 13).is_empty());
        assert_eq!(table.year_slice(2023).len(), 1);
        assert_eq!(table.year_slice(2024).len(), 3);
        assert!(table.year_slice(2030).is_empty());
    }

    #[test]
    fn extreme_years_are_empty() {
        let table = small_table();
        assert!(table.year_slice(i32::MAX).is_empty());
        assert!(table.month_slice(i32::MAX, 12).is_empty());
        assert!(table.year_slice(i32::MIN).is_empty());
        assert_eq!(table.holidays_in_year(i32::MAX), Ok(vec![]));
        assert_eq!(table.holidays_in_month(i32::MAX, 12), Ok(vec![]));
    }

    #[test]
    fn range_slice_is_inclusive() {
        let table = small_table();
        let range = RangeOfDates::new(date(2023, 12, 23), date(2024, 1, 8));
        assert_eq!(table.range_slice(&range).len(), 3);
    }

    #[test]
    fn invalid_month_is_an_error() {
        let table = small_table();
        assert_eq!(table.holidays_in_month(2024, 0), Err(CalendarError::InvalidMonth(0)));
    }

    #[test]
    fn builtin_span_and_stats() {
        use crate::data::syukujitsu::{SYUKUJITSU_END_YEAR, SYUKUJITSU_START_YEAR};

        let table = StaticHolidayTable::builtin();
        assert_eq!(table.start_year(), SYUKUJITSU_START_YEAR);
        assert_eq!(table.end_year(), SYUKUJITSU_END_YEAR);
        assert_eq!(table.len(), SYUKUJITSU.len());
        let stats = table.stats();
        assert_eq!(stats.num_years, 73);
        assert_eq!(stats.total_holidays, table.len());
        assert!(stats.to_string().starts_with("1955-2027 (73 years)"));
    }
}
