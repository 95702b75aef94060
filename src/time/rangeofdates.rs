use chrono::{
    Datelike,
    Days,
    NaiveDate
};

use crate::time::utility::next_month;

/// Inclusive span of calendar days. The endpoints are reordered if given
/// backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }

    /// Every `(year, month)` the range touches, in chronological order.
    pub fn months(&self) -> Vec<(i32, u32)> {
        let last = (self.end_date.year(), self.end_date.month());
        let mut current = (self.start_date.year(), self.start_date.month());
        let mut months = vec![current];
        while current < last {
            let Some(next) = next_month(current.0, current.1) else {
                break;
            };
            current = next;
            months.push(current);
        }
        months
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.start_date() + Days::new(self.index as u64);
            self.index += 1;
            Some(result)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn endpoints_are_reordered() {
        let range = RangeOfDates::new(date(2024, 5, 6), date(2024, 4, 29));
        assert_eq!(range.start_date(), date(2024, 4, 29));
        assert_eq!(range.end_date(), date(2024, 5, 6));
        assert_eq!(range.len(), 8);
        assert_eq!(range.iter().count(), 8);
        assert!(range.contain(date(2024, 5, 3)));
        assert!(!range.contain(date(2024, 5, 7)));
    }

    #[test]
    fn months_cross_year_boundary() {
        let range = RangeOfDates::new(date(2023, 11, 20), date(2024, 2, 1));
        assert_eq!(range.months(), vec![(2023, 11), (2023, 12), (2024, 1), (2024, 2)]);
    }

    #[test]
    fn single_day_range_touches_one_month() {
        let range = RangeOfDates::new(date(2024, 1, 1), date(2024, 1, 1));
        assert_eq!(range.len(), 1);
        assert_eq!(range.months(), vec![(2024, 1)]);
    }
}
