use crate::time::calendar::calendarerror::CalendarError;
use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;

/// One revision of the holiday law: the recurring holidays in force from
/// `effective_from_year` until the next generation takes over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleGeneration {
    effective_from_year: i32,
    fixed_date_holidays: Vec<FixedDateHoliday>,
    nth_weekday_holidays: Vec<NthWeekdayHoliday>
}

impl RuleGeneration {
    pub fn new(
        effective_from_year: i32,
        fixed_date_holidays: Vec<FixedDateHoliday>,
        nth_weekday_holidays: Vec<NthWeekdayHoliday>
    ) -> RuleGeneration {
        RuleGeneration {
            effective_from_year,
            fixed_date_holidays,
            nth_weekday_holidays
        }
    }

    pub fn effective_from_year(&self) -> i32 {
        self.effective_from_year
    }

    pub fn fixed_date_holidays(&self) -> &[FixedDateHoliday] {
        &self.fixed_date_holidays
    }

    pub fn nth_weekday_holidays(&self) -> &[NthWeekdayHoliday] {
        &self.nth_weekday_holidays
    }

    /// Fixed-date rules first, then weekday rules, each in declaration order.
    pub fn recurring_holidays(&self) -> impl Iterator<Item = &dyn RecurringHoliday> {
        self.fixed_date_holidays
            .iter()
            .map(|h| h as &dyn RecurringHoliday)
            .chain(self.nth_weekday_holidays.iter().map(|h| h as &dyn RecurringHoliday))
    }

    pub fn in_month(&self, month: u32) -> impl Iterator<Item = &dyn RecurringHoliday> {
        self.recurring_holidays().filter(move |h| h.month() == month)
    }
}

/// Rule generations ordered by the year they take effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    generations: Vec<RuleGeneration>
}

impl RuleSet {
    /// Orders the generations; two generations starting in the same year are
    /// rejected since neither could be said to be in force.
    pub fn new(mut generations: Vec<RuleGeneration>) -> Result<RuleSet, CalendarError> {
        generations.sort_by_key(|g| g.effective_from_year());
        if let Some(pair) = generations
            .windows(2)
            .find(|w| w[0].effective_from_year() == w[1].effective_from_year()) {
            return Err(CalendarError::DuplicateGeneration(pair[0].effective_from_year()));
        }
        Ok(RuleSet { generations })
    }

    pub fn generations(&self) -> &[RuleGeneration] {
        &self.generations
    }

    pub fn first_year(&self) -> Option<i32> {
        self.generations.first().map(|g| g.effective_from_year())
    }

    /// The latest generation already in effect in `year`, if any.
    pub fn active(&self, year: i32) -> Option<&RuleGeneration> {
        let idx = self.generations.partition_point(|g| g.effective_from_year() <= year);
        idx.checked_sub(1).map(|i| &self.generations[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn generation(year: i32, name: &str) -> RuleGeneration {
        RuleGeneration::new(
            year,
            vec![FixedDateHoliday::new(1, 1, name).unwrap()],
            vec![]
        )
    }

    #[test]
    fn active_generation_is_latest_not_after_year() {
        let rules = RuleSet::new(vec![
            generation(2000, "b"),
            generation(1949, "a"),
            generation(2020, "c"),
        ]).unwrap();

        assert!(rules.active(1948).is_none());
        assert_eq!(rules.active(1949).unwrap().effective_from_year(), 1949);
        assert_eq!(rules.active(1999).unwrap().effective_from_year(), 1949);
        assert_eq!(rules.active(2000).unwrap().effective_from_year(), 2000);
        assert_eq!(rules.active(2100).unwrap().effective_from_year(), 2020);
        assert_eq!(rules.first_year(), Some(1949));
    }

    #[test]
    fn duplicate_effective_year_is_rejected() {
        let result = RuleSet::new(vec![generation(2000, "a"), generation(2000, "b")]);
        assert_eq!(result, Err(CalendarError::DuplicateGeneration(2000)));
    }

    #[test]
    fn empty_rule_set_has_no_active_generation() {
        let rules = RuleSet::default();
        assert!(rules.active(2024).is_none());
        assert_eq!(rules.first_year(), None);
    }

    #[test]
    fn month_filter_spans_both_kinds() {
        let g = RuleGeneration::new(
            2000,
            vec![
                FixedDateHoliday::new(1, 1, "元日").unwrap(),
                FixedDateHoliday::new(2, 11, "建国記念の日").unwrap(),
            ],
            vec![NthWeekdayHoliday::new(1, 2, Weekday::Mon, "成人の日").unwrap()]
        );
        let names: Vec<&str> = g.in_month(1).map(|h| h.name()).collect();
        assert_eq!(names, vec!["元日", "成人の日"]);
    }
}
