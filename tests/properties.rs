use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use holidayjp::astronomy::equinox::{autumnal_equinox_day, japan_standard_time, vernal_equinox_day};
use holidayjp::time::calendar::holidaycalculator::HolidayCalculator;
use holidayjp::time::calendar::holidaycalendar::HolidayCalendar;
use holidayjp::time::calendar::japancalendar::{Coverage, JapanHolidayCalendar};
use holidayjp::time::calendar::statictable::StaticHolidayTable;

fn extended() -> JapanHolidayCalendar {
    JapanHolidayCalendar::new(StaticHolidayTable::builtin(), HolidayCalculator::builtin(), Coverage::ExtendWithRules)
}

proptest! {
    #[test]
    fn months_concatenate_to_year(year in 1950i32..2120) {
        let calendar = extended();
        let mut by_month = Vec::new();
        for month in 1..=12 {
            by_month.extend(calendar.holidays_in_month(year, month).unwrap());
        }
        let whole_year = calendar.holidays_in_year(year).unwrap();
        prop_assert!(whole_year.windows(2).all(|w| w[0].date() < w[1].date()));
        prop_assert_eq!(by_month, whole_year);
    }

    #[test]
    fn lookups_are_repeatable(year in 1955i32..2120, month in 1u32..=12) {
        let calendar = extended();
        let first = calendar.holidays_in_month(year, month).unwrap();
        let second = calendar.holidays_in_month(year, month).unwrap();
        prop_assert_eq!(&first, &second);
        for holiday in &first {
            prop_assert_eq!(calendar.find_holiday(holiday.date()).unwrap(), Some(holiday.clone()));
        }
    }

    #[test]
    fn respect_for_the_aged_day_is_a_monday(year in 2003i32..2300) {
        let september = HolidayCalculator::builtin().calculate_month(year, 9).unwrap();
        let aged = september.iter().find(|h| h.name() == "敬老の日").unwrap();
        prop_assert_eq!(aged.date().weekday(), Weekday::Mon);
        prop_assert!((15..=21).contains(&aged.date().day()));
    }

    #[test]
    fn equinoxes_stay_in_their_window(year in 2000i32..2100) {
        let jst = japan_standard_time();
        let vernal = vernal_equinox_day(year, &jst).unwrap();
        let autumnal = autumnal_equinox_day(year, &jst).unwrap();
        prop_assert!((19..=21).contains(&vernal), "vernal {} in {}", vernal, year);
        prop_assert!((22..=23).contains(&autumnal), "autumnal {} in {}", autumnal, year);
    }

    #[test]
    fn next_business_day_is_a_business_day(days in 0u64..30_000) {
        let calendar = JapanHolidayCalendar::builtin();
        let d = NaiveDate::from_ymd_opt(1955, 1, 1).unwrap() + Days::new(days);
        let next = calendar.next_business_day(d).unwrap();
        prop_assert!(next > d);
        prop_assert!(calendar.is_business_day(next).unwrap());
        let previous = calendar.previous_business_day(next).unwrap();
        if calendar.is_business_day(d).unwrap() {
            prop_assert_eq!(previous, d);
        } else {
            prop_assert!(previous < d);
        }
    }
}
