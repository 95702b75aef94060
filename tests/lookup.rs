use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use holidayjp::holiday::Holiday;
use holidayjp::time::calendar::holidaycalendar::HolidayCalendar;
use holidayjp::time::calendar::japancalendar::JapanHolidayCalendar;
use holidayjp::time::calendar::statictable::StaticHolidayTable;
use holidayjp::time::rangeofdates::RangeOfDates;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn mountain_day_moved_for_the_olympics() {
    let calendar = JapanHolidayCalendar::builtin();
    let holiday = calendar.find_holiday(date(2021, 8, 8)).unwrap();
    assert_eq!(holiday, Some(Holiday::new(date(2021, 8, 8), "山の日")));
}

#[test]
fn january_2023_includes_substitute_day() {
    let calendar = JapanHolidayCalendar::builtin();
    let january = calendar.holidays_in_month(2023, 1).unwrap();
    let rendered: Vec<String> = january.iter().map(|h| h.to_string()).collect();
    assert_eq!(rendered, vec!["2023-01-01 元日", "2023-01-02 休日", "2023-01-09 成人の日"]);
}

#[test]
fn nothing_before_coverage() {
    let calendar = JapanHolidayCalendar::builtin();
    assert!(!calendar.is_holiday(date(1950, 1, 1)).unwrap());
    assert!(calendar.holidays_in_month(1950, 1).unwrap().is_empty());
}

#[test]
fn every_day_in_coverage_agrees_with_table() {
    let calendar = JapanHolidayCalendar::builtin();
    let table = StaticHolidayTable::builtin();
    let recorded: HashMap<NaiveDate, &str> = table.holidays().iter().map(|h| (h.date(), h.name())).collect();

    let range = RangeOfDates::new(date(table.start_year(), 1, 1), date(table.end_year(), 12, 31));
    let mut found = 0;
    for d in range.iter() {
        let holiday = calendar.find_holiday(d).unwrap();
        assert_eq!(holiday.as_ref().map(|h| h.name()), recorded.get(&d).copied(), "{d}");
        found += holiday.is_some() as usize;
    }
    assert_eq!(found, table.len());
}

#[test]
fn imperial_ceremonies_of_2019() {
    let calendar = JapanHolidayCalendar::builtin();
    let golden_week: Vec<String> = calendar
        .holidays_between(&RangeOfDates::new(date(2019, 4, 27), date(2019, 5, 6)))
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    assert_eq!(
        golden_week,
        vec![
            "2019-04-29 昭和の日",
            "2019-04-30 休日",
            "2019-05-01 休日（祝日扱い）",
            "2019-05-02 休日",
            "2019-05-03 憲法記念日",
            "2019-05-04 みどりの日",
            "2019-05-05 こどもの日",
            "2019-05-06 休日",
        ]
    );
    // No emperor's birthday in the abdication year.
    assert!(calendar.holidays_in_month(2019, 12).unwrap().is_empty());
}

#[test]
fn year_listing_is_sorted_and_bounded() {
    let calendar = JapanHolidayCalendar::builtin();
    let year = calendar.holidays_in_year(1989).unwrap();
    assert!(year.windows(2).all(|w| w[0].date() < w[1].date()));
    assert!(year.iter().all(|h| h.date().year() == 1989));
    assert!(year.contains(&Holiday::new(date(1989, 2, 24), "大喪の礼")));
}

#[test]
fn holidays_serialize_as_date_name_pairs() {
    let calendar = JapanHolidayCalendar::builtin();
    let august = calendar.holidays_in_month(2021, 8).unwrap();
    let json = serde_json::to_value(&august).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "date": "2021-08-08", "name": "山の日" },
            { "date": "2021-08-09", "name": "休日" }
        ])
    );
}
