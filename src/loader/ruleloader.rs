//! JSON representation of rule generations and special holidays.
//!
//! ```json
//! {
//!   "effective_from_year": 2022,
//!   "recurring_holidays": [
//!     { "holiday_type": "FixedDate", "month": 1, "day": 1, "name": "元日" },
//!     { "holiday_type": "NthWeekday", "month": 1, "n": 2, "weekday": "Mon", "name": "成人の日" }
//!   ]
//! }
//! ```

use chrono::Weekday;
use serde::Deserialize;

use crate::holiday::Holiday;
use crate::loader::loadererror::{parse_json_value, LoaderError};
use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::specialholidays::SpecialHolidayTable;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::rulegeneration::{RuleGeneration, RuleSet};

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    name: String
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<FixedDateHoliday, LoaderError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day, json_prop.name.as_str())
        .ok_or_else(|| {
            CalendarError::InvalidRule(format!("{}: no day {}/{}", json_prop.name, json_prop.month, json_prop.day))
        })?;
    Ok(holiday)
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
    name: String
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<NthWeekdayHoliday, LoaderError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday, json_prop.name.as_str())
        .ok_or_else(|| {
            CalendarError::InvalidRule(format!(
                "{}: occurrence {} of {} in month {}",
                json_prop.name, json_prop.n, json_prop.weekday, json_prop.month
            ))
        })?;
    Ok(holiday)
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    NthWeekday
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

#[derive(Deserialize)]
struct RuleGenerationJsonProp {
    effective_from_year: i32,
    recurring_holidays: Vec<serde_json::Value>
}

pub fn rule_generation_from_json(json: serde_json::Value) -> Result<RuleGeneration, LoaderError> {
    let json_prop: RuleGenerationJsonProp = parse_json_value(json)?;
    let mut fixed_date_holidays = Vec::new();
    let mut nth_weekday_holidays = Vec::new();
    for holiday_json in json_prop.recurring_holidays {
        let typed: HolidayTypedObject = parse_json_value(holiday_json.clone())?;
        match typed.holiday_type {
            HolidayType::FixedDate => fixed_date_holidays.push(fixed_date_holiday_from_json(holiday_json)?),
            HolidayType::NthWeekday => nth_weekday_holidays.push(nth_weekday_from_json(holiday_json)?)
        }
    }
    Ok(RuleGeneration::new(json_prop.effective_from_year, fixed_date_holidays, nth_weekday_holidays))
}

pub fn rule_set_from_json(json_vec: Vec<serde_json::Value>) -> Result<RuleSet, LoaderError> {
    let generations = json_vec
        .into_iter()
        .map(rule_generation_from_json)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RuleSet::new(generations)?)
}

/// Entries are `{"date": "YYYY-MM-DD", "name": ...}`.
pub fn special_holidays_from_json(json_vec: Vec<serde_json::Value>) -> Result<SpecialHolidayTable, LoaderError> {
    let holidays = json_vec
        .into_iter()
        .map(parse_json_value::<Holiday>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SpecialHolidayTable::new(holidays)?)
}
