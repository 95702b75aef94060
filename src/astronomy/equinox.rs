use std::ops::RangeInclusive;

use chrono::{FixedOffset, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::astronomy::sunlongitude::sun_longitude_at;
use crate::time::calendar::calendarerror::CalendarError;

/// UTC offset of Japan Standard Time. JST has no daylight saving.
pub const JST_OFFSET_SECONDS: i32 = 9 * 60 * 60;

pub fn japan_standard_time() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).expect("UTC+9 is within ±24h")
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub enum Equinox {
    /// Sun longitude crosses 0°; 春分の日.
    Vernal,
    /// Sun longitude crosses 180°; 秋分の日.
    Autumnal
}

impl Equinox {
    pub fn month(&self) -> u32 {
        match self {
            Equinox::Vernal => 3,
            Equinox::Autumnal => 9
        }
    }

    pub fn holiday_name(&self) -> &'static str {
        match self {
            Equinox::Vernal => "春分の日",
            Equinox::Autumnal => "秋分の日"
        }
    }

    /// Days of the month sampled at local midnight.
    fn search_days(&self) -> RangeInclusive<u32> {
        match self {
            Equinox::Vernal => 10..=31,
            Equinox::Autumnal => 10..=30
        }
    }

    /// Whether the longitude sampled at midnight lies past the crossing.
    ///
    /// Before the vernal equinox the longitude sits just under 360°, after it
    /// just over 0°, so "past" means dropping below 180°.
    fn has_crossed(&self, longitude: f64) -> bool {
        match self {
            Equinox::Vernal => longitude < 180.0,
            Equinox::Autumnal => longitude >= 180.0
        }
    }

    pub fn for_month(month: u32) -> Option<Equinox> {
        match month {
            3 => Some(Equinox::Vernal),
            9 => Some(Equinox::Autumnal),
            _ => None
        }
    }
}

/// Day of month on which `equinox` falls in `year`, observed in `tz`.
///
/// Samples the sun longitude at local midnight of each candidate day; the
/// crossing happens during the day before the first sample past it. A
/// crossing already behind the first sample cannot be bracketed and is
/// reported as unresolved, as is one never reached.
pub fn equinox_day(year: i32, equinox: Equinox, tz: &FixedOffset) -> Result<u32, CalendarError> {
    let month = equinox.month();
    let unresolved = CalendarError::EquinoxUnresolved { year, month };

    let days = equinox.search_days();
    let first = *days.start();
    for day in days {
        let midnight = tz
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .ok_or_else(|| unresolved.clone())?;
        if equinox.has_crossed(sun_longitude_at(&midnight)) {
            if day == first {
                break;
            }
            return Ok(day - 1);
        }
    }

    warn!(year, month, "equinox crossing not bracketed by the search window");
    Err(unresolved)
}

pub fn equinox_date(year: i32, equinox: Equinox, tz: &FixedOffset) -> Result<NaiveDate, CalendarError> {
    let day = equinox_day(year, equinox, tz)?;
    NaiveDate::from_ymd_opt(year, equinox.month(), day)
        .ok_or(CalendarError::EquinoxUnresolved { year, month: equinox.month() })
}

pub fn vernal_equinox_day(year: i32, tz: &FixedOffset) -> Result<u32, CalendarError> {
    equinox_day(year, Equinox::Vernal, tz)
}

pub fn autumnal_equinox_day(year: i32, tz: &FixedOffset) -> Result<u32, CalendarError> {
    equinox_day(year, Equinox::Autumnal, tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vernal_equinoxes() {
        let jst = japan_standard_time();
        assert_eq!(vernal_equinox_day(2023, &jst), Ok(21));
        assert_eq!(vernal_equinox_day(2024, &jst), Ok(20));
        assert_eq!(vernal_equinox_day(2025, &jst), Ok(20));
        assert_eq!(vernal_equinox_day(1955, &jst), Ok(21));
    }

    #[test]
    fn known_autumnal_equinoxes() {
        let jst = japan_standard_time();
        assert_eq!(autumnal_equinox_day(2012, &jst), Ok(22));
        assert_eq!(autumnal_equinox_day(2023, &jst), Ok(23));
        assert_eq!(autumnal_equinox_day(2024, &jst), Ok(22));
        assert_eq!(autumnal_equinox_day(1955, &jst), Ok(24));
    }

    #[test]
    fn equinox_date_carries_month() {
        let jst = japan_standard_time();
        let date = equinox_date(2030, Equinox::Vernal, &jst).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 3, 20).unwrap());
    }

    #[test]
    fn crossing_outside_window_is_unresolved() {
        // Far from J2000 the series drifts the crossing past March 31.
        let jst = japan_standard_time();
        assert_eq!(
            vernal_equinox_day(-30000, &jst),
            Err(CalendarError::EquinoxUnresolved { year: -30000, month: 3 })
        );
    }

    #[test]
    fn month_mapping() {
        assert_eq!(Equinox::for_month(3), Some(Equinox::Vernal));
        assert_eq!(Equinox::for_month(9), Some(Equinox::Autumnal));
        assert_eq!(Equinox::for_month(4), None);
        assert_eq!(Equinox::Vernal.holiday_name(), "春分の日");
    }
}
