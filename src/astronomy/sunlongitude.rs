//! Apparent ecliptic longitude of the sun.
//!
//! Truncated periodic series from 長沢 工 (1999) 『日の出・日の入りの計算』.
//! Good to well under a day around the equinoxes for several centuries
//! either side of J2000, which is all the equinox search needs.

use std::f64::consts::PI;

use chrono::{DateTime, TimeZone};

/// Unix timestamp of J2000.0 (2000-01-01 12:00:00 UTC).
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// TAI - UTC, frozen at its 2015-08 value.
const TAI_MINUS_UTC_SECONDS: i64 = 36;

const TT_MINUS_TAI_SECONDS: i64 = 32;

const SECONDS_PER_JULIAN_YEAR: f64 = ((365 * 24 + 6) * 60 * 60) as f64;

/// `(amplitude, phase, rate)` in degrees, degrees and degrees per julian year.
const SUN_LONGITUDE_TERMS: [(f64, f64, f64); 18] = [
    (0.0200, 355.05, 719.981),
    (0.0048, 234.95, 19.341),
    (0.0020, 247.1, 329.64),
    (0.0018, 297.8, 4452.67),
    (0.0018, 251.3, 0.20),
    (0.0015, 343.2, 450.37),
    (0.0013, 81.4, 225.18),
    (0.0008, 132.5, 659.29),
    (0.0007, 153.3, 90.38),
    (0.0007, 206.8, 30.35),
    (0.0006, 29.8, 337.18),
    (0.0005, 207.4, 1.50),
    (0.0005, 291.2, 22.81),
    (0.0004, 234.9, 315.56),
    (0.0004, 157.3, 299.30),
    (0.0004, 21.1, 720.02),
    (0.0003, 352.5, 1079.97),
    (0.0003, 329.7, 44.43),
];

/// Julian years elapsed since J2000.0 in Terrestrial Time.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct JulianYear(f64);

impl JulianYear {
    pub fn new(value: f64) -> JulianYear {
        JulianYear(value)
    }

    /// Converts a civil instant (UTC based) into julian years of TT.
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> JulianYear {
        let elapsed = t.timestamp() - J2000_UNIX_SECONDS
            + TAI_MINUS_UTC_SECONDS
            + TT_MINUS_TAI_SECONDS;
        JulianYear(elapsed as f64 / SECONDS_PER_JULIAN_YEAR)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Sun's apparent ecliptic longitude in degrees, within `[0, 360)`.
///
/// Each term is folded back into range as soon as it is added so the
/// trigonometric arguments never grow large.
pub fn sun_longitude(jy: JulianYear) -> f64 {
    let t = jy.value();
    let mut l = normalize_degree(360.00769 * t);
    l = normalize_degree(l + 280.4603);
    l = normalize_degree(l + (1.9146 - 0.00005 * t) * sin_degree(357.538 + 359.991 * t));
    for (amplitude, phase, rate) in SUN_LONGITUDE_TERMS {
        l = normalize_degree(l + amplitude * sin_degree(phase + rate * t));
    }
    l
}

/// Sun longitude at the given instant.
pub fn sun_longitude_at<Tz: TimeZone>(t: &DateTime<Tz>) -> f64 {
    sun_longitude(JulianYear::from_datetime(t))
}

#[inline]
fn sin_degree(x: f64) -> f64 {
    (x / 180.0 * PI).sin()
}

/// Folds an angle into `[0, 360)`.
#[inline]
pub fn normalize_degree(x: f64) -> f64 {
    let r = x % 360.0;
    if r < 0.0 {
        // -1e-14 % 360 + 360 rounds to 360.0
        let wrapped = r + 360.0;
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{FixedOffset, Utc};

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_abs_diff_eq!(normalize_degree(370.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_degree(-10.0), 350.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_degree(720.0), 0.0, epsilon = 1e-12);
        assert_eq!(normalize_degree(-1e-14), 0.0);
    }

    #[test]
    fn julian_year_at_epoch_is_terrestrial_offset() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jy = JulianYear::from_datetime(&epoch);
        assert_abs_diff_eq!(jy.value(), 68.0 / SECONDS_PER_JULIAN_YEAR, epsilon = 1e-15);
    }

    #[test]
    fn longitude_at_epoch() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_abs_diff_eq!(sun_longitude_at(&epoch), 280.368_885_506, epsilon = 1e-6);
    }

    #[test]
    fn longitude_brackets_vernal_equinox_2024() {
        let before = jst().with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        let after = jst().with_ymd_and_hms(2024, 3, 21, 0, 0, 0).unwrap();
        assert_abs_diff_eq!(sun_longitude_at(&before), 359.498_677_013, epsilon = 1e-6);
        assert_abs_diff_eq!(sun_longitude_at(&after), 0.492_139_542, epsilon = 1e-6);
    }

    #[test]
    fn longitude_brackets_autumnal_equinox_2023() {
        let before = jst().with_ymd_and_hms(2023, 9, 23, 0, 0, 0).unwrap();
        let after = jst().with_ymd_and_hms(2023, 9, 24, 0, 0, 0).unwrap();
        assert!(sun_longitude_at(&before) < 180.0);
        assert!(sun_longitude_at(&after) >= 180.0);
    }

    #[test]
    fn same_instant_in_any_zone_gives_same_longitude() {
        let in_jst = jst().with_ymd_and_hms(2030, 6, 1, 9, 0, 0).unwrap();
        let in_utc = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(sun_longitude_at(&in_jst), sun_longitude_at(&in_utc));
    }
}
