
#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}

#[inline]
pub const fn is_valid_month (month: u32) -> bool {
    month >= 1 && month <= 12
}

/// Number of days in `month` of `year`. Returns 0 for a month outside 1..=12.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if !is_valid_month(month) {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// `(year, month)` of the month following the given one, `None` past
/// December of `i32::MAX`.
#[inline]
pub const fn next_month (year: i32, month: u32) -> Option<(i32, u32)> {
    if month >= 12 {
        match year.checked_add(1) {
            Some(next_year) => Some((next_year, 1)),
            None => None
        }
    } else {
        Some((year, month + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
    }

    #[test]
    fn february_length_follows_leap_rule() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_month(2023, 9), 30);
        assert_eq!(days_of_month(2023, 13), 0);
    }

    #[test]
    fn next_month_rolls_over_december() {
        assert_eq!(next_month(2023, 12), Some((2024, 1)));
        assert_eq!(next_month(2023, 3), Some((2023, 4)));
    }

    #[test]
    fn next_month_after_last_year_is_none() {
        assert_eq!(next_month(i32::MAX, 12), None);
        assert_eq!(next_month(i32::MAX, 11), Some((i32::MAX, 12)));
    }
}
