use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while resolving holidays.
///
/// A date that simply is not a holiday is not an error; lookups report it as
/// `None`. Likewise a year preceding every rule generation yields an empty
/// list rather than an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    #[error("invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u32),

    /// The solar longitude never crossed 0° / 180° inside the scanned days.
    #[error("equinox not found in {year}-{month:02}")]
    EquinoxUnresolved {
        year: i32,
        month: u32
    },

    /// Two sources placed a holiday on the same day.
    #[error("conflicting holidays on {date}: '{first}' and '{second}'")]
    ConflictingHolidays {
        date: NaiveDate,
        first: String,
        second: String
    },

    #[error("more than one rule generation takes effect in {0}")]
    DuplicateGeneration(i32),

    #[error("static holiday table is empty")]
    EmptyStaticTable,

    #[error("invalid time zone offset: {0} seconds")]
    InvalidTimeZoneOffset(i32),

    #[error("invalid holiday rule: {0}")]
    InvalidRule(String),

    /// Stepping a day from this date leaves the representable range.
    #[error("no representable day beyond {0}")]
    DateOutOfRange(NaiveDate)
}
