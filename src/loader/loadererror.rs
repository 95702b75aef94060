use serde::Deserialize;
use thiserror::Error;

use crate::time::calendar::calendarerror::CalendarError;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// `line` is 1-based and counts the header.
    #[error("malformed row at line {line}: '{row}'")]
    MalformedRow {
        line: usize,
        row: String
    },

    #[error(transparent)]
    Calendar(#[from] CalendarError)
}

/// Deserializes a loosely typed JSON value into `T`.
pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, LoaderError>
where
    T: for<'a> Deserialize<'a>
{
    serde_json::from_value(json_value).map_err(LoaderError::JsonParseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Pair {
        month: u32,
        day: u32
    }

    #[test]
    fn parses_or_reports_json_error() {
        let pair: Pair = parse_json_value(serde_json::json!({"month": 5, "day": 3})).unwrap();
        assert_eq!(pair, Pair { month: 5, day: 3 });

        let err = parse_json_value::<Pair>(serde_json::json!({"month": 5})).unwrap_err();
        assert!(matches!(err, LoaderError::JsonParseError(_)));
    }

    #[test]
    fn calendar_errors_pass_through() {
        let err: LoaderError = CalendarError::InvalidMonth(13).into();
        assert_eq!(err.to_string(), CalendarError::InvalidMonth(13).to_string());
    }
}
