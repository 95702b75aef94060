use std::io::BufRead;

use chrono::NaiveDate;

use crate::holiday::Holiday;
use crate::loader::loadererror::LoaderError;

fn parse_row(row: &str) -> Option<Holiday> {
    let (date, name) = row.split_once(',')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(date.trim(), "%Y/%m/%d").ok()?;
    Some(Holiday::new(date, name))
}

/// Reads the Cabinet Office holiday list (`国民の祝日・休日月日,国民の祝日・休日名称`
/// header, then `YYYY/M/D,name` rows) and returns it sorted by date.
///
/// The input must already be decoded to UTF-8. Blank lines are skipped.
pub fn parse_syukujitsu_csv<R: BufRead>(reader: R) -> Result<Vec<Holiday>, LoaderError> {
    let mut holidays = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let row = line.trim_end_matches('\r');
        if row.trim().is_empty() {
            continue;
        }
        let holiday = parse_row(row).ok_or_else(|| LoaderError::MalformedRow {
            line: index + 1,
            row: row.to_owned()
        })?;
        holidays.push(holiday);
    }
    holidays.sort_by_key(|h| h.date());
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "国民の祝日・休日月日,国民の祝日・休日名称\r\n";

    #[test]
    fn normalises_and_sorts() {
        let csv = format!("{HEADER}2023/1/2,休日\r\n2023/1/1,元日\r\n\r\n1955/1/15,成人の日\r\n");
        let holidays = parse_syukujitsu_csv(csv.as_bytes()).unwrap();
        let rendered: Vec<String> = holidays.iter().map(|h| h.to_string()).collect();
        assert_eq!(rendered, vec!["1955-01-15 成人の日", "2023-01-01 元日", "2023-01-02 休日"]);
    }

    #[test]
    fn reports_line_of_bad_row() {
        let csv = format!("{HEADER}2023/1/1,元日\n2023/13/1,x\n");
        match parse_syukujitsu_csv(csv.as_bytes()) {
            Err(LoaderError::MalformedRow { line, row }) => {
                assert_eq!(line, 3);
                assert_eq!(row, "2023/13/1,x");
            }
            other => panic!("unexpected result: {other:?}")
        }
    }

    #[test]
    fn missing_name_is_malformed() {
        let csv = format!("{HEADER}2023/1/1,\n");
        assert!(matches!(
            parse_syukujitsu_csv(csv.as_bytes()),
            Err(LoaderError::MalformedRow { line: 2, .. })
        ));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(parse_syukujitsu_csv(HEADER.as_bytes()).unwrap().is_empty());
    }
}
