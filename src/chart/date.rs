//! Row date parsing
//!
//! Cell 0 of every row is an ISO-prefixed date (`2019-01-05`,
//! `2019-01-05T00:00:00`, `2019-01-05 00:00:00`). Only the calendar date is
//! kept; anything after the separator is ignored.

use chrono::{Datelike, NaiveDate};

const DATE_LEN: usize = 10;

/// Parse the `YYYY-MM-DD` prefix of a row date.
///
/// Returns `None` when the prefix does not have the exact shape, when the
/// prefix is followed by something other than `T` or a space, or when the
/// date does not exist on the calendar.
pub fn parse_row_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let prefix = raw.get(..DATE_LEN)?;
    let rest = raw.get(DATE_LEN..)?;

    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }

    let shape_ok = prefix.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Format a date the way the data service emits it
pub fn format_row_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Google Charts date literal. The month is zero-based there.
pub fn google_date_literal(date: NaiveDate) -> String {
    format!("Date({},{},{})", date.year(), date.month0(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_variants() {
        assert_eq!(parse_row_date("2019-01-05T00:00:00"), Some(ymd(2019, 1, 5)));
        assert_eq!(parse_row_date("2019-01-05"), Some(ymd(2019, 1, 5)));
        assert_eq!(parse_row_date("2018-10-16 19:30:00"), Some(ymd(2018, 10, 16)));
        assert_eq!(parse_row_date(" 2018-12-31Z"), None);
        assert_eq!(parse_row_date("2018-12-31T"), Some(ymd(2018, 12, 31)));
    }

    #[test]
    fn test_month_is_calendar_month() {
        let date = parse_row_date("2019-01-05T00:00:00").unwrap();
        assert_eq!(date.month(), 1);
        assert_eq!(google_date_literal(date), "Date(2019,0,5)");
    }

    #[test]
    fn test_rejects_bad_shapes() {
        for raw in [
            "",
            "2019",
            "2019-1-05",
            "2019/01/05",
            "19-01-05T00",
            "2019-01-05x",
            "abcd-ef-gh",
            "+019-01-05",
            "2019-01-٠5",
        ] {
            assert_eq!(parse_row_date(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert_eq!(parse_row_date("2019-02-30"), None);
        assert_eq!(parse_row_date("2019-13-01"), None);
        assert_eq!(parse_row_date("2019-00-10"), None);
    }

    #[test]
    fn test_format_row_date() {
        assert_eq!(format_row_date(ymd(2018, 10, 16)), "2018-10-16");
    }
}
