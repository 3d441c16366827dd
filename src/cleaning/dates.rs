//! Lenient flight-date parsing and calendar helpers.

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

// Month-first for the slash form, matching the usual US reading of 01/02/2020.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%y", "%d-%b-%Y"];

/// Days between 0001-01-01 (CE day 1) and 1970-01-01.
const UNIX_EPOCH_CE_DAYS: i32 = 719_163;

/// Parses a flight date; `None` is the missing marker for anything unrecognised.
pub fn parse_flight_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok().map(|dt| dt.date()))
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// English month name for 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Three-letter month abbreviation for axis ticks.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    month_name(month).map(|name| &name[..3])
}

/// Days since 1970-01-01, the physical representation of a polars `Date`.
pub fn date_to_epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_CE_DAYS
}

pub fn epoch_days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_CE_DAYS)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_iso_forms() {
        assert_eq!(parse_flight_date("2020-01-31"), ymd(2020, 1, 31));
        assert_eq!(parse_flight_date(" 2020-01-31 "), ymd(2020, 1, 31));
        assert_eq!(parse_flight_date("2020-01-31T00:00:00Z"), ymd(2020, 1, 31));
        assert_eq!(parse_flight_date("2020-01-31 08:15:00"), ymd(2020, 1, 31));
        assert_eq!(parse_flight_date("2020-01-31T08:15:00.250"), ymd(2020, 1, 31));
    }

    #[test]
    fn test_parse_other_forms() {
        assert_eq!(parse_flight_date("2020/03/04"), ymd(2020, 3, 4));
        assert_eq!(parse_flight_date("03/04/2020"), ymd(2020, 3, 4));
        assert_eq!(parse_flight_date("04-MAR-20"), ymd(2020, 3, 4));
        assert_eq!(parse_flight_date("04-Mar-2020"), ymd(2020, 3, 4));
    }

    #[test]
    fn test_unparsable_dates_are_missing() {
        assert_eq!(parse_flight_date("not-a-date"), None);
        assert_eq!(parse_flight_date(""), None);
        assert_eq!(parse_flight_date("2020-02-30"), None);
        assert_eq!(parse_flight_date("13/01/2020"), None);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(month_abbrev(9), Some("Sep"));
    }

    #[test]
    fn test_epoch_days_round_trip() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(date_to_epoch_days(epoch), 0);

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(date_to_epoch_days(date), 18_262);
        assert_eq!(epoch_days_to_date(18_262), Some(date));
    }
}
