//! Permissive year normalization
//!
//! Survey spreadsheets store the year as whatever the harvester produced:
//! plain integers, floats exported by spreadsheet tools, full dates, or
//! timestamps. Only the year survives.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

/// Parse a year from free text.
///
/// Returns `None` when no 4-digit year can be extracted.
///
/// # Examples
/// ```
/// use imtrend_io::parse_year;
/// assert_eq!(parse_year("2020"), Some(2020));
/// assert_eq!(parse_year("2020.0"), Some(2020));
/// assert_eq!(parse_year("2019-03-01"), Some(2019));
/// assert_eq!(parse_year("n/d"), None);
/// ```
pub fn parse_year(raw: &str) -> Option<i32> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let year = parse_numeric(text)
        .or_else(|| parse_datetime(text))
        .or_else(|| parse_date(text))
        .or_else(|| parse_year_month(text))?;

    YEAR_RANGE.contains(&year).then_some(year)
}

fn parse_numeric(text: &str) -> Option<i32> {
    if let Ok(v) = text.parse::<i32>() {
        return Some(v);
    }

    let v = text.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < f64::from(i32::MAX) {
        Some(v as i32)
    } else {
        None
    }
}

fn parse_datetime(text: &str) -> Option<i32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.year());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.year())
}

fn parse_date(text: &str) -> Option<i32> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|d| d.year())
}

/// `YYYY-MM` and `YYYY/MM`
fn parse_year_month(text: &str) -> Option<i32> {
    ["%Y-%m-%d", "%Y/%m/%d"].iter().find_map(|fmt| {
        let sep = &fmt[2..3];
        NaiveDate::parse_from_str(&format!("{}{}01", text, sep), fmt)
            .ok()
            .map(|d| d.year())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2020", 2020)]
    #[case(" 1998 ", 1998)]
    #[case("2020.0", 2020)]
    #[case("2021-06-30", 2021)]
    #[case("2021/06/30", 2021)]
    #[case("30/06/2021", 2021)]
    #[case("06/30/2021", 2021)]
    #[case("30-06-2021", 2021)]
    #[case("2017-02", 2017)]
    #[case("2022-01-05T10:30:00", 2022)]
    #[case("2022-01-05 10:30:00", 2022)]
    #[case("2022-01-05T10:30:00Z", 2022)]
    #[case("2022-01-05T10:30:00-03:00", 2022)]
    fn test_parse_year_accepts(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(parse_year(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("unknown")]
    #[case("s.d.")]
    #[case("2020.5")]
    #[case("20")]
    #[case("120000")]
    #[case("NaN")]
    #[case("2021-13-45")]
    fn test_parse_year_rejects(#[case] input: &str) {
        assert_eq!(parse_year(input), None);
    }
}
