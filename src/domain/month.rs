use chrono::NaiveDate;

/// Parses a `YYYY-MM` month string into the first day of that month.
///
/// Returns `None` for anything else, including the empty string.
#[must_use]
pub fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

/// Returns `true` if `value` is empty or a well-formed `YYYY-MM` month.
#[must_use]
pub fn is_month_or_empty(value: &str) -> bool {
    value.is_empty() || parse_year_month(value).is_some()
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use test_case::test_case;

    use super::*;

    #[test]
    fn parses_year_and_month() {
        let date = parse_year_month("2021-03").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 3, 1));
    }

    #[test_case("" ; "empty")]
    #[test_case("2021" ; "year only")]
    #[test_case("2021-3" ; "single digit month")]
    #[test_case("2021-13" ; "month out of range")]
    #[test_case("2021/03" ; "wrong separator")]
    #[test_case("March 2021" ; "prose")]
    fn rejects_malformed_months(input: &str) {
        assert!(parse_year_month(input).is_none());
    }

    #[test]
    fn empty_is_an_accepted_month_value() {
        assert!(is_month_or_empty(""));
        assert!(is_month_or_empty("1999-12"));
        assert!(!is_month_or_empty("12-1999"));
    }
}
