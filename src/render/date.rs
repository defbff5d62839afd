use crate::domain::month::parse_year_month;

/// Formats a `YYYY-MM` month as `Mon YYYY`, e.g. `2021-03` → `Mar 2021`.
///
/// Empty input gives an empty string. Anything unparsable is shown as-is.
#[must_use]
pub fn format_month(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    parse_year_month(value)
        .map_or_else(|| value.to_string(), |date| date.format("%b %Y").to_string())
}

/// Formats a date range, using `Present` as the end of a current entry.
#[must_use]
pub fn format_range(start: &str, end: &str, current: bool) -> String {
    let start = format_month(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_month(end)
    };
    format!("{start} - {end}")
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("2021-03", "Mar 2021")]
    #[test_case("1999-12", "Dec 1999")]
    #[test_case("", "")]
    #[test_case("someday", "someday")]
    fn months(input: &str, expected: &str) {
        assert_eq!(format_month(input), expected);
    }

    #[test_case("2019-01", "2021-06", false, "Jan 2019 - Jun 2021" ; "closed range")]
    #[test_case("2019-01", "2021-06", true, "Jan 2019 - Present" ; "current ignores end")]
    #[test_case("", "2021-06", false, " - Jun 2021" ; "missing start")]
    #[test_case("2019-01", "", false, "Jan 2019 - " ; "missing end")]
    #[test_case("", "", true, " - Present" ; "current without dates")]
    fn ranges(start: &str, end: &str, current: bool, expected: &str) {
        assert_eq!(format_range(start, end, current), expected);
    }
}
