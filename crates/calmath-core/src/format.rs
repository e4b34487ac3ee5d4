//! Display strings for dates and date ranges.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::compare::is_same_month;
use crate::host::Host;
use crate::models::{PeriodUnit, TimeFormatOptions};

const EN_DASH: char = '\u{2013}';

pub fn padded_month(d: NaiveDateTime) -> String {
    format!("{:02}", d.month())
}

pub fn padded_day(d: NaiveDateTime) -> String {
    format!("{:02}", d.day())
}

/// `YYYY-MM`
pub fn iso_year_month(d: NaiveDateTime) -> String {
    format!("{}-{}", d.year(), padded_month(d))
}

/// `YYYY-MM-DD`
pub fn iso_year_month_day(d: NaiveDateTime) -> String {
    format!("{}-{}", iso_year_month(d), padded_day(d))
}

/// `MM-DD`
pub fn iso_month_day(d: NaiveDateTime) -> String {
    format!("{}-{}", padded_month(d), padded_day(d))
}

/// Time of day for display, or an empty string at exactly midnight, which
/// marks all-day items.
///
/// Without locale formatting on the host the result is a 24-hour `HH:MM`.
pub fn formatted_time(d: NaiveDateTime, locale: &str, options: &TimeFormatOptions, host: &dyn Host) -> String {
    if d.hour() == 0 && d.minute() == 0 && d.second() == 0 {
        return String::new();
    }
    match host.locale_formatter() {
        Some(formatter) => formatter.format_time(d, locale, options),
        None => {
            tracing::trace!("No locale formatting available, using 24-hour time");
            d.format("%H:%M").to_string()
        }
    }
}

/// Formats a date range in long English style.
///
/// ```text
/// May 2018
/// May – June 2018
/// December 2018 – January 2019
/// May 6 – 26, 2018
/// May 13 – June 2, 2018
/// December 16, 2018 – January 5, 2019
/// ```
///
/// Year and month units print month names only; every other unit prints the
/// days as well. Missing entries in `month_names` render as empty text.
pub fn formatted_period<S: AsRef<str>>(
    start: NaiveDateTime,
    end: NaiveDateTime,
    unit: PeriodUnit,
    month_names: &[S],
) -> String {
    let month_name = |d: NaiveDateTime| {
        month_names
            .get(d.month0() as usize)
            .map(|name| name.as_ref())
            .unwrap_or_default()
    };
    let single_year = start.year() == end.year();
    let single_month = is_same_month(Some(&start), Some(&end));
    let is_week = !matches!(unit, PeriodUnit::Year | PeriodUnit::Month);

    let mut s = String::from(month_name(start));
    if is_week {
        s.push_str(&format!(" {}", start.day()));
    }
    if !single_year {
        s.push_str(if is_week { ", " } else { " " });
        s.push_str(&start.year().to_string());
    }
    if !single_month || !single_year {
        s.push_str(&format!(" {EN_DASH} "));
        if !single_month {
            s.push_str(month_name(end));
        }
        if is_week {
            s.push(' ');
        }
    } else if is_week {
        s.push_str(&format!(" {EN_DASH} "));
    }
    if is_week {
        s.push_str(&format!("{}, ", end.day()));
    } else {
        s.push(' ');
    }
    s.push_str(&end.year().to_string());
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;
    use crate::testing::{date, dt};
    use rstest::rstest;

    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    #[test]
    fn test_padding_and_iso_strings() {
        let d = date(2018, 5, 6);
        assert_eq!(padded_month(d), "05");
        assert_eq!(padded_day(d), "06");
        assert_eq!(padded_day(date(2018, 12, 25)), "25");
        assert_eq!(iso_year_month(d), "2018-05");
        assert_eq!(iso_year_month_day(d), "2018-05-06");
        assert_eq!(iso_month_day(d), "05-06");
    }

    #[rstest]
    #[case(date(2018, 5, 1), date(2018, 5, 31), PeriodUnit::Month, "May 2018")]
    #[case(date(2018, 5, 1), date(2018, 6, 30), PeriodUnit::Month, "May \u{2013} June 2018")]
    #[case(date(2018, 12, 1), date(2019, 1, 31), PeriodUnit::Month, "December 2018 \u{2013} January 2019")]
    #[case(date(2018, 5, 6), date(2018, 5, 26), PeriodUnit::Week, "May 6 \u{2013} 26, 2018")]
    #[case(date(2018, 5, 13), date(2018, 6, 2), PeriodUnit::Week, "May 13 \u{2013} June 2, 2018")]
    #[case(date(2018, 12, 16), date(2019, 1, 5), PeriodUnit::Week, "December 16, 2018 \u{2013} January 5, 2019")]
    fn test_formatted_period_documented_layouts(
        #[case] start: NaiveDateTime,
        #[case] end: NaiveDateTime,
        #[case] unit: PeriodUnit,
        #[case] expected: &str,
    ) {
        assert_eq!(formatted_period(start, end, unit, &MONTHS), expected);
    }

    #[test]
    fn test_formatted_period_other_units() {
        assert_eq!(
            formatted_period(date(2018, 1, 1), date(2018, 12, 31), PeriodUnit::Year, &MONTHS),
            "January \u{2013} December 2018"
        );
        assert_eq!(
            formatted_period(date(2018, 5, 1), date(2018, 5, 1), PeriodUnit::Week, &MONTHS),
            "May 1 \u{2013} 1, 2018"
        );
        assert_eq!(
            formatted_period(date(2018, 5, 6), date(2018, 5, 12), PeriodUnit::Passthrough, &MONTHS),
            "May 6 \u{2013} 12, 2018"
        );
    }

    #[test]
    fn test_formatted_period_short_name_list() {
        let names = ["Jan"];
        assert_eq!(
            formatted_period(date(2018, 1, 1), date(2018, 2, 1), PeriodUnit::Month, &names),
            "Jan \u{2013}  2018"
        );
    }

    #[test]
    fn test_formatted_time_midnight_is_blank() {
        let host = HeadlessHost::new(date(2018, 5, 6)).with_locale_formatting();
        let options = TimeFormatOptions::default();
        assert_eq!(formatted_time(date(2018, 5, 6), "en-US", &options, &host), "");
    }

    #[test]
    fn test_formatted_time_fallback_without_locale() {
        let host = HeadlessHost::new(date(2018, 5, 6));
        let options = TimeFormatOptions::default();
        assert_eq!(formatted_time(dt(2018, 5, 6, 7, 5, 0), "en-US", &options, &host), "07:05");
        assert_eq!(formatted_time(dt(2018, 5, 6, 0, 0, 1), "en-US", &options, &host), "00:00");
    }

    #[test]
    fn test_formatted_time_with_locale() {
        let host = HeadlessHost::new(date(2018, 5, 6)).with_locale_formatting();
        let options = TimeFormatOptions {
            hour12: Some(false),
            seconds: true,
        };
        assert_eq!(formatted_time(dt(2018, 5, 6, 18, 30, 15), "fr-FR", &options, &host), "18:30:15");
    }
}
