use chrono::{NaiveDateTime, NaiveTime};

use crate::arithmetic::{compose, time_millis};
use crate::error::CalendarError;
use crate::models::ItemDate;

/// Year, month, day, hour, minute, second, millisecond.
const ISO_COMPONENTS: usize = 7;

/// Reads an ISO-like string as local time.
///
/// The string is split on every non-digit character and the first seven
/// pieces are taken as year, month (1-based), day, hour, minute, second and
/// milliseconds. Missing or empty pieces count as zero and out-of-range values
/// overflow into the next larger unit, so no shape is rejected outright.
///
/// Letters such as a trailing `Z` only separate pieces. Offset digits are not
/// treated specially: in `10:20:30+02:00` the `02` lands in the millisecond
/// slot and everything after the seventh piece is dropped.
pub fn from_iso_string_to_local_date(s: &str) -> Result<NaiveDateTime, CalendarError> {
    let mut parts = [0i64; ISO_COMPONENTS];
    for (slot, piece) in parts
        .iter_mut()
        .zip(s.split(|c: char| !c.is_ascii_digit()).take(ISO_COMPONENTS))
    {
        if !piece.is_empty() {
            *slot = piece
                .parse()
                .map_err(|_| CalendarError::InvalidComponent(piece.to_string()))?;
        }
    }
    let [year, month, day, hour, minute, second, millis] = parts;
    tracing::trace!(input = s, ?parts, "Parsed ISO components");

    let time = time_millis(hour, minute, second, millis)
        .ok_or_else(|| CalendarError::InvalidComponent(s.to_string()))?;
    compose(year, month - 1, day, time)
}

/// Coerces any accepted date shape into a local date time.
pub fn to_local_date(d: &ItemDate) -> Result<NaiveDateTime, CalendarError> {
    match d {
        ItemDate::Text(s) => from_iso_string_to_local_date(s),
        ItemDate::DateTime(dt) => Ok(*dt),
        ItemDate::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
    }
}

/// Copy of `d` at midnight.
pub fn date_only(d: NaiveDateTime) -> NaiveDateTime {
    d.date().and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::iso_year_month_day;
    use crate::testing::dt;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("2018-05-06", dt(2018, 5, 6, 0, 0, 0))]
    #[case("2018-05-06T10:20:30", dt(2018, 5, 6, 10, 20, 30))]
    #[case("2018-05-06T10:20:30Z", dt(2018, 5, 6, 10, 20, 30))]
    #[case("2018/05/06 07h45", dt(2018, 5, 6, 7, 45, 0))]
    #[case("2018-05", dt(2018, 5, 1, 0, 0, 0) - chrono::Duration::days(1))]
    #[case("2018-13-01", dt(2019, 1, 1, 0, 0, 0))]
    #[case("2018-02-30", dt(2018, 3, 2, 0, 0, 0))]
    fn test_from_iso_string(#[case] input: &str, #[case] expected: NaiveDateTime) {
        assert_eq!(from_iso_string_to_local_date(input).unwrap(), expected);
    }

    #[test]
    fn test_from_iso_string_milliseconds() {
        let parsed = from_iso_string_to_local_date("2018-05-06T10:20:30.250").unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 5, 6)
            .unwrap()
            .and_hms_milli_opt(10, 20, 30, 250)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_from_iso_string_offset_digits_fill_milliseconds() {
        let parsed = from_iso_string_to_local_date("2018-05-06T10:20:30+02:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 5, 6)
            .unwrap()
            .and_hms_milli_opt(10, 20, 30, 2)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_from_iso_string_consecutive_separators_yield_zero() {
        // The empty piece between "06" and "T10" is the hour.
        assert_eq!(
            from_iso_string_to_local_date("2018-05-06 T10").unwrap(),
            dt(2018, 5, 6, 0, 10, 0)
        );
    }

    #[test]
    fn test_from_iso_string_rejects_unrepresentable() {
        assert!(matches!(
            from_iso_string_to_local_date("99999999999999999999-01-01"),
            Err(CalendarError::InvalidComponent(_))
        ));
        assert!(matches!(
            from_iso_string_to_local_date("9999999-01-01"),
            Err(CalendarError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_to_local_date_shapes() {
        let expected = dt(2018, 5, 6, 0, 0, 0);
        assert_eq!(to_local_date(&ItemDate::from("2018-05-06")).unwrap(), expected);
        assert_eq!(to_local_date(&ItemDate::from(expected.date())).unwrap(), expected);
        assert_eq!(to_local_date(&ItemDate::from(expected)).unwrap(), expected);
    }

    #[test]
    fn test_date_only_leaves_input_untouched() {
        let original = dt(2018, 5, 6, 23, 59, 59);
        let stripped = date_only(original);
        assert_eq!(stripped, dt(2018, 5, 6, 0, 0, 0));
        assert_eq!(original, dt(2018, 5, 6, 23, 59, 59));
    }

    proptest! {
        #[test]
        fn prop_iso_round_trip(year in 1000i32..9999, ordinal in 1u32..=365, secs in 0u32..86_400) {
            let d = NaiveDate::from_yo_opt(year, ordinal)
                .unwrap()
                .and_time(NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap());
            let parsed = from_iso_string_to_local_date(&iso_year_month_day(d)).unwrap();
            prop_assert_eq!(parsed, date_only(d));
        }
    }
}
