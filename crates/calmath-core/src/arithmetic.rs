//! Period boundaries and date arithmetic.
//!
//! Date-preserving operations keep the time of day of their input; the
//! month, year and increment helpers return midnight-stripped dates.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::CalendarError;
use crate::host::Host;
use crate::models::PeriodUnit;
use crate::parse::date_only;

pub const DAYS_PER_WEEK: i64 = 7;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Maps the 0=Sunday..6=Saturday convention onto [`Weekday`], modulo 7.
pub fn weekday_from_index(index: i64) -> Weekday {
    match index.rem_euclid(DAYS_PER_WEEK) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Current local date at midnight.
pub fn today(host: &dyn Host) -> NaiveDateTime {
    date_only(host.now())
}

/// Shifts `d` by whole days, keeping the time of day.
///
/// Saturates at [`NaiveDateTime::MIN`] and [`NaiveDateTime::MAX`].
pub fn add_days(d: NaiveDateTime, days: i64) -> NaiveDateTime {
    Duration::try_days(days)
        .and_then(|delta| d.checked_add_signed(delta))
        .unwrap_or_else(|| {
            tracing::trace!(date = %d, days, "Day shift out of range, saturating");
            if days < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            }
        })
}

/// Most recent `start_dow` at or before `d`, time preserved.
pub fn beginning_of_week(d: NaiveDateTime, start_dow: Weekday) -> NaiveDateTime {
    let current = i64::from(d.weekday().num_days_from_sunday());
    let start = i64::from(start_dow.num_days_from_sunday());
    // Floor modulo keeps the shift within -6..=0.
    add_days(d, -(current - start).rem_euclid(DAYS_PER_WEEK))
}

pub fn end_of_week(d: NaiveDateTime, start_dow: Weekday) -> NaiveDateTime {
    add_days(beginning_of_week(d, start_dow), DAYS_PER_WEEK)
}

/// The seven consecutive dates starting at `week_start`.
pub fn days_of_week(week_start: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> + Clone {
    (0..DAYS_PER_WEEK).map(move |i| add_days(week_start, i))
}

pub fn beginning_of_month(d: NaiveDateTime) -> NaiveDateTime {
    let first = d.date() - Duration::days(i64::from(d.day0()));
    first.and_time(NaiveTime::MIN)
}

fn beginning_of_year(d: NaiveDateTime) -> NaiveDateTime {
    let first = d.date() - Duration::days(i64::from(d.ordinal0()));
    first.and_time(NaiveTime::MIN)
}

pub fn beginning_of_period(d: NaiveDateTime, unit: PeriodUnit, start_dow: Weekday) -> NaiveDateTime {
    match unit {
        PeriodUnit::Year => beginning_of_year(d),
        PeriodUnit::Month => beginning_of_month(d),
        PeriodUnit::Week => beginning_of_week(d, start_dow),
        PeriodUnit::Passthrough => d,
    }
}

/// 1-based index of the 7-day block of the month containing `d`.
pub fn instance_of_month(d: NaiveDateTime) -> u32 {
    d.day().div_ceil(7)
}

/// Adds `count` years, months or weeks to `d`, returning a midnight date.
///
/// The day of month is carried over as is, so Jan 31 plus one month lands on
/// March 2 or 3. `count` may be negative.
pub fn increment_period(d: NaiveDateTime, unit: PeriodUnit, count: i64) -> Result<NaiveDateTime, CalendarError> {
    let year = i64::from(d.year());
    let month = i64::from(d.month0());
    let day = i64::from(d.day());
    let out_of_range = || CalendarError::OutOfRange { year, month, day };

    let (year, month, day) = match unit {
        PeriodUnit::Year => (year.checked_add(count).ok_or_else(out_of_range)?, month, day),
        PeriodUnit::Month => (year, month.checked_add(count).ok_or_else(out_of_range)?, day),
        PeriodUnit::Week => {
            let days = count.checked_mul(DAYS_PER_WEEK).ok_or_else(out_of_range)?;
            (year, month, day.checked_add(days).ok_or_else(out_of_range)?)
        }
        PeriodUnit::Passthrough => (year, month, day),
    };
    compose(year, month, day, 0)
}

pub fn is_last_instance_of_month(d: NaiveDateTime) -> bool {
    month_changes_within(d, DAYS_PER_WEEK as u64)
}

pub fn is_last_day_of_month(d: NaiveDateTime) -> bool {
    month_changes_within(d, 1)
}

/// True when `days` later falls in another month. The last representable
/// month always ends before any later date.
fn month_changes_within(d: NaiveDateTime, days: u64) -> bool {
    d.date()
        .checked_add_days(Days::new(days))
        .map_or(true, |later| later.month() != d.month())
}

/// Builds a local date from components that may overflow their natural range.
///
/// Excess months roll into years, excess days into months and `time_millis`
/// into days, so month 12 is January of the next year and day 0 is the last
/// day of the previous month.
pub(crate) fn compose(year: i64, month0: i64, day: i64, time_millis: i64) -> Result<NaiveDateTime, CalendarError> {
    let out_of_range = || CalendarError::OutOfRange { year, month: month0, day };

    let full_year = year
        .checked_add(month0.div_euclid(12))
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(out_of_range)?;
    // rem_euclid(12) is within 0..12
    let month = month0.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(full_year, month, 1).ok_or_else(out_of_range)?;

    let offset = day
        .checked_sub(1)
        .and_then(|d| d.checked_mul(MILLIS_PER_DAY))
        .and_then(|ms| ms.checked_add(time_millis))
        .and_then(Duration::try_milliseconds)
        .ok_or_else(out_of_range)?;

    first
        .and_time(NaiveTime::MIN)
        .checked_add_signed(offset)
        .ok_or_else(out_of_range)
}

/// Milliseconds from the given clock components, for [`compose`].
pub(crate) fn time_millis(hour: i64, minute: i64, second: i64, millis: i64) -> Option<i64> {
    hour.checked_mul(MILLIS_PER_HOUR)?
        .checked_add(minute.checked_mul(MILLIS_PER_MINUTE)?)?
        .checked_add(second.checked_mul(MILLIS_PER_SECOND)?)?
        .checked_add(millis)
}
