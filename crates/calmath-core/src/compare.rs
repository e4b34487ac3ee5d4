//! Date comparison predicates.
//!
//! Predicates taking `Option` answer `false` when either side is absent.

use chrono::{Datelike, NaiveDateTime, NaiveTime};

use crate::arithmetic::{beginning_of_month, today, MILLIS_PER_DAY};
use crate::host::Host;
use crate::parse::date_only;

/// Milliseconds of the UTC midnight carrying `d`'s calendar date.
fn utc_midnight_millis(d: &NaiveDateTime) -> i64 {
    d.date().and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Whole days from `d1` to `d2`, ignoring the time of day.
///
/// Both dates are anchored to UTC midnights so that a daylight saving shift
/// between them cannot produce an off-by-one.
pub fn day_diff(d1: &NaiveDateTime, d2: &NaiveDateTime) -> i64 {
    (utc_midnight_millis(d2) - utc_midnight_millis(d1)) / MILLIS_PER_DAY
}

pub fn is_same_date(d1: Option<&NaiveDateTime>, d2: Option<&NaiveDateTime>) -> bool {
    matches!((d1, d2), (Some(a), Some(b)) if day_diff(a, b) == 0)
}

pub fn is_same_date_time(d1: Option<&NaiveDateTime>, d2: Option<&NaiveDateTime>) -> bool {
    matches!((d1, d2), (Some(a), Some(b)) if a == b)
}

pub fn is_same_month(d1: Option<&NaiveDateTime>, d2: Option<&NaiveDateTime>) -> bool {
    matches!((d1, d2), (Some(a), Some(b)) if a.year() == b.year() && a.month() == b.month())
}

pub fn is_past_month(d: NaiveDateTime, host: &dyn Host) -> bool {
    beginning_of_month(d) < beginning_of_month(today(host))
}

pub fn is_future_month(d: NaiveDateTime, host: &dyn Host) -> bool {
    beginning_of_month(d) > beginning_of_month(today(host))
}

pub fn is_in_past(d: NaiveDateTime, host: &dyn Host) -> bool {
    date_only(d) < today(host)
}

pub fn is_in_future(d: NaiveDateTime, host: &dyn Host) -> bool {
    date_only(d) > today(host)
}
