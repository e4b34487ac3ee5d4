//! Shared test fixtures.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;

pub fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    dt(y, m, d, 0, 0, 0)
}

prop_compose! {
    /// Whole-second date times between 1900 and 2099.
    pub fn arb_datetime()(year in 1900i32..2100, ordinal in 1u32..=365, secs in 0u32..86_400) -> NaiveDateTime {
        NaiveDate::from_yo_opt(year, ordinal)
            .unwrap()
            .and_time(NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap())
    }
}
