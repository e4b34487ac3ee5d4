//! # Calmath Core Library
//!
//! Stateless calendar math for calendar views: period boundaries, week and
//! month iteration, date comparison, display formatting for dates and date
//! ranges, locale month and weekday names, and normalization of user supplied
//! calendar items into a render-ready shape.
//!
//! Dates are `chrono::NaiveDateTime` values read as local wall-clock time.
//! Everything that depends on the surrounding environment (the clock, locale
//! formatting, language preferences) goes through the [`host::Host`] trait.
//!
//! ## Core Modules
//!
//! - [`arithmetic`]: Period boundaries, day and period increments
//! - [`compare`]: Same-day, same-month, past and future predicates
//! - [`format`]: Padded and ISO strings, time of day, range labels
//! - [`locale`]: Locale names and the formatting back-end
//! - [`parse`]: Lenient ISO parsing and date coercion
//! - [`items`]: Calendar item normalization
//! - [`host`]: Host environment capabilities
//! - [`models`]: Shared data types
//! - [`error`]: Error type
//!
//! ## Example Usage
//!
//! ```rust
//! use calmath_core::{
//!     arithmetic::{beginning_of_period, end_of_week},
//!     format::formatted_period,
//!     host::HeadlessHost,
//!     locale::get_formatted_month_names,
//!     models::{DateTimeFormatOption, PeriodUnit},
//!     parse::from_iso_string_to_local_date,
//! };
//! use chrono::Weekday;
//!
//! let host = HeadlessHost::new(from_iso_string_to_local_date("2018-05-09").unwrap())
//!     .with_locale_formatting();
//! let months = get_formatted_month_names(&host, "en-US", DateTimeFormatOption::Long);
//!
//! let day = from_iso_string_to_local_date("2018-05-09T10:00").unwrap();
//! let start = beginning_of_period(day, PeriodUnit::Week, Weekday::Sun);
//! let end = end_of_week(day, Weekday::Sun) - chrono::Duration::days(1);
//!
//! assert_eq!(formatted_period(start, end, PeriodUnit::Week, &months), "May 6 \u{2013} 12, 2018");
//! ```

pub mod arithmetic;
pub mod compare;
pub mod error;
pub mod format;
pub mod host;
pub mod items;
pub mod locale;
pub mod models;
pub mod parse;

#[cfg(test)]
pub(crate) mod testing;
