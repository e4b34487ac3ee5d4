use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Raw components as supplied; `month` is 0-based and may overflow.
    #[error("Date out of range: year {year}, month {month}, day {day}")]
    OutOfRange { year: i64, month: i64, day: i64 },

    #[error("Invalid date component: {0}")]
    InvalidComponent(String),
}
