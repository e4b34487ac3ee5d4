use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of calendar navigation.
///
/// Strings other than `year`, `month` and `week` map to [`PeriodUnit::Passthrough`],
/// which leaves dates untouched in boundary and increment operations and is
/// treated as week-like by the range formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Year,
    Month,
    Week,
    #[default]
    #[serde(other)]
    Passthrough,
}

impl From<&str> for PeriodUnit {
    fn from(s: &str) -> Self {
        match s {
            "year" => PeriodUnit::Year,
            "month" => PeriodUnit::Month,
            "week" => PeriodUnit::Week,
            _ => {
                tracing::trace!(unit = s, "Unrecognized period unit, using passthrough");
                PeriodUnit::Passthrough
            }
        }
    }
}

impl FromStr for PeriodUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PeriodUnit::from(s))
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodUnit::Year => "year",
            PeriodUnit::Month => "month",
            PeriodUnit::Week => "week",
            PeriodUnit::Passthrough => "passthrough",
        };
        f.write_str(name)
    }
}

/// Style for locale month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeFormatOption {
    #[default]
    Long,
    Short,
    Narrow,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Invalid format option: {0}")]
pub struct ParseFormatOptionError(String);

impl FromStr for DateTimeFormatOption {
    type Err = ParseFormatOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(DateTimeFormatOption::Long),
            "short" => Ok(DateTimeFormatOption::Short),
            "narrow" => Ok(DateTimeFormatOption::Narrow),
            _ => Err(ParseFormatOptionError(s.to_string())),
        }
    }
}

/// Options forwarded to the locale formatter when rendering a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormatOptions {
    /// `None` uses the locale's own clock convention.
    pub hour12: Option<bool>,
    pub seconds: bool,
}

impl Default for TimeFormatOptions {
    fn default() -> Self {
        Self {
            hour12: None,
            seconds: true,
        }
    }
}

/// A date-like value accepted from calendar items.
///
/// Deserialization tries a full timestamp, then a bare date, and keeps any
/// other string as text for the lenient ISO parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemDate {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Text(String),
}

impl ItemDate {
    /// Empty text counts as absent.
    pub fn is_blank(&self) -> bool {
        matches!(self, ItemDate::Text(s) if s.is_empty())
    }
}

impl From<NaiveDateTime> for ItemDate {
    fn from(d: NaiveDateTime) -> Self {
        ItemDate::DateTime(d)
    }
}

impl From<NaiveDate> for ItemDate {
    fn from(d: NaiveDate) -> Self {
        ItemDate::Date(d)
    }
}

impl From<&str> for ItemDate {
    fn from(s: &str) -> Self {
        ItemDate::Text(s.to_string())
    }
}

impl From<String> for ItemDate {
    fn from(s: String) -> Self {
        ItemDate::Text(s)
    }
}

/// Style classes attached to a raw calendar item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemClasses {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl ItemClasses {
    /// Fresh list of class names. A single string is split on whitespace.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ItemClasses::None => Vec::new(),
            ItemClasses::Single(s) => s.split_whitespace().map(str::to_string).collect(),
            ItemClasses::Many(v) => v.clone(),
        }
    }
}

impl From<Vec<String>> for ItemClasses {
    fn from(v: Vec<String>) -> Self {
        ItemClasses::Many(v)
    }
}

impl From<&str> for ItemClasses {
    fn from(s: &str) -> Self {
        ItemClasses::Single(s.to_string())
    }
}

/// A user-supplied calendar entry, as handed over by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItem {
    pub id: String,
    pub start_date: ItemDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<ItemDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub classes: ItemClasses,
}

impl CalendarItem {
    pub fn new(id: impl Into<String>, start_date: impl Into<ItemDate>) -> Self {
        Self {
            id: id.into(),
            start_date: start_date.into(),
            end_date: None,
            title: None,
            url: None,
            classes: ItemClasses::None,
        }
    }
}

/// Render-ready form of a [`CalendarItem`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCalendarItem<'a> {
    #[serde(skip)]
    pub original_item: &'a CalendarItem,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub classes: Vec<String>,
    pub title: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
