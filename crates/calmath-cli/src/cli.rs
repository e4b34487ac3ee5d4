use calmath_core::models::{DateTimeFormatOption, PeriodUnit};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Calendar math from the command line: week and month ranges, locale names
/// and calendar item normalization
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Locale for names and times (e.g. 'en-US', 'fr-FR')
    #[clap(long, global = true)]
    pub locale: Option<String>,
    /// First day of the week, 0 = Sunday .. 6 = Saturday
    #[clap(long, global = true)]
    pub start_of_week: Option<i64>,
    /// Pretend today is this date (ISO format)
    #[clap(long, global = true)]
    pub today: Option<String>,
    /// Disable locale-aware formatting
    #[clap(long, global = true)]
    pub plain: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Format a date range as a label
    Period(PeriodCommand),
    /// Show the days of a week
    Week(WeekCommand),
    /// List month or weekday names
    Names(NamesCommand),
    /// Normalize calendar items from a JSON file
    Normalize(NormalizeCommand),
    /// Show the detected locale
    Locale,
}

#[derive(Parser, Debug, Clone)]
pub struct PeriodCommand {
    /// First date of the range
    pub start: String,
    /// Last date of the range
    pub end: String,
    /// Period unit: year, month or week (anything else shows days like week)
    #[clap(short, long, default_value = "week")]
    pub unit: PeriodUnit,
}

#[derive(Parser, Debug, Clone)]
pub struct WeekCommand {
    /// Any date within the week, defaults to today
    pub date: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Month,
    Weekday,
}

#[derive(Parser, Debug, Clone)]
pub struct NamesCommand {
    /// Which names to list
    #[clap(long, value_enum, default_value = "month")]
    pub kind: NameKind,
    /// Name style: long, short or narrow
    #[clap(short, long)]
    pub format: Option<DateTimeFormatOption>,
}

#[derive(Parser, Debug, Clone)]
pub struct NormalizeCommand {
    /// JSON file holding an array of calendar items, or '-' for stdin
    pub input: PathBuf,
    /// Id of the item to mark as hovered
    #[clap(long)]
    pub hovered: Option<String>,
}
