use anyhow::Result;
use calmath_core::arithmetic::{add_days, beginning_of_week, days_of_week, end_of_week, today};
use calmath_core::format::formatted_period;
use calmath_core::locale::{get_formatted_month_names, get_formatted_weekday_names};
use calmath_core::models::PeriodUnit;
use owo_colors::OwoColorize;

use crate::cli::WeekCommand;
use crate::commands::Settings;
use crate::util::parse_date;
use crate::views::table::{display_week, ViewDay};

pub fn show_week(settings: &Settings, command: WeekCommand) -> Result<()> {
    let host = settings.host.as_ref();
    let anchor = match command.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => today(host),
    };

    let week_start = beginning_of_week(anchor, settings.start_of_week);
    let week_end = add_days(end_of_week(anchor, settings.start_of_week), -1);
    let months = get_formatted_month_names(host, &settings.locale, settings.month_format);
    let names = get_formatted_weekday_names(host, &settings.locale, settings.weekday_format, settings.start_of_week);

    let days: Vec<ViewDay> = days_of_week(week_start)
        .zip(names)
        .map(|(date, name)| ViewDay::new(date, name, host))
        .collect();

    println!("{}", formatted_period(week_start, week_end, PeriodUnit::Week, &months).bold());
    display_week(&days);
    Ok(())
}
