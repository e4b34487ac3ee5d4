use anyhow::Result;
use calmath_core::format::formatted_period;
use calmath_core::locale::get_formatted_month_names;
use calmath_core::models::DateTimeFormatOption;

use crate::cli::PeriodCommand;
use crate::commands::Settings;
use crate::util::parse_date;

pub fn show_period(settings: &Settings, command: PeriodCommand) -> Result<()> {
    let start = parse_date(&command.start)?;
    let end = parse_date(&command.end)?;
    let months = get_formatted_month_names(settings.host.as_ref(), &settings.locale, DateTimeFormatOption::Long);

    println!("{}", formatted_period(start, end, command.unit, &months));
    Ok(())
}
