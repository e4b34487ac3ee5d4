use anyhow::Result;
use calmath_core::locale::{get_formatted_month_names, get_formatted_weekday_names};

use crate::cli::{NameKind, NamesCommand};
use crate::commands::Settings;

pub fn list_names(settings: &Settings, command: NamesCommand) -> Result<()> {
    let host = settings.host.as_ref();
    let names: Vec<String> = match command.kind {
        NameKind::Month => {
            let format = command.format.unwrap_or(settings.month_format);
            get_formatted_month_names(host, &settings.locale, format).into()
        }
        NameKind::Weekday => {
            let format = command.format.unwrap_or(settings.weekday_format);
            get_formatted_weekday_names(host, &settings.locale, format, settings.start_of_week).into()
        }
    };

    for name in names {
        println!("{name}");
    }
    Ok(())
}
