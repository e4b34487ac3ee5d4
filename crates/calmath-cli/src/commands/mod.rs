pub mod locale;
pub mod names;
pub mod normalize;
pub mod period;
pub mod week;

use anyhow::Result;
use calmath_core::arithmetic::weekday_from_index;
use calmath_core::host::{HeadlessHost, Host, SystemHost};
use calmath_core::models::DateTimeFormatOption;
use chrono::Weekday;

use crate::cli::Cli;
use crate::config::Config;
use crate::util::parse_date;

/// Everything a command needs, resolved from config and global flags.
pub struct Settings {
    pub host: Box<dyn Host>,
    pub locale: String,
    pub start_of_week: Weekday,
    pub month_format: DateTimeFormatOption,
    pub weekday_format: DateTimeFormatOption,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let system = SystemHost::new();
        let host: Box<dyn Host> = if cli.plain || cli.today.is_some() {
            let now = match cli.today.as_deref() {
                Some(today) => parse_date(today)?,
                None => system.now(),
            };
            let mut headless = HeadlessHost::new(now);
            if let Some(languages) = system.preferred_languages() {
                headless = headless.with_languages(languages);
            }
            if !cli.plain {
                headless = headless.with_locale_formatting();
            }
            Box::new(headless)
        } else {
            Box::new(system)
        };

        let start_of_week = cli.start_of_week.unwrap_or(config.start_of_week);
        tracing::debug!(locale = ?cli.locale, start_of_week, plain = cli.plain, "Resolved settings");

        Ok(Self {
            host,
            locale: cli.locale.clone().unwrap_or_else(|| config.locale.clone()),
            start_of_week: weekday_from_index(start_of_week),
            month_format: config.month_format,
            weekday_format: config.weekday_format,
        })
    }
}
