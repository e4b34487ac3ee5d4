use calmath_core::host::SystemHost;
use calmath_core::locale::{get_default_browser_locale, UNKNOWN_LOCALE};
use calmath_core::models::DateTimeFormatOption;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "calmath.toml";
pub const ENV_PREFIX: &str = "CALMATH_";

/// Locale used when the system gives no language.
const FALLBACK_LOCALE: &str = "en-us";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    /// Language tag for month, weekday and time formatting
    pub locale: String,
    /// First day of the week, 0 = Sunday .. 6 = Saturday
    pub start_of_week: i64,
    pub month_format: DateTimeFormatOption,
    pub weekday_format: DateTimeFormatOption,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: detect_system_locale(),
            start_of_week: 0,
            month_format: DateTimeFormatOption::Long,
            weekday_format: DateTimeFormatOption::Short,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }
}

/// The host's preferred language, or `en-us` when it has none.
pub fn detect_system_locale() -> String {
    let locale = get_default_browser_locale(&SystemHost::new());
    if locale == UNKNOWN_LOCALE {
        FALLBACK_LOCALE.to_string()
    } else {
        locale
    }
}
