//! Host environment capabilities.
//!
//! Everything the toolkit needs from its surroundings (the clock, a locale
//! aware formatter and the user's language preferences) is queried through
//! [`Host`], so both the present and absent branches can be driven in tests.

use chrono::{Local, NaiveDateTime};

use crate::locale::{ChronoLocaleFormatter, LocaleFormatter};

pub trait Host {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// `None` when the host cannot format dates for a locale.
    fn locale_formatter(&self) -> Option<&dyn LocaleFormatter>;

    /// Preferred language tags, most preferred first. `None` when the host
    /// gives no language signal at all.
    fn preferred_languages(&self) -> Option<Vec<String>>;
}

/// Environment variables consulted for the user's language, in priority order.
const LANGUAGE_VARIABLES: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// The machine the process runs on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost {
    formatter: ChronoLocaleFormatter,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Host for SystemHost {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn locale_formatter(&self) -> Option<&dyn LocaleFormatter> {
        Some(&self.formatter)
    }

    fn preferred_languages(&self) -> Option<Vec<String>> {
        for var in LANGUAGE_VARIABLES {
            if let Ok(value) = std::env::var(var) {
                let tags: Vec<String> = value.split(':').filter_map(posix_to_language_tag).collect();
                if !tags.is_empty() {
                    return Some(tags);
                }
            }
        }
        tracing::debug!("No language set in the environment");
        None
    }
}

/// Converts a POSIX locale name (`en_US.UTF-8`, `de_DE@euro`) into a language
/// tag (`en-US`). The `C` and `POSIX` locales carry no language.
pub fn posix_to_language_tag(value: &str) -> Option<String> {
    let name = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    Some(name.replace('_', "-"))
}

/// A fixed, self-contained host for servers and tests.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    now: NaiveDateTime,
    formatter: Option<ChronoLocaleFormatter>,
    languages: Option<Vec<String>>,
}

impl HeadlessHost {
    /// A host frozen at `now` with no locale capability and no language.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            formatter: None,
            languages: None,
        }
    }

    pub fn with_locale_formatting(mut self) -> Self {
        self.formatter = Some(ChronoLocaleFormatter);
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }
}

impl Host for HeadlessHost {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn locale_formatter(&self) -> Option<&dyn LocaleFormatter> {
        self.formatter.as_ref().map(|f| f as &dyn LocaleFormatter)
    }

    fn preferred_languages(&self) -> Option<Vec<String>> {
        self.languages.clone()
    }
}
