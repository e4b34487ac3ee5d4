//! Locale-aware names and the formatting back-end behind them.

use chrono::{Duration, Locale, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::host::Host;
use crate::models::{DateTimeFormatOption, TimeFormatOptions};

/// Returned by [`get_default_browser_locale`] when the host has no language.
pub const UNKNOWN_LOCALE: &str = "unk";

/// 2017 starts on a Sunday and is not a leap year.
const REFERENCE_SUNDAY: NaiveDate = match NaiveDate::from_ymd_opt(2017, 1, 1) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

/// Regions assumed for bare language tags whose `ll_LL` form is not a locale.
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "ar_SA"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("fa", "fa_IR"),
    ("he", "he_IL"),
    ("hi", "hi_IN"),
    ("ja", "ja_JP"),
    ("ko", "ko_KR"),
    ("nb", "nb_NO"),
    ("sv", "sv_SE"),
    ("uk", "uk_UA"),
    ("vi", "vi_VN"),
    ("zh", "zh_CN"),
];

/// Renders calendar values for a locale.
pub trait LocaleFormatter {
    fn format_month(&self, date: NaiveDate, locale: &str, format: DateTimeFormatOption) -> String;

    fn format_weekday(&self, date: NaiveDate, locale: &str, format: DateTimeFormatOption) -> String;

    fn format_time(&self, d: NaiveDateTime, locale: &str, options: &TimeFormatOptions) -> String;
}

/// [`LocaleFormatter`] backed by chrono's localized strftime tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoLocaleFormatter;

impl ChronoLocaleFormatter {
    fn render(d: NaiveDateTime, pattern: &str, locale: &str) -> String {
        d.and_utc()
            .format_localized(pattern, resolve_locale(locale))
            .to_string()
    }

    /// Whether the locale's own time format shows a 12-hour clock, judged by
    /// its day period marker appearing in `%X`.
    fn uses_hour12(locale: &str) -> bool {
        let afternoon = REFERENCE_SUNDAY.and_time(NaiveTime::MIN) + Duration::hours(13);
        let marker = Self::render(afternoon, "%p", locale);
        !marker.trim().is_empty() && Self::render(afternoon, "%X", locale).contains(marker.trim())
    }

    fn name(date: NaiveDate, long: &str, short: &str, locale: &str, format: DateTimeFormatOption) -> String {
        let d = date.and_time(NaiveTime::MIN);
        match format {
            DateTimeFormatOption::Long => Self::render(d, long, locale),
            DateTimeFormatOption::Short => Self::render(d, short, locale),
            DateTimeFormatOption::Narrow => Self::render(d, long, locale)
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
        }
    }
}

impl LocaleFormatter for ChronoLocaleFormatter {
    fn format_month(&self, date: NaiveDate, locale: &str, format: DateTimeFormatOption) -> String {
        Self::name(date, "%B", "%b", locale, format)
    }

    fn format_weekday(&self, date: NaiveDate, locale: &str, format: DateTimeFormatOption) -> String {
        Self::name(date, "%A", "%a", locale, format)
    }

    fn format_time(&self, d: NaiveDateTime, locale: &str, options: &TimeFormatOptions) -> String {
        let hour12 = options.hour12.unwrap_or_else(|| Self::uses_hour12(locale));
        let pattern = match (hour12, options.seconds) {
            (true, true) => "%-I:%M:%S %p",
            (true, false) => "%-I:%M %p",
            (false, true) => "%H:%M:%S",
            (false, false) => "%H:%M",
        };
        // Locales without day period markers leave `%p` empty.
        Self::render(d, pattern, locale).trim_end().to_string()
    }
}

/// Maps a language tag such as `fr`, `fr-CA` or `pt_BR` onto a chrono locale.
///
/// Unknown tags fall back to `POSIX`, whose names are English.
pub fn resolve_locale(tag: &str) -> Locale {
    let posix = tag.replace('-', "_");
    let mut parts = posix.splitn(2, '_');
    let language = parts.next().unwrap_or_default().to_lowercase();
    let region = parts.next().map(str::to_uppercase);

    let candidates = [
        region.map(|r| format!("{language}_{r}")),
        DEFAULT_REGIONS
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, locale)| (*locale).to_string()),
        Some(format!("{language}_{}", language.to_uppercase())),
    ];
    for candidate in candidates.into_iter().flatten() {
        if let Ok(locale) = Locale::try_from(candidate.as_str()) {
            return locale;
        }
    }
    tracing::debug!(locale = tag, "Unknown locale, falling back to POSIX");
    Locale::POSIX
}

/// First two characters of a locale identifier.
pub fn language_code(locale: &str) -> &str {
    locale
        .char_indices()
        .nth(2)
        .map_or(locale, |(end, _)| &locale[..end])
}

pub fn supports_intl(host: &dyn Host) -> bool {
    host.locale_formatter().is_some()
}

/// The twelve month names, January first. Blank when the host cannot format.
pub fn get_formatted_month_names(host: &dyn Host, locale: &str, format: DateTimeFormatOption) -> [String; 12] {
    let Some(formatter) = host.locale_formatter() else {
        tracing::debug!("No locale formatting available, month names left blank");
        return std::array::from_fn(|_| String::new());
    };
    std::array::from_fn(|i| {
        formatter.format_month(REFERENCE_SUNDAY + Months::new(i as u32), locale, format)
    })
}

/// The seven weekday names beginning with `starting_day`. Blank when the host
/// cannot format.
pub fn get_formatted_weekday_names(
    host: &dyn Host,
    locale: &str,
    format: DateTimeFormatOption,
    starting_day: Weekday,
) -> [String; 7] {
    let Some(formatter) = host.locale_formatter() else {
        tracing::debug!("No locale formatting available, weekday names left blank");
        return std::array::from_fn(|_| String::new());
    };
    let offset = starting_day.num_days_from_sunday() as usize;
    std::array::from_fn(|i| {
        let day = REFERENCE_SUNDAY + Duration::days(((i + offset) % 7) as i64);
        formatter.format_weekday(day, locale, format)
    })
}

/// The host's preferred language tag in lower case, or [`UNKNOWN_LOCALE`].
pub fn get_default_browser_locale(host: &dyn Host) -> String {
    host.preferred_languages()
        .and_then(|languages| languages.into_iter().find(|l| !l.is_empty()))
        .map(|l| l.to_lowercase())
        .unwrap_or_else(|| UNKNOWN_LOCALE.to_string())
}
