use anyhow::Result;
use calmath_core::locale::{get_default_browser_locale, language_code, supports_intl};

use crate::commands::Settings;

pub fn show_locale(settings: &Settings) -> Result<()> {
    let host = settings.host.as_ref();
    let detected = get_default_browser_locale(host);

    println!("Detected locale: {}", detected);
    println!("Active locale:   {}", settings.locale);
    println!("Language:        {}", language_code(&settings.locale));
    println!(
        "Locale formatting: {}",
        if supports_intl(host) { "available" } else { "unavailable" }
    );
    Ok(())
}
