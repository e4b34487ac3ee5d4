use anyhow::{Context, Result};
use calmath_core::parse::from_iso_string_to_local_date;
use chrono::NaiveDateTime;

pub fn parse_date(input: &str) -> Result<NaiveDateTime> {
    from_iso_string_to_local_date(input).with_context(|| format!("Invalid date '{}'", input))
}
