use anyhow::{Context, Result};
use calmath_core::items::normalize_item;
use calmath_core::models::{CalendarItem, NormalizedCalendarItem};
use std::io::Read;
use std::path::Path;

use crate::cli::NormalizeCommand;

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read calendar items from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read calendar items from '{}'", path.display()))
    }
}

pub fn normalize_items(command: NormalizeCommand) -> Result<()> {
    let raw = read_input(&command.input)?;
    let items: Vec<CalendarItem> = serde_json::from_str(&raw).context("Calendar items must be a JSON array")?;
    tracing::debug!(count = items.len(), "Loaded calendar items");

    let normalized = items
        .iter()
        .map(|item| {
            let hovered = command.hovered.as_deref() == Some(item.id.as_str());
            normalize_item(item, hovered).with_context(|| format!("Item '{}' has an invalid date", item.id))
        })
        .collect::<Result<Vec<NormalizedCalendarItem<'_>>>>()?;

    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}
