use crate::error::CalendarError;
use crate::models::{CalendarItem, NormalizedCalendarItem};
use crate::parse::to_local_date;

/// Title given to items that have none.
pub const UNTITLED: &str = "Untitled";

/// Class appended while any part of an item is hovered.
pub const HOVERED_CLASS: &str = "isHovered";

/// Converts a raw item into its render-ready form.
///
/// The class list is always a fresh vector and the item's own classes are
/// never touched. The end date falls back to the start date. The id is copied
/// verbatim: consumers key on it, so it is never generated here.
pub fn normalize_item(item: &CalendarItem, is_hovered: bool) -> Result<NormalizedCalendarItem<'_>, CalendarError> {
    let mut classes = item.classes.to_vec();
    if is_hovered {
        classes.push(HOVERED_CLASS.to_string());
    }

    let start_date = to_local_date(&item.start_date)?;
    let end_date = match item.end_date.as_ref().filter(|d| !d.is_blank()) {
        Some(end) => to_local_date(end)?,
        None => start_date,
    };

    let title = match item.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => UNTITLED.to_string(),
    };

    Ok(NormalizedCalendarItem {
        original_item: item,
        start_date,
        end_date,
        classes,
        title,
        id: item.id.clone(),
        url: item.url.clone(),
    })
}
