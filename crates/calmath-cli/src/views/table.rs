use calmath_core::arithmetic::{instance_of_month, is_last_day_of_month, today};
use calmath_core::compare::{is_in_past, is_same_date};
use calmath_core::format::iso_year_month_day;
use calmath_core::host::Host;
use chrono::NaiveDateTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};

#[derive(Debug, Clone)]
pub struct ViewDay {
    pub date: NaiveDateTime,
    pub name: String,
    pub is_today: bool,
    pub is_past: bool,
    pub is_last_day_of_month: bool,
    pub instance: u32,
}

impl ViewDay {
    pub fn new(date: NaiveDateTime, name: String, host: &dyn Host) -> Self {
        Self {
            date,
            name,
            is_today: is_same_date(Some(&date), Some(&today(host))),
            is_past: is_in_past(date, host),
            is_last_day_of_month: is_last_day_of_month(date),
            instance: instance_of_month(date),
        }
    }
}

pub fn display_week(days: &[ViewDay]) {
    let mut table = Table::new();
    table.set_header(vec!["Day", "Date", "Week of month", "Notes"]);

    for day in days {
        let mut row = Row::new();

        let mut name_cell = Cell::new(&day.name);
        let mut date_cell = Cell::new(iso_year_month_day(day.date));
        if day.is_today {
            name_cell = name_cell.fg(Color::Yellow).add_attribute(Attribute::Bold);
            date_cell = date_cell.fg(Color::Yellow).add_attribute(Attribute::Bold);
        } else if day.is_past {
            date_cell = date_cell.fg(Color::DarkGrey);
        }
        row.add_cell(name_cell);
        row.add_cell(date_cell);
        row.add_cell(Cell::new(day.instance));

        let mut notes = Vec::new();
        if day.is_today {
            notes.push("today");
        }
        if day.is_last_day_of_month {
            notes.push("month end");
        }
        row.add_cell(Cell::new(notes.join(", ")));
        table.add_row(row);
    }

    println!("{table}");
}
