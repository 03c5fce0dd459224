//! Agenda accessors

use kivu_domain::{CalendarEvent, EventInput, Record};

use crate::ports::{ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "calendar.event";

const FIELDS: &[&str] =
    &["id", "name", "start", "stop", "allday", "duration", "location", "description"];

pub async fn all_events(gateway: &dyn ErpGateway) -> Vec<CalendarEvent> {
    gateway
        .search_read(MODEL, FIELDS, Vec::new(), DEFAULT_LIMIT)
        .await
        .iter()
        .map(map_event)
        .collect()
}

pub fn map_event(record: &Record) -> CalendarEvent {
    CalendarEvent {
        id: record.id(),
        name: record.str_or("name", ""),
        start: record.str_or("start", ""),
        end: record.str_or("stop", ""),
        all_day: record.bool_or("allday", false),
        duration: record.f64_or("duration", 0.0),
        location: record.str_or("location", ""),
        description: record.str_or("description", ""),
    }
}

/// Write payload for the event creation form. Start is assembled into the
/// ERP's "YYYY-MM-DD HH:MM:SS" datetime format.
pub fn event_values(input: &EventInput) -> Record {
    Record::new()
        .with("name", input.title.as_str())
        .with("start", format!("{} {}:00", input.date, input.time))
        .with("duration", input.duration_hours)
        .with("location", input.location.as_str())
        .with("description", input.description.as_str())
        .with("allday", false)
}
