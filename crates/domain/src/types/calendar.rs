//! Agenda view models

use serde::{Deserialize, Serialize};

/// A calendar event as rendered on the agenda page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub name: String,
    /// ERP datetime string ("YYYY-MM-DD HH:MM:SS"), empty when unset.
    pub start: String,
    pub end: String,
    pub all_day: bool,
    /// Duration in hours.
    pub duration: f64,
    pub location: String,
    pub description: String,
}

/// Fields accepted by the event creation form.
///
/// `date` is "YYYY-MM-DD" and `time` "HH:MM"; the catalog layer combines
/// them into the ERP's datetime format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub date: String,
    pub time: String,
    pub duration_hours: f64,
    pub location: String,
    pub description: String,
}
