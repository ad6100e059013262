use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One ticket-sale calendar entry. The date doubles as the id, so the
/// collection holds at most one event per calendar day.
///
/// Field order is the persisted JSON field order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketEvent {
    pub id: String,
    pub date: String,
    pub title: String,
    /// Refreshed on every upsert, so in practice a last-modified stamp.
    pub created_at: String,
}

impl TicketEvent {
    pub fn new(date: &str, title: String, now: DateTime<Utc>) -> Self {
        Self {
            id: date.to_string(),
            date: date.to_string(),
            title,
            created_at: format_created_at(now),
        }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
pub fn format_created_at(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Stable ascending sort by date. `YYYY-MM-DD` sorts chronologically as text.
pub fn sort_by_date(events: &mut [TicketEvent]) {
    events.sort_by(|a, b| a.date.cmp(&b.date));
}
