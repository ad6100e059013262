// iCalendar (RFC 5545) rendering of the event collection.
//
// Field names and fixed tokens are the contract with subscribed calendar
// clients and must not change.

use crate::modules::ticket_events::core::event::TicketEvent;
use chrono::{DateTime, Utc};

pub const CALENDAR_NAME: &str = "VfL Bockum Tickets";
pub const PRODUCT_ID: &str = "-//VfL Bockum Tickets//DE";
pub const UID_SUFFIX: &str = "@vfl-bockum-tickets";
pub const DISPLAY_TIMEZONE: &str = "Europe/Berlin";

pub const CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
pub const CONTENT_DISPOSITION: &str = "inline; filename=\"vfl-bockum-tickets.ics\"";

/// Backslash goes first so the escapes added for the other characters are not escaped again.
pub fn escape_text(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

pub fn to_ics_date(date: &str) -> String {
    date.replace('-', "")
}

pub fn to_ics_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Renders `events` in the given order. Every entry shares the same `DTSTAMP`.
pub fn encode(events: &[TicketEvent], generated_at: DateTime<Utc>) -> String {
    let stamp = to_ics_timestamp(generated_at);
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        format!("PRODID:{PRODUCT_ID}"),
        "VERSION:2.0".into(),
        "CALSCALE:GREGORIAN".into(),
        "METHOD:PUBLISH".into(),
        format!("NAME:{CALENDAR_NAME}"),
        format!("X-WR-CALNAME:{CALENDAR_NAME}"),
        format!("X-WR-TIMEZONE:{DISPLAY_TIMEZONE}"),
    ];

    for event in events {
        lines.push("BEGIN:VEVENT".into());
        lines.push(format!("UID:{}{UID_SUFFIX}", event.id));
        lines.push(format!("DTSTAMP:{stamp}"));
        lines.push(format!("DTSTART;VALUE=DATE:{}", to_ics_date(&event.date)));
        lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
        lines.push("STATUS:CONFIRMED".into());
        lines.push("END:VEVENT".into());
    }

    lines.push("END:VCALENDAR".into());
    lines.join("\n")
}
