use crate::modules::ticket_events::core::event::TicketEvent;
use crate::tests::fixtures::clock::fixed_now;

/// Canonical event instance for tests.
pub fn make_ticket_event(date: &str, title: &str) -> TicketEvent {
    TicketEvent::new(date, title.to_string(), fixed_now())
}
