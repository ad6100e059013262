use axum::{
    Json,
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::modules::ticket_events::adapters::outbound::event_store::EventStoreError;
use crate::modules::ticket_events::core::event::TicketEvent;

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<TicketEvent>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn events_response(events: Vec<TicketEvent>) -> Response {
    Json(EventsResponse { events }).into_response()
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Validation failures are shown to the user; everything else is a server error.
pub fn store_error_response(error: EventStoreError) -> Response {
    match error {
        EventStoreError::InvalidDate => error_response(StatusCode::BAD_REQUEST, error.to_string()),
        EventStoreError::Store(e) => {
            tracing::error!(error = %e, "event store operation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Lenient body parsing: a body that is not JSON counts as an empty object.
pub fn parse_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// A field only counts when it is a JSON string.
pub fn string_field<'a>(body: &'a Value, name: &str) -> Option<&'a str> {
    body.get(name).and_then(Value::as_str)
}
