use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::ticket_events::adapters::inbound::http::{
    error_response, events_response, parse_body, store_error_response, string_field,
};
use crate::shell::state::AppState;

/// Body: `{"date": "YYYY-MM-DD", "title": "..."}`. A non-string title counts as absent.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let body = parse_body(&body);
    let Some(date) = string_field(&body, "date").filter(|d| !d.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "date required");
    };
    let title = string_field(&body, "title");

    match state.event_store.upsert(date, title).await {
        Ok(events) => events_response(events),
        Err(e) => store_error_response(e),
    }
}
