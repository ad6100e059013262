use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::ticket_events::adapters::inbound::http::{
    error_response, events_response, parse_body, store_error_response, string_field,
};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let body = parse_body(&body);
    let Some(date) = string_field(&body, "date").filter(|d| !d.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "date required");
    };

    match state.event_store.remove(date).await {
        Ok(events) => events_response(events),
        Err(e) => store_error_response(e),
    }
}
