use axum::{extract::State, response::IntoResponse};

use crate::modules::ticket_events::adapters::inbound::http::{
    events_response, store_error_response,
};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.event_store.read_all().await {
        Ok(events) => events_response(events),
        Err(e) => store_error_response(e),
    }
}
