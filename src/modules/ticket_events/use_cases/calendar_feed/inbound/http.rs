use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::ticket_events::adapters::inbound::http::store_error_response;
use crate::modules::ticket_events::use_cases::calendar_feed::encode::{
    CONTENT_DISPOSITION, CONTENT_TYPE, encode,
};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    let events = match state.event_store.read_all().await {
        Ok(events) => events,
        Err(e) => return store_error_response(e),
    };

    (
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, CONTENT_DISPOSITION),
            (header::CACHE_CONTROL, "no-store"),
        ],
        encode(&events, Utc::now()),
    )
        .into_response()
}
