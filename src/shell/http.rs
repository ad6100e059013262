use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::ticket_events::use_cases::calendar_feed::inbound::http as calendar_http;
use crate::modules::ticket_events::use_cases::list_events::inbound::http as list_http;
use crate::modules::ticket_events::use_cases::remove_event::inbound::http as remove_http;
use crate::modules::ticket_events::use_cases::upsert_event::inbound::http as upsert_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/events",
            get(list_http::handle)
                .post(upsert_http::handle)
                .delete(remove_http::handle),
        )
        .route("/calendar", get(calendar_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
