use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use ticket_calendar::shared::infrastructure::key_value_store::redis_store::RedisKeyValueStore;
use ticket_calendar::shell::config::AppConfig;
use ticket_calendar::shell::http::router;
use ticket_calendar::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let store = Arc::new(RedisKeyValueStore::new(config.redis_url));
    let app = router(AppState::new(store.clone()));

    tracing::info!("Events API: http://{}/api/events", config.bind_addr);
    tracing::info!("Calendar feed: http://{}/calendar", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    store.quit().await;
    Ok(())
}
