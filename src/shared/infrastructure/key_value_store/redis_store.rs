use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::Mutex;

/// Redis-backed key-value store.
///
/// The connection is established lazily on first use and memoized. The slot is
/// guarded by an async mutex held across the connect, so concurrent first
/// callers share a single in-flight attempt instead of opening one each. A
/// failed attempt leaves the slot empty and the next call tries again.
pub struct RedisKeyValueStore {
    url: String,
    connection: Mutex<Option<ConnectionManager>>,
}

impl RedisKeyValueStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connection: Mutex::new(None),
        }
    }

    async fn connection(&self) -> Result<ConnectionManager, KeyValueStoreError> {
        let mut slot = self.connection.lock().await;
        if let Some(connection) = slot.as_ref() {
            return Ok(connection.clone());
        }

        let client = Client::open(self.url.as_str()).map_err(|e| {
            KeyValueStoreError::Unavailable(format!("Failed to create Redis client: {e}"))
        })?;
        let connection = ConnectionManager::new(client).await.map_err(|e| {
            tracing::error!(error = %e, "Redis connection failed");
            KeyValueStoreError::Unavailable(format!("Failed to connect to Redis: {e}"))
        })?;

        tracing::info!("Redis connection established");
        *slot = Some(connection.clone());
        Ok(connection)
    }

    /// Releases the memoized connection. The next operation reconnects.
    pub async fn quit(&self) {
        if self.connection.lock().await.take().is_some() {
            tracing::info!("Redis connection released");
        }
    }

    #[cfg(test)]
    pub(crate) async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_some()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError> {
        let mut connection = self.connection().await?;
        connection
            .get(key)
            .await
            .map_err(|e| KeyValueStoreError::Backend(format!("GET {key} failed: {e}")))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), KeyValueStoreError> {
        let mut connection = self.connection().await?;
        let _: () = connection
            .set(key, value)
            .await
            .map_err(|e| KeyValueStoreError::Backend(format!("SET {key} failed: {e}")))?;
        Ok(())
    }
}
