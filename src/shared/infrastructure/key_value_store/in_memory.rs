// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support store and HTTP tests and local development without Redis.
//
// Test knobs
// - `toggle_offline` makes every call fail as if the backing service were unreachable.
// - `set_delay_get_ms` delays `get` after the value was read, so concurrent
//   read-modify-write cycles can be forced to overlap.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
    offline: AtomicBool,
    delay_get_ms: AtomicU64,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_get_ms(&self, ms: u64) {
        self.delay_get_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), KeyValueStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(KeyValueStoreError::Unavailable(
                "Key-value store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError> {
        self.ensure_online()?;
        let value = self.inner.read().await.get(key).cloned();
        let delay = self.delay_get_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), KeyValueStoreError> {
        self.ensure_online()?;
        self.inner
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
