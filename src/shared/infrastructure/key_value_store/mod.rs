// Port for the shared key-value backing service.
//
// Values are raw bytes; decoding is up to the caller.
// The service is treated as a reliable get/set store. Atomic get and atomic
// set are assumed; there is no atomic read-modify-write across the two.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyValueStoreError {
    #[error("key-value store unavailable: {0}")]
    Unavailable(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError>;
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), KeyValueStoreError>;
}

pub mod in_memory;
pub mod redis_store;
