// Event store over a single key of the key-value backing service.
//
// Every operation reads the whole collection, mutates it in memory and writes
// it back whole. Nothing makes the read and the write atomic together, so two
// concurrent mutations can both start from the same snapshot and the later
// write wins.

use crate::modules::ticket_events::core::event::{TicketEvent, sort_by_date};
use crate::modules::ticket_events::core::validation::{is_valid_date, normalize_title};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

pub const EVENTS_KEY: &str = "events";

pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("Invalid date format, expected YYYY-MM-DD")]
    InvalidDate,

    #[error(transparent)]
    Store(#[from] KeyValueStoreError),
}

pub struct EventStore<TKeyValueStore>
where
    TKeyValueStore: KeyValueStore + ?Sized,
{
    store: Arc<TKeyValueStore>,
    clock: Clock,
}

impl<TKeyValueStore> EventStore<TKeyValueStore>
where
    TKeyValueStore: KeyValueStore + ?Sized,
{
    pub fn new(store: Arc<TKeyValueStore>) -> Self {
        Self {
            store,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// A missing, unparseable (including non-UTF-8) or wrongly shaped blob reads
    /// as an empty collection.
    pub async fn read_all(&self) -> Result<Vec<TicketEvent>, EventStoreError> {
        let Some(raw) = self.store.get(EVENTS_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice::<Vec<TicketEvent>>(&raw) {
            Ok(events) => Ok(events),
            Err(e) => {
                tracing::warn!(error = %e, "stored events are malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub async fn write_all(&self, events: &[TicketEvent]) -> Result<(), EventStoreError> {
        let raw = serde_json::to_vec(events)
            .map_err(|e| KeyValueStoreError::Backend(format!("serialize events: {e}")))?;
        self.store.set(EVENTS_KEY, &raw).await?;
        tracing::info!(count = events.len(), "events persisted");
        Ok(())
    }

    pub async fn upsert(
        &self,
        date: &str,
        title: Option<&str>,
    ) -> Result<Vec<TicketEvent>, EventStoreError> {
        if !is_valid_date(date) {
            return Err(EventStoreError::InvalidDate);
        }
        let mut events = self.read_all().await?;
        let next = TicketEvent::new(date, normalize_title(title), (self.clock)());

        match events.iter_mut().find(|e| e.id == date) {
            Some(existing) => *existing = next,
            None => events.push(next),
        }
        sort_by_date(&mut events);

        self.write_all(&events).await?;
        Ok(events)
    }

    /// Removing a date that has no event is a successful no-op.
    pub async fn remove(&self, date: &str) -> Result<Vec<TicketEvent>, EventStoreError> {
        let mut events = self.read_all().await?;
        events.retain(|e| e.id != date);
        self.write_all(&events).await?;
        Ok(events)
    }
}
