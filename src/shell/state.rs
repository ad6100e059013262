use crate::modules::ticket_events::adapters::outbound::event_store::EventStore;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<EventStore<dyn KeyValueStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            event_store: Arc::new(EventStore::new(store)),
        }
    }
}
