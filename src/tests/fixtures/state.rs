use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> (Arc<InMemoryKeyValueStore>, AppState) {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let state = AppState::new(kv.clone());
    (kv, state)
}

pub fn make_offline_state() -> AppState {
    let (kv, state) = make_test_state();
    kv.toggle_offline();
    state
}
