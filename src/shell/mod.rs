// Composition root for the ticket calendar.
//
// - Read config from environment.
// - Instantiate the Redis-backed key-value store.
// - Wire the event store into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
