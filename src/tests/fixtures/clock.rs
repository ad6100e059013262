// Deterministic clocks for store tests.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static TICKS: AtomicI64 = AtomicI64::new(0);

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

/// Advances by one second on every call, so consecutive upserts always see
/// distinct timestamps.
pub fn ticking_clock() -> DateTime<Utc> {
    let tick = TICKS.fetch_add(1, Ordering::SeqCst);
    fixed_now() + chrono::Duration::seconds(tick)
}
