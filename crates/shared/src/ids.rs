//! Record identifier generation.
//!
//! Ids look like the millisecond timestamps the site has always used, but a
//! generator never hands out the same value twice: when two records are created
//! within one millisecond the second id is bumped past the first.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Prefix used for generated service ids (`svc_<millis>`).
pub const SERVICE_ID_PREFIX: &str = "svc_";

/// Source of the current time in milliseconds since the Unix epoch.
pub trait MillisClock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMillis;

impl MillisClock for SystemMillis {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Strictly increasing, timestamp-derived id generator.
pub struct IdGenerator {
    clock: Box<dyn MillisClock>,
    last: AtomicI64,
}

impl IdGenerator {
    /// Creates a generator reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemMillis)
    }

    /// Creates a generator with a custom clock.
    pub fn with_clock(clock: impl MillisClock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: AtomicI64::new(0),
        }
    }

    /// Returns the next numeric id: `max(now, last + 1)`.
    pub fn next_numeric(&self) -> i64 {
        let now = self.clock.now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    /// Returns the next service id, e.g. `svc_1733412000000`.
    pub fn next_service_id(&self) -> String {
        format!("{}{}", SERVICE_ID_PREFIX, self.next_numeric())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish()
    }
}
