//! Storage metrics collection.
//!
//! Provides functions for recording storage-related metrics.

use metrics::{counter, histogram};
use std::time::Instant;

/// Record the duration of one storage operation.
pub fn record_operation_duration(operation: &str, duration_secs: f64) {
    histogram!(
        "storage_operation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record a failed write. The in-memory value is kept; only persistence is lost.
pub fn record_write_failure(key: &str) {
    counter!("storage_write_failures_total", "key" => key.to_string()).increment(1);
}

/// Record a stored value that could not be read or decoded.
pub fn record_decode_failure(key: &str) {
    counter!("storage_decode_failures_total", "key" => key.to_string()).increment(1);
}

/// A helper to time storage operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = StorageTimer::new("write");
/// let result = storage.set_item(key, &json);
/// timer.record();
/// result
/// ```
pub struct StorageTimer {
    operation: String,
    start: Instant,
}

impl StorageTimer {
    /// Create a new timer for the given operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_operation_duration(&self.operation, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_timer_creation() {
        let timer = StorageTimer::new("read");
        assert_eq!(timer.operation, "read");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        StorageTimer::new(String::from("write")).record();
        record_write_failure("mk_faqs");
        record_decode_failure("mk_faqs");
    }
}
