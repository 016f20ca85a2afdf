//! Typed values bound to a storage key.
//!
//! [`Persisted`] holds the in-memory copy of one JSON document and writes it
//! back after every change. Storage problems never reach the caller: a value
//! that cannot be read or decoded falls back to the default, and a failed
//! write is logged while the in-memory value stays authoritative for the rest
//! of the process.

use std::fmt;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

use crate::metrics::{record_decode_failure, record_write_failure, StorageTimer};
use crate::storage::KeyValueStorage;

pub struct Persisted<T> {
    storage: Arc<dyn KeyValueStorage>,
    key: &'static str,
    value: T,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Reads `key`, falling back to `default` when it is absent or unreadable,
    /// and writes the result back so the key is initialized from then on.
    pub fn load(storage: Arc<dyn KeyValueStorage>, key: &'static str, default: T) -> Self {
        let timer = StorageTimer::new("read");
        let raw = storage.get_item(key);
        timer.record();

        let value = match raw {
            Ok(Some(json)) => match serde_json::from_str::<T>(&json) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "Stored value could not be decoded, using default");
                    record_decode_failure(key);
                    default
                }
            },
            Ok(None) => {
                debug!(key, "No stored value, using default");
                default
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored value, using default");
                record_decode_failure(key);
                default
            }
        };

        let persisted = Self {
            storage,
            key,
            value,
        };
        persisted.persist();
        persisted
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the whole value and writes it back.
    pub fn replace(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Mutates the value in place and writes it back.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.persist();
        result
    }

    /// A failed write is logged and counted; the in-memory value stays current.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.value) {
            Ok(json) => json,
            Err(e) => {
                error!(key = self.key, error = %e, "Failed to encode value for storage");
                record_write_failure(self.key);
                return;
            }
        };

        let timer = StorageTimer::new("write");
        let result = self.storage.set_item(self.key, &json);
        timer.record();

        if let Err(e) = result {
            error!(
                key = self.key,
                bytes = json.len(),
                error = %e,
                "Failed to write value to storage; change is kept in memory only"
            );
            record_write_failure(self.key);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
