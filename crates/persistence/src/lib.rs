//! Persistence layer for the MK Events backend.
//!
//! This crate contains:
//! - Key-value storage backends (file and in-memory)
//! - The typed persistence adapter
//! - The content store holding every collection
//! - The admin access gate

pub mod access_gate;
pub mod keys;
pub mod metrics;
pub mod persisted;
pub mod storage;
pub mod store;

pub use access_gate::AccessGate;
pub use storage::{open_storage, KeyValueStorage, MemoryStorage, StorageConfig, StorageError};
pub use store::{ContentStore, ExportFile};
