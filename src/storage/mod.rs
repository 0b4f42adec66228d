//! Storage ports and backends.
//!
//! The ledger store talks to a minimal key-value port so the durable medium
//! can be swapped: JSON files on disk in production, an in-memory map in
//! tests.

pub mod json_backend;
pub mod memory;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over the durable key-value medium holding one serialized
/// collection per key. Reads of a never-written key yield `None`.
pub trait StoragePort: Send {
    fn read(&mut self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonFileStorage;
pub use memory::MemoryStorage;
