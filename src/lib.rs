//! Redis Cache - A thin wrapper over a Redis key-value store
//!
//! Stores text, bytes, integers and floats under random UUID keys, reads them
//! back with optional decoding, and counts calls to the store operation.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod smoke;

pub use backend::{Backend, MemoryBackend, RedisBackend};
pub use cache::{Cache, Value};
pub use config::{BackendKind, Config};
pub use error::{CacheError, Result};
