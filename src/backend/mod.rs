//! Backend Module
//!
//! The small set of key-value commands the cache issues against its store.

mod memory;
mod redis;
mod stats;

pub use self::memory::MemoryBackend;
pub use self::redis::RedisBackend;
pub use self::stats::StoreStats;

use crate::error::Result;

// == Backend Trait ==
/// A connected key-value store.
///
/// Each method is one blocking round-trip. Missing keys are reported as
/// `Ok(None)` by [`Backend::get`], never as errors.
pub trait Backend {
    /// GET: returns the raw bytes stored under `key`.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// SET: writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// INCR: adds one to the integer stored under `key` and returns the new
    /// value. A missing key counts from zero.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// FLUSHDB: removes every key from the current database.
    fn flush(&mut self) -> Result<()>;

    /// DBSIZE: number of keys in the current database.
    fn len(&mut self) -> Result<usize>;

    /// Returns true if the current database holds no keys.
    fn is_empty(&mut self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).set(key, value)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        (**self).incr(key)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn len(&mut self) -> Result<usize> {
        (**self).len()
    }
}
