//! Cache Store Module
//!
//! The cache wrapper: writes values under fresh random keys and reads them
//! back with optional decoding.

use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::{Backend, MemoryBackend, RedisBackend};
use crate::cache::counter::{count_calls, STORE_CALLS};
use crate::cache::{decode, Value};
use crate::config::Config;
use crate::error::Result;

// == Cache ==
/// Stores scalar values under random keys in a key-value backend.
///
/// Constructing a `Cache` flushes the backend's current database.
#[derive(Debug)]
pub struct Cache<B: Backend = RedisBackend> {
    backend: B,
}

impl Cache<RedisBackend> {
    /// Connects to the Redis server described by `config` and flushes it.
    pub fn connect(config: &Config) -> Result<Self> {
        let backend = RedisBackend::connect(&config.redis_url())?;
        Self::new(backend)
    }
}

impl Cache<MemoryBackend> {
    /// Creates a cache over a fresh in-memory store.
    pub fn in_memory() -> Result<Self> {
        Self::new(MemoryBackend::new())
    }
}

impl<B: Backend> Cache<B> {
    // == Constructor ==
    /// Wraps a connected backend, discarding everything it currently holds.
    ///
    /// # Arguments
    /// * `backend` - An open connection to the store
    pub fn new(mut backend: B) -> Result<Self> {
        backend.flush()?;
        info!("Flushed store on cache construction");
        Ok(Self { backend })
    }

    // == Store ==
    /// Writes `value` under a new random key and returns the key.
    ///
    /// Each call bumps the [`STORE_CALLS`] counter before the write.
    pub fn store(&mut self, value: impl Into<Value>) -> Result<String> {
        let value = value.into();
        count_calls(&mut self.backend, STORE_CALLS, |backend| {
            let key = Uuid::new_v4().to_string();
            debug!(key = %key, kind = value.kind(), "Storing value");
            backend.set(&key, value.into_bytes())?;
            Ok(key)
        })
    }

    // == Get ==
    /// Returns the raw bytes stored under `key`, or `None` if it is absent.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.backend.get(key)?;
        debug!(key, found = value.is_some(), "Read value");
        Ok(value)
    }

    /// Returns the value under `key` converted by `decode`.
    ///
    /// `decode` only runs when the key exists; its errors are returned as is.
    ///
    /// # Arguments
    /// * `key` - The key returned by [`Cache::store`]
    /// * `decode` - Conversion applied to the raw bytes, e.g. [`decode::integer`]
    pub fn get_with<T, F>(&mut self, key: &str, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        self.get(key)?.map(decode).transpose()
    }

    /// Returns the value under `key` as UTF-8 text.
    pub fn get_str(&mut self, key: &str) -> Result<Option<String>> {
        self.get_with(key, decode::utf8)
    }

    /// Returns the value under `key` as an integer.
    pub fn get_int(&mut self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, decode::integer)
    }

    /// Returns the value under `key` as a float.
    pub fn get_float(&mut self, key: &str) -> Result<Option<f64>> {
        self.get_with(key, decode::float)
    }

    // == Introspection ==
    /// Number of times the operation named `name` has been called.
    pub fn call_count(&mut self, name: &str) -> Result<u64> {
        let count = self.backend.get(name)?.map(decode::integer).transpose()?;
        Ok(count.map_or(0, |n| n.max(0) as u64))
    }

    /// Number of keys in the store, counters included.
    pub fn len(&mut self) -> Result<usize> {
        self.backend.len()
    }

    /// Returns true if the store holds no keys at all.
    pub fn is_empty(&mut self) -> Result<bool> {
        self.backend.is_empty()
    }

    // == Backend Access ==
    /// Borrows the underlying backend, for commands the cache does not wrap.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the cache and returns its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[test]
    fn test_store_returns_uuid_key() {
        let mut cache = Cache::in_memory().unwrap();
        let key = cache.store("value").unwrap();

        let parsed = Uuid::parse_str(&key).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_round_trip_bytes_without_decode() {
        let mut cache = Cache::in_memory().unwrap();
        let key = cache.store(b"foo").unwrap();
        assert_eq!(cache.get(&key).unwrap(), Some(b"foo".to_vec()));
    }

    #[test]
    fn test_round_trip_with_decoders() {
        let mut cache = Cache::in_memory().unwrap();

        let key = cache.store(123).unwrap();
        assert_eq!(cache.get_with(&key, decode::integer).unwrap(), Some(123));

        let key = cache.store("bar").unwrap();
        let text = cache
            .get_with(&key, |bytes| Ok(String::from_utf8(bytes)?))
            .unwrap();
        assert_eq!(text.as_deref(), Some("bar"));
    }

    #[test]
    fn test_get_str_and_get_int() {
        let mut cache = Cache::in_memory().unwrap();

        let key = cache.store("hello world").unwrap();
        assert_eq!(cache.get_str(&key).unwrap().as_deref(), Some("hello world"));

        let key = cache.store(42).unwrap();
        assert_eq!(cache.get_int(&key).unwrap(), Some(42));
    }

    #[test]
    fn test_get_float() {
        let mut cache = Cache::in_memory().unwrap();
        let key = cache.store(2.75).unwrap();
        assert_eq!(cache.get_float(&key).unwrap(), Some(2.75));
    }

    #[test]
    fn test_missing_key_is_none() {
        let mut cache = Cache::in_memory().unwrap();
        let key = Uuid::new_v4().to_string();

        assert_eq!(cache.get(&key).unwrap(), None);
        assert_eq!(cache.get_str(&key).unwrap(), None);
        assert_eq!(cache.get_int(&key).unwrap(), None);
    }

    #[test]
    fn test_decode_not_called_for_missing_key() {
        let mut cache = Cache::in_memory().unwrap();
        let result: Option<()> = cache
            .get_with("missing", |_| panic!("decode must not run"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_decode_error_propagates() {
        let mut cache = Cache::in_memory().unwrap();
        let key = cache.store("not a number").unwrap();

        let err = cache.get_int(&key).unwrap_err();
        assert!(matches!(err, CacheError::ParseInt(_)));
        assert!(err.is_decode());
    }

    #[test]
    fn test_store_counts_calls() {
        let mut cache = Cache::in_memory().unwrap();
        assert_eq!(cache.call_count(STORE_CALLS).unwrap(), 0);

        for _ in 0..5 {
            cache.store("x").unwrap();
        }

        assert_eq!(cache.call_count(STORE_CALLS).unwrap(), 5);
        // Five entries plus the counter
        assert_eq!(cache.len().unwrap(), 6);
    }

    #[test]
    fn test_get_does_not_count() {
        let mut cache = Cache::in_memory().unwrap();
        let key = cache.store("x").unwrap();
        cache.get(&key).unwrap();
        cache.get_str(&key).unwrap();

        assert_eq!(cache.call_count(STORE_CALLS).unwrap(), 1);
        assert_eq!(cache.call_count("Cache.get").unwrap(), 0);
    }

    #[test]
    fn test_construction_flushes_existing_data() {
        let mut backend = MemoryBackend::new();
        backend.set("stale", b"data".to_vec()).unwrap();
        backend.set("other", b"data".to_vec()).unwrap();

        let mut cache = Cache::new(backend.clone()).unwrap();

        assert!(cache.is_empty().unwrap());
        assert!(!backend.contains_key("stale"));
        assert_eq!(backend.stats().flushes, 1);
    }

    #[test]
    fn test_failed_counter_aborts_store() {
        let mut cache = Cache::in_memory().unwrap();
        cache
            .backend_mut()
            .set(STORE_CALLS, b"corrupt".to_vec())
            .unwrap();

        // A counter that cannot be incremented aborts the store
        assert!(matches!(cache.store("x"), Err(CacheError::Backend(_))));
        assert_eq!(cache.into_backend().len().unwrap(), 1);
    }
}
