//! In-Memory Backend
//!
//! HashMap-backed store with Redis command semantics for GET, SET, INCR,
//! FLUSHDB and DBSIZE. Clones share the same underlying map, so several
//! caches can be pointed at one store the way several clients share a server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::backend::{Backend, StoreStats};
use crate::error::{CacheError, Result};

#[derive(Debug, Default)]
struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    stats: StoreStats,
}

// == Memory Backend ==
/// Shared in-process key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<MemoryStore>>,
}

impl MemoryBackend {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the command counters.
    pub fn stats(&self) -> StoreStats {
        self.lock().stats.clone()
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, MemoryStore> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Backend for MemoryBackend {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.lock();
        let value = store.entries.get(key).cloned();
        match value {
            Some(_) => store.stats.record_hit(),
            None => store.stats.record_miss(),
        }
        Ok(value)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut store = self.lock();
        store.entries.insert(key.to_string(), value);
        store.stats.record_write();
        Ok(())
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        let mut store = self.lock();
        let current = match store.entries.get(key) {
            Some(raw) => parse_counter(raw)?,
            None => 0,
        };
        let next = current.checked_add(1).ok_or_else(|| {
            CacheError::Backend("increment or decrement would overflow".to_string())
        })?;

        store
            .entries
            .insert(key.to_string(), next.to_string().into_bytes());
        store.stats.record_write();
        debug!(key, count = next, "Incremented counter");
        Ok(next)
    }

    fn flush(&mut self) -> Result<()> {
        let mut store = self.lock();
        store.entries.clear();
        store.stats.record_flush();
        Ok(())
    }

    fn len(&mut self) -> Result<usize> {
        Ok(self.lock().entries.len())
    }
}

/// Parses a stored counter the way Redis does: a plain base-10 `i64` with no
/// surrounding whitespace, no `+` sign, no leading zeros and no `-0`.
fn parse_counter(raw: &[u8]) -> Result<i64> {
    std::str::from_utf8(raw)
        .ok()
        .filter(|text| is_canonical_integer(text))
        .and_then(|text| text.parse::<i64>().ok())
        .ok_or_else(|| {
            CacheError::Backend("value is not an integer or out of range".to_string())
        })
}

fn is_canonical_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.starts_with('0') {
        // Only a bare "0" may start with zero
        return text == "0";
    }
    true
}
