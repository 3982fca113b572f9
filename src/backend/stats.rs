//! Store Statistics Module
//!
//! Tracks command counts observed by the in-memory backend.

// == Store Stats ==
/// Command counters for a [`MemoryBackend`](super::MemoryBackend).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// GETs that found a value
    pub hits: u64,
    /// GETs for a key that does not exist
    pub misses: u64,
    /// Successful SETs and INCRs
    pub writes: u64,
    /// FLUSHDB commands received
    pub flushes: u64,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Write ==
    /// Increments the write counter.
    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    // == Record Flush ==
    /// Increments the flush counter.
    pub fn record_flush(&mut self) {
        self.flushes += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = StoreStats::new();
        assert_eq!(stats, StoreStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = StoreStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_write_and_flush() {
        let mut stats = StoreStats::new();
        stats.record_write();
        stats.record_write();
        stats.record_flush();
        assert_eq!(stats.writes, 2);
        assert_eq!(stats.flushes, 1);
    }
}
