//! Configuration Module
//!
//! Handles loading the store connection settings from environment variables.

use std::env;

/// Which store the cache talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// A Redis server reached over the network
    Redis,
    /// An in-process map, for running without a server
    Memory,
}

impl BackendKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Some(BackendKind::Redis),
            "memory" => Some(BackendKind::Memory),
            _ => None,
        }
    }
}

/// Store connection parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis host name or address
    pub redis_host: String,
    /// Redis port
    pub redis_port: u16,
    /// Redis logical database index
    pub redis_db: i64,
    /// Store implementation to use
    pub backend: BackendKind,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_HOST` - Redis host (default: 127.0.0.1)
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `REDIS_DB` - Redis database index (default: 0)
    /// - `CACHE_BACKEND` - `redis` or `memory` (default: redis)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis_host: env::var("REDIS_HOST")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.redis_host),
            redis_port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redis_port),
            redis_db: env::var("REDIS_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redis_db),
            backend: env::var("CACHE_BACKEND")
                .ok()
                .and_then(|v| BackendKind::parse(&v))
                .unwrap_or(defaults.backend),
        }
    }

    /// Connection URL understood by `redis::Client::open`.
    pub fn redis_url(&self) -> String {
        format!(
            "redis://{}:{}/{}",
            self.redis_host, self.redis_port, self.redis_db
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_host: "127.0.0.1".to_string(),
            redis_port: 6379,
            redis_db: 0,
            backend: BackendKind::Redis,
        }
    }
}
