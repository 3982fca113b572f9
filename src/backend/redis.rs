//! Redis Backend
//!
//! Blocking client connection to a Redis server.

use redis::Commands;
use tracing::info;

use crate::backend::Backend;
use crate::error::Result;

/// A single blocking connection to Redis.
pub struct RedisBackend {
    connection: redis::Connection,
}

impl RedisBackend {
    // == Constructor ==
    /// Opens a connection to the server at `url`.
    ///
    /// # Arguments
    /// * `url` - A `redis://host:port/db` connection URL
    pub fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection = client.get_connection()?;
        info!(url, "Connected to Redis");
        Ok(Self { connection })
    }
}

impl std::fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisBackend").finish_non_exhaustive()
    }
}

impl Backend for RedisBackend {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> = self.connection.get(key)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let () = self.connection.set(key, value)?;
        Ok(())
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        let count: i64 = self.connection.incr(key, 1)?;
        Ok(count)
    }

    fn flush(&mut self) -> Result<()> {
        let () = redis::cmd("FLUSHDB").query(&mut self.connection)?;
        Ok(())
    }

    fn len(&mut self) -> Result<usize> {
        let size: usize = redis::cmd("DBSIZE").query(&mut self.connection)?;
        Ok(size)
    }
}
