//! Call Counting
//!
//! Wraps an operation so that each invocation bumps a counter in the store
//! before the operation runs.

use tracing::debug;

use crate::backend::Backend;
use crate::error::Result;

// == Qualified Names ==
/// Counter key for [`Cache::store`](super::Cache::store).
pub const STORE_CALLS: &str = "Cache.store";

// == Count Calls ==
/// Increments the counter `name`, then runs `op` against the same backend.
///
/// The increment happens first: if it fails `op` is never run, and if `op`
/// fails the call has still been counted.
///
/// # Arguments
/// * `backend` - Store holding both the counter and the operation's data
/// * `name` - Qualified name of the operation, used as the counter key
/// * `op` - The operation being counted
pub fn count_calls<B, T, F>(backend: &mut B, name: &str, op: F) -> Result<T>
where
    B: Backend + ?Sized,
    F: FnOnce(&mut B) -> Result<T>,
{
    let calls = backend.incr(name)?;
    debug!(operation = name, calls, "Counted call");
    op(backend)
}
