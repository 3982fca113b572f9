//! Cache Module
//!
//! Stores scalar values under random keys and reads them back with optional
//! decoding. Every store call is counted in the backing store.

mod counter;
pub mod decode;
mod store;
mod value;


// Re-export public types
pub use counter::{count_calls, STORE_CALLS};
pub use store::Cache;
pub use value::Value;
