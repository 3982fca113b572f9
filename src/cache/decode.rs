//! Decoders for retrieved values
//!
//! Each decoder turns the raw bytes read from the store into a typed value.
//! Any of them can be passed to [`Cache::get_with`](super::Cache::get_with),
//! as can any closure of the same shape.

use crate::error::Result;

/// Returns the bytes unchanged.
pub fn raw(bytes: Vec<u8>) -> Result<Vec<u8>> {
    Ok(bytes)
}

/// Decodes the bytes as UTF-8 text.
pub fn utf8(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

/// Parses the bytes as a base-10 `i64`.
///
/// Surrounding whitespace and a leading `+` or `-` are accepted.
pub fn integer(bytes: Vec<u8>) -> Result<i64> {
    let text = utf8(bytes)?;
    Ok(text.trim().parse()?)
}

/// Parses the bytes as an `f64`, accepting surrounding whitespace.
pub fn float(bytes: Vec<u8>) -> Result<f64> {
    let text = utf8(bytes)?;
    Ok(text.trim().parse()?)
}
