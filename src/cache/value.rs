//! Cache Value Module
//!
//! The scalar types the cache accepts and their byte encoding.

use serde::{Deserialize, Serialize};

// == Value ==
/// A scalar that can be written to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
    Float(f64),
}

impl Value {
    // == Encoding ==
    /// Encodes the value as the bytes written to the store.
    ///
    /// Numbers are stored in decimal text form, so an integer reads back
    /// through [`decode::integer`](super::decode::integer) and a float through
    /// [`decode::float`](super::decode::float).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(text) => text.as_bytes().to_vec(),
            Value::Bytes(bytes) => bytes.clone(),
            Value::Integer(n) => n.to_string().into_bytes(),
            Value::Float(f) => f.to_string().into_bytes(),
        }
    }

    /// Consuming form of [`Value::to_bytes`], reusing the buffer when possible.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Value::Text(text) => text.into_bytes(),
            Value::Bytes(bytes) => bytes,
            other => other.to_bytes(),
        }
    }

    /// Short name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(bytes: &[u8; N]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}
