//! Smoke Run
//!
//! A fixed sequence of store / retrieve round-trips used by the binary to
//! check a live store end to end.

use std::fmt;

use crate::backend::Backend;
use crate::cache::{decode, Cache, Value};
use crate::error::Result;

// == Check ==
/// Outcome of a single round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    /// Named accessor used to read the value back, `None` for `get`/`get_with`
    pub accessor: Option<&'static str>,
    /// The value that was stored
    pub stored: Value,
    /// The value that was read back, if any
    pub retrieved: Option<Value>,
}

impl Check {
    /// Returns true if the value read back equals the value stored.
    pub fn passed(&self) -> bool {
        self.retrieved.as_ref() == Some(&self.stored)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed() { '✓' } else { '✗' };
        let retrieved = Show(self.retrieved.as_ref());
        match self.accessor {
            Some(name) => write!(f, "{} {}: {}", mark, name, retrieved),
            None => write!(
                f,
                "{} Stored {}, retrieved {}",
                mark,
                Show(Some(&self.stored)),
                retrieved
            ),
        }
    }
}

/// Renders values for the check lines: text bare, bytes as `b'...'`, a
/// missing value as `None`.
struct Show<'a>(Option<&'a Value>);

impl fmt::Display for Show<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "None"),
            Some(Value::Text(text)) => write!(f, "{}", text),
            Some(Value::Bytes(bytes)) => write!(f, "b'{}'", bytes.escape_ascii()),
            Some(Value::Integer(n)) => write!(f, "{}", n),
            Some(Value::Float(x)) => write!(f, "{}", x),
        }
    }
}

// == Report ==
/// All checks from one smoke run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub checks: Vec<Check>,
}

impl Report {
    /// Returns true if every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(Check::passed)
    }

    /// Number of checks whose value did not round-trip.
    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|check| !check.passed()).count()
    }
}

// == Run ==
/// Runs the fixed round-trips against `cache`.
///
/// Store and connection errors abort the run; mismatches are recorded in the
/// report.
pub fn run<B: Backend>(cache: &mut Cache<B>) -> Result<Report> {
    let mut checks = Vec::new();

    let key = cache.store(b"foo")?;
    let retrieved = cache.get(&key)?.map(Value::Bytes);
    checks.push(Check {
        accessor: None,
        stored: Value::from(b"foo"),
        retrieved,
    });

    let key = cache.store(123)?;
    let retrieved = cache.get_with(&key, decode::integer)?.map(Value::Integer);
    checks.push(Check {
        accessor: None,
        stored: Value::from(123),
        retrieved,
    });

    let key = cache.store("bar")?;
    let retrieved = cache
        .get_with(&key, |bytes| Ok(String::from_utf8(bytes)?))?
        .map(Value::Text);
    checks.push(Check {
        accessor: None,
        stored: Value::from("bar"),
        retrieved,
    });

    let key = cache.store("hello world")?;
    let retrieved = cache.get_str(&key)?.map(Value::Text);
    checks.push(Check {
        accessor: Some("get_str"),
        stored: Value::from("hello world"),
        retrieved,
    });

    let key = cache.store(42)?;
    let retrieved = cache.get_int(&key)?.map(Value::Integer);
    checks.push(Check {
        accessor: Some("get_int"),
        stored: Value::from(42),
        retrieved,
    });

    Ok(Report { checks })
}
