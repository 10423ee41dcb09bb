use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A vehicle as seen by the facility. Two vehicles are the same vehicle when their plates match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate_number: String,
}

impl Vehicle {
    pub fn new(plate_number: impl Into<String>) -> Self {
        Self {
            plate_number: plate_number.into(),
        }
    }
}

/// Single-use admission credential handed out by a lot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(String);

impl Ticket {
    pub(crate) fn mint() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Ticket {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Ticket {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-unique identity of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotId(u64);

static LOT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl LotId {
    pub(crate) fn next() -> Self {
        Self(LOT_SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lot-{}", self.0)
    }
}
