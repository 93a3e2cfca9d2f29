//! Transaction identifiers
//!
//! Ids are creation timestamps in milliseconds, stored as plain JSON
//! integers. Allocation is monotonic within a ledger so two records created
//! in the same millisecond still get distinct ids.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a transaction record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Allocate an id for a record created at `now`
    ///
    /// The id is `now` in milliseconds unless that would not be strictly
    /// greater than `last`, in which case it is `last + 1`.
    pub fn allocate(now: DateTime<Utc>, last: Option<TransactionId>) -> Self {
        let millis = now.timestamp_millis();
        match last {
            Some(last) if last.0 >= millis => Self(last.0 + 1),
            _ => Self(millis),
        }
    }

    /// The creation time encoded in the id, if it is a valid timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
