use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::timestamp;

/// The only flag value that means access was granted.
pub const GRANTED_FLAG: &str = "1";

/// Map a raw access flag column to granted/denied.
///
/// Exact comparison: blank, `"2"`, `" 1"` and anything else are all denied.
pub fn is_granted(flag: &str) -> bool {
    flag == GRANTED_FLAG
}

/// One door access attempt.
///
/// Serializes as
/// `{"timestamp": "2023-01-02T08:30:00", "name": "Alice", "access_granted": true}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Local wall-clock time of the attempt.
    #[serde(with = "timestamp::wire")]
    pub timestamp: NaiveDateTime,
    /// Who tried to get in.
    pub name: String,
    pub access_granted: bool,
}

impl AccessEvent {
    pub fn new(timestamp: NaiveDateTime, name: impl Into<String>, access_granted: bool) -> Self {
        Self {
            timestamp,
            name: name.into(),
            access_granted,
        }
    }

    /// Build an event from the four columns of an access log row.
    pub fn from_fields(date: &str, time: &str, name: &str, flag: &str) -> Result<Self, TypeError> {
        let timestamp = timestamp::parse_row_timestamp(date, time)?;
        Ok(Self::new(timestamp, name, is_granted(flag)))
    }
}
