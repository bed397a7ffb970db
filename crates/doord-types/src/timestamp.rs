use chrono::{NaiveDateTime, Timelike};

use crate::error::TypeError;

/// Format of the joined `date time` columns in an access log row.
pub const INPUT_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// ISO-8601 local date-time, no offset and no fractional seconds.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Combine the date and time columns of a row into one timestamp.
///
/// Stricter than chrono's parser on its own: columns must not carry
/// surrounding whitespace and seconds stop at 59.
pub fn parse_row_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, TypeError> {
    let input = format!("{date} {time}");
    if date.trim() != date || time.trim() != time {
        return Err(TypeError::InvalidTimestamp {
            input,
            reason: "surrounding whitespace".into(),
        });
    }
    let timestamp = NaiveDateTime::parse_from_str(&input, INPUT_FORMAT).map_err(|e| TypeError::InvalidTimestamp {
        input: input.clone(),
        reason: e.to_string(),
    })?;
    reject_leap_second(timestamp, input)
}

/// Render a timestamp in its wire form.
pub fn format_wire(timestamp: &NaiveDateTime) -> String {
    timestamp.format(WIRE_FORMAT).to_string()
}

/// Parse a timestamp from its wire form.
pub fn parse_wire(input: &str) -> Result<NaiveDateTime, TypeError> {
    let timestamp = NaiveDateTime::parse_from_str(input, WIRE_FORMAT).map_err(|e| TypeError::InvalidTimestamp {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    reject_leap_second(timestamp, input.to_string())
}

// chrono represents second 60 as nanoseconds past 1e9; receivers reject it.
fn reject_leap_second(timestamp: NaiveDateTime, input: String) -> Result<NaiveDateTime, TypeError> {
    if timestamp.nanosecond() >= 1_000_000_000 {
        return Err(TypeError::InvalidTimestamp {
            input,
            reason: "second out of range 0..59".into(),
        });
    }
    Ok(timestamp)
}

/// `serde(with)` adapter that keeps timestamps in [`WIRE_FORMAT`].
pub mod wire {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_wire(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_wire(&s).map_err(de::Error::custom)
    }
}
