//! Unix-timestamp wire codec.
//!
//! The ImprovMX API transmits every instant as a bare JSON number of seconds
//! since the Unix epoch. [`Timestamp`] wraps a [`chrono::DateTime<Utc>`] and
//! handles that representation on both directions.

use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// An instant as exchanged with the ImprovMX API.
///
/// Serializes to integer seconds since the epoch; sub-second precision is
/// dropped. Deserialization is lenient: a malformed (non-integer) value
/// decodes to the epoch instead of failing the surrounding payload, matching
/// the behavior existing consumers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Builds a timestamp from seconds since the Unix epoch.
    ///
    /// Returns `None` if the value is outside the representable range.
    pub fn from_unix(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Timestamp)
    }

    /// Seconds since the Unix epoch.
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// The wrapped instant.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp(DateTime::UNIX_EPOCH)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0.timestamp())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The value must be consumed whatever its shape, so it is pulled in
        // as a generic JSON value before being inspected.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_i64()
            .and_then(Timestamp::from_unix)
            .unwrap_or_default())
    }
}
