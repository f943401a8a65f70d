use std::fmt;

use chrono::SecondsFormat;
use serde::Serialize;
use tai64n_proto::Timestamp;

/// Everything `parse` prints about one label.
#[derive(Debug, Serialize)]
pub struct Report {
    pub label: Timestamp,
    pub seconds: i64,
    pub nanoseconds: u32,
    /// RFC 3339 UTC time, absent when out of calendar range.
    pub utc: Option<String>,
}

impl From<Timestamp> for Report {
    fn from(timestamp: Timestamp) -> Self {
        Self {
            label: timestamp,
            seconds: timestamp.unix_seconds(),
            nanoseconds: timestamp.nanoseconds(),
            utc: timestamp
                .to_datetime()
                .map(|time| time.to_rfc3339_opts(SecondsFormat::Nanos, true)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} {} {}", self.label, self.seconds, self.nanoseconds)?;
        match &self.utc {
            Some(utc) => write!(f, " {}", utc),
            None => write!(f, " -"),
        }
    }
}
