//! Serde support: a [`Timestamp`] is (de)serialized as its label.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Timestamp;

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let label = self
            .marshal_text()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        let label =
            core::str::from_utf8(&label).map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(label)
    }
}

struct LabelVisitor;

impl Visitor<'_> for LabelVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a TAI64N label of 24 hex characters, optionally prefixed with '@'")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse_label(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Timestamp::parse_label(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(LabelVisitor)
    }
}
