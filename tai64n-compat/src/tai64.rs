use std::fmt::Debug;
use std::time::SystemTime;

use tai64n_proto::consts::SIZE;
use tai64n_proto::{CodecError, Timestamp, WireTimestamp};

use crate::errors::CompatError;

/// A TAI64N value backed by the `tai64` crate.
///
/// The `tai64` crate puts the Unix epoch at `2^62 + 37`, counting the 37 seconds
/// TAI is ahead of UTC since 2017. Conversions to and from [`Timestamp`] copy
/// the wire bytes, so a value taken from this clock reads 37 seconds later than
/// [`Timestamp::now`].
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Tai64N(tai64::Tai64N);

impl Tai64N {
    /// Current time on the TAI clock of the `tai64` crate.
    pub fn now() -> Self {
        Self::from_system_time(&SystemTime::now())
    }

    /// Place a system time on the TAI clock of the `tai64` crate.
    pub fn from_system_time(time: &SystemTime) -> Self {
        Tai64N(tai64::Tai64N::from_system_time(time))
    }
}

impl WireTimestamp for Tai64N {
    type Error = CompatError;

    fn from_bytes(bytes: &[u8]) -> Result<Self, CompatError> {
        Ok(Tai64N(tai64::Tai64N::from_slice(bytes).map_err(
            |e| match e {
                tai64::Error::LengthInvalid => CompatError::Codec(CodecError::InvalidLength {
                    expected: SIZE,
                    got: bytes.len(),
                }),
                tai64::Error::NanosInvalid => CompatError::NanosInvalid {
                    nanoseconds: nanoseconds_of(bytes),
                },
            },
        )?))
    }

    fn to_bytes(&self) -> [u8; SIZE] {
        self.0.to_bytes()
    }
}

fn nanoseconds_of(bytes: &[u8]) -> u32 {
    let mut nanoseconds = [0u8; 4];
    nanoseconds.copy_from_slice(&bytes[8..SIZE]);
    u32::from_be_bytes(nanoseconds)
}

impl From<Tai64N> for Timestamp {
    fn from(value: Tai64N) -> Self {
        Timestamp::from(value.to_bytes())
    }
}

impl TryFrom<Timestamp> for Tai64N {
    type Error = CompatError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        tai64n_proto::traits::convert(&value)
    }
}

impl Debug for Tai64N {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
