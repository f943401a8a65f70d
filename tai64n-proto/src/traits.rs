use crate::consts::SIZE;
use crate::errors::CodecError;
use crate::Timestamp;

/// A type holding a TAI64N value that can go to and from the 12-byte wire form.
pub trait WireTimestamp: Sized + PartialOrd {
    type Error: core::error::Error;

    /// Create a timestamp from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;

    /// Convert the timestamp to a byte array.
    fn to_bytes(&self) -> [u8; SIZE];
}

impl WireTimestamp for Timestamp {
    type Error = CodecError;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        Timestamp::from_bytes(bytes)
    }

    fn to_bytes(&self) -> [u8; SIZE] {
        Timestamp::to_bytes(self)
    }
}

/// Re-read a timestamp as another implementation through its wire bytes.
pub fn convert<A: WireTimestamp, B: WireTimestamp>(from: &A) -> Result<B, B::Error> {
    B::from_bytes(&from.to_bytes())
}
