use thiserror::Error;

/// Failures of the binary and label codecs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CodecError {
    #[error("expected input to be {expected} bytes long, got {got} bytes")]
    InvalidLength { expected: usize, got: usize },
    #[error("expected label of size {len} to start with '@'")]
    InvalidFormat { len: usize },
    #[error("failed to decode hex string: {0}")]
    HexDecode(hex::FromHexError),
    #[error("failed to decode hex string (expected {expected} bytes, decoded {got} bytes)")]
    LengthMismatch { expected: usize, got: usize },
    #[error("destination buffer too small: need {expected} bytes, got {got} bytes")]
    BufferTooSmall { expected: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum Tai64NError {
    #[error("failed to write TAI64N value into byte array: {0}")]
    Marshal(#[source] CodecError),
}
