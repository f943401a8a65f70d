use tai64n_proto::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompatError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("Nanoseconds out of range: {nanoseconds}")]
    NanosInvalid { nanoseconds: u32 },
}
