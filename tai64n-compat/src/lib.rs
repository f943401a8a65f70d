//! Bridges [`tai64n_proto::Timestamp`] to the `tai64` crate.

pub mod errors;
pub mod tai64;

pub use crate::tai64::Tai64N;
pub use errors::CompatError;
