//! TAI64N timestamps: the 12-byte wire form and the hexadecimal label form.
//!
//! A TAI64N value is 8 bytes of seconds offset by 2^62 followed by 4 bytes of
//! nanoseconds, both big-endian. Its label is the lower-case hex encoding of
//! those 12 bytes, written as `@4000000037c219bf2ef02e94` in logs.
//!
//! ```
//! use tai64n_proto::Timestamp;
//!
//! let timestamp: Timestamp = "@4000000037c219bf2ef02e94".parse().unwrap();
//! assert_eq!(timestamp.unix_seconds(), 935467455);
//! assert_eq!(timestamp.to_string(), "4000000037c219bf2ef02e94");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod calendar;
pub mod consts;
pub mod errors;
mod label;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod timestamp;
pub mod traits;

pub use calendar::CalendarTime;
pub use errors::{CodecError, Tai64NError};
pub use timestamp::Timestamp;
pub use traits::WireTimestamp;
