//! Constants of the TAI64N wire and label formats.

/// Offset added to a Unix second count to produce the on-wire TAI64 value.
pub const EPOCH_BASE: u64 = 0x4000_0000_0000_0000;

/// Size of the seconds part of a TAI64N value (a plain TAI64 value).
pub const SECONDS_SIZE: usize = 8;

/// Size of a raw TAI64N value.
pub const SIZE: usize = 12;

/// Number of hex characters in a TAI64N label.
pub const LABEL_SIZE: usize = SIZE * 2;

/// Optional leading character of a label.
pub const LABEL_PREFIX: u8 = b'@';

/// Size of a label carrying the optional `@` prefix.
pub const PREFIXED_LABEL_SIZE: usize = LABEL_SIZE + 1;

/// Calendar types hold sub-second parts below this.
pub const NANOS_PER_SECOND: u32 = 1_000_000_000;
