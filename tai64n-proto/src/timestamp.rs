use core::cmp::Ordering;

use crate::consts::{EPOCH_BASE, SECONDS_SIZE, SIZE};
use crate::errors::CodecError;

/// A TAI64N timestamp.
///
/// The value is kept relative to the Unix epoch: the on-wire second count minus
/// [`EPOCH_BASE`](crate::consts::EPOCH_BASE), with wrapping arithmetic in both
/// directions so that any 12-byte input re-encodes bit-for-bit. Nanoseconds are
/// stored verbatim, values of one second or more included.
///
/// The raw value is exactly 12 bytes long and has the following format:
/// ```plaintext
/// tai64n {
///     u64 seconds       // big-endian, unix seconds + 2^62
///     u32 nanoseconds   // big-endian
/// }
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timestamp {
    seconds: u64,
    nanoseconds: u32,
}

impl Timestamp {
    /// The zero value, equal to [`Timestamp::default`].
    pub const ZERO: Timestamp = Timestamp {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Create a timestamp from an epoch-relative second count and nanoseconds.
    ///
    /// `seconds` is the in-memory representation, i.e. the two's complement of a
    /// signed Unix second count. Use [`Timestamp::from_unix`] for signed input.
    pub const fn new(seconds: u64, nanoseconds: u32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Create a timestamp from a signed Unix second count.
    pub const fn from_unix(seconds: i64, nanoseconds: u32) -> Self {
        Self::new(seconds as u64, nanoseconds)
    }

    /// Get the second count relative to the Unix epoch.
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Get the second count as a signed Unix offset.
    pub const fn unix_seconds(&self) -> i64 {
        self.seconds as i64
    }

    /// Get the nanoseconds exactly as they were decoded.
    pub const fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    /// Get the seconds as they appear on the wire.
    pub const fn wire_seconds(&self) -> u64 {
        self.seconds.wrapping_add(EPOCH_BASE)
    }

    /// Decode a raw TAI64N value.
    ///
    /// The input must be exactly 12 bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use tai64n_proto::Timestamp;
    ///
    /// let raw = [0x40, 0, 0, 0, 0x37, 0xc2, 0x19, 0xbf, 0x2e, 0xf0, 0x2e, 0x94];
    /// let timestamp = Timestamp::from_bytes(&raw).unwrap();
    /// assert_eq!(timestamp.seconds(), 935467455);
    /// assert_eq!(timestamp.nanoseconds(), 787492500);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let raw: &[u8; SIZE] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
            expected: SIZE,
            got: bytes.len(),
        })?;
        Ok(Self::from_array(raw))
    }

    /// Decode a raw TAI64N value from a fixed-size array.
    pub fn from_array(raw: &[u8; SIZE]) -> Self {
        let mut seconds = [0u8; SECONDS_SIZE];
        let mut nanoseconds = [0u8; SIZE - SECONDS_SIZE];
        seconds.copy_from_slice(&raw[..SECONDS_SIZE]);
        nanoseconds.copy_from_slice(&raw[SECONDS_SIZE..]);

        Self {
            seconds: u64::from_be_bytes(seconds).wrapping_sub(EPOCH_BASE),
            nanoseconds: u32::from_be_bytes(nanoseconds),
        }
    }

    /// Write the raw bytes of the timestamp into the start of `dst`.
    ///
    /// Returns the number of bytes written, which is always 12. A destination
    /// shorter than that is left untouched.
    pub fn write(&self, dst: &mut [u8]) -> Result<usize, CodecError> {
        let got = dst.len();
        let dst = dst
            .get_mut(..SIZE)
            .ok_or(CodecError::BufferTooSmall {
                expected: SIZE,
                got,
            })?;
        dst[..SECONDS_SIZE].copy_from_slice(&self.wire_seconds().to_be_bytes());
        dst[SECONDS_SIZE..].copy_from_slice(&self.nanoseconds.to_be_bytes());
        Ok(SIZE)
    }

    /// Convert the timestamp to its raw 12-byte form.
    pub fn to_bytes(&self) -> [u8; SIZE] {
        let mut raw = [0u8; SIZE];
        raw[..SECONDS_SIZE].copy_from_slice(&self.wire_seconds().to_be_bytes());
        raw[SECONDS_SIZE..].copy_from_slice(&self.nanoseconds.to_be_bytes());
        raw
    }
}

// Ordered like the wire format, so negative Unix offsets sort before the epoch.
impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.wire_seconds()
            .cmp(&other.wire_seconds())
            .then(self.nanoseconds.cmp(&other.nanoseconds))
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<&[u8]> for Timestamp {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<[u8; SIZE]> for Timestamp {
    fn from(raw: [u8; SIZE]) -> Self {
        Self::from_array(&raw)
    }
}

impl From<Timestamp> for [u8; SIZE] {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_bytes()
    }
}

impl core::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timestamp")
            .field("seconds", &self.unix_seconds())
            .field("nanoseconds", &self.nanoseconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    // 1999-08-24 04:04:15.787492500 UTC
    const TEST_RAW: [u8; 12] = [
        0x40, 0x00, 0x00, 0x00, 0x37, 0xc2, 0x19, 0xbf, 0x2e, 0xf0, 0x2e, 0x94,
    ];

    #[test]
    fn test_from_bytes() {
        let timestamp = Timestamp::from_bytes(&TEST_RAW).unwrap();

        assert_eq!(timestamp.seconds(), 935467455);
        assert_eq!(timestamp.unix_seconds(), 935467455);
        assert_eq!(timestamp.nanoseconds(), 787492500);
        assert_eq!(timestamp.wire_seconds(), EPOCH_BASE + 935467455);
    }

    #[test]
    fn test_from_bytes_invalid_length() {
        for len in [0, 1, 8, 11, 13, 24] {
            let data = [0u8; 24];
            assert_eq!(
                Timestamp::from_bytes(&data[..len]),
                Err(CodecError::InvalidLength {
                    expected: 12,
                    got: len
                })
            );
        }
    }

    #[test]
    fn test_write() {
        let timestamp = Timestamp::new(935467455, 787492500);
        let mut buf = [0xaau8; 16];

        assert_eq!(timestamp.write(&mut buf), Ok(12));
        assert_eq!(buf[..12], TEST_RAW);
        assert_eq!(buf[12..], [0xaa; 4]);
        assert_eq!(timestamp.to_bytes(), TEST_RAW);
    }

    #[test]
    fn test_write_buffer_too_small() {
        let timestamp = Timestamp::new(935467455, 787492500);
        let mut buf = [0u8; 11];

        assert_eq!(
            timestamp.write(&mut buf),
            Err(CodecError::BufferTooSmall {
                expected: 12,
                got: 11
            })
        );
        assert_eq!(buf, [0u8; 11]);
    }

    #[test]
    fn test_wraparound() {
        // Wire seconds below the epoch base wrap on decode and unwrap on encode.
        let zero = Timestamp::from_array(&[0u8; 12]);
        assert_eq!(zero.seconds(), 0xc000_0000_0000_0000);
        assert_eq!(zero.to_bytes(), [0u8; 12]);

        let max = Timestamp::from_array(&[0xff; 12]);
        assert_eq!(max.seconds(), 0xbfff_ffff_ffff_ffff);
        assert_eq!(max.nanoseconds(), u32::MAX);
        assert_eq!(max.to_bytes(), [0xff; 12]);

        let wrapped = Timestamp::new(u64::MAX, 0).to_bytes();
        assert_eq!(wrapped[..8], 0x3fff_ffff_ffff_ffffu64.to_be_bytes());
        assert_eq!(Timestamp::from_array(&wrapped), Timestamp::new(u64::MAX, 0));
    }

    #[test]
    fn test_nanoseconds_not_normalized() {
        let mut raw = TEST_RAW;
        raw[8..].copy_from_slice(&1_500_000_000u32.to_be_bytes());

        let timestamp = Timestamp::from_array(&raw);
        assert_eq!(timestamp.seconds(), 935467455);
        assert_eq!(timestamp.nanoseconds(), 1_500_000_000);
        assert_eq!(timestamp.to_bytes(), raw);
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = rand::thread_rng();
        let mut raw = [0u8; 12];

        for _ in 0..1000 {
            rng.fill_bytes(&mut raw);
            let timestamp = Timestamp::from_bytes(&raw).unwrap();
            let mut out = [0u8; 12];
            assert_eq!(timestamp.write(&mut out), Ok(12));
            assert_eq!(out, raw);
        }
    }

    #[test]
    fn test_ordering() {
        let before_epoch = Timestamp::from_unix(-1, 0);
        let epoch = Timestamp::ZERO;
        let later = Timestamp::new(0, 1);

        assert!(before_epoch < epoch);
        assert!(epoch < later);
        assert!(Timestamp::from_array(&[0u8; 12]) < before_epoch);
    }

    #[test]
    fn test_debug() {
        let timestamp = Timestamp::from_unix(-5, 7);
        assert_eq!(
            format!("{:?}", timestamp),
            "Timestamp { seconds: -5, nanoseconds: 7 }"
        );
    }
}
