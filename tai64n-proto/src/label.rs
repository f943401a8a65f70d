//! The hexadecimal label form of a TAI64N value.

use core::fmt;
use core::str::FromStr;

use crate::consts::{LABEL_PREFIX, LABEL_SIZE, PREFIXED_LABEL_SIZE, SIZE};
use crate::errors::{CodecError, Tai64NError};
use crate::Timestamp;

impl Timestamp {
    /// Parse a TAI64N label.
    ///
    /// The input must be either 24 or 25 bytes. A 25 byte input has to start
    /// with `@`. Hex digits may be of either case.
    ///
    /// # Example
    ///
    /// ```
    /// use tai64n_proto::Timestamp;
    ///
    /// let bare = Timestamp::parse_label("4000000037c219bf2ef02e94").unwrap();
    /// let prefixed = Timestamp::parse_label("@4000000037c219bf2ef02e94").unwrap();
    /// assert_eq!(bare, prefixed);
    /// ```
    pub fn parse_label(input: impl AsRef<[u8]>) -> Result<Self, CodecError> {
        let input = input.as_ref();
        let body = match input.len() {
            PREFIXED_LABEL_SIZE => {
                if input[0] != LABEL_PREFIX {
                    return Err(CodecError::InvalidFormat {
                        len: PREFIXED_LABEL_SIZE,
                    });
                }
                &input[1..]
            }
            LABEL_SIZE => input,
            got => {
                return Err(CodecError::InvalidLength {
                    expected: LABEL_SIZE,
                    got,
                })
            }
        };

        let mut raw = [0u8; SIZE];
        hex::decode_to_slice(body, &mut raw).map_err(|err| match err {
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                CodecError::LengthMismatch {
                    expected: SIZE,
                    got: body.len() / 2,
                }
            }
            err => CodecError::HexDecode(err),
        })?;
        Self::from_bytes(&raw)
    }

    /// Write the hex-encoded label into the start of `dst`.
    ///
    /// The output is lower-case and never carries the `@` prefix. Use
    /// [`Timestamp::write`] for the raw bytes.
    pub fn format(&self, dst: &mut [u8]) -> Result<(), CodecError> {
        let got = dst.len();
        let too_small = CodecError::BufferTooSmall {
            expected: LABEL_SIZE,
            got,
        };
        let dst = dst.get_mut(..LABEL_SIZE).ok_or(too_small)?;
        hex::encode_to_slice(self.to_bytes(), dst).map_err(|_| too_small)
    }

    /// Same as [`Timestamp::format`], into a fresh buffer.
    pub fn marshal_text(&self) -> Result<[u8; LABEL_SIZE], Tai64NError> {
        let mut dst = [0u8; LABEL_SIZE];
        self.format(&mut dst).map_err(Tai64NError::Marshal)?;
        Ok(dst)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.marshal_text().map_err(|_| fmt::Error)?;
        f.write_str(core::str::from_utf8(&label).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Timestamp {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}
