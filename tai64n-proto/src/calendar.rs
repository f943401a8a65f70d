//! Projection of timestamps onto host calendar-time types.
//!
//! The raw value keeps nanoseconds verbatim, while calendar types only hold a
//! sub-second part below one second. Projecting carries whole seconds out of
//! the nanoseconds, so a value with `nanoseconds >= 1e9` and its calendar time
//! do not decompose back into the same pair.

use crate::consts::NANOS_PER_SECOND;
use crate::Timestamp;

/// A calendar-time type a [`Timestamp`] can be converted to and from.
pub trait CalendarTime: Sized {
    /// Project the timestamp. Returns `None` if it is out of the type's range.
    fn from_timestamp(timestamp: &Timestamp) -> Option<Self>;

    /// Decompose into Unix seconds and sub-second nanoseconds.
    fn to_timestamp(&self) -> Timestamp;
}

impl Timestamp {
    /// Unix seconds and nanoseconds, with nanosecond overflow carried into the
    /// seconds.
    pub fn normalized(&self) -> Option<(i64, u32)> {
        let carry = i64::from(self.nanoseconds() / NANOS_PER_SECOND);
        let seconds = self.unix_seconds().checked_add(carry)?;
        Some((seconds, self.nanoseconds() % NANOS_PER_SECOND))
    }

    /// Project onto any [`CalendarTime`], e.g. `SystemTime`.
    pub fn to_calendar<T: CalendarTime>(&self) -> Option<T> {
        T::from_timestamp(self)
    }

    /// Build a timestamp from a calendar time, with no wire re-offset.
    pub fn from_calendar<T: CalendarTime>(time: &T) -> Self {
        time.to_timestamp()
    }
}

#[cfg(feature = "std")]
mod system_time {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::CalendarTime;
    use crate::consts::NANOS_PER_SECOND;
    use crate::Timestamp;

    impl CalendarTime for SystemTime {
        fn from_timestamp(timestamp: &Timestamp) -> Option<Self> {
            let (seconds, nanoseconds) = timestamp.normalized()?;
            let whole = if seconds >= 0 {
                UNIX_EPOCH.checked_add(Duration::from_secs(seconds as u64))?
            } else {
                UNIX_EPOCH.checked_sub(Duration::from_secs(seconds.unsigned_abs()))?
            };
            whole.checked_add(Duration::from_nanos(u64::from(nanoseconds)))
        }

        fn to_timestamp(&self) -> Timestamp {
            match self.duration_since(UNIX_EPOCH) {
                Ok(since) => Timestamp::new(since.as_secs(), since.subsec_nanos()),
                Err(err) => {
                    // Before the epoch: floor the seconds, keep nanoseconds positive.
                    let before = err.duration();
                    let seconds = (before.as_secs() as i64).wrapping_neg();
                    match before.subsec_nanos() {
                        0 => Timestamp::from_unix(seconds, 0),
                        nanos => {
                            Timestamp::from_unix(seconds.wrapping_sub(1), NANOS_PER_SECOND - nanos)
                        }
                    }
                }
            }
        }
    }

    impl Timestamp {
        /// Current time, relative to the Unix epoch without leap seconds.
        pub fn now() -> Self {
            SystemTime::now().to_timestamp()
        }

        /// Convert to a [`SystemTime`].
        pub fn to_system_time(&self) -> Option<SystemTime> {
            SystemTime::from_timestamp(self)
        }
    }

    impl From<SystemTime> for Timestamp {
        fn from(time: SystemTime) -> Self {
            time.to_timestamp()
        }
    }
}

#[cfg(feature = "chrono")]
mod datetime {
    use chrono::{DateTime, Utc};

    use super::CalendarTime;
    use crate::Timestamp;

    impl CalendarTime for DateTime<Utc> {
        fn from_timestamp(timestamp: &Timestamp) -> Option<Self> {
            let (seconds, nanoseconds) = timestamp.normalized()?;
            DateTime::<Utc>::from_timestamp(seconds, nanoseconds)
        }

        fn to_timestamp(&self) -> Timestamp {
            Timestamp::from_unix(self.timestamp(), self.timestamp_subsec_nanos())
        }
    }

    impl Timestamp {
        /// Convert to a UTC [`DateTime`].
        pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
            self.to_calendar()
        }
    }

    impl From<DateTime<Utc>> for Timestamp {
        fn from(time: DateTime<Utc>) -> Self {
            time.to_timestamp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized() {
        assert_eq!(
            Timestamp::new(935467455, 787492500).normalized(),
            Some((935467455, 787492500))
        );
        assert_eq!(
            Timestamp::new(10, 2_500_000_000).normalized(),
            Some((12, 500_000_000))
        );
        assert_eq!(
            Timestamp::from_unix(-1, 1_000_000_000).normalized(),
            Some((0, 0))
        );
        assert_eq!(Timestamp::from_unix(i64::MAX, 1_000_000_000).normalized(), None);
    }

    #[cfg(feature = "std")]
    mod system_time {
        use std::time::{Duration, SystemTime, UNIX_EPOCH};

        use crate::consts::EPOCH_BASE;
        use crate::Timestamp;

        #[test]
        fn test_to_system_time() {
            let timestamp = Timestamp::parse_label("4000000037c219bf2ef02e94").unwrap();

            assert_eq!(
                timestamp.to_system_time(),
                Some(UNIX_EPOCH + Duration::new(935467455, 787492500))
            );
        }

        #[test]
        fn test_raw_to_system_time() {
            let mut raw = [0u8; 12];
            raw[..8].copy_from_slice(&(EPOCH_BASE + 935467455).to_be_bytes());
            raw[8..].copy_from_slice(&787492500u32.to_be_bytes());

            let timestamp = Timestamp::from_bytes(&raw).unwrap();
            assert_eq!(
                timestamp.to_system_time(),
                Some(UNIX_EPOCH + Duration::new(935467455, 787492500))
            );

            // Extremes project or report out of range, never panic.
            for raw in [[0u8; 12], [0xff; 12]] {
                let _ = Timestamp::from_bytes(&raw).unwrap().to_system_time();
            }
        }

        #[test]
        fn test_to_system_time_normalizes_nanoseconds() {
            let timestamp = Timestamp::new(935467455, 1_787_492_500);

            assert_eq!(
                timestamp.to_system_time(),
                Some(UNIX_EPOCH + Duration::new(935467456, 787492500))
            );
            assert_eq!(timestamp.nanoseconds(), 1_787_492_500);
        }

        #[test]
        fn test_system_time_before_epoch() {
            let time = UNIX_EPOCH - Duration::new(1, 250_000_000);
            let timestamp = Timestamp::from(time);

            assert_eq!(timestamp.unix_seconds(), -2);
            assert_eq!(timestamp.nanoseconds(), 750_000_000);
            assert_eq!(timestamp.to_system_time(), Some(time));
            assert_eq!(timestamp.to_string(), "3ffffffffffffffe2cb41780");
        }

        #[test]
        fn test_system_time_round_trip() {
            let time = SystemTime::now();
            assert_eq!(Timestamp::from(time).to_system_time(), Some(time));
        }
    }

    #[cfg(feature = "chrono")]
    mod datetime {
        use chrono::{DateTime, TimeZone, Utc};

        use crate::Timestamp;

        #[test]
        fn test_to_datetime() {
            let timestamp = Timestamp::parse_label("@4000000037c219bf2ef02e94").unwrap();
            let expected = Utc.with_ymd_and_hms(1999, 8, 24, 4, 4, 15).unwrap()
                + chrono::Duration::nanoseconds(787492500);

            assert_eq!(timestamp.to_datetime(), Some(expected));
            assert_eq!(Timestamp::from(expected), timestamp);
        }

        #[test]
        fn test_to_datetime_out_of_range() {
            assert_eq!(Timestamp::from_unix(i64::MAX, 0).to_datetime(), None);
        }

        #[test]
        fn test_datetime_from_calendar() {
            let time = DateTime::<Utc>::from_timestamp(-1, 5).unwrap();
            assert_eq!(
                Timestamp::from_calendar(&time),
                Timestamp::from_unix(-1, 5)
            );
        }
    }
}
