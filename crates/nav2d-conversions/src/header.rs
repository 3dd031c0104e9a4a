//! Frame id and timestamp metadata shared by stamped messages and paths.
//!
//! Neither field is interpreted by this crate. A header is copied, collapsed
//! or fanned out by the conversions, but its contents pass through untouched.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in time, split into whole seconds and the nanosecond remainder.
///
/// The all-zero value is the "unset" stamp produced by `Time::default()`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    /// Whole seconds.
    pub sec: i32,
    /// Nanoseconds past `sec`.
    pub nanosec: u32,
}

impl Time {
    /// Construct a new time value.
    pub const fn new(sec: i32, nanosec: u32) -> Self {
        Time { sec, nanosec }
    }

    /// Returns `true` for the default, unset stamp.
    pub const fn is_zero(&self) -> bool {
        self.sec == 0 && self.nanosec == 0
    }

    /// Total nanoseconds represented by this stamp.
    pub const fn as_nanos(&self) -> i64 {
        self.sec as i64 * 1_000_000_000 + self.nanosec as i64
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.sec, self.nanosec)
    }
}

/// Reference frame and timestamp attached to stamped messages and paths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Header {
    /// Time at which the data was valid.
    pub stamp: Time,
    /// Identifier of the reference frame the data is expressed in.
    pub frame_id: String,
}

impl Header {
    /// Construct a header from a frame id and a stamp.
    pub fn new(frame_id: &str, stamp: Time) -> Self {
        Header {
            stamp,
            frame_id: String::from(frame_id),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} @ {}]", self.frame_id, self.stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_is_unset() {
        let header = Header::default();
        assert!(header.frame_id.is_empty());
        assert!(header.stamp.is_zero());
    }

    #[test]
    fn test_time_as_nanos() {
        assert_eq!(Time::new(2, 500).as_nanos(), 2_000_000_500);
        assert_eq!(Time::new(-1, 0).as_nanos(), -1_000_000_000);
    }

    #[test]
    fn test_header_display() {
        let header = Header::new("map", Time::new(12, 5));
        assert_eq!(format!("{}", header), "[map @ 12.000000005]");
    }
}
