//! Clock times from the listing markup.
//!
//! The results page shows departure and arrival as "HH:MM" local clock
//! times with no date or timezone attached. This type validates and orders
//! times within a single day; anything date-aware (overnight arrivals)
//! is handled by the consumer, see [`TravelTime::between`].
//!
//! [`TravelTime::between`]: crate::domain::TravelTime::between

use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid clock time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct ClockTimeError {
    reason: &'static str,
}

impl ClockTimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A local "HH:MM" clock time as displayed on the results page.
///
/// # Examples
///
/// ```
/// use renfe_server::domain::ClockTime;
///
/// let t = ClockTime::parse("06:24").unwrap();
/// assert_eq!(t.hour(), 6);
/// assert_eq!(t.minute(), 24);
/// assert_eq!(t.to_string(), "06:24");
///
/// // Invalid formats
/// assert!(ClockTime::parse("0624").is_err());
/// assert!(ClockTime::parse("6:24").is_err());
/// assert!(ClockTime::parse("25:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "HH:MM" format.
    pub fn parse(s: &str) -> Result<Self, ClockTimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(ClockTimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(ClockTimeError::new("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| ClockTimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(ClockTimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| ClockTimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(ClockTimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ClockTimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
